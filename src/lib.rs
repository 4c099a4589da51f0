pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod source;
pub mod transform;
pub mod writer;
