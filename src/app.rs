use camino::Utf8PathBuf;
use serde::Serialize;
use tracing::info;

use crate::config::{InputSource, RunConfig};
use crate::error::OuiError;
use crate::source::{OuiFetcher, load_input};
use crate::transform::transform_csv;
use crate::writer::write_output;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub source: InputSource,
    pub output: Utf8PathBuf,
    pub entries: usize,
    pub source_rows: usize,
}

#[derive(Clone)]
pub struct App<F: OuiFetcher> {
    fetcher: F,
}

impl<F: OuiFetcher> App<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Load, transform and write the table. Nothing is written when loading
    /// or parsing fails.
    pub fn run(&self, config: &RunConfig) -> Result<RunSummary, OuiError> {
        let raw = load_input(&config.source, &self.fetcher)?;
        info!(bytes = raw.len(), "loaded OUI source");

        let transformed = transform_csv(&raw)?;
        write_output(config.output(), &transformed.entries)?;

        Ok(RunSummary {
            source: config.source.clone(),
            output: config.output.clone(),
            entries: transformed.entries.len(),
            source_rows: transformed.source_rows,
        })
    }
}
