use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use crate::error::OuiError;

pub const DEFAULT_URL: &str = "https://standards-oui.ieee.org/oui/oui.csv";
pub const DEFAULT_OUTPUT: &str = "src-tauri/resources/oui.csv";

/// The IEEE endpoint rejects non-browser clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
AppleWebKit/537.36 (KHTML, like Gecko) \
Chrome/126.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "location", rename_all = "lowercase")]
pub enum InputSource {
    File(Utf8PathBuf),
    Url(String),
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: InputSource,
    pub output: Utf8PathBuf,
}

impl RunConfig {
    /// A local `input` takes precedence and `url` is ignored.
    pub fn from_args(
        input: Option<Utf8PathBuf>,
        url: Option<String>,
        output: Option<Utf8PathBuf>,
    ) -> Result<Self, OuiError> {
        let source = match input {
            Some(path) => InputSource::File(path),
            None => {
                let url = url.unwrap_or_else(|| DEFAULT_URL.to_string());
                if url.trim().is_empty() {
                    return Err(OuiError::InvalidConfig("--url must not be empty".to_string()));
                }
                InputSource::Url(url)
            }
        };

        Ok(Self {
            source,
            output: output.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT)),
        })
    }

    pub fn output(&self) -> &Utf8Path {
        &self.output
    }
}
