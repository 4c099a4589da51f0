use std::fs;
use std::sync::OnceLock;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::info;

use crate::config::{BROWSER_USER_AGENT, InputSource};
use crate::error::OuiError;

pub trait OuiFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, OuiError>;
}

/// Blocking HTTP fetcher. The reqwest client is built on the first fetch, so
/// runs that read a local file never construct it.
#[derive(Clone, Default)]
pub struct OuiHttpClient {
    client: OnceLock<Client>,
}

impl OuiHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }

    fn client(&self) -> Result<&Client, OuiError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        // No request timeout: the blocking client would otherwise cap it at 30s.
        let client = Client::builder()
            .default_headers(headers)
            .timeout(None)
            .build()
            .map_err(|err| OuiError::Http(err.to_string()))?;
        Ok(self.client.get_or_init(|| client))
    }
}

impl OuiFetcher for OuiHttpClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, OuiError> {
        let response = self
            .client()?
            .get(url)
            .send()
            .map_err(|err| OuiError::Http(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "OUI request failed".to_string());
            return Err(OuiError::HttpStatus { status, message });
        }
        let bytes = response
            .bytes()
            .map_err(|err| OuiError::Http(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Reads the raw CSV bytes from a local file or over HTTP.
pub fn load_input(source: &InputSource, fetcher: &dyn OuiFetcher) -> Result<Vec<u8>, OuiError> {
    match source {
        InputSource::File(path) => {
            info!(path = %path, "reading OUI registry from file");
            fs::read(path.as_std_path()).map_err(|err| OuiError::InputRead {
                path: path.clone(),
                message: err.to_string(),
            })
        }
        InputSource::Url(url) => {
            info!(url = %url, "downloading OUI registry");
            fetcher.fetch(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;

    use super::*;

    #[test]
    fn local_file_does_not_build_http_client() {
        let temp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp.path().join("oui.csv")).unwrap();
        fs::write(path.as_std_path(), b"assignment,org\n").unwrap();

        let client = OuiHttpClient::new();
        let raw = load_input(&InputSource::File(path), &client).unwrap();

        assert_eq!(raw, b"assignment,org\n");
        assert!(!client.is_initialized());
    }
}
