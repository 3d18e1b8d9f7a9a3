use url::Url;

use crate::{Error, HttpClient};

/// [`HttpClient`] backed by `reqwest`, resolving request paths against a base URL.
///
/// Non-2xx responses are turned into errors carrying the status code, so callers
/// never see the body of a failed request.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestClient {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, Error> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` relative to the base URL. A leading `/` does not escape the
    /// base path.
    pub fn resolve(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, path: &str) -> Result<Vec<u8>, Error> {
        let url = self.resolve(path)?;
        tracing::debug!(%url, "http_get");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("Server error: {}", status.as_u16()).into());
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
