use crate::Error;
use crate::source::Source;

use bytes::Bytes;
use reqwest::{StatusCode, Url};
use std::sync::LazyLock;

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .build()
        .expect("Build reqwest client")
});

/// Documents served over HTTP, relative to a base URL.
#[derive(Debug, Clone)]
pub struct Http {
    client: reqwest::Client,
    base: Url,
}

impl Http {
    pub fn new(base: &str) -> Result<Self, Error> {
        let mut base = Url::parse(base).map_err(|error| Error::InvalidUrl(error.to_string()))?;

        // Joining replaces the last segment otherwise
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            client: CLIENT.clone(),
            base,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url(&self, path: &str) -> Result<Url, Error> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|error| Error::InvalidUrl(error.to_string()))
    }
}

impl Source for Http {
    async fn fetch(&self, path: &str) -> Result<Bytes, Error> {
        let url = self.url(path)?;

        log::info!("Fetching document: {url}");
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(path.to_owned()));
        }

        Ok(response.error_for_status()?.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_joined_to_the_base() {
        let http = Http::new("https://example.com/studio").expect("valid url");

        assert_eq!(
            http.url("/data/national.json")
                .expect("valid path")
                .as_str(),
            "https://example.com/studio/data/national.json"
        );
    }

    #[test]
    fn invalid_bases_are_rejected() {
        assert!(matches!(
            Http::new("not a url"),
            Err(Error::InvalidUrl(_))
        ));
    }
}
