use crate::Error;
use crate::source::Source;

use bytes::Bytes;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Documents stored under a local directory.
#[derive(Debug, Clone)]
pub struct Directory {
    root: PathBuf,
}

impl Directory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Source for Directory {
    async fn fetch(&self, path: &str) -> Result<Bytes, Error> {
        let file = self.root.join(path.trim_start_matches('/'));

        log::info!("Reading document: {}", file.display());

        match fs::read(&file).await {
            Ok(contents) => Ok(Bytes::from(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                Err(Error::NotFound(path.to_owned()))
            }
            Err(error) => Err(error.into()),
        }
    }
}
