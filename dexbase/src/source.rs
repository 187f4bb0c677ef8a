//! Where documents are fetched from.
//!
//! Every document is addressed by a relative path, see [`Layout`](crate::Layout).
pub mod directory;
pub mod http;
pub mod memory;

pub use directory::Directory;
pub use http::Http;
pub use memory::Memory;

use crate::Error;

use bytes::Bytes;

pub trait Source {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<Bytes, Error>> + Send;
}

/// A source picked at runtime: a remote server or a local directory.
#[derive(Debug, Clone)]
pub enum Any {
    Http(Http),
    Directory(Directory),
}

impl Any {
    /// Treats `location` as a URL when it has an `http` or `https` scheme,
    /// and as a directory otherwise.
    pub fn parse(location: &str) -> Result<Self, Error> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Self::Http(Http::new(location)?))
        } else {
            Ok(Self::Directory(Directory::new(location)))
        }
    }
}

impl Source for Any {
    async fn fetch(&self, path: &str) -> Result<Bytes, Error> {
        match self {
            Self::Http(http) => http.fetch(path).await,
            Self::Directory(directory) => directory.fetch(path).await,
        }
    }
}
