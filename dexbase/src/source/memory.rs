use crate::Error;
use crate::source::Source;

use bytes::Bytes;
use std::collections::BTreeMap;
use std::fmt;

/// Documents held in memory, keyed by path.
#[derive(Clone, Default)]
pub struct Memory {
    documents: BTreeMap<String, Bytes>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Bytes>) {
        let _ = self.documents.insert(path.into(), contents.into());
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Source for Memory {
    async fn fetch(&self, path: &str) -> Result<Bytes, Error> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| Error::NotFound(path.to_owned()))
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("documents", &self.documents.len())
            .finish()
    }
}
