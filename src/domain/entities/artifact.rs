//! Artifact entity - the textual output produced for one platform

use sha2::{Digest, Sha256};

/// A converted file ready to be written
///
/// Content is a pure function of the IR and platform: no timestamps or
/// randomness are embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name (no directories), e.g. `review.toml`
    pub filename: String,
    /// Full file content
    pub content: String,
}

impl Artifact {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// SHA-256 of the content, `sha256:<hex>`
    pub fn hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.content.as_bytes());
        format!("sha256:{:x}", hasher.finalize())
    }
}
