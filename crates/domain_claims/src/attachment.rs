//! Supporting documents attached to a claim
//!
//! The file picker itself lives outside the core. What the core owns is the
//! size ceiling, reducing a picked path to the name stored on the claim, and
//! the `"None"` sentinel used when nothing was attached.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::ClaimError;

/// Largest accepted attachment, in bytes (5 MB)
pub const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// File types offered by the document picker
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "xlsx"];

/// Stored in place of a file name when no document is attached
pub const NO_DOCUMENT: &str = "None";

/// Display name of a claim's attached document
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentName(Option<String>);

impl DocumentName {
    /// No document attached
    pub fn none() -> Self {
        Self(None)
    }

    /// Wraps an optional display name; blank names count as absent
    pub fn from_display(name: Option<impl Into<String>>) -> Self {
        let name = name
            .map(Into::into)
            .filter(|n| !n.trim().is_empty() && n != NO_DOCUMENT);
        Self(name)
    }

    /// Returns true when a document is attached
    pub fn is_attached(&self) -> bool {
        self.0.is_some()
    }

    /// The attached file name, if any
    pub fn file_name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The file name, or the `"None"` sentinel
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or(NO_DOCUMENT)
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DocumentName {
    fn from(name: &str) -> Self {
        Self::from_display(Some(name))
    }
}

impl From<String> for DocumentName {
    fn from(name: String) -> Self {
        Self::from_display(Some(name))
    }
}

impl From<Option<String>> for DocumentName {
    fn from(name: Option<String>) -> Self {
        Self::from_display(name)
    }
}

/// Accepts a picked file as a claim attachment
///
/// Only the final path component is kept. Files larger than
/// [`MAX_DOCUMENT_BYTES`] are refused; a file of exactly that size is accepted.
pub fn select_document(path: impl AsRef<Path>, size_bytes: u64) -> Result<DocumentName, ClaimError> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    if size_bytes > MAX_DOCUMENT_BYTES {
        tracing::warn!(document = %name, size_bytes, "Attachment exceeds size limit");
        return Err(ClaimError::DocumentTooLarge {
            name,
            size_bytes,
            limit_bytes: MAX_DOCUMENT_BYTES,
        });
    }

    Ok(DocumentName::from_display(Some(name)))
}

/// Checks whether the file has one of the [`SUPPORTED_EXTENSIONS`]
///
/// Advisory only; the picker also allows any file.
pub fn is_supported_document(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
