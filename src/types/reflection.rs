//! A single journal submission

use sha2::{Digest, Sha256};

/// Hex characters kept from the SHA-256 digest
const FINGERPRINT_LEN: usize = 12;

/// Raw reflection text for one analysis call. Never stored, never logged.
#[derive(Debug, Clone, Copy)]
pub struct Reflection<'a> {
    text: &'a str,
}

impl<'a> Reflection<'a> {
    /// Wrap user input (surrounding whitespace is dropped)
    pub fn new(raw: &'a str) -> Self {
        Self { text: raw.trim() }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Short stable id for log correlation
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.text.as_bytes());
        let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        hex[..FINGERPRINT_LEN].to_string()
    }
}
