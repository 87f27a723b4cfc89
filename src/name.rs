//! Full-name splitting.
//!
//! A raw name is tokenized on runs of whitespace and hyphens. The first token
//! becomes `first`, the last token `last`, and for names with three or more
//! tokens the one right before the surname becomes `second`. Anything in
//! between is dropped.
use std::sync::LazyLock;

use regex::Regex;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s-]+").expect("separator pattern is valid")
});

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    #[error("not enough name parts: {0:?}")]
    NotEnoughParts(String),
    #[error("missing first or last name: {0:?}")]
    MissingPart(String),
}

/// The parts of a full name that the username rules care about.
///
/// `first` and `last` are never empty. `second` is empty for two-part names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplitName {
    pub first: String,
    pub second: String,
    pub last: String,
}

impl SplitName {
    /// Build a split name from already separated parts. Returns `None` when
    /// `first` or `last` is empty.
    pub fn new(first: &str, second: &str, last: &str) -> Option<Self> {
        if first.is_empty() || last.is_empty() {
            return None;
        }
        Some(Self {
            first: first.to_string(),
            second: second.to_string(),
            last: last.to_string(),
        })
    }

    pub fn has_second(&self) -> bool {
        !self.second.is_empty()
    }
}

/// Split a raw name, reporting why it was rejected.
pub fn parse_name(raw: &str) -> Result<SplitName, NameError> {
    let parts: Vec<&str> = SEPARATORS.split(raw).filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 {
        return Err(NameError::NotEnoughParts(raw.to_string()));
    }
    let first = parts[0];
    let last = parts[parts.len() - 1];
    let second = if parts.len() > 2 {
        parts[parts.len() - 2]
    } else {
        ""
    };
    SplitName::new(first, second, last).ok_or_else(|| NameError::MissingPart(raw.to_string()))
}

/// Split a raw name. `None` means the entry should be skipped.
pub fn split_name(raw: &str) -> Option<SplitName> {
    match parse_name(raw) {
        Ok(n) => Some(n),
        Err(e) => {
            log::debug!("skipping name: {}", e);
            None
        }
    }
}
