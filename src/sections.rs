//! Section list lookup used to validate content requests.
//!
//! Fetched once per run on demand. There is no refresh and no expiry.

use crate::error::{NewswireError, Result};
use serde_json::Value;
use std::collections::BTreeSet;

/// Section identifiers published by the section-list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionList {
    names: BTreeSet<String>,
}

impl SectionList {
    /// Extract `results[].section` from a section-list payload.
    ///
    /// Entries without a string `section` field are ignored; a payload without
    /// a `results` array is rejected.
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let results = payload
            .get("results")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                NewswireError::InvalidResponse("section list has no `results` array".to_string())
            })?;

        let names = results
            .iter()
            .filter_map(|entry| entry.get("section").and_then(Value::as_str))
            .map(|s| s.to_lowercase())
            .collect();
        Ok(Self { names })
    }

    /// Whether `section` may be used in a content request. `all` always is.
    pub fn contains(&self, section: &str) -> bool {
        let section = section.to_lowercase();
        section == "all" || self.names.contains(&section)
    }

    /// Fail with [`NewswireError::UnknownSection`] unless `section` is listed.
    pub fn check(&self, section: &str) -> Result<()> {
        if self.contains(section) {
            Ok(())
        } else {
            Err(NewswireError::UnknownSection(section.to_string()))
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
