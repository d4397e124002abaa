//! Environment handed to electron-builder
//!
//! electron-builder only reads its credentials from fixed environment variable
//! names. The projection collects those variables explicitly; the runner layers
//! them over the inherited environment of each child process.

use serde::Serialize;
use std::collections::BTreeMap;

pub const GH_TOKEN: &str = "GH_TOKEN";
pub const DO_KEY_ID: &str = "DO_KEY_ID";
pub const DO_SECRET_KEY: &str = "DO_SECRET_KEY";
pub const CSC_LINK: &str = "CSC_LINK";
pub const CSC_KEY_PASSWORD: &str = "CSC_KEY_PASSWORD";
pub const APPLEID: &str = "APPLEID";
pub const APPLEIDPASS: &str = "APPLEIDPASS";
pub const WIN_CSC_LINK: &str = "WIN_CSC_LINK";
pub const WIN_CSC_KEY_PASSWORD: &str = "WIN_CSC_KEY_PASSWORD";
pub const ADBLOCK: &str = "ADBLOCK";

const REDACTED: &str = "***";

const NON_SECRET: &[&str] = &[APPLEID, ADBLOCK];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvProjection {
    vars: BTreeMap<String, String>,
}

impl EnvProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under the uppercased `name` if it is non-empty.
    ///
    /// Returns whether the entry was written. An absent or empty value leaves
    /// any earlier entry in place.
    pub fn set(&mut self, name: &str, value: Option<&str>) -> bool {
        match value {
            Some(value) if !value.is_empty() => {
                self.vars.insert(name.to_uppercase(), value.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(&name.to_uppercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(&name.to_uppercase())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Copy with credential values masked, safe to log or print.
    pub fn redacted(&self) -> Self {
        let vars = self
            .vars
            .iter()
            .map(|(k, v)| {
                let value = if is_secret(k) { REDACTED } else { v.as_str() };
                (k.clone(), value.to_string())
            })
            .collect();
        Self { vars }
    }
}

pub fn is_secret(name: &str) -> bool {
    !NON_SECRET.contains(&name)
}
