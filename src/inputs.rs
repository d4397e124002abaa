//! Action inputs
//!
//! CI runners hand action inputs to the process as `INPUT_<NAME>` environment
//! variables. Every input the action understands is listed in [`InputName`];
//! lookups go through an [`InputSource`] so the resolver can be exercised
//! without touching the real process environment.

use crate::error::ValidationError;
use std::collections::HashMap;
use std::env;
use std::ffi::OsString;

const INPUT_PREFIX: &str = "INPUT_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputName {
    PackageRoot,
    Provider,
    GithubToken,
    DoKeyId,
    /// Misspelled on purpose: existing workflows pass `do_sercet_key`.
    DoSercetKey,
    MacCerts,
    MacCertsPassword,
    AppleId,
    AppleIdPass,
    WindowsCerts,
    WindowsCertsPassword,
}

impl InputName {
    pub fn all() -> &'static [InputName] {
        &[
            InputName::PackageRoot,
            InputName::Provider,
            InputName::GithubToken,
            InputName::DoKeyId,
            InputName::DoSercetKey,
            InputName::MacCerts,
            InputName::MacCertsPassword,
            InputName::AppleId,
            InputName::AppleIdPass,
            InputName::WindowsCerts,
            InputName::WindowsCertsPassword,
        ]
    }

    /// The input name as written in a workflow file.
    pub fn key(&self) -> &'static str {
        match self {
            InputName::PackageRoot => "package_root",
            InputName::Provider => "provider",
            InputName::GithubToken => "github_token",
            InputName::DoKeyId => "do_key_id",
            InputName::DoSercetKey => "do_sercet_key",
            InputName::MacCerts => "mac_certs",
            InputName::MacCertsPassword => "mac_certs_password",
            InputName::AppleId => "apple_id",
            InputName::AppleIdPass => "apple_id_pass",
            InputName::WindowsCerts => "windows_certs",
            InputName::WindowsCertsPassword => "windows_certs_password",
        }
    }

    pub fn env_var(&self) -> String {
        input_env_var(self.key())
    }

    /// Alternative variable consulted when the primary one is unset.
    pub fn fallback_env_var(&self) -> Option<String> {
        match self {
            InputName::DoSercetKey => Some(input_env_var("do_secret_key")),
            _ => None,
        }
    }
}

fn input_env_var(key: &str) -> String {
    format!("{}{}", INPUT_PREFIX, key.to_uppercase())
}

/// Read-only access to raw environment variables.
///
/// Values are returned as-is; [`Inputs`] decides what counts as absent and
/// rejects values that are not valid UTF-8.
pub trait InputSource {
    fn var(&self, name: &str) -> Option<OsString>;
}

/// Reads from the environment of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl InputSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        env::var_os(name)
    }
}

/// In-memory variables, keyed by full environment variable name.
#[derive(Debug, Default, Clone)]
pub struct MapSource {
    vars: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an input by its workflow name, e.g. `with_input("provider", "github")`.
    pub fn with_input(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(input_env_var(key), value.to_string());
        self
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl InputSource for MapSource {
    fn var(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).map(OsString::from)
    }
}

pub struct Inputs<'a> {
    source: &'a dyn InputSource,
}

impl<'a> Inputs<'a> {
    pub fn new(source: &'a dyn InputSource) -> Self {
        Self { source }
    }

    /// Looks up an input. Empty values count as absent; a required input that
    /// is absent is a validation failure naming the input.
    pub fn get(&self, name: InputName, required: bool) -> Result<Option<String>, ValidationError> {
        if required {
            self.require(name).map(Some)
        } else {
            self.lookup(name)
        }
    }

    pub fn require(&self, name: InputName) -> Result<String, ValidationError> {
        self.lookup(name)?
            .ok_or_else(|| ValidationError::MissingInput {
                name: name.key().to_string(),
            })
    }

    fn lookup(&self, name: InputName) -> Result<Option<String>, ValidationError> {
        if let Some(value) = self.read(name, &name.env_var())? {
            return Ok(Some(value));
        }
        match name.fallback_env_var() {
            Some(var) => self.read(name, &var),
            None => Ok(None),
        }
    }

    fn read(&self, name: InputName, var: &str) -> Result<Option<String>, ValidationError> {
        match self.source.var(var) {
            None => Ok(None),
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => raw
                .into_string()
                .map(Some)
                .map_err(|_| ValidationError::NonUnicodeInput {
                    name: name.key().to_string(),
                }),
        }
    }
}
