//! Plugin hook shared by ledger validation rules.

use serde::{Deserialize, Serialize};

use ledgercheck_core::{Directive, LedgerError, LedgerResult};

/// Options handed to plugins by the host pipeline.
///
/// Unknown keys are ignored so hosts can pass their full option set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsMap {
    pub title: Option<String>,
    pub filename: Option<String>,
    pub operating_currency: Vec<String>,
}

impl OptionsMap {
    pub fn from_json(json: &str) -> LedgerResult<Self> {
        serde_json::from_str(json).map_err(|e| LedgerError::invalid_options(e.to_string()))
    }
}

/// Entries passed through a plugin, plus whatever it found wrong with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOutput<E> {
    pub entries: Vec<Directive>,
    pub errors: Vec<E>,
}

/// A named validation/transformation step over the directive list.
///
/// Findings are returned as data in [`PluginOutput::errors`]; a plugin run
/// itself does not fail.
pub trait Plugin {
    type Error: core::fmt::Debug + core::fmt::Display + Send + Sync + 'static;

    /// Stable plugin name (e.g. "leafonly").
    fn name(&self) -> &'static str;

    fn run(&self, entries: Vec<Directive>, options: &OptionsMap) -> PluginOutput<Self::Error>;
}
