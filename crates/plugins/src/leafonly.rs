//! Leaf-only rule: postings are only allowed on accounts without children.
//!
//! An account such as `Assets:Bank` that receives postings while
//! `Assets:Bank:Checking` also exists is reported once, at the location of its
//! `open` directive.

use serde::Serialize;

use ledgercheck_core::{Account, Directive, OpenCloseMap, Source, get_account_open_close};
use ledgercheck_realization::{RealAccount, iter_children, realize};

use crate::plugin::{OptionsMap, Plugin, PluginOutput};

pub const PLUGIN_NAME: &str = "leafonly";

/// A non-leaf account with postings directly on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafOnlyError {
    pub source: Source,
    pub message: String,
    pub entry: Directive,
}

impl LeafOnlyError {
    fn new(account: &Account, entry: Directive) -> Self {
        Self {
            source: entry.source().clone(),
            message: format!("Non-leaf account '{account}' has postings on it"),
            entry,
        }
    }
}

impl core::fmt::Display for LeafOnlyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

/// Plugin handle for the leaf-only rule.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LeafOnly;

impl Plugin for LeafOnly {
    type Error = LeafOnlyError;

    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn run(&self, entries: Vec<Directive>, options: &OptionsMap) -> PluginOutput<LeafOnlyError> {
        validate_leaf_only(entries, options)
    }
}

/// Check for non-leaf accounts that have postings on them.
///
/// Entries are passed through untouched; one error is produced per offending
/// account, in pre-order of the account tree.
pub fn validate_leaf_only(entries: Vec<Directive>, _options: &OptionsMap) -> PluginOutput<LeafOnlyError> {
    let _span = tracing::debug_span!("leafonly", entries = entries.len()).entered();

    let errors = find_non_leaf_postings(&entries);
    PluginOutput { entries, errors }
}

fn find_non_leaf_postings(entries: &[Directive]) -> Vec<LeafOnlyError> {
    let root = realize(entries, false);

    // Only needed once something is reported.
    let mut open_close: Option<OpenCloseMap> = None;
    let mut errors = Vec::new();

    for node in iter_children(&root, false) {
        if node.is_leaf() || node.postings.is_empty() {
            continue;
        }

        let map = open_close.get_or_insert_with(|| get_account_open_close(entries));
        errors.push(LeafOnlyError::new(&node.account, reporting_entry(map, node)));
    }

    tracing::debug!(violations = errors.len(), "leaf-only check complete");
    errors
}

/// The account's `open` directive, or the transaction holding its first
/// posting when the account was never opened.
fn reporting_entry(open_close: &OpenCloseMap, node: &RealAccount<'_>) -> Directive {
    if let Some(open) = open_close
        .get(&node.account)
        .and_then(|(open, _)| open.as_ref())
    {
        return Directive::Open(open.clone());
    }

    let first = &node.postings[0];
    tracing::warn!(
        account = %node.account,
        source = %first.txn.source,
        "non-leaf account has no open directive; reporting its first posting"
    );
    Directive::Transaction(first.txn.clone())
}
