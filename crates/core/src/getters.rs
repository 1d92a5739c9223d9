//! Lookups computed over a list of directives.

use std::collections::{BTreeMap, BTreeSet};

use crate::account::Account;
use crate::directive::{Close, Directive, Open};

/// Per-account (first open, first close).
pub type OpenCloseMap = BTreeMap<Account, (Option<Open>, Option<Close>)>;

/// Index the opening and closing directive of every account.
///
/// The first Open and the first Close seen for an account win; later
/// duplicates are ignored.
pub fn get_account_open_close(entries: &[Directive]) -> OpenCloseMap {
    let mut map = OpenCloseMap::new();

    for entry in entries {
        match entry {
            Directive::Open(open) => {
                let slot = &mut map.entry(open.account.clone()).or_default().0;
                if slot.is_none() {
                    *slot = Some(open.clone());
                } else {
                    tracing::debug!(account = %open.account, source = %open.source, "ignoring duplicate open");
                }
            }
            Directive::Close(close) => {
                let slot = &mut map.entry(close.account.clone()).or_default().1;
                if slot.is_none() {
                    *slot = Some(close.clone());
                } else {
                    tracing::debug!(account = %close.account, source = %close.source, "ignoring duplicate close");
                }
            }
            _ => {}
        }
    }

    map
}

/// Every account referenced by any directive.
pub fn get_accounts(entries: &[Directive]) -> BTreeSet<Account> {
    entries
        .iter()
        .flat_map(|e| e.accounts())
        .cloned()
        .collect()
}
