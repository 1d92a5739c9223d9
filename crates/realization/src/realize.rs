use ledgercheck_core::{Account, Directive};

use crate::real_account::{RealAccount, TxnPosting, iter_children};

/// Build the account hierarchy from a flat list of directives.
///
/// Every account named by a directive gets a node, along with all of its
/// ancestors. Transaction postings are attached to the node of their own
/// account in input order; other directives only create nodes. When
/// `compute_balance` is false, node balances stay empty.
pub fn realize(entries: &[Directive], compute_balance: bool) -> RealAccount<'_> {
    let mut root = RealAccount::new(Account::root());

    for entry in entries {
        match entry {
            Directive::Transaction(txn) => {
                for posting in &txn.postings {
                    let node = root.get_or_create(&posting.account);
                    if compute_balance {
                        if let Some(units) = &posting.units {
                            node.balance.add(units);
                        }
                    }
                    node.postings.push(TxnPosting { txn, posting });
                }
            }
            other => {
                if let Some(account) = other.account() {
                    root.get_or_create(account);
                }
            }
        }
    }

    tracing::debug!(
        entries = entries.len(),
        accounts = iter_children(&root, false).count() - 1,
        compute_balance,
        "realized account tree"
    );

    root
}
