use std::collections::BTreeMap;

use ledgercheck_core::{Account, Posting, Transaction};

use crate::inventory::Inventory;

/// A posting together with the transaction that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxnPosting<'a> {
    pub txn: &'a Transaction,
    pub posting: &'a Posting,
}

/// One node of the realized account hierarchy.
///
/// Nodes borrow their postings from the entries they were realized from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealAccount<'a> {
    pub account: Account,
    /// Child nodes keyed by their last account component.
    pub children: BTreeMap<String, RealAccount<'a>>,
    /// Postings directly on this account (not on descendants), in input order.
    pub postings: Vec<TxnPosting<'a>>,
    /// Sum of `postings`; empty unless realized with balances.
    pub balance: Inventory,
}

impl<'a> RealAccount<'a> {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            children: BTreeMap::new(),
            postings: Vec::new(),
            balance: Inventory::new(),
        }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Same as [`RealAccount::is_leaf`]; pairs with `len`.
    pub fn is_empty(&self) -> bool {
        self.is_leaf()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Descendant (or self, for the root account) by full account name.
    pub fn get(&self, account: &Account) -> Option<&RealAccount<'a>> {
        account
            .components()
            .try_fold(self, |node, component| node.children.get(component))
    }

    /// Descendant by full account name, creating missing nodes on the way.
    pub fn get_or_create(&mut self, account: &Account) -> &mut RealAccount<'a> {
        let mut node = self;
        for (component, path) in account.components().zip(account.prefixes()) {
            node = node
                .children
                .entry(component.to_string())
                .or_insert_with(|| RealAccount::new(path));
        }
        node
    }

    /// Balance of this node plus every descendant.
    pub fn total_balance(&self) -> Inventory {
        let mut total = Inventory::new();
        for node in iter_children(self, false) {
            total.merge(&node.balance);
        }
        total
    }
}

/// Pre-order traversal of `root` and all its descendants.
///
/// Children are visited in sorted component order, so the sequence is stable
/// for a given set of accounts. With `leaf_only`, nodes that have children are
/// skipped (but still descended into).
pub fn iter_children<'t, 'a>(root: &'t RealAccount<'a>, leaf_only: bool) -> Children<'t, 'a> {
    Children {
        stack: vec![root],
        leaf_only,
    }
}

/// Iterator returned by [`iter_children`].
#[derive(Debug)]
pub struct Children<'t, 'a> {
    stack: Vec<&'t RealAccount<'a>>,
    leaf_only: bool,
}

impl<'t, 'a> Iterator for Children<'t, 'a> {
    type Item = &'t RealAccount<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.values().rev());
            if self.leaf_only && !node.is_leaf() {
                continue;
            }
            return Some(node);
        }
        None
    }
}
