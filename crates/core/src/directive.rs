//! Ledger directives (immutable input entries).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::account::Account;

/// Where a directive came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Source {
    pub filename: String,
    pub lineno: u32,
}

impl Source {
    pub fn new(filename: impl Into<String>, lineno: u32) -> Self {
        Self {
            filename: filename.into(),
            lineno,
        }
    }
}

impl core::fmt::Display for Source {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.filename, self.lineno)
    }
}

/// Quantity of a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// Signed amount in smallest unit (e.g., cents).
    pub number: i64,
    pub currency: String,
}

impl Amount {
    pub fn new(number: i64, currency: impl Into<String>) -> Self {
        Self {
            number,
            currency: currency.into(),
        }
    }
}

/// One leg of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub account: Account,
    /// `None` when the amount is left for the host to interpolate.
    pub units: Option<Amount>,
}

impl Posting {
    pub fn new(account: Account, units: Amount) -> Self {
        Self {
            account,
            units: Some(units),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Open {
    pub source: Source,
    pub date: NaiveDate,
    pub account: Account,
    /// Allowed currencies; empty means unconstrained.
    #[serde(default)]
    pub currencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Close {
    pub source: Source,
    pub date: NaiveDate,
    pub account: Account,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub source: Source,
    pub date: NaiveDate,
    pub flag: char,
    pub payee: Option<String>,
    pub narration: String,
    pub postings: Vec<Posting>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub source: Source,
    pub date: NaiveDate,
    pub account: Account,
    pub comment: String,
}

/// A dated ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Directive {
    Open(Open),
    Close(Close),
    Transaction(Transaction),
    Note(Note),
}

impl Directive {
    pub fn source(&self) -> &Source {
        match self {
            Directive::Open(d) => &d.source,
            Directive::Close(d) => &d.source,
            Directive::Transaction(d) => &d.source,
            Directive::Note(d) => &d.source,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Directive::Open(d) => d.date,
            Directive::Close(d) => d.date,
            Directive::Transaction(d) => d.date,
            Directive::Note(d) => d.date,
        }
    }

    /// Account of single-account directives; `None` for transactions.
    pub fn account(&self) -> Option<&Account> {
        match self {
            Directive::Open(d) => Some(&d.account),
            Directive::Close(d) => Some(&d.account),
            Directive::Note(d) => Some(&d.account),
            Directive::Transaction(_) => None,
        }
    }

    /// Every account this directive references, in declaration order.
    pub fn accounts(&self) -> Vec<&Account> {
        match self {
            Directive::Transaction(txn) => txn.postings.iter().map(|p| &p.account).collect(),
            other => other.account().into_iter().collect(),
        }
    }
}
