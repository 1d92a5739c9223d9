//! Hierarchical account names.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Separator between account components.
pub const SEPARATOR: char = ':';

/// Colon-delimited account name, e.g. `Assets:Bank:Checking`.
///
/// The empty name is the root of the account hierarchy; only
/// [`Account::root`] produces it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Account(String);

impl Account {
    /// Parse and validate an account name.
    ///
    /// The root cannot be named; use [`Account::root`].
    pub fn parse(name: &str) -> Result<Self, LedgerError> {
        if name.is_empty() {
            return Err(LedgerError::invalid_account("account name is empty"));
        }
        if name.split(SEPARATOR).any(str::is_empty) {
            return Err(LedgerError::invalid_account(format!(
                "'{name}' has an empty component"
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// The root of the hierarchy (no components).
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path components from the top-level account down.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR).filter(|c| !c.is_empty())
    }

    /// Ancestors-or-self below the root, top-level first:
    /// `Assets`, `Assets:Bank`, `Assets:Bank:Checking`.
    pub fn prefixes(&self) -> impl Iterator<Item = Account> + '_ {
        self.0
            .match_indices(SEPARATOR)
            .map(|(idx, _)| idx)
            .chain((!self.is_root()).then_some(self.0.len()))
            .map(|end| Self(self.0[..end].to_string()))
    }

    /// Last component, or `None` for the root.
    pub fn leaf(&self) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        self.0.rsplit(SEPARATOR).next()
    }

    /// Parent account. The parent of a top-level account is the root; the
    /// root has no parent.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(match self.0.rfind(SEPARATOR) {
            Some(idx) => Self(self.0[..idx].to_string()),
            None => Self::root(),
        })
    }

    /// Append one component.
    pub fn join(&self, component: &str) -> Result<Self, LedgerError> {
        if component.is_empty() || component.contains(SEPARATOR) {
            return Err(LedgerError::invalid_account(format!(
                "'{component}' is not a single account component"
            )));
        }
        if self.is_root() {
            return Ok(Self(component.to_string()));
        }
        Ok(Self(format!("{}{SEPARATOR}{component}", self.0)))
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Account {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Account {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Account> for String {
    fn from(value: Account) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn acc(s: &str) -> Account {
        Account::parse(s).unwrap()
    }

    #[test]
    fn empty_component_is_rejected() {
        for bad in ["", "Assets::Bank", ":Assets", "Assets:"] {
            let err = Account::parse(bad).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAccount(_)), "{bad}");
        }
    }

    #[test]
    fn parent_walks_up_to_root() {
        let a = acc("Assets:Bank:Checking");
        assert_eq!(a.parent(), Some(acc("Assets:Bank")));
        assert_eq!(acc("Assets").parent(), Some(Account::root()));
        assert_eq!(Account::root().parent(), None);
    }

    #[test]
    fn components_and_leaf() {
        let a = acc("Assets:Bank:Checking");
        assert_eq!(a.components().collect::<Vec<_>>(), ["Assets", "Bank", "Checking"]);
        assert_eq!(a.leaf(), Some("Checking"));
        assert_eq!(Account::root().components().count(), 0);
        assert_eq!(Account::root().leaf(), None);
    }

    #[test]
    fn prefixes_list_ancestors_top_down() {
        let got: Vec<_> = acc("Assets:Bank:Checking").prefixes().collect();
        assert_eq!(got, [acc("Assets"), acc("Assets:Bank"), acc("Assets:Bank:Checking")]);
        assert_eq!(Account::root().prefixes().count(), 0);
    }

    #[test]
    fn join_builds_child_names() {
        let a = Account::root().join("Assets").unwrap().join("Bank").unwrap();
        assert_eq!(a, acc("Assets:Bank"));
        assert!(a.join("X:Y").is_err());
        assert!(a.join("").is_err());
    }

    proptest! {
        #[test]
        fn join_then_parent_round_trips(parts in prop::collection::vec("[A-Za-z][A-Za-z0-9-]{0,8}", 1..6)) {
            let mut account = Account::root();
            for part in &parts {
                let child = account.join(part).unwrap();
                prop_assert_eq!(child.parent(), Some(account.clone()));
                account = child;
            }
            let expected: Vec<&str> = parts.iter().map(String::as_str).collect();
            prop_assert_eq!(account.components().collect::<Vec<_>>(), expected);
            prop_assert_eq!(Account::parse(account.as_str()).unwrap(), account);
        }
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let a: Account = serde_json::from_str("\"Assets:Bank\"").unwrap();
        assert_eq!(a.as_str(), "Assets:Bank");
        assert!(serde_json::from_str::<Account>("\"Assets::Bank\"").is_err());
    }

    #[test]
    fn root_cannot_be_named() {
        assert!(serde_json::from_str::<Account>("\"\"").is_err());
        assert!("".parse::<Account>().is_err());
        assert!(Account::root().is_root());
    }
}
