use std::collections::BTreeMap;

use serde::Serialize;

use ledgercheck_core::Amount;

/// Signed per-currency sum of posting units.
///
/// Zero positions are dropped, so an inventory whose postings cancel out is empty.
/// Positions saturate at the `i64` bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory(BTreeMap<String, i64>);

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, amount: &Amount) {
        let position = self.0.entry(amount.currency.clone()).or_insert(0);
        *position = position.saturating_add(amount.number);
        if *position == 0 {
            self.0.remove(&amount.currency);
        }
    }

    pub fn merge(&mut self, other: &Inventory) {
        for (currency, number) in &other.0 {
            self.add(&Amount::new(*number, currency.clone()));
        }
    }

    /// Position for `currency` (zero when absent).
    pub fn get(&self, currency: &str) -> i64 {
        self.0.get(currency).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(c, n)| (c.as_str(), *n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelling_positions_leave_inventory_empty() {
        let mut inv = Inventory::new();
        inv.add(&Amount::new(500, "USD"));
        inv.add(&Amount::new(-500, "USD"));
        assert!(inv.is_empty());
        assert_eq!(inv.get("USD"), 0);
    }

    #[test]
    fn extreme_positions_saturate() {
        let mut inv = Inventory::new();
        inv.add(&Amount::new(i64::MAX, "USD"));
        inv.add(&Amount::new(1, "USD"));
        assert_eq!(inv.get("USD"), i64::MAX);

        inv.add(&Amount::new(i64::MIN, "EUR"));
        inv.add(&Amount::new(-1, "EUR"));
        assert_eq!(inv.get("EUR"), i64::MIN);
    }

    #[test]
    fn merge_sums_per_currency() {
        let mut a = Inventory::new();
        a.add(&Amount::new(100, "USD"));
        let mut b = Inventory::new();
        b.add(&Amount::new(50, "USD"));
        b.add(&Amount::new(7, "EUR"));
        a.merge(&b);
        assert_eq!(a.iter().collect::<Vec<_>>(), [("EUR", 7), ("USD", 150)]);
    }
}
