//! Account tree realization.
//!
//! Turns a flat list of directives into a hierarchy of [`RealAccount`] nodes,
//! each holding the postings made directly on it.

pub mod inventory;
pub mod real_account;
pub mod realize;

pub use inventory::Inventory;
pub use real_account::{Children, RealAccount, TxnPosting, iter_children};
pub use realize::realize;
