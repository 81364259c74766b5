//! Curated classification hints.
//!
//! Hints are the fourth classifier stage: they only run when no taxonomy name
//! or pitch keyword appears in the input. Each hint maps a product-domain
//! vocabulary to a `(level_one, level_two?)` pair of the shipped taxonomy.
//! Order matters: the first hint that matches and names an existing entry wins.

pub(crate) mod hints;
