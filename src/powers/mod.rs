//! Presidential powers unlocked by fascist policies.
//!
//! The table is keyed by table size and the fascist-policy count that the
//! just-enacted card produced:
//!
//! | seats | 1           | 2           | 3                | 4         | 5         |
//! |-------|-------------|-------------|------------------|-----------|-----------|
//! | 5     |             |             | policy-peek      | execution |           |
//! | 7     |             | investigate | special-election | execution | execution |
//! | 9     | investigate | investigate | special-election | execution | execution |
//!
//! Consumption is tracked per slot (the triggering count), not per power,
//! so a power listed at two counts fires twice.

mod table;

pub use table::{power_for, PowerLedger, SpecialPower};
