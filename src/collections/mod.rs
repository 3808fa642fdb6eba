//! Result containers produced by the grouping and pairing engines.

mod groups;

pub use groups::{Groups, KeyedGroup};
