//! Fuzzy search over the template corpus
//!
//! Combines weighted-ratio string similarity, ranking policy, and result
//! shaping into a complete search solution.

pub mod engine;
pub mod fuzzy;
pub mod ranking;

pub use engine::{SearchEngine, SearchHit};
pub use ranking::RankingPolicy;
