//! Indexed approximate matching over immune-receptor junction (CDR3)
//! amino acid sequences.
//!
//! A [`Corpus`](corpus::Corpus) of junction sequences is indexed into a
//! [`Trie`](trie::Trie) once; searches walk the trie column-by-column,
//! pruning subtrees whose row minimum already exceeds the budget. Three
//! search modes share that walk:
//!
//! - [`Engine::search`] — unit-cost Levenshtein distance (C3).
//! - [`Engine::search_with_operations`] — independently bounded
//!   substitution/insertion/deletion counts (C4).
//! - [`Engine::search_with_matrix`] — a loaded substitution/gap
//!   [`CostMatrix`](matrix::CostMatrix) (C5).
//!
//! [`dispatcher::search_batch`] runs many queries concurrently over one
//! `Engine`.

pub mod airr;
pub mod corpus;
pub mod decompose;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod output;
pub mod query;
pub mod search;
pub mod trie;

pub use corpus::Corpus;
pub use dispatcher::{search_batch, Budget, QuerySpec};
pub use engine::{Engine, EngineConfig};
pub use error::{EngineError, Result};
pub use matrix::CostMatrix;
pub use query::{Filters, OperationBudget};
pub use search::Match;
