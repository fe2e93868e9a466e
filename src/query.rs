//! Query validation and budget types shared by the Levenshtein,
//! operation-bounded, and weighted-cost search paths.

use crate::error::{EngineError, Result};

/// Per-operation edit budget: independently bounds substitutions,
/// insertions, and deletions (C4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationBudget {
    pub max_substitutions: u32,
    pub max_insertions: u32,
    pub max_deletions: u32,
}

impl OperationBudget {
    /// The Levenshtein budget implied by summing the three bounds; C3
    /// is run with this bound before C4 filters by the individual caps.
    pub fn combined_edits(&self) -> u32 {
        self.max_substitutions + self.max_insertions + self.max_deletions
    }
}

/// Optional equality filters on the V-gene and J-gene tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filters<'a> {
    pub v_gene: Option<&'a str>,
    pub j_gene: Option<&'a str>,
}

/// Validates a query string against the configured length bound and the
/// A-Z alphabet, returning the query's bytes on success.
///
/// Rejects (rather than silently tolerates) non-A-Z characters in a
/// *query* — unlike corpus construction, which drops them. See the
/// design notes on this asymmetry.
pub fn validate_query<'q>(query: &'q str, max_query_length: usize) -> Result<&'q [u8]> {
    if query.len() > max_query_length {
        return Err(EngineError::InputSize {
            length: query.len(),
            max: max_query_length,
        });
    }
    let bytes = query.as_bytes();
    if !bytes.iter().all(|b| b.is_ascii_uppercase()) {
        return Err(EngineError::InputFormat(format!(
            "query {query:?} contains characters outside A-Z"
        )));
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_queries_over_the_length_bound() {
        let err = validate_query("AAAAA", 4).unwrap_err();
        assert!(matches!(err, EngineError::InputSize { length: 5, max: 4 }));
    }

    #[test]
    fn rejects_non_alpha_queries() {
        let err = validate_query("AA1A", 8).unwrap_err();
        assert!(matches!(err, EngineError::InputFormat(_)));
    }

    #[test]
    fn accepts_well_formed_queries() {
        assert!(validate_query("CASSLGQETQYF", 32).is_ok());
    }

    #[test]
    fn combined_edits_sums_the_three_bounds() {
        let budget = OperationBudget {
            max_substitutions: 1,
            max_insertions: 2,
            max_deletions: 3,
        };
        assert_eq!(budget.combined_edits(), 6);
    }
}
