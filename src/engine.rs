//! Ties the corpus, trie, and (optionally) cost matrix together into
//! the engine's public search surface (§4.7).

use crate::corpus::Corpus;
use crate::decompose::{self, OpStats};
use crate::error::{EngineError, Result};
use crate::matrix::CostMatrix;
use crate::query::{validate_query, Filters, OperationBudget};
use crate::search::{levenshtein, weighted, Match};
use crate::trie::Trie;
use debug_print::debug_println;
use std::path::Path;

/// Construction-time configuration. Immutable for the engine's
/// lifetime: changing either field means building a new `Engine`, which
/// keeps configuration mutation from ever overlapping an in-flight
/// search (§5).
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub max_query_length: usize,
    pub concurrency_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_query_length: 32,
            concurrency_limit: None,
        }
    }
}

/// The indexed approximate-matching engine: a corpus, the trie built
/// over it, an immutable configuration, and an optional loaded cost
/// matrix for weighted search.
pub struct Engine {
    corpus: Corpus,
    trie: Trie,
    config: EngineConfig,
    matrix: Option<CostMatrix>,
}

impl Engine {
    /// Builds an engine over `corpus`, indexing it into a trie.
    pub fn new(corpus: Corpus, config: EngineConfig) -> Self {
        let trie = Trie::build(&corpus);
        Engine {
            corpus,
            trie,
            config,
            matrix: None,
        }
    }

    /// Builds an engine from an AIRR TSV corpus file.
    pub fn from_airr_file(path: impl AsRef<Path>, config: EngineConfig) -> Result<Self> {
        let corpus = crate::airr::read_corpus(path)?;
        Ok(Self::new(corpus, config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Loads (or replaces) the substitution/gap cost matrix. Independent
    /// of the corpus/trie lifecycle: can be (re)loaded at any time, as
    /// long as the caller isn't concurrently searching.
    pub fn load_substitution_matrix(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.matrix = Some(CostMatrix::from_file(path)?);
        Ok(())
    }

    pub fn has_substitution_matrix(&self) -> bool {
        self.matrix.is_some()
    }

    /// Unit-cost Levenshtein search (C3).
    pub fn search(&self, query: &str, max_edits: u32, filters: Filters<'_>) -> Result<Vec<Match>> {
        let bytes = validate_query(query, self.config.max_query_length)?;
        Ok(levenshtein::search(&self.corpus, &self.trie, bytes, max_edits, filters))
    }

    /// Returns whether any corpus entry is within `max_edits` of `query`.
    pub fn search_any(&self, query: &str, max_edits: u32) -> Result<bool> {
        let bytes = validate_query(query, self.config.max_query_length)?;
        Ok(levenshtein::search_any(&self.corpus, &self.trie, bytes, max_edits))
    }

    /// Per-operation-bounded search (C3 + C4): runs the Levenshtein
    /// walker with the summed budget, then keeps only candidates whose
    /// operation decomposition fits the individual bounds.
    pub fn search_with_operations(
        &self,
        query: &str,
        budget: OperationBudget,
        filters: Filters<'_>,
    ) -> Result<Vec<Match>> {
        let bytes = validate_query(query, self.config.max_query_length)?;
        let candidates = levenshtein::search(&self.corpus, &self.trie, bytes, budget.combined_edits(), filters);

        let mut results = Vec::new();
        for candidate in candidates {
            // Decompose against the trie path the walker actually matched
            // (A-Z bytes only), not the raw stored junction: a junction
            // with a skipped non-A-Z byte would otherwise be re-scored at
            // a distance C3 never agreed to.
            let target = crate::trie::trie_path(self.corpus.junction(candidate.index as usize));
            let front: Vec<OpStats> = decompose::decompose(bytes, &target, budget);
            if decompose::matches_budget(&front, budget) {
                results.push(candidate);
            }
        }
        Ok(results)
    }

    /// Matrix-weighted search (C5). Fails with a configuration error if
    /// no cost matrix has been loaded, or if the loaded matrix doesn't
    /// cover every letter that could appear in the walk: the query's
    /// letters, the gap symbol, and every letter the trie actually
    /// indexes. Without this check, a matrix narrower than the corpus's
    /// alphabet (e.g. the 20 standard amino acids against a 26-letter
    /// corpus) would silently price the missing letters at 0.
    pub fn search_with_matrix(&self, query: &str, max_cost: f64, filters: Filters<'_>) -> Result<Vec<Match>> {
        let Some(matrix) = &self.matrix else {
            debug_println!("matrix search requested without a loaded cost matrix");
            return Err(EngineError::Configuration(
                "matrix search requires a loaded substitution matrix".into(),
            ));
        };
        let bytes = validate_query(query, self.config.max_query_length)?;

        if !matrix.contains(b'-') {
            debug_println!("loaded cost matrix does not define the gap symbol");
            return Err(EngineError::Configuration(
                "loaded cost matrix does not define the gap symbol '-'".into(),
            ));
        }
        if let Some(&missing) = bytes.iter().find(|&&b| !matrix.contains(b)) {
            debug_println!("loaded cost matrix does not cover query letter {}", missing as char);
            return Err(EngineError::Configuration(format!(
                "loaded cost matrix does not cover query letter {:?}",
                missing as char
            )));
        }
        if let Some(missing) = self.trie.letters_present().find(|&b| !matrix.contains(b)) {
            debug_println!("loaded cost matrix does not cover corpus letter {}", missing as char);
            return Err(EngineError::Configuration(format!(
                "loaded cost matrix does not cover corpus letter {:?}",
                missing as char
            )));
        }

        Ok(weighted::search(&self.corpus, &self.trie, bytes, matrix, max_cost, filters))
    }
}
