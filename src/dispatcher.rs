//! Batch dispatcher (C6): fans a list of queries out across a bounded
//! `rayon` thread pool and joins the results by query string.
//!
//! The trie, corpus, and cost matrix are read-only for the lifetime of
//! an [`Engine`](crate::Engine), so no synchronization beyond `&self` is
//! needed to share them across the pool's workers.

use crate::engine::Engine;
use crate::query::OperationBudget;
use crate::search::Match;
use debug_print::debug_println;
use rayon::prelude::*;
use std::collections::HashMap;

/// The budget kind for one query in a batch.
#[derive(Debug, Clone)]
pub enum Budget {
    Edits(u32),
    Operations(OperationBudget),
    MatrixCost(f64),
}

/// One query plus its own budget and filters, as the batch dispatcher
/// contract allows per-query configuration.
#[derive(Debug, Clone)]
pub struct QuerySpec {
    pub query: String,
    pub budget: Budget,
    pub v_gene: Option<String>,
    pub j_gene: Option<String>,
}

impl QuerySpec {
    pub fn edits(query: impl Into<String>, max_edits: u32) -> Self {
        QuerySpec {
            query: query.into(),
            budget: Budget::Edits(max_edits),
            v_gene: None,
            j_gene: None,
        }
    }
}

/// Returns the dispatcher's concurrency cap: the engine's configured
/// override, or `10 * hardware_parallelism` otherwise.
fn concurrency_cap(engine: &Engine) -> usize {
    engine.config().concurrency_limit.unwrap_or_else(|| {
        10 * std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    })
}

/// Runs every query in `specs` against `engine`, in parallel, bounded to
/// the dispatcher's concurrency cap. Per-query errors (oversized or
/// malformed queries, matrix search without a loaded matrix) never
/// abort the batch: the offending query contributes an empty result and
/// a logged diagnostic, per the error propagation policy.
///
/// If the same query string appears more than once, the mapping holds
/// the result of one of them (whichever finishes writing into the map
/// last); duplicates are not merged.
pub fn search_batch(engine: &Engine, specs: &[QuerySpec]) -> HashMap<String, Vec<Match>> {
    let cap = concurrency_cap(engine);
    debug_println!("dispatching {} quer(y/ies) with concurrency cap {}", specs.len(), cap);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cap)
        .build()
        .expect("failed to build dispatcher thread pool");

    let pairs: Vec<(String, Vec<Match>)> = pool.install(|| {
        specs
            .par_iter()
            .map(|spec| {
                let filters = crate::query::Filters {
                    v_gene: spec.v_gene.as_deref(),
                    j_gene: spec.j_gene.as_deref(),
                };
                let result = match &spec.budget {
                    Budget::Edits(max_edits) => engine.search(&spec.query, *max_edits, filters),
                    Budget::Operations(budget) => {
                        engine.search_with_operations(&spec.query, *budget, filters)
                    }
                    Budget::MatrixCost(max_cost) => {
                        engine.search_with_matrix(&spec.query, *max_cost, filters)
                    }
                };
                let matches = match result {
                    Ok(matches) => matches,
                    Err(err) => {
                        debug_println!("query {:?} contributed no results: {}", spec.query, err);
                        Vec::new()
                    }
                };
                (spec.query.clone(), matches)
            })
            .collect()
    });

    pairs.into_iter().collect()
}
