//! Matrix-weighted trie walker (C5): structurally identical to the
//! unit-cost walker, but rows are real-valued and updated from a
//! loaded substitution/gap `CostMatrix`.

use crate::corpus::Corpus;
use crate::matrix::CostMatrix;
use crate::query::Filters;
use crate::search::Match;
use crate::trie::{Trie, TrieNode};

const GAP: u8 = b'-';

/// Returns every corpus index within `max_cost` of `query` under
/// `matrix`, honoring the optional V/J filters.
pub fn search(
    corpus: &Corpus,
    trie: &Trie,
    query: &[u8],
    matrix: &CostMatrix,
    max_cost: f64,
    filters: Filters<'_>,
) -> Vec<Match> {
    let mut initial_row = vec![0.0f64; query.len() + 1];
    for j in 1..=query.len() {
        initial_row[j] = initial_row[j - 1] + matrix.cost(GAP, query[j - 1]);
    }
    let mut results = Vec::new();
    walk(trie.root(), &initial_row, query, matrix, max_cost, corpus, filters, &mut results);
    results
}

#[allow(clippy::too_many_arguments)]
fn walk(
    node: &TrieNode,
    row: &[f64],
    query: &[u8],
    matrix: &CostMatrix,
    max_cost: f64,
    corpus: &Corpus,
    filters: Filters<'_>,
    results: &mut Vec<Match>,
) {
    let l = query.len();
    if !node.indices.is_empty() && row[l] <= max_cost {
        for &index in &node.indices {
            if corpus.matches_filters(index as usize, filters.v_gene, filters.j_gene) {
                results.push(Match {
                    index,
                    distance: row[l],
                });
            }
        }
    }

    if row.iter().copied().fold(f64::INFINITY, f64::min) > max_cost {
        return;
    }

    for (letter_index, child) in node.children_with_letters() {
        let letter = b'A' + letter_index;
        let next = next_row(row, query, matrix, letter);
        walk(child, &next, query, matrix, max_cost, corpus, filters, results);
    }
}

fn next_row(row: &[f64], query: &[u8], matrix: &CostMatrix, letter: u8) -> Vec<f64> {
    let l = query.len();
    let mut next = vec![0.0f64; l + 1];
    next[0] = row[0] + matrix.cost(GAP, letter);
    for j in 1..=l {
        next[j] = (row[j] + matrix.cost(GAP, letter))
            .min(next[j - 1] + matrix.cost(GAP, query[j - 1]))
            .min(row[j - 1] + matrix.cost(query[j - 1], letter));
    }
    next
}
