//! Unit-cost Levenshtein trie walker (C3).

use crate::corpus::Corpus;
use crate::query::Filters;
use crate::search::Match;
use crate::trie::{Trie, TrieNode};

/// Returns every corpus index within `max_edits` unit-cost edits of
/// `query`, honoring the optional V/J filters.
pub fn search(
    corpus: &Corpus,
    trie: &Trie,
    query: &[u8],
    max_edits: u32,
    filters: Filters<'_>,
) -> Vec<Match> {
    let initial_row: Vec<u32> = (0..=query.len() as u32).collect();
    let mut results = Vec::new();
    walk(trie.root(), &initial_row, query, max_edits, corpus, filters, &mut results);
    results
}

/// Returns whether any corpus entry is within `max_edits` of `query`,
/// without collecting the full result set.
///
/// The original source's equivalent traversal returns `true` the moment
/// it sees any index at a qualifying node via a loop that's really just
/// testing "is the list non-empty" one element at a time; here that's a
/// single boolean test, per the design notes.
pub fn search_any(corpus: &Corpus, trie: &Trie, query: &[u8], max_edits: u32) -> bool {
    let initial_row: Vec<u32> = (0..=query.len() as u32).collect();
    walk_any(trie.root(), &initial_row, query, max_edits, corpus)
}

fn walk(
    node: &TrieNode,
    row: &[u32],
    query: &[u8],
    max_edits: u32,
    corpus: &Corpus,
    filters: Filters<'_>,
    results: &mut Vec<Match>,
) {
    let l = query.len();
    if !node.indices.is_empty() && row[l] <= max_edits {
        for &index in &node.indices {
            if corpus.matches_filters(index as usize, filters.v_gene, filters.j_gene) {
                results.push(Match::unit(index, row[l]));
            }
        }
    }

    if row.iter().copied().min().unwrap_or(0) > max_edits {
        return;
    }

    for (letter_index, child) in node.children_with_letters() {
        let letter = b'A' + letter_index;
        let next_row = next_row(row, query, letter);
        walk(child, &next_row, query, max_edits, corpus, filters, results);
    }
}

fn walk_any(node: &TrieNode, row: &[u32], query: &[u8], max_edits: u32, corpus: &Corpus) -> bool {
    let _ = corpus;
    let l = query.len();
    if !node.indices.is_empty() && row[l] <= max_edits {
        return true;
    }

    if row.iter().copied().min().unwrap_or(0) > max_edits {
        return false;
    }

    for (letter_index, child) in node.children_with_letters() {
        let letter = b'A' + letter_index;
        let next_row = next_row(row, query, letter);
        if walk_any(child, &next_row, query, max_edits, corpus) {
            return true;
        }
    }
    false
}

/// Computes the next DP row when descending into a child labeled `letter`.
fn next_row(row: &[u32], query: &[u8], letter: u8) -> Vec<u32> {
    let l = query.len();
    let mut next = vec![0u32; l + 1];
    next[0] = row[0] + 1;
    for j in 1..=l {
        let substitution_cost = if query[j - 1] == letter { 0 } else { 1 };
        next[j] = (row[j] + 1)
            .min(next[j - 1] + 1)
            .min(row[j - 1] + substitution_cost);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::Trie;

    fn build(junctions: &[&str]) -> (Corpus, Trie) {
        let corpus = Corpus::from_junctions(junctions.iter().map(|s| s.to_string()));
        let trie = Trie::build(&corpus);
        (corpus, trie)
    }

    /// S1: exact match only at E=0.
    #[test]
    fn scenario_s1_exact_match() {
        let (corpus, trie) = build(&["CASSLGQETQYF", "CASSLRQETVYGYTF", "CASRLGQETQYF"]);
        let results = search(&corpus, &trie, b"CASSLGQETQYF", 0, Filters::default());
        let matched: Vec<&str> = results.iter().map(|m| corpus.junction(m.index as usize)).collect();
        assert_eq!(matched, vec!["CASSLGQETQYF"]);
    }

    /// S2: one substitution away is included at E=1.
    #[test]
    fn scenario_s2_one_substitution() {
        let (corpus, trie) = build(&["CASSLGQETQYF", "CASSLRQETVYGYTF", "CASRLGQETQYF"]);
        let results = search(&corpus, &trie, b"CASSLGQETQYF", 1, Filters::default());
        let mut matched: Vec<&str> = results.iter().map(|m| corpus.junction(m.index as usize)).collect();
        matched.sort();
        assert_eq!(matched, vec!["CASRLGQETQYF", "CASSLGQETQYF"]);
    }

    /// S4: a single insertion is within budget.
    #[test]
    fn scenario_s4_one_insertion() {
        let (corpus, trie) = build(&["AAAA"]);
        let results = search(&corpus, &trie, b"AAA", 1, Filters::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].distance, 1.0);
    }

    /// S5: empty corpus never errors and never matches.
    #[test]
    fn scenario_s5_empty_corpus() {
        let (corpus, trie) = build(&[]);
        let results = search(&corpus, &trie, b"ANYTHING", 5, Filters::default());
        assert!(results.is_empty());
    }

    #[test]
    fn monotonicity_larger_budget_is_a_superset() {
        let (corpus, trie) = build(&["CASSLGQETQYF", "CASSLRQETVYGYTF", "CASRLGQETQYF"]);
        let small = search(&corpus, &trie, b"CASSLGQETQYF", 1, Filters::default());
        let large = search(&corpus, &trie, b"CASSLGQETQYF", 2, Filters::default());
        let small_idx: std::collections::HashSet<u32> = small.iter().map(|m| m.index).collect();
        let large_idx: std::collections::HashSet<u32> = large.iter().map(|m| m.index).collect();
        assert!(small_idx.is_subset(&large_idx));
    }

    #[test]
    fn v_gene_filter_narrows_results() {
        let corpus = Corpus::from_parts(
            vec!["AAAA".to_string(), "AAAB".to_string()],
            vec!["TRBV1".to_string(), "TRBV2".to_string()],
            vec![String::new(), String::new()],
        );
        let trie = Trie::build(&corpus);
        let unfiltered = search(&corpus, &trie, b"AAAA", 1, Filters::default());
        assert_eq!(unfiltered.len(), 2);
        let filtered = search(
            &corpus,
            &trie,
            b"AAAA",
            1,
            Filters {
                v_gene: Some("TRBV1"),
                j_gene: None,
            },
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(corpus.record(filtered[0].index as usize).v_tag, "TRBV1");
    }

    #[test]
    fn search_any_agrees_with_search() {
        let (corpus, trie) = build(&["CASSLGQETQYF", "CASRLGQETQYF"]);
        assert!(search_any(&corpus, &trie, b"CASSLGQETQYF", 0));
        assert!(!search_any(&corpus, &trie, b"ZZZZZZZZZZZZ", 2));
    }
}
