//! AIRR-format TSV corpus reader (§4.8).
//!
//! Tab-delimited, header-driven: requires `junction_aa`, optionally uses
//! `v_call` and `j_call`. Column order is not fixed. This is a thin
//! tab-splitter rather than a general CSV-dialect parser, since AIRR TSV
//! has no quoting or escaping to honor.

use crate::corpus::Corpus;
use crate::error::{EngineError, Result};
use std::collections::HashMap;
use std::path::Path;

pub fn read_corpus(path: impl AsRef<Path>) -> Result<Corpus> {
    let content = std::fs::read_to_string(path)?;
    parse_corpus(&content)
}

pub fn parse_corpus(content: &str) -> Result<Corpus> {
    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| EngineError::InputFormat("AIRR file is empty".into()))?;

    let columns: HashMap<&str, usize> = header.split('\t').enumerate().map(|(i, name)| (name, i)).collect();

    let junction_col = *columns
        .get("junction_aa")
        .ok_or_else(|| EngineError::InputFormat("required column junction_aa not found".into()))?;
    let v_col = columns.get("v_call").copied();
    let j_col = columns.get("j_call").copied();

    let mut junctions = Vec::new();
    let mut v_tags = Vec::new();
    let mut j_tags = Vec::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() <= junction_col {
            continue;
        }
        let junction = fields[junction_col];
        if junction.is_empty() {
            continue;
        }
        junctions.push(junction.to_string());
        v_tags.push(v_col.and_then(|c| fields.get(c)).copied().unwrap_or("").to_string());
        j_tags.push(j_col.and_then(|c| fields.get(c)).copied().unwrap_or("").to_string());
    }

    Ok(Corpus::from_parts(junctions, v_tags, j_tags))
}

/// Loads a batch-query TSV: one query per line, taking only the first
/// tab-delimited column; a header line is assumed and skipped.
pub fn read_queries(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_queries(&content))
}

pub fn parse_queries(content: &str) -> Vec<String> {
    let mut lines = content.lines();
    lines.next(); // header
    lines
        .filter_map(|line| line.split('\t').next())
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_and_optional_columns() {
        let tsv = "v_call\tjunction_aa\tj_call\nTRBV1\tCASSLGQETQYF\tTRBJ1\n";
        let corpus = parse_corpus(tsv).unwrap();
        assert_eq!(corpus.len(), 1);
        let rec = corpus.record(0);
        assert_eq!(rec.junction, "CASSLGQETQYF");
        assert_eq!(rec.v_tag, "TRBV1");
        assert_eq!(rec.j_tag, "TRBJ1");
    }

    #[test]
    fn column_order_does_not_matter() {
        let tsv = "j_call\tjunction_aa\nTRBJ1\tAAAA\n";
        let corpus = parse_corpus(tsv).unwrap();
        assert_eq!(corpus.record(0).junction, "AAAA");
    }

    #[test]
    fn missing_junction_column_is_an_error() {
        let tsv = "v_call\tj_call\nTRBV1\tTRBJ1\n";
        assert!(parse_corpus(tsv).is_err());
    }

    #[test]
    fn empty_junction_rows_are_skipped() {
        let tsv = "junction_aa\n\nAAAA\n";
        let corpus = parse_corpus(tsv).unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn reads_only_the_first_query_column() {
        let tsv = "query\textra\nCASSLGQETQYF\tignored\nAAAA\tignored\n";
        let queries = parse_queries(tsv);
        assert_eq!(queries, vec!["CASSLGQETQYF".to_string(), "AAAA".to_string()]);
    }
}
