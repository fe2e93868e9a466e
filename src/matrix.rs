//! Substitution/gap cost matrix: parsing, similarity→cost conversion,
//! and the lookup used by the weighted-cost walker (C5).

use crate::error::{EngineError, Result};
use std::path::Path;

const GAP: u8 = b'-';
/// 26 letters plus the gap symbol.
const SYMBOLS: usize = 27;

fn symbol_index(byte: u8) -> Option<usize> {
    if byte == GAP {
        Some(26)
    } else if byte.is_ascii_uppercase() {
        Some((byte - b'A') as usize)
    } else {
        None
    }
}

/// A symmetric cost (or converted similarity) table over `{A..Z, '-'}`.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    present: [bool; SYMBOLS],
    costs: Box<[[f64; SYMBOLS]; SYMBOLS]>,
}

impl CostMatrix {
    /// Returns the cost of aligning `a` with `b` (either may be the gap
    /// symbol `-`). Panics if either byte isn't A-Z or the gap symbol.
    ///
    /// Does *not* check that the loaded matrix actually defined a row
    /// for `a` or `b` — an uncovered symbol reads back as `0.0`, the
    /// cost table's array default, with no diagnostic. Callers MUST
    /// check `contains` for every symbol that can reach this lookup
    /// before searching (`Engine::search_with_matrix` does this for the
    /// query and the corpus's indexed alphabet).
    pub fn cost(&self, a: u8, b: u8) -> f64 {
        let (ia, ib) = (
            symbol_index(a).expect("symbol outside A-Z/gap"),
            symbol_index(b).expect("symbol outside A-Z/gap"),
        );
        self.costs[ia][ib]
    }

    /// Returns whether the loaded matrix defined a row/column for
    /// `byte` (an A-Z letter or the gap symbol `-`). `false` for a byte
    /// outside that set too, rather than panicking.
    pub fn contains(&self, byte: u8) -> bool {
        symbol_index(byte).is_some_and(|i| self.present[i])
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses a whitespace-delimited matrix: first line is the alphabet,
    /// each following line is a row label followed by one value per
    /// alphabet symbol.
    pub fn from_str(content: &str) -> Result<Self> {
        let mut lines = content.lines();
        let header = lines
            .next()
            .ok_or_else(|| EngineError::InputFormat("cost matrix file is empty".into()))?;
        let alphabet: Vec<u8> = header
            .split_whitespace()
            .map(|tok| {
                let bytes = tok.as_bytes();
                if bytes.len() != 1 {
                    return Err(EngineError::InputFormat(format!(
                        "alphabet token {tok:?} is not a single symbol"
                    )));
                }
                Ok(bytes[0])
            })
            .collect::<Result<_>>()?;

        let mut raw = [[0.0f64; SYMBOLS]; SYMBOLS];
        let mut present = [false; SYMBOLS];

        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let label_tok = fields
                .next()
                .ok_or_else(|| EngineError::InputFormat("matrix row missing a label".into()))?;
            let label_bytes = label_tok.as_bytes();
            if label_bytes.len() != 1 {
                return Err(EngineError::InputFormat(format!(
                    "row label {label_tok:?} is not a single symbol"
                )));
            }
            let label = label_bytes[0];
            let row_index = symbol_index(label)
                .ok_or_else(|| EngineError::InputFormat(format!("row label {label_tok:?} is not A-Z or '-'")))?;
            present[row_index] = true;

            for (col, &symbol) in alphabet.iter().enumerate() {
                let value_tok = fields.next().ok_or_else(|| {
                    EngineError::InputFormat(format!("matrix row {label_tok:?} is missing values"))
                })?;
                let value: f64 = value_tok
                    .parse()
                    .map_err(|_| EngineError::InputFormat(format!("bad matrix value {value_tok:?}")))?;
                let col_index = symbol_index(symbol)
                    .ok_or_else(|| EngineError::InputFormat("alphabet contains a non A-Z/gap symbol".into()))?;
                raw[row_index][col_index] = value;
            }
        }

        let is_similarity = (0..SYMBOLS).any(|i| {
            (0..SYMBOLS).any(|j| i != j && present[i] && present[j] && raw[i][j] > 0.0)
        });

        let mut costs = Box::new([[0.0f64; SYMBOLS]; SYMBOLS]);
        if is_similarity {
            for i in 0..SYMBOLS {
                for j in 0..SYMBOLS {
                    if present[i] && present[j] {
                        costs[i][j] = 0.5 * (raw[i][i] + raw[j][j]) - raw[i][j];
                    }
                }
            }
        } else {
            *costs = raw;
        }

        Ok(CostMatrix { present, costs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cost_matrix_passes_through_unchanged() {
        // 1 everywhere off-diagonal, 0 on the diagonal: already a cost matrix.
        let content = "A B -\nA 0 1 1\nB 1 0 1\n- 1 1 0\n";
        let matrix = CostMatrix::from_str(content).unwrap();
        assert_eq!(matrix.cost(b'A', b'A'), 0.0);
        assert_eq!(matrix.cost(b'A', b'B'), 1.0);
        assert_eq!(matrix.cost(b'A', GAP), 1.0);
    }

    #[test]
    fn similarity_matrix_is_converted_to_cost() {
        // Self-similarity 4, cross-similarity 1 -> cost(A,B) = 0.5*(4+4)-1 = 3.
        let content = "A B\nA 4 1\nB 1 4\n";
        let matrix = CostMatrix::from_str(content).unwrap();
        assert_eq!(matrix.cost(b'A', b'A'), 0.0);
        assert_eq!(matrix.cost(b'A', b'B'), 3.0);
    }

    #[test]
    fn malformed_file_is_rejected() {
        assert!(CostMatrix::from_str("").is_err());
        assert!(CostMatrix::from_str("A B\nA 1\n").is_err());
    }
}
