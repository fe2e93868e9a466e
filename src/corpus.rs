//! Owns the immutable arrays of junction sequences and their tags (C1).

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    junctions: Vec<String>,
    v_tags: Vec<String>,
    j_tags: Vec<String>,
}

/// A read-only view of one indexed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRef<'a> {
    pub junction: &'a str,
    pub v_tag: &'a str,
    pub j_tag: &'a str,
}

impl Corpus {
    /// Builds a corpus from raw junction strings; tags default to empty.
    pub fn from_junctions(junctions: impl IntoIterator<Item = String>) -> Self {
        let junctions: Vec<String> = junctions.into_iter().collect();
        let len = junctions.len();
        Corpus {
            junctions,
            v_tags: vec![String::new(); len],
            j_tags: vec![String::new(); len],
        }
    }

    /// Builds a corpus from parallel junction/V-tag/J-tag arrays.
    ///
    /// Panics if the three arrays don't have equal length; this is an
    /// internal construction invariant, not a user-input error.
    pub fn from_parts(junctions: Vec<String>, v_tags: Vec<String>, j_tags: Vec<String>) -> Self {
        assert_eq!(junctions.len(), v_tags.len());
        assert_eq!(junctions.len(), j_tags.len());
        Corpus {
            junctions,
            v_tags,
            j_tags,
        }
    }

    pub fn len(&self) -> usize {
        self.junctions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    pub fn junction(&self, index: usize) -> &str {
        &self.junctions[index]
    }

    pub fn record(&self, index: usize) -> RecordRef<'_> {
        RecordRef {
            junction: &self.junctions[index],
            v_tag: &self.v_tags[index],
            j_tag: &self.j_tags[index],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = RecordRef<'_>> {
        (0..self.len()).map(move |i| self.record(i))
    }

    /// Returns whether the record at `index` satisfies the optional V/J
    /// equality filters.
    pub fn matches_filters(&self, index: usize, v_gene: Option<&str>, j_gene: Option<&str>) -> bool {
        let record = self.record(index);
        v_gene.map_or(true, |v| record.v_tag == v) && j_gene.map_or(true, |j| record.j_tag == j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_junctions_defaults_tags_to_empty() {
        let corpus = Corpus::from_junctions(vec!["CASSLGQETQYF".to_string()]);
        let rec = corpus.record(0);
        assert_eq!(rec.junction, "CASSLGQETQYF");
        assert_eq!(rec.v_tag, "");
        assert_eq!(rec.j_tag, "");
    }

    #[test]
    fn filters_pass_when_unset() {
        let corpus = Corpus::from_parts(
            vec!["AAAA".to_string()],
            vec!["TRBV1".to_string()],
            vec!["TRBJ1".to_string()],
        );
        assert!(corpus.matches_filters(0, None, None));
        assert!(corpus.matches_filters(0, Some("TRBV1"), Some("TRBJ1")));
        assert!(!corpus.matches_filters(0, Some("TRBV2"), None));
    }
}
