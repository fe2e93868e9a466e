//! Prefix tree over the corpus (C2).
//!
//! Each node owns up to 26 children, one slot per letter A-Z, plus the
//! list of corpus indices whose junction terminates at that node.
//! `Option<Box<TrieNode>>` gives each non-root node exactly one owner;
//! a move transfers the root and a `Clone` deep-copies the subtree.

use crate::corpus::Corpus;
use debug_print::debug_println;

const ALPHABET_SIZE: usize = 26;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    pub(crate) indices: Vec<u32>,
}

impl TrieNode {
    pub(crate) fn child(&self, letter_index: usize) -> Option<&TrieNode> {
        self.children[letter_index].as_deref()
    }

    pub(crate) fn children_with_letters(&self) -> impl Iterator<Item = (u8, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref().map(|node| (i as u8, node)))
    }
}

/// Maps an uppercase ASCII letter to its child-table slot, or `None` if
/// the byte isn't in A-Z.
fn letter_slot(byte: u8) -> Option<usize> {
    if byte.is_ascii_uppercase() {
        Some((byte - b'A') as usize)
    } else {
        None
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    /// Which of the 26 letters actually label an edge somewhere in the
    /// trie, i.e. the corpus's effective alphabet. Lets matrix search
    /// validate coverage before walking (see `Trie::letters_present`).
    letters: [bool; 26],
}

impl Trie {
    /// Builds the trie over every record in `corpus`. Characters outside
    /// A-Z are silently skipped (documented loss-of-information).
    pub fn build(corpus: &Corpus) -> Self {
        let mut root = TrieNode::default();
        let mut letters = [false; 26];
        for (index, record) in corpus.iter().enumerate() {
            let mut node = &mut root;
            for byte in record.junction.bytes() {
                let Some(slot) = letter_slot(byte) else {
                    continue;
                };
                letters[slot] = true;
                node = node.children[slot].get_or_insert_with(Box::default);
            }
            node.indices.push(index as u32);
        }
        debug_println!("built trie over {} record(s)", corpus.len());
        Trie { root, letters }
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// The letters that label at least one edge in the trie, i.e. every
    /// A-Z byte that can appear in a candidate's effective path. A cost
    /// matrix used for matrix search must cover all of these, or a
    /// descent can silently price an unsupported letter at its array
    /// default instead of a configured cost.
    pub(crate) fn letters_present(&self) -> impl Iterator<Item = u8> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter_map(|(i, &present)| present.then(|| b'A' + i as u8))
    }
}

/// The byte sequence the trie actually indexed for `junction`: its A-Z
/// bytes only, in order, skipping anything else, exactly as `build`
/// does when descending into child slots. Operation decomposition must
/// compare against this, not the raw stored string, or a junction with
/// a skipped byte (e.g. `"A1B"`) can be re-scored at a different
/// distance than the trie walk already bounded it to.
pub(crate) fn trie_path(junction: &str) -> Vec<u8> {
    junction.bytes().filter(|b| b.is_ascii_uppercase()).collect()
}
