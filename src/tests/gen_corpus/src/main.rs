//! Generates a synthetic AIRR-like TSV corpus of junction sequences for
//! benchmarking and fuzzing the trie engine.
//!
//! Usage: `gen_corpus <count> <min_len> <max_len> > corpus.tsv`

use rand::Rng;
use std::env;

const ALPHABET: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";
const V_GENES: &[&str] = &["TRBV5-1", "TRBV7-9", "TRBV28", "TRBV12-3"];
const J_GENES: &[&str] = &["TRBJ1-1", "TRBJ2-3", "TRBJ2-7"];

fn random_junction(rng: &mut impl Rng, min_len: usize, max_len: usize) -> String {
    let len = rng.gen_range(min_len..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1000);
    let min_len: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(8);
    let max_len: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(20);

    let mut rng = rand::thread_rng();
    println!("junction_aa\tv_call\tj_call");
    for _ in 0..count {
        let junction = random_junction(&mut rng, min_len, max_len);
        let v_gene = V_GENES[rng.gen_range(0..V_GENES.len())];
        let j_gene = J_GENES[rng.gen_range(0..J_GENES.len())];
        println!("{}\t{}\t{}", junction, v_gene, j_gene);
    }
}
