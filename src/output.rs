//! TSV result writer (§4.10): `query\tmatch\tdist`, with `v_gene`/`j_gene`
//! columns appended only if some result carried a non-empty tag.

use crate::error::Result;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ResultEntry {
    pub query: String,
    pub junction: String,
    pub distance: f64,
    pub v_gene: String,
    pub j_gene: String,
}

pub fn write_results(path: impl AsRef<Path>, entries: &[ResultEntry]) -> Result<()> {
    let has_v_gene = entries.iter().any(|e| !e.v_gene.is_empty());
    let has_j_gene = entries.iter().any(|e| !e.j_gene.is_empty());

    let mut out = std::fs::File::create(path)?;
    write_header(&mut out, has_v_gene, has_j_gene)?;
    for entry in entries {
        write_row(&mut out, entry, has_v_gene, has_j_gene)?;
    }
    Ok(())
}

fn write_header(out: &mut impl Write, has_v_gene: bool, has_j_gene: bool) -> Result<()> {
    write!(out, "query\tmatch\tdist")?;
    if has_v_gene {
        write!(out, "\tv_gene")?;
    }
    if has_j_gene {
        write!(out, "\tj_gene")?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_row(out: &mut impl Write, entry: &ResultEntry, has_v_gene: bool, has_j_gene: bool) -> Result<()> {
    write!(out, "{}\t{}\t{}", entry.query, entry.junction, entry.distance)?;
    if has_v_gene {
        write!(out, "\t{}", entry.v_gene)?;
    }
    if has_j_gene {
        write!(out, "\t{}", entry.j_gene)?;
    }
    writeln!(out)?;
    Ok(())
}
