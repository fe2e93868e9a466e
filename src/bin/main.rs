use anyhow::{anyhow, Context, Result};
use cdr3trie::{Budget, Engine, EngineConfig, OperationBudget, QuerySpec};
use clap::Parser;
use std::path::PathBuf;

/// Approximate search over a corpus of immune-receptor junction sequences.
#[derive(Parser)]
#[clap(version)]
struct Opts {
    /// Path to the AIRR TSV corpus file.
    #[clap(short, long)]
    input: PathBuf,

    /// Output directory; results are written to `<output>/results.tsv`.
    #[clap(short, long, default_value = "./")]
    output: PathBuf,

    /// A single query string. Exclusive with `--input-queries`.
    #[clap(short, long)]
    query: Option<String>,

    /// Path to a TSV of batch queries (first column is the query).
    #[clap(long)]
    input_queries: Option<PathBuf>,

    /// Unit-cost Levenshtein budget.
    #[clap(long)]
    n_edits: Option<u32>,

    /// Maximum substitutions, used together with --max-ins/--max-del.
    #[clap(long)]
    max_sub: Option<u32>,

    /// Maximum insertions, used together with --max-sub/--max-del.
    #[clap(long)]
    max_ins: Option<u32>,

    /// Maximum deletions, used together with --max-sub/--max-ins.
    #[clap(long)]
    max_del: Option<u32>,

    /// Path to a substitution/gap cost matrix; enables matrix search.
    #[clap(short = 'm', long)]
    matrix_search: Option<PathBuf>,

    /// Cost budget for matrix search. Required with --matrix-search.
    #[clap(short = 'r', long)]
    score_radius: Option<f64>,

    /// Equality filter on the V-gene tag.
    #[clap(long)]
    v_gene: Option<String>,

    /// Equality filter on the J-gene tag.
    #[clap(long)]
    j_gene: Option<String>,

    /// Override the maximum accepted query length.
    #[clap(long, default_value_t = 32)]
    max_query_length: usize,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let opts = Opts::parse();

    if opts.query.is_some() && opts.input_queries.is_some() {
        return Err(anyhow!("--query and --input-queries are mutually exclusive"));
    }
    let operation_bounds = opts.max_sub.is_some() || opts.max_ins.is_some() || opts.max_del.is_some();
    if opts.matrix_search.is_some() && (opts.n_edits.is_some() || operation_bounds) {
        return Err(anyhow!("--matrix-search cannot be combined with --n-edits or --max-sub/--max-ins/--max-del"));
    }
    if opts.matrix_search.is_some() && opts.score_radius.is_none() {
        return Err(anyhow!("--score-radius is required with --matrix-search"));
    }

    let config = EngineConfig {
        max_query_length: opts.max_query_length,
        concurrency_limit: None,
    };
    let mut engine = Engine::from_airr_file(&opts.input, config)
        .with_context(|| format!("loading corpus from {}", opts.input.display()))?;

    if let Some(matrix_path) = &opts.matrix_search {
        engine
            .load_substitution_matrix(matrix_path)
            .with_context(|| format!("loading cost matrix from {}", matrix_path.display()))?;
    }

    let budget = if opts.matrix_search.is_some() {
        Budget::MatrixCost(opts.score_radius.expect("checked above"))
    } else if operation_bounds {
        Budget::Operations(OperationBudget {
            max_substitutions: opts.max_sub.unwrap_or(0),
            max_insertions: opts.max_ins.unwrap_or(0),
            max_deletions: opts.max_del.unwrap_or(0),
        })
    } else {
        Budget::Edits(opts.n_edits.unwrap_or(0))
    };

    let queries: Vec<String> = if let Some(q) = &opts.query {
        vec![q.clone()]
    } else if let Some(path) = &opts.input_queries {
        cdr3trie::airr::read_queries(path).with_context(|| format!("reading queries from {}", path.display()))?
    } else {
        return Err(anyhow!("one of --query or --input-queries is required"));
    };

    let specs: Vec<QuerySpec> = queries
        .into_iter()
        .map(|query| QuerySpec {
            query,
            budget: budget.clone(),
            v_gene: opts.v_gene.clone(),
            j_gene: opts.j_gene.clone(),
        })
        .collect();

    let results = cdr3trie::search_batch(&engine, &specs);

    let mut entries = Vec::new();
    for spec in &specs {
        for m in results.get(&spec.query).into_iter().flatten() {
            let record = engine.corpus().record(m.index as usize);
            entries.push(cdr3trie::output::ResultEntry {
                query: spec.query.clone(),
                junction: record.junction.to_string(),
                distance: m.distance,
                v_gene: record.v_tag.to_string(),
                j_gene: record.j_tag.to_string(),
            });
        }
    }

    std::fs::create_dir_all(&opts.output)
        .with_context(|| format!("creating output directory {}", opts.output.display()))?;
    let out_path = opts.output.join("results.tsv");
    cdr3trie::output::write_results(&out_path, &entries)
        .with_context(|| format!("writing results to {}", out_path.display()))?;

    Ok(())
}
