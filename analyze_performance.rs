//! Performance summary for the `digraph_benchmark` JSON export.
//!
//! Run this after `cargo bench --bench digraph_benchmark`.

use std::collections::BTreeMap;
use std::fs;

use anyhow::{bail, Context};

#[derive(serde::Deserialize, Debug)]
struct BenchmarkResult {
    collection: String,
    operation: String,
    time_ns: f64,
}

#[derive(serde::Deserialize, Debug)]
struct BenchmarkResults {
    timestamp: String,
    results: Vec<BenchmarkResult>,
}

fn main() -> anyhow::Result<()> {
    let results_path = "benchmark_results/digraph.json";
    if fs::metadata(results_path).is_err() {
        bail!("benchmark results not found; run `cargo bench --bench digraph_benchmark` first");
    }

    let content = fs::read_to_string(results_path).with_context(|| format!("reading {results_path}"))?;
    let benchmark_results: BenchmarkResults =
        serde_json::from_str(&content).with_context(|| format!("parsing {results_path}"))?;

    println!("DIGRAPH PERFORMANCE REPORT");
    println!("==========================");
    println!("Timestamp: {}", benchmark_results.timestamp);
    println!("Total samples: {}\n", benchmark_results.results.len());

    let mut by_operation: BTreeMap<&str, Vec<&BenchmarkResult>> = BTreeMap::new();
    for result in &benchmark_results.results {
        by_operation.entry(result.operation.as_str()).or_default().push(result);
    }

    for (operation, mut results) in by_operation {
        println!("{} ({})", operation.to_uppercase(), results.len());
        results.sort_by(|a, b| a.time_ns.total_cmp(&b.time_ns));

        let fastest = results[0].time_ns;
        for (rank, result) in results.iter().enumerate() {
            print!("  {}. {}: {:.1} ns", rank + 1, result.collection, result.time_ns);
            if rank > 0 && fastest > 0.0 {
                print!(" ({:.2}x slower)", result.time_ns / fastest);
            }
            println!();
        }
        println!();
    }

    Ok(())
}
