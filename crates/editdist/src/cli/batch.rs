use std::io::Write;

use editdist_core::batch::{self, BatchRunner};
use editdist_core::output::{self, BatchReport};
use tracing::debug;

pub fn run(file: Option<&str>, threads: Option<usize>, json: bool) -> i32 {
    let config = super::load_config();

    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {path}: {e}")),
        None => std::io::read_to_string(std::io::stdin())
            .map_err(|e| format!("cannot read stdin: {e}")),
    };
    let input = match input {
        Ok(s) => s,
        Err(msg) => return super::fail(msg),
    };

    let pairs = match batch::parse_pairs(&input) {
        Ok(p) => p,
        Err(e) => return super::fail(e),
    };
    if let Err(e) = batch::check_pairs(&pairs, config.input_limit()) {
        return super::fail(e);
    }

    let threads = threads.unwrap_or(config.batch.threads);
    debug!(pairs = pairs.len(), threads, "batch input parsed");

    let results = match BatchRunner::new(threads).run(&pairs) {
        Ok(r) => r,
        Err(e) => return super::fail(e),
    };

    let written = if json {
        output::write_json(&BatchReport { results: &results }, std::io::stdout().lock())
    } else {
        let mut out = std::io::stdout().lock();
        results
            .iter()
            .try_for_each(|r| writeln!(out, "{}\t{}\t{}", r.left, r.right, r.distance))
    };

    match written {
        Ok(()) => 0,
        Err(e) => super::fail(format!("failed to write output: {e}")),
    }
}
