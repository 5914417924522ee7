use editdist_core::output::{self, DistanceReport};
use editdist_core::{distance, DistanceMatrix};

pub fn run(a: &str, b: &str, json: bool, matrix: bool) -> i32 {
    let config = super::load_config();
    let limit = config.input_limit();
    if let Err(e) = limit
        .check("first input", a)
        .and_then(|()| limit.check("second input", b))
    {
        return super::fail(e);
    }
    if matrix {
        if let Err(e) = config.matrix_limit().check(a, b) {
            return super::fail(e);
        }
    }

    let grid = matrix.then(|| DistanceMatrix::build(a, b));
    let d = match &grid {
        Some(m) => m.distance(),
        None => distance(a, b),
    };

    let result = if json {
        let report = DistanceReport {
            a,
            b,
            distance: d,
            matrix: grid.as_ref().map(|m| m.iter_rows().collect()),
        };
        output::write_json(&report, std::io::stdout().lock())
    } else {
        println!("{d}");
        match &grid {
            Some(m) => output::write_matrix(a, b, m, std::io::stdout().lock()),
            None => Ok(()),
        }
    };

    match result {
        Ok(()) => 0,
        Err(e) => super::fail(format!("failed to write output: {e}")),
    }
}
