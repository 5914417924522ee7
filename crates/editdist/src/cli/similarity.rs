use editdist_core::distance;
use editdist_core::output::{self, SimilarityReport};
use editdist_core::similarity::{normalized_distance, similarity};

pub fn run(a: &str, b: &str, json: bool) -> i32 {
    let limit = super::load_config().input_limit();
    if let Err(e) = limit
        .check("first input", a)
        .and_then(|()| limit.check("second input", b))
    {
        return super::fail(e);
    }

    let report = SimilarityReport {
        a,
        b,
        distance: distance(a, b),
        normalized_distance: normalized_distance(a, b),
        similarity: similarity(a, b),
    };

    if json {
        if let Err(e) = output::write_json(&report, std::io::stdout().lock()) {
            return super::fail(format!("failed to write output: {e}"));
        }
    } else {
        println!("distance:            {}", report.distance);
        println!("normalized distance: {:.4}", report.normalized_distance);
        println!("similarity:          {:.4}", report.similarity);
    }

    0
}
