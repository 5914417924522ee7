use editdist_core::output::{self, SuggestReport};
use editdist_core::suggest::Suggester;

/// Exit code when no candidate is close enough.
const NO_MATCH: i32 = 2;

pub fn run(
    query: &str,
    candidates: &[String],
    max_distance: Option<usize>,
    limit: Option<usize>,
    json: bool,
) -> i32 {
    let config = super::load_config();
    let input_limit = config.input_limit();
    if let Err(e) = input_limit.check("query", query) {
        return super::fail(e);
    }
    if let Some(e) = candidates
        .iter()
        .enumerate()
        .find_map(|(idx, c)| input_limit.check(&format!("candidate {}", idx + 1), c).err())
    {
        return super::fail(e);
    }

    let mut suggester = Suggester::from(&config.suggest);
    if max_distance.is_some() {
        suggester.max_distance = max_distance;
    }
    if let Some(limit) = limit {
        suggester.limit = limit;
    }

    let suggestions = suggester.suggest(query, candidates);

    if json {
        let report = SuggestReport {
            query,
            max_distance: suggester.threshold_for(query),
            suggestions: &suggestions,
        };
        if let Err(e) = output::write_json(&report, std::io::stdout().lock()) {
            return super::fail(format!("failed to write output: {e}"));
        }
    } else if suggestions.is_empty() {
        eprintln!("editdist: no suggestions for '{query}'");
    } else {
        for s in &suggestions {
            println!("{}\t{}", s.candidate, s.distance);
        }
    }

    if suggestions.is_empty() {
        NO_MATCH
    } else {
        0
    }
}
