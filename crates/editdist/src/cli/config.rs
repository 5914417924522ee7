use editdist_core::output::{self, ConfigReport};

pub fn run(json: bool) -> i32 {
    let config = super::load_config();

    if json {
        let report = ConfigReport {
            source: config.path.as_deref(),
            config: &config,
        };
        if let Err(e) = output::write_json(&report, std::io::stdout().lock()) {
            return super::fail(format!("failed to write output: {e}"));
        }
        return 0;
    }

    println!(
        "source:               {}",
        config.path.as_deref().unwrap_or("built-in defaults")
    );
    println!("max_input_chars:      {}", config.max_input_chars);
    println!("max_matrix_cells:     {}", config.max_matrix_cells);
    match config.suggest.max_distance {
        Some(d) => println!("suggest.max_distance: {d}"),
        None => println!("suggest.max_distance: adaptive"),
    }
    println!("suggest.limit:        {}", config.suggest.limit);
    println!("batch.threads:        {}", config.batch.threads);
    0
}
