mod cli;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "editdist",
    version,
    about = "Levenshtein edit distance between Unicode strings"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the edit distance between two strings
    Distance {
        /// First string
        #[arg(allow_hyphen_values = true)]
        a: String,

        /// Second string
        #[arg(allow_hyphen_values = true)]
        b: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Also print the full distance matrix
        #[arg(long)]
        matrix: bool,
    },

    /// Print distance, normalized distance and similarity
    Similarity {
        #[arg(allow_hyphen_values = true)]
        a: String,

        #[arg(allow_hyphen_values = true)]
        b: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest the closest candidates to a word
    Suggest {
        /// Word to look up
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Candidate words
        #[arg(required = true, allow_hyphen_values = true)]
        candidates: Vec<String>,

        /// Maximum distance (default: from config, else adapts to query length)
        #[arg(long)]
        max_distance: Option<usize>,

        /// Maximum number of suggestions, 0 for all (default: from config)
        #[arg(long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute distances for tab-separated pairs, one per line
    Batch {
        /// Read pairs from this file instead of stdin
        #[arg(long)]
        file: Option<String>,

        /// Worker threads, 0 for one per core (default: from config)
        #[arg(long)]
        threads: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Generate man page
    #[command(hide = true)]
    Manpage,
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("EDITDIST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // Reset SIGPIPE to default so piping to head/grep exits cleanly instead of panicking.
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    init_logging();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Distance { a, b, json, matrix } => cli::distance::run(&a, &b, json, matrix),

        Commands::Similarity { a, b, json } => cli::similarity::run(&a, &b, json),

        Commands::Suggest {
            query,
            candidates,
            max_distance,
            limit,
            json,
        } => cli::suggest::run(&query, &candidates, max_distance, limit, json),

        Commands::Batch {
            file,
            threads,
            json,
        } => cli::batch::run(file.as_deref(), threads, json),

        Commands::Config { json } => cli::config::run(json),

        Commands::Completions { shell } => cli::completions::run(shell),

        Commands::Manpage => cli::manpage::run(),
    };

    std::process::exit(exit_code);
}
