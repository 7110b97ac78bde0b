use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use lead_triage::config::Config;
use lead_triage::scoring::{
    negative_weights, validate_scoring, weight_sum_drift, LeadScorer, ScoringConfig,
};
use lead_triage::{intake, output, store};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;
const EXIT_INPUT: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a lead from an intake file
    Score {
        /// Intake submission (YAML or JSON)
        #[arg(long)]
        intake: PathBuf,

        /// Engagement history for the lead (YAML or JSON)
        #[arg(long)]
        engagement: Option<PathBuf>,

        /// Identifier to attach to the result
        #[arg(long)]
        lead_id: Option<String>,

        /// Persist the result in the score store (requires --lead-id)
        #[arg(long, requires = "lead_id")]
        save: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List stored leads in follow-up order
    List {
        /// Show at most this many leads
        #[arg(long)]
        limit: Option<usize>,

        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Show the full breakdown of a stored lead
    Show {
        lead_id: String,
    },
    /// Remove a lead's stored score
    Forget {
        lead_id: String,
    },
    /// Print the effective scoring configuration
    Config,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "lead-triage")]
#[command(about = "Lead qualification scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lead-triage/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        format!("lead_triage={}", level).into()
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(code: i32, context: &str, err: anyhow::Error) -> ! {
    eprintln!("{}: {:#}", context, err);
    std::process::exit(code);
}

fn store_path(config: &Config) -> PathBuf {
    match config.store_path.clone() {
        Some(p) => p,
        None => store::default_store_path()
            .unwrap_or_else(|e| fail(EXIT_CONFIG, "Store error", e)),
    }
}

fn load_store(config: &Config) -> (PathBuf, store::ResultStore) {
    let path = store_path(config);
    let results = store::load_store(&path).unwrap_or_else(|e| fail(EXIT_INPUT, "Store error", e));
    (path, results)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Commands::Init { force } = cli.command {
        let path = match cli.config {
            Some(p) => p,
            None => lead_triage::config::get_config_path()
                .unwrap_or_else(|e| fail(EXIT_CONFIG, "Config error", e)),
        };
        if let Err(e) = lead_triage::config::write_default_config(&path, force) {
            fail(EXIT_CONFIG, "Config error", e);
        }
        println!("Wrote default config to {}", path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    let config = lead_triage::config::load_config(cli.config.clone())
        .unwrap_or_else(|e| fail(EXIT_CONFIG, "Config error", e));

    // Validate scoring config at startup
    let effective_scoring: ScoringConfig = config.effective_scoring();
    if let Err(errors) = validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    if let Some(drift) = weight_sum_drift(&effective_scoring) {
        warn!(
            sum = effective_scoring.weights.sum(),
            drift, "scoring weights do not sum to 1.0; composite scores are not renormalized"
        );
    }
    for name in negative_weights(&effective_scoring) {
        warn!(weight = name, "negative scoring weight lowers the composite as the factor improves");
    }

    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Score {
            intake: intake_path,
            engagement,
            lead_id,
            save,
            json,
        } => {
            let record = intake::load_intake(&intake_path)
                .unwrap_or_else(|e| fail(EXIT_INPUT, "Intake error", e));
            let history = engagement.map(|p| {
                intake::load_engagement(&p)
                    .unwrap_or_else(|e| fail(EXIT_INPUT, "Engagement error", e))
            });

            let scorer = LeadScorer::new(effective_scoring);
            let mut result = scorer.compute(&record, history.as_ref());
            if let Some(ref id) = lead_id {
                result = result.with_lead_id(id.clone());
            }

            if json {
                match serde_json::to_string_pretty(&result) {
                    Ok(s) => println!("{}", s),
                    Err(e) => fail(EXIT_INPUT, "Output error", e.into()),
                }
            } else {
                println!(
                    "{}",
                    output::format_result_detail(&record.display_name(), &result, use_colors)
                );
            }

            if save {
                if let Some(id) = lead_id {
                    let (path, mut results) = load_store(&config);
                    results.insert(&id, &record, result);
                    if let Err(e) = store::save_store(&path, &results) {
                        fail(EXIT_INPUT, "Store error", e);
                    }
                    if cli.verbose {
                        eprintln!("Saved {} to {}", id, path.display());
                    }
                }
            }
        }
        Commands::List { limit, tsv } => {
            let (_, results) = load_store(&config);
            let mut ranked = results.ranked();
            if let Some(limit) = limit {
                ranked.truncate(limit);
            }

            if tsv {
                let out = output::format_tsv(&ranked);
                if !out.is_empty() {
                    println!("{}", out);
                }
            } else {
                println!("{}", output::format_ranked_table(&ranked, use_colors));
            }
        }
        Commands::Show { lead_id } => {
            let (_, results) = load_store(&config);
            match results.get(&lead_id) {
                Some(lead) => println!(
                    "{}",
                    output::format_result_detail(&lead.name, &lead.result, use_colors)
                ),
                None => {
                    eprintln!("No stored score for lead '{}'", lead_id);
                    std::process::exit(EXIT_INPUT);
                }
            }
        }
        Commands::Forget { lead_id } => {
            let (path, mut results) = load_store(&config);
            if !results.remove(&lead_id) {
                eprintln!("No stored score for lead '{}'", lead_id);
                std::process::exit(EXIT_INPUT);
            }
            if let Err(e) = store::save_store(&path, &results) {
                fail(EXIT_INPUT, "Store error", e);
            }
            println!("Forgot {}", lead_id);
        }
        Commands::Config => match serde_saphyr::to_string(&effective_scoring) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => fail(EXIT_CONFIG, "Config error", e.into()),
        },
        // Handled before the config is loaded
        Commands::Init { .. } => {}
    }

    std::process::exit(EXIT_SUCCESS);
}
