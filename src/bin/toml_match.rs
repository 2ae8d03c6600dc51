use anyhow::Context;
use clap::Parser;
use mentor_match::core::ConfigProvider;
use mentor_match::utils::{logger, validation::Validate};
use mentor_match::{LocalStorage, MatchEngine, MatchPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-match")]
#[command(about = "Mentor matching driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "mentor-match.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the data directory from config
    #[arg(long)]
    data_dir: Option<String>,

    /// Show the resolved configuration and input files without matching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based mentor matching");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if let Some(data_dir) = &args.data_dir {
        config.input.data_dir = data_dir.clone();
        tracing::info!("🔧 Data directory overridden to: {}", data_dir);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    let storage = LocalStorage::new(config.data_dir().to_string());

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No output will be written");
        perform_dry_run(&config, &storage)?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let pipeline = MatchPipeline::new(storage, config);
    let engine = MatchEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            println!("✅ Ranked mentors for {} mentees", summary.report.rankings.len());
            println!("📁 Output saved to: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Matching failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn join_columns<T: ToString>(columns: &[T]) -> String {
    columns
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Configuration Summary:");
    println!("  Data dir: {}", config.data_dir());
    println!("  Mentee file: *{}*", config.mentee_file());
    println!("  Mentor file: *{}*", config.mentor_file());
    println!("  Mentee columns: {}", join_columns(config.mentee_columns()));
    println!("  Mentor columns: {}", join_columns(config.mentor_columns()));
    match config.name_column() {
        Some(name) => println!("  Name column: {}", name),
        None => println!("  Name column: first header containing 'Name'"),
    }
    println!("  Empty interests: {:?}", config.empty_interest_policy());
    println!("  Output: {}", config.output_file());
    println!();
}

fn perform_dry_run(config: &TomlConfig, storage: &LocalStorage) -> anyhow::Result<()> {
    println!("🔍 Dry Run Analysis:");
    for (cohort, pattern) in [
        ("Mentee", config.mentee_file()),
        ("Mentor", config.mentor_file()),
    ] {
        let matches = storage
            .matching_files(pattern)
            .with_context(|| format!("Listing {} files", cohort.to_lowercase()))?;
        match matches.split_first() {
            Some((first, rest)) => {
                println!("  {} survey: {}", cohort, first);
                for ignored in rest {
                    println!("    (also matches, ignored: {})", ignored);
                }
            }
            None => println!("  {} survey: ❌ no file contains '{}'", cohort, pattern),
        }
    }
    println!();
    println!("✅ Dry run analysis complete.");
    Ok(())
}
