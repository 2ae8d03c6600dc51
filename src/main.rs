use clap::Parser;
use mentor_match::app::shell;
use mentor_match::utils::{logger, validation::Validate};
use mentor_match::{CliConfig, LocalStorage, MatchEngine, MatchPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init(config.verbose, config.log_json);

    tracing::info!("Starting mentor-match CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let interactive = config.interactive;
    let storage = LocalStorage::new(config.data_dir.clone());
    let pipeline = MatchPipeline::new(storage, config);
    let engine = MatchEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            println!("✅ Ranked mentors for {} mentees", summary.report.rankings.len());
            println!("📁 Output saved to: {}", summary.output_path);

            if interactive {
                if let Err(e) = shell::run_shell(&summary.report) {
                    tracing::error!("❌ {}", e);
                    std::process::exit(e.exit_code());
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Matching failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
