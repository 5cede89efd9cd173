use anyhow::Context;
use clap::Parser;
use portfolio_page::utils::error::ErrorSeverity;
use portfolio_page::utils::logger::{self, LogFormat};
use portfolio_page::utils::validation::Validate;
use portfolio_page::{CliConfig, LocalStorage, SiteBuilder};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, LogFormat::from_flag(config.json_logs));

    tracing::info!("Starting portfolio-page");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let content = match config.load_content() {
        Ok(content) => content,
        Err(e) => {
            tracing::error!(
                "❌ Could not load content: {} (Severity: {:?})",
                e,
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };

    if config.dump_content {
        println!("{}", content.to_json_pretty()?);
        return Ok(());
    }

    let state = config.initial_state();
    let storage = LocalStorage::new(&config.output_path);
    let builder = SiteBuilder::new(storage, &content).with_file_name(config.file_name.clone());

    if config.dry_run {
        let size = builder.dry_run(state);
        println!("🔍 Dry run: {} would be {} bytes", config.file_name, size);
        return Ok(());
    }

    let written = builder
        .run(state)
        .with_context(|| format!("failed to write page under {}", config.output_path))?;
    let full_path = builder.storage().full_path(&written);

    println!("✅ Page rendered");
    println!("📁 Output saved to: {}", full_path.display());

    Ok(())
}
