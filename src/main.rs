use clap::Parser;
use secret_santa::config::roster_files;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{CliConfig, ExchangeEngine, LocalStorage, SantaError};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting secret-santa");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(e);
    }

    // 在產生任何配對前載入並檢查名單
    let roster = match roster_files::load_roster(&config.people_file, &config.couples_file) {
        Ok(roster) => roster,
        Err(e) => fail(e),
    };

    let storage = LocalStorage::new(config.output_dir.clone());
    let mut engine = ExchangeEngine::from_config(storage, &config);

    let result = if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        engine.dry_run(&roster)
    } else {
        engine.run(&roster)
    };

    match result {
        Ok(report) if config.dry_run => {
            println!(
                "✅ Found a valid pairing for {} participants after {} attempt(s)",
                report.participants, report.attempts
            );
        }
        Ok(report) => {
            println!(
                "✅ Drew recipients for {} participants after {} attempt(s)",
                report.participants, report.attempts
            );
            println!("📁 {} files saved to: {}", report.files_written, report.output_dir);
        }
        Err(e) => fail(e),
    }
}

fn fail(e: SantaError) -> ! {
    tracing::error!(
        "❌ secret-santa failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}
