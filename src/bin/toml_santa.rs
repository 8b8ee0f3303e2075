use clap::Parser;
use secret_santa::core::ConfigProvider;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{ExchangeEngine, LocalStorage, SantaError, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-santa")]
#[command(about = "Secret Santa draw driven by a TOML exchange file or the built-in roster")]
struct Args {
    /// Path to TOML exchange file
    #[arg(short, long, default_value = "santa.toml")]
    config: String,

    /// Use the roster compiled into the binary instead of a file
    #[arg(long)]
    builtin: bool,

    /// Override the output directory from config
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Override the random seed from config
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - generate and verify without writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    let mut config = if args.builtin {
        tracing::info!("📋 Using built-in roster");
        TomlConfig::builtin()
    } else {
        tracing::info!("📁 Loading configuration from: {}", args.config);
        match TomlConfig::from_file(&args.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        }
    };

    // 應用命令列覆蓋設定
    if let Some(output_dir) = args.output_dir {
        tracing::info!("🔧 Output directory overridden to: {}", output_dir);
        config.exchange.output_dir = output_dir;
    }
    if let Some(seed) = args.seed {
        config.exchange.seed = Some(seed);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(e);
    }
    let roster = match config.roster() {
        Ok(roster) => roster,
        Err(e) => fail(e),
    };

    tracing::info!(
        "✅ {} loaded: {} participants, {} couples",
        config.exchange_name(),
        roster.len(),
        roster.couples().len()
    );

    let storage = LocalStorage::new(config.output_dir().to_string());
    let mut engine = ExchangeEngine::from_config(storage, &config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        match engine.dry_run(&roster) {
            Ok(report) => println!(
                "✅ Found a valid pairing for {} participants after {} attempt(s)",
                report.participants, report.attempts
            ),
            Err(e) => fail(e),
        }
        return;
    }

    match engine.run(&roster) {
        Ok(report) => {
            println!("✅ {} drawn after {} attempt(s)", config.exchange_name(), report.attempts);
            println!("📁 {} files saved to: {}", report.files_written, report.output_dir);
        }
        Err(e) => fail(e),
    }
}

fn fail(e: SantaError) -> ! {
    tracing::error!(
        "❌ Exchange failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}
