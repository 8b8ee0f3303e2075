pub mod cli;
pub mod roster_files;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::core::exchange::DEFAULT_MAX_ATTEMPTS;
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, validate_positive_number, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "secret-santa")]
    #[command(about = "Draw Secret Santa gift recipients, keeping couples apart")]
    pub struct CliConfig {
        /// File with one participant name per line
        #[arg(short = 'p', long)]
        pub people_file: String,

        /// File with one comma-separated couple per line
        #[arg(short = 'c', long)]
        pub couples_file: String,

        /// Directory that receives one notification file per giver
        #[arg(short = 'o', long, default_value = "gift_recipients")]
        pub output_dir: String,

        /// Fixed random seed, for reproducible draws
        #[arg(long)]
        pub seed: Option<u64>,

        /// Give up after this many dead-ended attempts
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        pub max_attempts: usize,

        /// Generate and verify without writing any files
        #[arg(long)]
        pub dry_run: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn output_dir(&self) -> &str {
            &self.output_dir
        }

        fn max_attempts(&self) -> usize {
            self.max_attempts
        }

        fn seed(&self) -> Option<u64> {
            self.seed
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("people_file", &self.people_file)?;
            validate_path("couples_file", &self.couples_file)?;
            validate_path("output_dir", &self.output_dir)?;
            validate_positive_number("max_attempts", self.max_attempts, 1)?;
            Ok(())
        }
    }

}
