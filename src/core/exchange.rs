use crate::core::matcher::{MatchOutcome, Matcher};
use crate::core::verifier;
use crate::core::{ConfigProvider, ExchangeReport, Pairing, Roster, Storage};
use crate::utils::error::{Result, SantaError};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// 產生 → 驗證 → 寫出
pub struct ExchangeEngine<S: Storage> {
    storage: S,
    matcher: Matcher<StdRng>,
    max_attempts: usize,
}

impl<S: Storage> ExchangeEngine<S> {
    pub fn new(storage: S, seed: Option<u64>, max_attempts: usize) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            storage,
            matcher: Matcher::new(rng),
            max_attempts,
        }
    }

    pub fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Self {
        Self::new(storage, config.seed(), config.max_attempts())
    }

    /// Runs the matcher until it produces a pairing, then verifies it.
    ///
    /// Returns the verified pairing and the number of attempts it took.
    pub fn generate(&mut self, roster: &Roster) -> Result<(Pairing, usize)> {
        for attempt in 1..=self.max_attempts {
            match self.matcher.generate_pairing(roster) {
                MatchOutcome::Matched(pairing) => {
                    // 驗證失敗不重試，那是配對邏輯的錯誤
                    verifier::verify_roster(&pairing, roster)?;
                    tracing::debug!("Pairing verified after {} attempt(s)", attempt);
                    return Ok((pairing, attempt));
                }
                MatchOutcome::DeadEnd { giver } => {
                    tracing::debug!("Attempt {} dead-ended at {}", attempt, giver);
                }
            }
        }

        tracing::error!(
            "❌ Gave up after {} attempts for {} participants",
            self.max_attempts,
            roster.len()
        );
        Err(SantaError::Unsatisfiable {
            attempts: self.max_attempts,
            participants: roster.len(),
        })
    }

    pub fn run(&mut self, roster: &Roster) -> Result<ExchangeReport> {
        tracing::info!(
            "🎁 Matching {} participants ({} couples)",
            roster.len(),
            roster.couples().len()
        );

        let (pairing, attempts) = self.generate(roster)?;
        tracing::info!("✅ Valid pairing found after {} attempt(s)", attempts);

        let files_written = self.storage.write_all(&pairing.notifications())?;
        tracing::info!(
            "📁 Wrote {} notification files to {}",
            files_written,
            self.storage.location()
        );

        Ok(ExchangeReport {
            attempts,
            participants: roster.len(),
            output_dir: self.storage.location().to_string(),
            files_written,
        })
    }

    /// 只產生並驗證，不寫出任何檔案
    pub fn dry_run(&mut self, roster: &Roster) -> Result<ExchangeReport> {
        let (_, attempts) = self.generate(roster)?;
        Ok(ExchangeReport {
            attempts,
            participants: roster.len(),
            output_dir: self.storage.location().to_string(),
            files_written: 0,
        })
    }
}
