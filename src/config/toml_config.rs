use crate::core::exchange::DEFAULT_MAX_ATTEMPTS;
use crate::core::{ConfigProvider, Couple, Participant, Roster};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_PEOPLE: &[&str] = &[
    "Joe", "Emily", "Megan", "Marcus", "Jeremy", "Ben", "Rachel", "Alec", "Courtney",
];

const BUILTIN_COUPLES: &[(&str, &str)] = &[
    ("Joe", "Emily"),
    ("Megan", "Marcus"),
    ("Alec", "Courtney"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub exchange: ExchangeSection,
    pub roster: RosterSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeSection {
    pub name: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    pub max_attempts: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for ExchangeSection {
    fn default() -> Self {
        Self {
            name: None,
            output_dir: default_output_dir(),
            max_attempts: None,
            seed: None,
        }
    }
}

fn default_output_dir() -> String {
    "gift_recipients".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSection {
    pub people: Vec<String>,
    #[serde(default)]
    pub couples: Vec<Vec<String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| SantaError::InputFileError {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SantaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 內建名單
    pub fn builtin() -> Self {
        Self {
            exchange: ExchangeSection::default(),
            roster: RosterSection {
                people: BUILTIN_PEOPLE.iter().map(|p| p.to_string()).collect(),
                couples: BUILTIN_COUPLES
                    .iter()
                    .map(|(a, b)| vec![a.to_string(), b.to_string()])
                    .collect(),
            },
        }
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SantaError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 建立並檢查名單
    pub fn roster(&self) -> Result<Roster> {
        let people = self
            .roster
            .people
            .iter()
            .map(|p| Participant::from(p.trim()));

        let mut couples = Vec::with_capacity(self.roster.couples.len());
        for (index, names) in self.roster.couples.iter().enumerate() {
            match names.as_slice() {
                [a, b] => couples.push(Couple::new(a.trim(), b.trim())),
                _ => {
                    return Err(SantaError::ConfigValidationError {
                        field: format!("roster.couples[{}]", index),
                        message: format!("expected 2 names, found {}", names.len()),
                    })
                }
            }
        }
        Roster::new(people, couples)
    }

    pub fn exchange_name(&self) -> &str {
        self.exchange.name.as_deref().unwrap_or("Secret Santa")
    }
}

impl ConfigProvider for TomlConfig {
    fn output_dir(&self) -> &str {
        &self.exchange.output_dir
    }

    fn max_attempts(&self) -> usize {
        self.exchange.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    fn seed(&self) -> Option<u64> {
        self.exchange.seed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("exchange.output_dir", &self.exchange.output_dir)?;
        if let Some(max_attempts) = self.exchange.max_attempts {
            validate_positive_number("exchange.max_attempts", max_attempts, 1)?;
        }
        if self.roster.people.is_empty() {
            return Err(SantaError::ConfigValidationError {
                field: "roster.people".to_string(),
                message: "at least one participant is required".to_string(),
            });
        }
        self.roster().map(|_| ())
    }
}
