pub mod scenario;

pub use scenario::{ScenarioScript, ScenarioSettings};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "order-desk")]
#[command(about = "Replay delivery order scenarios against an in-memory order store")]
pub struct CliConfig {
    /// Path to the TOML scenario file
    #[arg(short, long, default_value = "scenario.toml")]
    pub script: String,

    /// CSV file of orders to load before the scenario runs
    #[arg(long)]
    pub seed: Option<String>,

    /// Fail on assignments that name an unknown order or partner
    #[arg(long)]
    pub strict: bool,

    /// Pretty-print each JSON response
    #[arg(long)]
    pub pretty: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("script", &self.script)?;
        if let Some(seed) = &self.seed {
            validate_path("seed", seed)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let config = CliConfig::parse_from([
            "order-desk",
            "--script",
            "shift.toml",
            "--seed",
            "orders.csv",
            "--strict",
        ]);
        assert_eq!(config.script, "shift.toml");
        assert_eq!(config.seed.as_deref(), Some("orders.csv"));
        assert!(config.strict);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_empty_seed() {
        let config = CliConfig::parse_from(["order-desk", "--seed", ""]);
        assert!(config.validate().is_err());
    }
}
