use super::toml_config::{self, TomlConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::core::{ConfigProvider, SeederSettings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "package-seeder")]
#[command(about = "Generate a Laravel package seeder from a customer JSON export")]
pub struct CliConfig {
    /// Customer export to read [default: final_customer_data.json]
    #[arg(long)]
    pub input: Option<String>,

    /// Seeder file to write [default: database/seeders/ImportPackagesSeeder.php]
    #[arg(long)]
    pub output: Option<String>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Also write a CSV summary with per-package customer counts
    #[arg(long)]
    pub report: Option<String>,

    /// Print the seeder to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with a non-zero status when the import fails
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(skip)]
    #[serde(skip)]
    pub seeder: SeederSettings,
}

impl CliConfig {
    /// Fills everything not given on the command line from the TOML file.
    pub fn merge_toml(&mut self, file: TomlConfig) {
        if self.input.is_none() {
            self.input = file.input.path;
        }
        if self.output.is_none() {
            self.output = file.output.path;
        }
        if self.report.is_none() {
            self.report = file.output.report;
        }
        self.seeder = file.seeder.resolve();
    }

    /// Loads `--config` when one was given.
    pub fn load_config_file(&mut self) -> Result<()> {
        if let Some(path) = self.config.clone() {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file = TomlConfig::from_file(&path)?;
            self.merge_toml(file);
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn report_path(&self) -> Option<&str> {
        self.report.as_deref()
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }

    fn seeder(&self) -> SeederSettings {
        self.seeder.clone()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        toml_config::validate_settings(self)
    }
}
