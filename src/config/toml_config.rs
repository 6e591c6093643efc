use crate::core::{ConfigProvider, SeederSettings};
use crate::utils::error::{Result, SeederError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_INPUT_PATH: &str = "final_customer_data.json";
pub const DEFAULT_OUTPUT_PATH: &str = "database/seeders/ImportPackagesSeeder.php";

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub seeder: SeederConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub report: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeederConfig {
    pub namespace: Option<String>,
    pub class_name: Option<String>,
    pub model: Option<String>,
    pub model_namespace: Option<String>,
}

impl SeederConfig {
    /// Fills unset keys from the built-in seeder template.
    pub fn resolve(&self) -> SeederSettings {
        let defaults = SeederSettings::default();
        SeederSettings {
            namespace: self.namespace.clone().unwrap_or(defaults.namespace),
            class_name: self.class_name.clone().unwrap_or(defaults.class_name),
            model: self.model.clone().unwrap_or(defaults.model),
            model_namespace: self
                .model_namespace
                .clone()
                .unwrap_or(defaults.model_namespace),
        }
    }
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SeederError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SeederError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders from the environment; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        self.input.path.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn report_path(&self) -> Option<&str> {
        self.output.report.as_deref()
    }

    fn dry_run(&self) -> bool {
        false
    }

    fn seeder(&self) -> SeederSettings {
        self.seeder.resolve()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}

/// Shared checks for any configuration source.
pub fn validate_settings<C: ConfigProvider>(config: &C) -> Result<()> {
    validation::validate_path("input.path", config.input_path())?;
    validation::validate_path("output.path", config.output_path())?;
    validation::validate_file_extension("output.path", config.output_path(), &["php"])?;

    if let Some(report) = config.report_path() {
        validation::validate_path("output.report", report)?;
        validation::validate_file_extension("output.report", report, &["csv"])?;
    }

    let seeder = config.seeder();
    validation::validate_php_namespace("seeder.namespace", &seeder.namespace)?;
    validation::validate_php_identifier("seeder.class_name", &seeder.class_name)?;
    validation::validate_php_identifier("seeder.model", &seeder.model)?;
    validation::validate_php_namespace("seeder.model_namespace", &seeder.model_namespace)?;

    Ok(())
}
