//! Linter configuration

use serde::{Deserialize, Serialize};
use stacklint_core::{ConfigError, LinterConfig, NamePolicy, RuleId};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

pub const DEFAULT_CONFIG_FILES: &[&str] = &[".stacklint.yml", ".stacklint.yaml"];

/// Built-in name policies
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    clap::ValueEnum,
    Deserialize,
    Serialize,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PolicyPreset {
    /// Lowercase alphanumerics and underscores, no leading or trailing underscore
    Strict,
    /// Anything without a hyphen
    Lenient,
}

impl From<PolicyPreset> for NamePolicy {
    fn from(preset: PolicyPreset) -> Self {
        match preset {
            PolicyPreset::Strict => NamePolicy::strict(),
            PolicyPreset::Lenient => NamePolicy::lenient(),
        }
    }
}

/// Name policy as written in YAML: a preset name or a custom pattern
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NamePolicyConfig {
    Preset(PolicyPreset),
    Custom { pattern: String },
}

impl NamePolicyConfig {
    pub fn compile(&self) -> Result<NamePolicy, ConfigError> {
        match self {
            NamePolicyConfig::Preset(preset) => Ok((*preset).into()),
            NamePolicyConfig::Custom { pattern } => NamePolicy::custom(pattern),
        }
    }
}

/// Configuration file structure (.stacklint.yml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_policy: Option<NamePolicyConfig>,

    /// Rule IDs to skip, e.g. `unused_variables`
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}

impl ConfigFile {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        serde_yml::from_str(&content).map_err(|e| format!("Failed to parse YAML config: {}", e))
    }

    /// Load configuration from the first default file found in `dirs`
    pub fn load_default(dirs: &[&Path]) -> Result<Option<Self>, String> {
        for dir in dirs {
            for filename in DEFAULT_CONFIG_FILES {
                let path = dir.join(filename);
                if path.is_file() {
                    return Self::from_file(&path).map(Some);
                }
            }
        }
        Ok(None)
    }

    /// An explicit path must exist; otherwise the stack directory, then the
    /// working directory, are searched.
    pub fn load(config_path: Option<&str>, stack_dir: &Path) -> Result<Option<Self>, String> {
        match config_path {
            Some(path) => Self::from_file(Path::new(path)).map(Some),
            None => Self::load_default(&[stack_dir, Path::new(".")]),
        }
    }

    /// Builds the linter configuration, letting `policy_override` win over
    /// the file's `name_policy`.
    pub fn to_linter_config(
        &self,
        policy_override: Option<PolicyPreset>,
    ) -> Result<LinterConfig, String> {
        let name_policy = match (policy_override, &self.name_policy) {
            (Some(preset), _) => preset.into(),
            (None, Some(policy)) => policy.compile().map_err(|e| e.to_string())?,
            (None, None) => NamePolicy::default(),
        };

        let disabled_rules = self
            .disabled_rules
            .iter()
            .map(|name| {
                RuleId::from_str(name)
                    .map_err(|_| ConfigError::UnknownRule(name.clone()).to_string())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LinterConfig { name_policy, disabled_rules })
    }
}
