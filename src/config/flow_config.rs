use crate::core::predicates::CountPredicate;
use crate::utils::error::{FlowError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 3] = ["json", "csv", "tsv"];
pub const MISMATCH_POLICIES: [&str; 2] = ["fallback", "fail"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    pub flow: FlowInfo,
    pub branch: BranchConfig,
    pub single: Option<SingleConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

/// Function names are resolved against a registry at run time, so an absent
/// or unknown name surfaces as an invalid argument rather than a parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchConfig {
    pub predicate: Option<CountPredicate>,
    pub then: Option<String>,
    #[serde(rename = "else")]
    pub otherwise: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleConfig {
    pub apply: Option<String>,
    pub fallback: Option<serde_json::Value>,
    pub on_mismatch: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchPolicy {
    Fallback,
    Fail,
}

impl SingleConfig {
    pub fn mismatch_policy(&self) -> MismatchPolicy {
        match self.on_mismatch.as_deref() {
            Some("fail") => MismatchPolicy::Fail,
            _ => MismatchPolicy::Fallback,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
}

impl FlowConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FlowError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FlowError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FlowError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("flow.name", &self.flow.name)?;

        for (field, name) in [
            ("branch.then", &self.branch.then),
            ("branch.else", &self.branch.otherwise),
        ] {
            if let Some(name) = name {
                validation::validate_non_empty_string(field, name)?;
            }
        }

        if let Some(CountPredicate::Between { min, max }) = self.branch.predicate {
            if min > max {
                return Err(FlowError::InvalidConfigValueError {
                    field: "branch.predicate".to_string(),
                    value: format!("between {}..={}", min, max),
                    reason: "min must not exceed max; this range never matches".to_string(),
                });
            }
        }

        if let Some(single) = &self.single {
            if let Some(policy) = &single.on_mismatch {
                validation::validate_one_of("single.on_mismatch", policy, &MISMATCH_POLICIES)?;
            }
        }

        if let Some(output) = &self.output {
            if let Some(format) = &output.format {
                validation::validate_one_of("output.format", format, &OUTPUT_FORMATS)?;
            }
            if let Some(path) = &output.path {
                validation::validate_path("output.path", path)?;
            }
        }

        Ok(())
    }

    pub fn output_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.format.as_deref())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }
}

impl Validate for FlowConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
