pub mod cli;
pub mod flow_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "counted-flow")]
#[command(about = "Branch a whole collection on its element count")]
pub struct CliConfig {
    #[arg(long, help = "Path to the TOML flow definition")]
    pub config: String,

    #[arg(long, help = "JSON file holding an array of input values")]
    pub input: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Inline input values, comma separated")]
    pub values: Vec<String>,

    #[arg(long, help = "Output format: json, csv or tsv (overrides the config)")]
    pub format: Option<String>,

    #[arg(long, help = "Write the report here instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("config", &self.config)?;

        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
            if !self.values.is_empty() {
                return Err(crate::utils::error::FlowError::ConfigValidationError {
                    field: "input".to_string(),
                    message: "use either --input or --values, not both".to_string(),
                });
            }
        }

        if let Some(format) = &self.format {
            validation::validate_one_of("format", format, &flow_config::OUTPUT_FORMATS)?;
        }

        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }

        Ok(())
    }
}
