use crate::adapters::source::DEFAULT_DELIMITER;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "word-count-bolt")]
#[command(about = "Counts words from a text stream, emitting (word, count) per word")]
pub struct CliConfig {
    /// Text file to read; stdin when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// File to write emitted records to; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Regular expression separating words within a line
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    #[arg(long, help = "Lowercase words before counting")]
    pub lowercase: bool,

    /// Load settings from a TOML file instead of the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log the N most frequent words when the input ends
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn delimiter(&self) -> &str {
        &self.delimiter
    }

    fn lowercase(&self) -> bool {
        self.lowercase
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_optional_path("input", self.input.as_deref())?;
        validation::validate_optional_path("output", self.output.as_deref())?;
        validation::validate_optional_path("config", self.config.as_deref())?;
        validation::validate_delimiter("delimiter", &self.delimiter)
    }
}
