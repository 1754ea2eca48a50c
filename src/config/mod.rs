pub mod toml_config;

use crate::core::{ConfigProvider, InputPolicy, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;
use toml_config::TomlConfig;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "circle-area")]
#[command(about = "Computes the area of a circle from a radius read on standard input")]
pub struct CliConfig {
    /// Radius to use instead of prompting on standard input
    #[arg(long, allow_hyphen_values = true)]
    pub radius: Option<String>,

    /// How to treat input that is not a number: strict or lenient
    #[arg(long)]
    pub input_policy: Option<InputPolicy>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file, if any, and applies command-line overrides.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        Ok(Settings {
            input_policy: self.input_policy.unwrap_or(file.input_policy()),
            output_format: self.format.unwrap_or(file.output_format()),
            log_level: file.log_level().map(str::to_string),
        })
    }
}

/// Effective settings after merging the config file with CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub input_policy: InputPolicy,
    pub output_format: OutputFormat,
    pub log_level: Option<String>,
}

impl Settings {
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

impl ConfigProvider for Settings {
    fn input_policy(&self) -> InputPolicy {
        self.input_policy
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_arguments_gives_original_behaviour() {
        let cli = CliConfig::parse_from(["circle-area"]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings, Settings::default());
        assert!(cli.radius.is_none());
    }

    #[test]
    fn test_flags_are_parsed() {
        let cli = CliConfig::parse_from([
            "circle-area",
            "--radius",
            "-1.5",
            "--input-policy",
            "lenient",
            "--format",
            "json",
            "-v",
        ]);
        assert_eq!(cli.radius.as_deref(), Some("-1.5"));
        assert!(cli.verbose);

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.input_policy, InputPolicy::Lenient);
        assert_eq!(settings.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\npolicy = \"lenient\"\n[output]\nformat = \"json\"\n[logging]\nlevel = \"info\"\n")
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_path_buf()),
            format: Some(OutputFormat::Text),
            ..Default::default()
        };

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.input_policy, InputPolicy::Lenient);
        assert_eq!(settings.output_format, OutputFormat::Text);
        assert_eq!(settings.log_level(), Some("info"));
    }

    #[test]
    fn test_invalid_config_file_is_reported() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[logging]\nlevel = \"loud\"\n").unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(cli.resolve().is_err());
    }
}
