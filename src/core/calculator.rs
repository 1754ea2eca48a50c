use crate::core::parse::parse_radius;
use crate::core::{AreaReport, ConfigProvider, OutputFormat, RadiusSource};
use crate::utils::error::Result;
use std::io::Write;

pub const PROMPT: &str = "Enter radius of circle: ";
pub const RESULT_LABEL: &str = "Area of the circle: ";

/// Prompts for a radius, computes the area and prints it.
pub struct CircleAreaCalculator<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> CircleAreaCalculator<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Runs one read, compute, print cycle against the given streams.
    pub fn run<S, W>(&self, source: &mut S, output: &mut W) -> Result<AreaReport>
    where
        S: RadiusSource,
        W: Write,
    {
        let format = self.config.output_format();

        // The prompt would corrupt machine-readable output.
        if source.is_interactive() && format == OutputFormat::Text {
            output.write_all(PROMPT.as_bytes())?;
            output.flush()?;
        }

        let token = source.read_token()?;
        let radius = parse_radius(token.as_deref(), self.config.input_policy())?;
        tracing::debug!("Parsed radius: {}", radius.value());

        let area = radius.area();
        tracing::debug!("Computed area: {}", area.value());

        let report = AreaReport::new(radius, area);
        match format {
            OutputFormat::Text => {
                writeln!(output, "{}{}", RESULT_LABEL, report.formatted)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *output, &report)?;
                writeln!(output)?;
            }
        }
        output.flush()?;

        tracing::info!("Area of radius {} is {}", radius.value(), report.formatted);
        Ok(report)
    }
}
