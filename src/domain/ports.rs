use crate::domain::model::{InputPolicy, OutputFormat};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn input_policy(&self) -> InputPolicy;
    fn output_format(&self) -> OutputFormat;
}

/// Where the radius token comes from.
pub trait RadiusSource {
    /// Returns the next whitespace-delimited token, or `None` at end of input.
    fn read_token(&mut self) -> Result<Option<String>>;

    /// Whether a prompt should be shown before reading.
    fn is_interactive(&self) -> bool {
        true
    }
}
