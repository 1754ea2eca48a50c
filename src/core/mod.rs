pub mod calculator;
pub mod parse;

pub use crate::domain::model::{AreaReport, InputPolicy, OutputFormat, Radius};
pub use crate::domain::ports::{ConfigProvider, RadiusSource};
pub use crate::utils::error::Result;
