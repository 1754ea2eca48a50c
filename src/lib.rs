pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::input::{FixedSource, ReaderSource};
pub use config::{CliConfig, Settings};
pub use core::calculator::CircleAreaCalculator;
pub use domain::model::{Area, AreaReport, InputPolicy, OutputFormat, Radius, PI};
pub use utils::error::{CalcError, Result};
