use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fixed approximation of π used for every area.
#[allow(clippy::approx_constant)]
pub const PI: f32 = 3.14159;

/// Result values are rendered with this many digits after the decimal point.
pub const DECIMAL_PLACES: usize = 2;

const DECIMAL_SCALE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radius(f32);

impl Radius {
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// `PI * r * r`, evaluated left to right in single precision.
    pub fn area(self) -> Area {
        Area(PI * self.0 * self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area(f32);

impl Area {
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Renders the area with two decimals, rounding exact ties away from zero.
    ///
    /// An `f32` widened to `f64` and scaled by 100 is exact, so a tie can be
    /// detected without error. Every other value goes through the standard
    /// formatter, which rounds the exact binary value correctly.
    pub fn to_fixed(self) -> String {
        if let Some(text) = non_finite_str(self.0) {
            return text.to_string();
        }

        let value = f64::from(self.0);
        let scaled = value * DECIMAL_SCALE;
        if scaled.fract().abs() == 0.5 {
            let cents = scaled.round() as i64;
            let sign = if cents < 0 { "-" } else { "" };
            let cents = cents.unsigned_abs();
            return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
        }

        format!("{:.*}", DECIMAL_PLACES, value)
    }
}

/// C `printf` spelling of a non-finite value.
fn non_finite_str(value: f32) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value.is_infinite() {
        Some(if value > 0.0 { "inf" } else { "-inf" })
    } else {
        None
    }
}

/// JSON has no infinity or NaN, so those are written as strings.
fn serialize_float<S: Serializer>(value: f32, serializer: S) -> Result<S::Ok, S::Error> {
    match non_finite_str(value) {
        Some(text) => serializer.serialize_str(text),
        None => serializer.serialize_f32(value),
    }
}

impl Serialize for Radius {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_float(self.0, serializer)
    }
}

impl Serialize for Area {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_float(self.0, serializer)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed())
    }
}

/// Machine-readable form of one calculation.
#[derive(Debug, Clone, Serialize)]
pub struct AreaReport {
    pub radius: Radius,
    pub area: Area,
    pub formatted: String,
}

impl AreaReport {
    pub fn new(radius: Radius, area: Area) -> Self {
        Self {
            radius,
            area,
            formatted: area.to_fixed(),
        }
    }
}

/// How a radius token that is not a float literal is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Reject the token and report it.
    #[default]
    Strict,
    /// Use the longest numeric prefix, or zero when there is none.
    Lenient,
}

impl FromStr for InputPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!(
                "unknown input policy '{}', expected strict or lenient",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format '{}', expected text or json",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_of(r: f32) -> String {
        Radius::new(r).area().to_fixed()
    }

    #[test]
    fn test_reference_areas() {
        assert_eq!(area_of(0.0), "0.00");
        assert_eq!(area_of(1.0), "3.14");
        assert_eq!(area_of(2.0), "12.57");
        assert_eq!(area_of(10.0), "314.16");
    }

    #[test]
    fn test_negative_radius_is_squared() {
        assert_eq!(area_of(-1.0), "3.14");
        assert_eq!(Radius::new(-3.0).area(), Radius::new(3.0).area());
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(Area::new(0.125).to_fixed(), "0.13");
        assert_eq!(Area::new(0.625).to_fixed(), "0.63");
        assert_eq!(Area::new(2.375).to_fixed(), "2.38");
        assert_eq!(Area::new(-0.125).to_fixed(), "-0.13");
    }

    #[test]
    fn test_non_ties_use_nearest_value() {
        assert_eq!(Area::new(0.124).to_fixed(), "0.12");
        assert_eq!(Area::new(7.0).to_fixed(), "7.00");
        assert_eq!(Area::new(1234.5).to_fixed(), "1234.50");
    }

    #[test]
    fn test_non_finite_areas() {
        assert_eq!(Area::new(f32::INFINITY).to_fixed(), "inf");
        assert_eq!(Area::new(f32::NEG_INFINITY).to_fixed(), "-inf");
        assert_eq!(Area::new(f32::NAN).to_fixed(), "nan");
        assert_eq!(area_of(1e20), "inf");
    }

    #[test]
    fn test_policy_and_format_from_str() {
        assert_eq!("Lenient".parse::<InputPolicy>(), Ok(InputPolicy::Lenient));
        assert_eq!("strict".parse::<InputPolicy>(), Ok(InputPolicy::Strict));
        assert!("loose".parse::<InputPolicy>().is_err());
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_report_carries_formatted_area() {
        let radius = Radius::new(2.0);
        let report = AreaReport::new(radius, radius.area());
        assert_eq!(report.formatted, "12.57");
    }

    #[test]
    fn test_report_json_keeps_non_finite_values() {
        let radius = Radius::new(1e30);
        let json = serde_json::to_value(AreaReport::new(radius, radius.area())).unwrap();
        assert_eq!(json["area"], "inf");
        assert_eq!(json["formatted"], "inf");
        assert!(json["radius"].is_number());

        let json = serde_json::to_value(Area::new(f32::NAN)).unwrap();
        assert_eq!(json, "nan");
    }
}
