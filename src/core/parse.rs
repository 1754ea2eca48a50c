use crate::domain::model::{InputPolicy, Radius};
use crate::utils::error::{CalcError, Result};

/// Turns a radius token into a [`Radius`] according to `policy`.
///
/// `None` means the input ended before any token was seen.
pub fn parse_radius(token: Option<&str>, policy: InputPolicy) -> Result<Radius> {
    match (token, policy) {
        (Some(token), InputPolicy::Strict) => token
            .parse::<f32>()
            .map(Radius::new)
            .map_err(|e| CalcError::InvalidRadiusError {
                input: token.to_string(),
                reason: e.to_string(),
            }),
        (Some(token), InputPolicy::Lenient) => match leading_float(token) {
            Some(prefix) => {
                if prefix.len() < token.len() {
                    tracing::warn!(
                        "Ignoring trailing characters after radius: {:?}",
                        &token[prefix.len()..]
                    );
                }
                prefix
                    .parse::<f32>()
                    .map(Radius::new)
                    .map_err(|e| CalcError::InvalidRadiusError {
                        input: token.to_string(),
                        reason: e.to_string(),
                    })
            }
            None => {
                tracing::warn!("No number found in {:?}, using radius 0", token);
                Ok(Radius::new(0.0))
            }
        },
        (None, InputPolicy::Strict) => Err(CalcError::MissingInputError),
        (None, InputPolicy::Lenient) => {
            tracing::warn!("No radius entered, using radius 0");
            Ok(Radius::new(0.0))
        }
    }
}

/// Longest prefix of `token` that reads as a float literal, the way
/// `scanf("%f")` consumes input.
///
/// Accepts an optional sign, then `inf`, `infinity` or `nan` in any case, or
/// digits with an optional fraction and an optional exponent. An exponent
/// marker without digits is left out of the prefix.
pub fn leading_float(token: &str) -> Option<&str> {
    let bytes = token.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }

    for word in ["infinity", "inf", "nan"] {
        let matched = token
            .get(i..i + word.len())
            .is_some_and(|s| s.eq_ignore_ascii_case(word));
        if matched {
            return Some(&token[..i + word.len()]);
        }
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return None;
    }

    let mut end = i;
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    Some(&token[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_float_prefixes() {
        assert_eq!(leading_float("3abc"), Some("3"));
        assert_eq!(leading_float("-2.5kg"), Some("-2.5"));
        assert_eq!(leading_float(".5"), Some(".5"));
        assert_eq!(leading_float("5."), Some("5."));
        assert_eq!(leading_float("1e3x"), Some("1e3"));
        assert_eq!(leading_float("1e+x"), Some("1"));
        assert_eq!(leading_float("2E-2"), Some("2E-2"));
        assert_eq!(leading_float("Infinity!"), Some("Infinity"));
        assert_eq!(leading_float("-INFx"), Some("-INF"));
        assert_eq!(leading_float("nan"), Some("nan"));
    }

    #[test]
    fn test_leading_float_rejects_non_numbers() {
        assert_eq!(leading_float("abc"), None);
        assert_eq!(leading_float("."), None);
        assert_eq!(leading_float("-"), None);
        assert_eq!(leading_float("é5"), None);
        assert_eq!(leading_float(""), None);
    }

    #[test]
    fn test_strict_parsing() {
        assert_eq!(
            parse_radius(Some("2"), InputPolicy::Strict).unwrap(),
            Radius::new(2.0)
        );
        assert_eq!(
            parse_radius(Some("+1.5e1"), InputPolicy::Strict).unwrap(),
            Radius::new(15.0)
        );
        assert!(matches!(
            parse_radius(Some("3abc"), InputPolicy::Strict),
            Err(CalcError::InvalidRadiusError { .. })
        ));
        assert!(matches!(
            parse_radius(None, InputPolicy::Strict),
            Err(CalcError::MissingInputError)
        ));
    }

    #[test]
    fn test_strict_overflow_becomes_infinity() {
        let radius = parse_radius(Some("1e39"), InputPolicy::Strict).unwrap();
        assert!(radius.value().is_infinite());
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!(
            parse_radius(Some("3abc"), InputPolicy::Lenient).unwrap(),
            Radius::new(3.0)
        );
        assert_eq!(
            parse_radius(Some("abc"), InputPolicy::Lenient).unwrap(),
            Radius::new(0.0)
        );
        assert_eq!(
            parse_radius(None, InputPolicy::Lenient).unwrap(),
            Radius::new(0.0)
        );
    }
}
