use std::str::FromStr;

use crate::loader::error::ConfigLoadError;

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read `name` through `lookup`; blank values count as unset.
pub fn parse_var<T, F>(name: &str, lookup: &F) -> Result<Option<T>, ConfigLoadError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name).filter(|raw| !raw.trim().is_empty()) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigLoadError::InvalidEnv {
            name: name.to_string(),
            value: raw,
        })
}

pub fn parse_bool_var<F>(
    name: &str,
    lookup: &F,
) -> Result<Option<bool>, ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name).filter(|raw| !raw.trim().is_empty()) else {
        return Ok(None);
    };
    parse_bool(&raw)
        .map(Some)
        .ok_or(ConfigLoadError::InvalidEnv {
            name: name.to_string(),
            value: raw,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_forms() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn typed_vars_reject_garbage_and_skip_blank() {
        let lookup = |name: &str| match name {
            "GOOD" => Some("1.5".to_string()),
            "BAD" => Some("fast".to_string()),
            "BLANK" => Some("  ".to_string()),
            _ => None,
        };
        assert_eq!(parse_var::<f32, _>("GOOD", &lookup).unwrap(), Some(1.5));
        assert_eq!(parse_var::<f32, _>("BLANK", &lookup).unwrap(), None);
        assert_eq!(parse_var::<f32, _>("MISSING", &lookup).unwrap(), None);
        assert!(matches!(
            parse_var::<f32, _>("BAD", &lookup),
            Err(ConfigLoadError::InvalidEnv { name, .. }) if name == "BAD"
        ));
    }
}
