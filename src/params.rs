//! Turning raw path and query text into typed lookup values.

use crate::error::ApiError;

pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid id `{raw}`, expect an integer")))
}

/// Accepts `true`/`false`, `t`/`f`, `yes`/`no` and `1`/`0`, ignoring case.
pub fn parse_flag(name: &str, raw: &str) -> Result<bool, ApiError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "1" => Ok(true),
        "false" | "f" | "no" | "0" => Ok(false),
        _ => Err(ApiError::BadRequest(format!(
            "invalid value `{raw}` for `{name}`, expect a boolean"
        ))),
    }
}

pub fn require_flag(name: &str, raw: Option<&str>) -> Result<bool, ApiError> {
    let Some(raw) = raw else {
        return Err(ApiError::BadRequest(format!(
            "missing query parameter `{name}`"
        )));
    };
    parse_flag(name, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("5").unwrap(), 5);
        assert_eq!(parse_id(" 999 ").unwrap(), 999);
        assert!(matches!(parse_id("abc"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_id("1.5"), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_parse_flag() {
        for raw in ["1", "true", "TRUE", "t", "Yes"] {
            assert!(parse_flag("isVeg", raw).unwrap(), "{raw}");
        }
        for raw in ["0", "false", "False", "f", "no"] {
            assert!(!parse_flag("isVeg", raw).unwrap(), "{raw}");
        }

        let err = parse_flag("isLuxury", "maybe").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value `maybe` for `isLuxury`, expect a boolean"
        );
    }

    #[test]
    fn test_require_flag() {
        assert!(require_flag("isVeg", Some("1")).unwrap());
        let err = require_flag("hasOutdoorSeating", None).unwrap_err();
        assert_eq!(err.to_string(), "missing query parameter `hasOutdoorSeating`");
    }
}
