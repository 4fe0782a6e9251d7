// Stroke Navigator Pattern Parser
// Turns raw user input into validated stroke codes

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{PatternError, StrokeCode};

/// Separators between codes: whitespace and/or commas
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,]+").unwrap());

/// Parse space (or comma) separated stroke codes
///
/// Input is trimmed and lowercased. Every invalid token is reported at once.
///
/// # Examples
/// ```
/// # use stroke_nav::pattern::parse_pattern;
/// # use stroke_nav::types::StrokeCode;
/// let codes = parse_pattern("h s p").unwrap();
/// assert_eq!(codes, vec![StrokeCode::Heng, StrokeCode::Shu, StrokeCode::Pie]);
///
/// let codes = parse_pattern(" H,Z ").unwrap();
/// assert_eq!(codes, vec![StrokeCode::Heng, StrokeCode::Zhe]);
///
/// assert!(parse_pattern("h x").is_err());
/// ```
pub fn parse_pattern(input: &str) -> Result<Vec<StrokeCode>, PatternError> {
    let input = input.trim().to_lowercase();

    let tokens: Vec<&str> = SEPARATOR
        .split(&input)
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let mut codes = Vec::with_capacity(tokens.len());
    let mut invalid = Vec::new();
    for token in tokens {
        match token.parse::<StrokeCode>() {
            Ok(code) => codes.push(code),
            Err(_) => invalid.push(token.to_string()),
        }
    }

    if !invalid.is_empty() {
        return Err(PatternError::InvalidCodes { codes: invalid });
    }

    Ok(codes)
}

/// Display form of a pattern, e.g. `h → s → p`
pub fn format_pattern(codes: &[StrokeCode]) -> String {
    codes
        .iter()
        .map(|code| code.code())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Stroke names of a pattern, e.g. `横竖撇`
pub fn pattern_names(codes: &[StrokeCode]) -> String {
    codes.iter().map(|code| code.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ Parsing ============

    #[test]
    fn test_space_separated() {
        let codes = parse_pattern("h s p n z").unwrap();
        assert_eq!(codes, StrokeCode::ALL.to_vec());
    }

    #[test]
    fn test_single_code() {
        assert_eq!(parse_pattern("z").unwrap(), vec![StrokeCode::Zhe]);
    }

    #[test]
    fn test_extra_whitespace_and_commas() {
        let codes = parse_pattern("  h\t s ,p,,n  ").unwrap();
        assert_eq!(
            codes,
            vec![StrokeCode::Heng, StrokeCode::Shu, StrokeCode::Pie, StrokeCode::Na]
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            parse_pattern("H S").unwrap(),
            vec![StrokeCode::Heng, StrokeCode::Shu]
        );
    }

    #[test]
    fn test_repeated_codes() {
        assert_eq!(parse_pattern("h h h").unwrap(), vec![StrokeCode::Heng; 3]);
    }

    // ============ Errors ============

    #[test]
    fn test_empty_pattern_error() {
        assert_eq!(parse_pattern(""), Err(PatternError::EmptyPattern));
        assert_eq!(parse_pattern("   "), Err(PatternError::EmptyPattern));
        assert_eq!(parse_pattern(" , "), Err(PatternError::EmptyPattern));
    }

    #[test]
    fn test_reports_all_invalid_codes() {
        assert_eq!(
            parse_pattern("h x s 1"),
            Err(PatternError::InvalidCodes {
                codes: vec!["x".to_string(), "1".to_string()]
            })
        );
    }

    #[test]
    fn test_glued_codes_are_one_token() {
        assert_eq!(
            parse_pattern("hs"),
            Err(PatternError::InvalidCodes {
                codes: vec!["hs".to_string()]
            })
        );
    }

    // ============ Display ============

    #[test]
    fn test_format_pattern() {
        let codes = parse_pattern("h s p").unwrap();
        assert_eq!(format_pattern(&codes), "h → s → p");
        assert_eq!(pattern_names(&codes), "横竖撇");
        assert_eq!(format_pattern(&[]), "");
    }
}
