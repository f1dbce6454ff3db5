//! Delimiter header parsing
//!
//! An input may open with a header `//<declaration>\n`. The declaration is
//! either a single literal delimiter (`//;\n`) or one or more bracketed
//! literals (`//[***][%]\n`). Anything else leaves the default set in force.

use super::config::CalculatorConfig;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref BRACKET_SEGMENT: Regex =
        Regex::new(r"\[([^\]]*)\]").expect("bracket segment pattern is valid");
}

/// The set of literal delimiters active for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSpec {
    pub delimiters: Vec<String>,
}

impl DelimiterSpec {
    pub fn defaults(config: &CalculatorConfig) -> Self {
        Self::from_literals(config.default_delimiters.iter().cloned())
    }

    /// Build the set from the text between the header marker and the first newline.
    pub fn from_declaration(declaration: &str, config: &CalculatorConfig) -> Self {
        if declaration.is_empty() {
            debug!("empty delimiter declaration, using defaults");
            return Self::defaults(config);
        }

        if declaration.starts_with('[') {
            let literals: Vec<String> = BRACKET_SEGMENT
                .captures_iter(declaration)
                .map(|caps| caps[1].to_string())
                .collect();

            if literals.is_empty() {
                debug!("no bracket segments in {:?}, using defaults", declaration);
                return Self::defaults(config);
            }
            return Self::from_literals(literals);
        }

        Self::from_literals(std::iter::once(declaration.to_string()))
    }

    fn from_literals(literals: impl IntoIterator<Item = String>) -> Self {
        let mut delimiters: Vec<String> = Vec::new();
        for literal in literals {
            if !literal.is_empty() && !delimiters.contains(&literal) {
                delimiters.push(literal);
            }
        }
        Self { delimiters }
    }
}

/// Separate an input into its delimiter set and numeric payload.
///
/// A header marker without a following newline is not an error: the whole
/// input is then the payload under the default set.
pub fn split_header<'a>(input: &'a str, config: &CalculatorConfig) -> (DelimiterSpec, &'a str) {
    let Some(rest) = input.strip_prefix(config.header_marker.as_str()) else {
        return (DelimiterSpec::defaults(config), input);
    };

    match rest.split_once('\n') {
        Some((declaration, payload)) => {
            (DelimiterSpec::from_declaration(declaration, config), payload)
        }
        None => {
            debug!("header marker without newline, treating input as payload");
            (DelimiterSpec::defaults(config), input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(input: &str) -> (Vec<String>, String) {
        let (spec, payload) = split_header(input, &CalculatorConfig::default());
        (spec.delimiters, payload.to_string())
    }

    #[test]
    fn test_no_header_uses_defaults() {
        assert_eq!(header("1,2"), (vec![",".into(), "\n".into()], "1,2".into()));
    }

    #[test]
    fn test_single_character_delimiter() {
        assert_eq!(header("//;\n1;2"), (vec![";".into()], "1;2".into()));
    }

    #[test]
    fn test_unbracketed_declaration_is_one_literal() {
        assert_eq!(header("//ab\n1ab2"), (vec!["ab".into()], "1ab2".into()));
    }

    #[test]
    fn test_empty_declaration_falls_back() {
        assert_eq!(header("//\n1,2,3"), (vec![",".into(), "\n".into()], "1,2,3".into()));
    }

    #[test]
    fn test_bracketed_multi_char_delimiter() {
        assert_eq!(header("//[***]\n1***2").0, vec!["***".to_string()]);
    }

    #[test]
    fn test_multiple_bracketed_delimiters() {
        assert_eq!(header("//[*][%]\n1*2%3").0, vec!["*".to_string(), "%".to_string()]);
    }

    #[test]
    fn test_bracket_without_segments_falls_back() {
        assert_eq!(header("//[abc\n1,2").0, vec![",".to_string(), "\n".to_string()]);
        assert_eq!(header("//[]\n1,2").0, vec![",".to_string(), "\n".to_string()]);
    }

    #[test]
    fn test_duplicate_segments_collapse() {
        assert_eq!(header("//[x][x]\n1x2").0, vec!["x".to_string()]);
    }

    #[test]
    fn test_empty_segment_ignored_in_any_position() {
        assert_eq!(header("//[][x]\n1x2").0, vec!["x".to_string()]);
        assert_eq!(header("//[x][]\n1x2").0, vec!["x".to_string()]);
        assert_eq!(header("//[*][][%]\n1*2%3").0, vec!["*".to_string(), "%".to_string()]);
    }

    #[test]
    fn test_segment_ends_at_first_closing_bracket() {
        assert_eq!(header("//[]]\n1]2").0, vec![",".to_string(), "\n".to_string()]);
        assert_eq!(header("//[a]]\n1a2").0, vec!["a".to_string()]);
    }

    #[test]
    fn test_header_without_newline_keeps_whole_input() {
        assert_eq!(header("//;1;2"), (vec![",".into(), "\n".into()], "//;1;2".into()));
    }

    #[test]
    fn test_only_first_newline_ends_header() {
        assert_eq!(header("//;\n1;2\n3"), (vec![";".into()], "1;2\n3".into()));
    }
}
