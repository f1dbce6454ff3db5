use super::delimiter::DelimiterSpec;
use super::error::SumError;

/// Split a payload on any delimiter of the set, dropping empty tokens.
///
/// Delimiters are compared as plain text. Where two delimiters match at the
/// same position the longer one wins, so `**` is not read as two `*`.
pub fn tokenize<'a>(payload: &'a str, spec: &DelimiterSpec) -> Vec<&'a str> {
    let mut delimiters: Vec<&str> = spec
        .delimiters
        .iter()
        .map(String::as_str)
        .filter(|d| !d.is_empty())
        .collect();
    delimiters.sort_by_key(|d| std::cmp::Reverse(d.len()));

    let mut tokens = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < payload.len() {
        let rest = &payload[pos..];
        match delimiters.iter().find(|d| rest.starts_with(**d)) {
            Some(delimiter) => {
                tokens.push(&payload[start..pos]);
                pos += delimiter.len();
                start = pos;
            }
            None => {
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    tokens.push(&payload[start..]);

    tokens.retain(|token| !token.is_empty());
    tokens
}

/// Parse every token as a signed base-10 integer, failing on the first bad one.
pub fn parse_tokens(tokens: &[&str]) -> Result<Vec<i64>, SumError> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| SumError::InvalidNumberFormat(token.to_string()))
        })
        .collect()
}
