//! Tokenized ordering key for `v`-prefixed version strings
//!
//! A version such as `v1.2.0-rc1` is split on `.` and `-` into tokens
//! (`1`, `2`, `0`, `rc1`). Tokens made only of ASCII digits are numeric,
//! everything else (including the empty token) is text.
//!
//! Ordering is token-wise from the left, and is total:
//! - numeric vs numeric compares integer values, with no width limit
//! - text vs text compares bytes lexicographically
//! - a numeric token is always greater than a text token
//! - when one key is a prefix of the other, the shorter key is less
//!
//! So `v0.3.10 > v0.3.9`, `v1.0.1 > v1.0.rc1`, and `v1.0.0-rc1 > v1.0.0`.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Digits with leading zeros removed (`"0"` for an all-zero token)
    Numeric(String),
    Text(String),
}

impl Token {
    pub fn parse(token: &str) -> Self {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            let trimmed = token.trim_start_matches('0');
            let digits = if trimmed.is_empty() { "0" } else { trimmed };
            Token::Numeric(digits.to_string())
        } else {
            Token::Text(token.to_string())
        }
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Without leading zeros, a longer digit string is a larger number
            (Token::Numeric(a), Token::Numeric(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            (Token::Numeric(_), Token::Text(_)) => Ordering::Greater,
            (Token::Text(_), Token::Numeric(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordering key of a version string
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionKey(pub Vec<Token>);

impl VersionKey {
    /// Builds the key for a version string, ignoring a single leading `v`
    pub fn parse(version: &str) -> Self {
        let core = version.strip_prefix('v').unwrap_or(version);
        Self(core.split(['.', '-']).map(Token::parse).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("10", Token::Numeric("10".to_string()))]
    #[case("007", Token::Numeric("7".to_string()))]
    #[case("000", Token::Numeric("0".to_string()))]
    #[case("rc1", Token::Text("rc1".to_string()))]
    #[case("", Token::Text(String::new()))]
    #[case("+1", Token::Text("+1".to_string()))]
    fn token_parse_classifies_token(#[case] input: &str, #[case] expected: Token) {
        assert_eq!(Token::parse(input), expected);
    }

    #[test]
    fn version_key_parse_splits_on_dots_and_hyphens() {
        assert_eq!(
            VersionKey::parse("v1.2.0-rc1"),
            VersionKey(vec![
                Token::Numeric("1".to_string()),
                Token::Numeric("2".to_string()),
                Token::Numeric("0".to_string()),
                Token::Text("rc1".to_string()),
            ])
        );
    }

    #[rstest]
    #[case("v0.3.10", "v0.3.9", Ordering::Greater)] // numeric, not lexical
    #[case("v0.3.2", "v0.3.10", Ordering::Less)]
    #[case("v1.0.0", "v0.99.99", Ordering::Greater)]
    #[case("v1.0.0-rc1", "v1.0.0", Ordering::Greater)] // longer key wins over its prefix
    #[case("v1.0.0-rc2", "v1.0.0-rc1", Ordering::Greater)]
    #[case("v1.0.0-rc10", "v1.0.0-rc9", Ordering::Less)] // text tokens are lexical
    #[case("v1.0.1", "v1.0.rc1", Ordering::Greater)] // numeric beats text
    #[case("v1.0.rc1", "v1.0.1", Ordering::Less)]
    #[case("v1.07", "v1.7", Ordering::Equal)]
    #[case("v1.0-1", "v1.0.1", Ordering::Equal)]
    #[case("v99999999999999999999999.0", "v9999999999999999999999.0", Ordering::Greater)]
    fn version_key_ordering(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(VersionKey::parse(a).cmp(&VersionKey::parse(b)), expected);
    }

    #[test]
    fn version_key_without_v_prefix_uses_whole_string() {
        assert_eq!(VersionKey::parse("1.2"), VersionKey::parse("v1.2"));
    }

    #[test]
    fn version_key_strips_only_one_v() {
        assert_eq!(
            VersionKey::parse("vv1"),
            VersionKey(vec![Token::Text("v1".to_string())])
        );
    }
}
