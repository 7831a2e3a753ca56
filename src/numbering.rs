//! Invoice number patterns, e.g. "INV-{YYYY}-{SEQ:4}"

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unclosed '{{' at position {0}")]
    UnclosedBrace(usize),
    #[error("unknown pattern token '{{{0}}}'")]
    UnknownToken(String),
    #[error("invalid sequence width '{0}'")]
    InvalidWidth(String),
    #[error("pattern has no {{SEQ}} token")]
    MissingSequence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Year4,
    Year2,
    Month,
    Day,
    /// Sequence number, zero-padded to `width` (0 = no padding)
    Sequence { width: usize },
}

/// A parsed invoice number pattern.
///
/// Tokens inside braces are substituted on formatting: `{YYYY}`, `{YY}`,
/// `{MM}` and `{DD}` from the invoice date, `{SEQ}` or `{SEQ:n}` for the
/// sequence number. Everything else is literal text. A pattern without a
/// sequence token cannot produce distinct numbers and is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    parts: Vec<Part>,
}

impl NumberPattern {
    pub fn parse(pattern: &str) -> Result<NumberPattern, PatternError> {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.char_indices();

        while let Some((pos, c)) = chars.next() {
            if c != '{' {
                literal.push(c);
                continue;
            }
            let mut token = String::new();
            let mut closed = false;
            for (_, t) in chars.by_ref() {
                if t == '}' {
                    closed = true;
                    break;
                }
                token.push(t);
            }
            if !closed {
                return Err(PatternError::UnclosedBrace(pos));
            }
            if !literal.is_empty() {
                parts.push(Part::Literal(std::mem::take(&mut literal)));
            }
            parts.push(parse_token(&token)?);
        }
        if !literal.is_empty() {
            parts.push(Part::Literal(literal));
        }

        if !parts.iter().any(|p| matches!(p, Part::Sequence { .. })) {
            return Err(PatternError::MissingSequence);
        }
        Ok(NumberPattern { parts })
    }

    /// Render the pattern for a sequence number and invoice date
    pub fn format(&self, seq: u32, date: NaiveDate) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Literal(s) => out.push_str(s),
                Part::Year4 => out.push_str(&format!("{:04}", date.year())),
                Part::Year2 => out.push_str(&format!("{:02}", date.year() % 100)),
                Part::Month => out.push_str(&format!("{:02}", date.month())),
                Part::Day => out.push_str(&format!("{:02}", date.day())),
                Part::Sequence { width } => {
                    out.push_str(&format!("{:0width$}", seq, width = *width))
                }
            }
        }
        out
    }

    /// The number following `last_seq`
    pub fn next(&self, last_seq: u32, date: NaiveDate) -> String {
        self.format(last_seq + 1, date)
    }
}

fn parse_token(token: &str) -> Result<Part, PatternError> {
    match token {
        "YYYY" => Ok(Part::Year4),
        "YY" => Ok(Part::Year2),
        "MM" => Ok(Part::Month),
        "DD" => Ok(Part::Day),
        "SEQ" => Ok(Part::Sequence { width: 0 }),
        other => {
            if let Some(width) = other.strip_prefix("SEQ:") {
                let width = width
                    .parse::<usize>()
                    .map_err(|_| PatternError::InvalidWidth(width.to_string()))?;
                Ok(Part::Sequence { width })
            } else {
                Err(PatternError::UnknownToken(other.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn plain_sequence() {
        let pattern = NumberPattern::parse("INV-{SEQ}").unwrap();
        assert_eq!(pattern.format(7, date("2025-06-01")), "INV-7");
    }

    #[test]
    fn padded_sequence() {
        let pattern = NumberPattern::parse("INV-{SEQ:4}").unwrap();
        assert_eq!(pattern.format(7, date("2025-06-01")), "INV-0007");
        assert_eq!(pattern.format(12345, date("2025-06-01")), "INV-12345");
    }

    #[test]
    fn date_tokens() {
        let pattern = NumberPattern::parse("{YYYY}{MM}{DD}-{SEQ:3}").unwrap();
        assert_eq!(pattern.format(42, date("2025-06-01")), "20250601-042");
    }

    #[test]
    fn two_digit_year() {
        let pattern = NumberPattern::parse("INV/{YY}/{SEQ}").unwrap();
        assert_eq!(pattern.format(9, date("2025-12-31")), "INV/25/9");
    }

    #[test]
    fn next_increments_sequence() {
        let pattern = NumberPattern::parse("INV-{YYYY}-{SEQ:4}").unwrap();
        assert_eq!(pattern.next(41, date("2025-06-01")), "INV-2025-0042");
        assert_eq!(pattern.next(0, date("2025-06-01")), "INV-2025-0001");
    }

    #[test]
    fn unclosed_brace() {
        assert_eq!(
            NumberPattern::parse("INV-{SEQ"),
            Err(PatternError::UnclosedBrace(4))
        );
    }

    #[test]
    fn unknown_token() {
        assert_eq!(
            NumberPattern::parse("INV-{YEAR}-{SEQ}"),
            Err(PatternError::UnknownToken("YEAR".to_string()))
        );
    }

    #[test]
    fn invalid_width() {
        assert_eq!(
            NumberPattern::parse("INV-{SEQ:x}"),
            Err(PatternError::InvalidWidth("x".to_string()))
        );
    }

    #[test]
    fn missing_sequence() {
        assert_eq!(
            NumberPattern::parse("INV-{YYYY}"),
            Err(PatternError::MissingSequence)
        );
    }

    #[test]
    fn literal_only_tail_is_kept() {
        let pattern = NumberPattern::parse("{SEQ}-draft").unwrap();
        assert_eq!(pattern.format(3, date("2025-06-01")), "3-draft");
    }
}
