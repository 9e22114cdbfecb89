use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u32);

impl Month {
    /// Returns `None` outside 1–12.
    pub fn new(number: u32) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    /// Parse a query-string value such as `"3"` or `" 11 "`.
    ///
    /// Reads the leading integer and ignores whatever follows it, so `"3abc"`
    /// and `"3.5"` are both March. No leading digits, or a number outside
    /// 1–12, yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let rest = value.trim_start();
        let unsigned = rest.strip_prefix('+').unwrap_or(rest);
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        unsigned[..end].parse::<u32>().ok().and_then(Self::new)
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Month {
    type Error = String;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| format!("month out of range: {number}"))
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_calendar_months() {
        assert_eq!(Month::parse("1").map(Month::number), Some(1));
        assert_eq!(Month::parse(" 12 ").map(Month::number), Some(12));
    }

    #[test]
    fn parse_rejects_out_of_range_and_garbage() {
        assert!(Month::parse("0").is_none());
        assert!(Month::parse("13").is_none());
        assert!(Month::parse("").is_none());
        assert!(Month::parse("march").is_none());
        assert!(Month::parse("-3").is_none());
        assert!(Month::parse("abc3").is_none());
        assert_eq!(Month::parse("3 1").map(Month::number), Some(3));
    }

    #[test]
    fn parse_reads_leading_integer() {
        assert_eq!(Month::parse("3abc").map(Month::number), Some(3));
        assert_eq!(Month::parse("3.5").map(Month::number), Some(3));
        assert_eq!(Month::parse("+7").map(Month::number), Some(7));
        assert_eq!(Month::parse("011").map(Month::number), Some(11));
        assert!(Month::parse("13th").is_none());
    }
}
