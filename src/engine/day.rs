//! Day numbers and the directory names derived from them.

use std::fmt;

use serde::Serialize;

/// Name of a scaffolded day directory: `"day"` followed by the number,
/// zero-padded to at least two digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DayName(String);

impl DayName {
    /// `3` -> `day03`, `12` -> `day12`, `123` -> `day123`.
    pub fn from_number(day: u64) -> Self {
        Self(format!("day{day:02}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::DayName;

    #[test]
    fn pads_single_digits() {
        assert_eq!(DayName::from_number(0).as_str(), "day00");
        assert_eq!(DayName::from_number(7).as_str(), "day07");
    }

    #[test]
    fn never_truncates() {
        assert_eq!(DayName::from_number(25).as_str(), "day25");
        assert_eq!(DayName::from_number(123).as_str(), "day123");
    }
}
