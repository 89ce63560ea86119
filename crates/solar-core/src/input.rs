//! Monthly spend input coercion
//!
//! The spend reaches the estimator from two controls: a range slider and a
//! free numeric field. Both deliver raw strings; anything that is not an
//! integer becomes 0 and the estimator's floors take it from there.

/// Spend shown before the visitor touches anything (MXN/month)
pub const DEFAULT_MONTHLY_SPEND: u32 = 1200;

/// `min` attribute of the numeric field
pub const FIELD_MIN_SPEND: u32 = 100;

/// Bounds and granularity of the slider
pub const SLIDER_RANGE: SpendRange = SpendRange {
    min: 300,
    max: 8000,
    step: 50,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpendRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl SpendRange {
    /// Clamp into the range and snap to the nearest step above `min`,
    /// the way a browser range input settles its value.
    pub fn snap(&self, value: u32) -> u32 {
        let clamped = value.clamp(self.min, self.max);
        if self.step == 0 {
            return clamped;
        }
        let offset = clamped - self.min;
        let steps = (offset + self.step / 2) / self.step;
        (self.min + steps * self.step).min(self.max)
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Parse a spend entry the way an integer form field is read: optional
/// surrounding whitespace, an optional leading `+`, then the leading run of
/// digits. Trailing junk after the digits is ignored (`"1500.75"` is 1500).
/// Empty, negative or non-numeric entries yield 0.
pub fn parse_spend(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: &str = match unsigned.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &unsigned[..end],
        None => unsigned,
    };
    if digits.is_empty() {
        return 0;
    }
    // Longer than u32 saturates rather than wrapping to a small bill.
    digits.parse().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spend_plain() {
        assert_eq!(parse_spend("1200"), 1200);
        assert_eq!(parse_spend("  850 "), 850);
        assert_eq!(parse_spend("+400"), 400);
    }

    #[test]
    fn test_parse_spend_coerces_garbage_to_zero() {
        assert_eq!(parse_spend(""), 0);
        assert_eq!(parse_spend("abc"), 0);
        assert_eq!(parse_spend("-300"), 0);
        assert_eq!(parse_spend("   "), 0);
    }

    #[test]
    fn test_parse_spend_takes_leading_integer() {
        assert_eq!(parse_spend("1500.75"), 1500);
        assert_eq!(parse_spend("2000 MXN"), 2000);
        assert_eq!(parse_spend("99999999999"), u32::MAX);
    }

    #[test]
    fn test_slider_snap() {
        assert_eq!(SLIDER_RANGE.snap(1200), 1200);
        assert_eq!(SLIDER_RANGE.snap(0), 300);
        assert_eq!(SLIDER_RANGE.snap(100_000), 8000);
        assert_eq!(SLIDER_RANGE.snap(1224), 1200);
        assert_eq!(SLIDER_RANGE.snap(1225), 1250);
    }

    #[test]
    fn test_default_spend_sits_on_slider() {
        assert!(SLIDER_RANGE.contains(DEFAULT_MONTHLY_SPEND));
        assert_eq!(SLIDER_RANGE.snap(DEFAULT_MONTHLY_SPEND), DEFAULT_MONTHLY_SPEND);
        assert!(FIELD_MIN_SPEND < SLIDER_RANGE.min);
    }
}
