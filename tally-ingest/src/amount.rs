//! Currency magnitude cleanup: "Rs 1,234.50" -> 1234.5

/// Strip everything except digits, `.` and `-`, then read the leading number.
///
/// Returns 0.0 when nothing numeric is left. Trailing garbage after the number
/// is ignored, so "1,200.00-" reads as 1200.
pub fn clean_amount(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    leading_number(&cleaned)
        .and_then(|n| n.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Absolute cleaned amount, or `None` when it is zero.
pub fn magnitude(text: &str) -> Option<f64> {
    let v = clean_amount(text).abs();
    (v > 0.0).then_some(v)
}

/// Longest prefix shaped like `-?digits(.digits)?`, requiring at least one digit.
fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        if frac > end + 1 {
            digits += frac - end - 1;
            end = frac;
        }
    }
    (digits > 0).then(|| &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_amount_strips_symbols() {
        assert_eq!(clean_amount("1,234.50"), 1234.5);
        assert_eq!(clean_amount("$ 99.99"), 99.99);
        assert_eq!(clean_amount("INR 450"), 450.0);
        assert_eq!(clean_amount("-15.00"), -15.0);
    }

    #[test]
    fn test_clean_amount_defaults_to_zero() {
        assert_eq!(clean_amount(""), 0.0);
        assert_eq!(clean_amount("n/a"), 0.0);
        assert_eq!(clean_amount("--"), 0.0);
        assert_eq!(clean_amount("."), 0.0);
    }

    #[test]
    fn test_clean_amount_reads_leading_number() {
        assert_eq!(clean_amount("1,200.00-"), 1200.0);
        assert_eq!(clean_amount("1.2.3"), 1.2);
        assert_eq!(clean_amount(".5"), 0.5);
        assert_eq!(clean_amount("12."), 12.0);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude("-250"), Some(250.0));
        assert_eq!(magnitude("0.00"), None);
        assert_eq!(magnitude("abc"), None);
    }
}
