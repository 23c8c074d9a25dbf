// Display helpers for prices, caps and percentage changes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    #[inline]
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Up => "text-green-500",
            Trend::Down => "text-red-500",
        }
    }
}

fn group_thousands(int_part: &str) -> String {
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$1,234.50`; sub-dollar values keep up to six decimals (`$0.016`).
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let abs = value.abs();
    let mut digits = if abs >= 1.0 {
        format!("{abs:.2}")
    } else {
        format!("{abs:.6}")
    };
    if abs < 1.0 {
        // keep at least two decimals
        while digits.ends_with('0') && digits.len() > "0.00".len() {
            digits.pop();
        }
    }
    let (int_part, frac) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let sign = if value < 0.0 && abs > 0.0 { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}${}", group_thousands(int_part))
    } else {
        format!("{sign}${}.{frac}", group_thousands(int_part))
    }
}

/// `1.3%`, `-0.8%`
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(97_500.0), "$97,500.00");
        assert_eq!(format_currency(1_920_000_000_000.0), "$1,920,000,000,000.00");
        assert_eq!(format_currency(185.0), "$185.00");
    }

    #[test]
    fn currency_keeps_small_prices_readable() {
        assert_eq!(format_currency(0.32), "$0.32");
        assert_eq!(format_currency(0.016), "$0.016");
        assert_eq!(format_currency(-0.012), "-$0.012");
        assert_eq!(format_currency(f64::NAN), "-");
    }

    #[test]
    fn percentage_has_one_decimal() {
        assert_eq!(format_percentage(1.3), "1.3%");
        assert_eq!(format_percentage(-0.8), "-0.8%");
        assert_eq!(format_percentage(8.2), "8.2%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn trend_treats_zero_as_down() {
        assert_eq!(Trend::of(0.1), Trend::Up);
        assert_eq!(Trend::of(0.0), Trend::Down);
        assert_eq!(Trend::of(-2.1).css_class(), "text-red-500");
    }
}
