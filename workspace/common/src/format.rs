//! Display formatting for USD figures and asset quantities.
//!
//! These mirror the locale formatting the views need: grouped thousands,
//! two to eight fraction digits for prices, compact notation for market
//! caps, up to eight fraction digits for held quantities.

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn split_rounded(value: f64, max_fraction_digits: usize) -> (bool, String, String) {
    let negative = value.is_sign_negative() && value != 0.0;
    let rendered = format!("{:.*}", max_fraction_digits, value.abs());
    match rendered.split_once('.') {
        Some((int_part, frac_part)) => (negative, int_part.to_string(), frac_part.to_string()),
        None => (negative, rendered, String::new()),
    }
}

fn trim_fraction(mut frac: String, min_fraction_digits: usize) -> String {
    while frac.len() > min_fraction_digits && frac.ends_with('0') {
        frac.pop();
    }
    frac
}

/// USD price with grouped thousands and 2..=8 fraction digits, so sub-cent
/// assets keep their significant digits: `$64,000.00`, `$0.00001234`.
pub fn format_usd_price(price: f64) -> String {
    let (negative, int_part, frac_part) = split_rounded(price, 8);
    let frac = trim_fraction(frac_part, 2);
    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{frac}", group_thousands(&int_part))
}

/// Compact USD notation for market caps: `$1.18T`, `$845.2B`, `$120M`.
pub fn format_compact_usd(value: f64) -> String {
    let negative = value.is_sign_negative() && value != 0.0;
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (abs / 1e12, "T")
    } else if abs >= 1e9 {
        (abs / 1e9, "B")
    } else if abs >= 1e6 {
        (abs / 1e6, "M")
    } else if abs >= 1e3 {
        (abs / 1e3, "K")
    } else {
        (abs, "")
    };

    let (_, int_part, frac_part) = split_rounded(scaled, 2);
    let frac = trim_fraction(frac_part, 0);
    let sign = if negative { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}${}{suffix}", group_thousands(&int_part))
    } else {
        format!("{sign}${}.{frac}{suffix}", group_thousands(&int_part))
    }
}

/// Held quantity with grouped thousands and up to 8 fraction digits:
/// `484,597.02`, `7.346621`, `0`.
pub fn format_quantity(quantity: f64) -> String {
    let (negative, int_part, frac_part) = split_rounded(quantity, 8);
    let frac = trim_fraction(frac_part, 0);
    let sign = if negative { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{}", group_thousands(&int_part))
    } else {
        format!("{sign}{}.{frac}", group_thousands(&int_part))
    }
}

/// 24h change as an absolute percentage with two decimals; the view adds
/// the direction arrow and color.
pub fn format_percent_abs(change: f64) -> String {
    format!("{:.2}%", change.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_keeps_at_least_two_decimals() {
        assert_eq!(format_usd_price(64000.0), "$64,000.00");
        assert_eq!(format_usd_price(1.5), "$1.50");
    }

    #[test]
    fn price_keeps_sub_cent_precision() {
        assert_eq!(format_usd_price(0.00001234), "$0.00001234");
        assert_eq!(format_usd_price(0.123456789), "$0.12345679");
    }

    #[test]
    fn market_cap_uses_compact_suffixes() {
        assert_eq!(format_compact_usd(1.18e12), "$1.18T");
        assert_eq!(format_compact_usd(845.2e9), "$845.2B");
        assert_eq!(format_compact_usd(120e6), "$120M");
        assert_eq!(format_compact_usd(950.0), "$950");
    }

    #[test]
    fn quantity_groups_thousands_and_trims_zeroes() {
        assert_eq!(format_quantity(484597.02), "484,597.02");
        assert_eq!(format_quantity(7.346621), "7.346621");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn percent_is_absolute_with_two_decimals() {
        assert_eq!(format_percent_abs(-3.456), "3.46%");
        assert_eq!(format_percent_abs(0.1), "0.10%");
    }
}
