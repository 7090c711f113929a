use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub fn format_with_commas(value: i64) -> String {
    let is_negative = value < 0;
    let s = value.unsigned_abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };
    format!(
        "{}{} {}.{:02}",
        sign,
        symbol,
        format_with_commas(cents / 100),
        cents % 100
    )
}

/// Display form of a transaction date. Anything unparseable shows as
/// "Invalid Date" in the table rather than failing the view.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
                .ok()
                .map(|dt| dt.date())
        });

    match parsed {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Integral ids print without a fractional part.
pub fn format_id(id: f64) -> String {
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_every_three_digits() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1000), "1,000");
        assert_eq!(format_with_commas(-1234567), "-1,234,567");
    }

    #[test]
    fn currency_keeps_cents() {
        assert_eq!(format_currency(1234.5, "₹"), "₹ 1,234.50");
        assert_eq!(format_currency(50.0, "$"), "$ 50.00");
        assert_eq!(format_currency(-0.25, "₹"), "-₹ 0.25");
        assert_eq!(format_currency(-0.001, "₹"), "₹ 0.00");
        assert_eq!(format_currency(1000000.999, "€"), "€ 1,000,001.00");
    }

    #[test]
    fn dates_read_like_a_locale_date() {
        assert_eq!(format_date("2024-01-01"), "Jan 1, 2024");
        assert_eq!(format_date("2025-11-23T10:00:00Z"), "Nov 23, 2025");
        assert_eq!(format_date("2025-03-09 08:15:00"), "Mar 9, 2025");
    }

    #[test]
    fn unparseable_dates_render_as_invalid() {
        assert_eq!(format_date("yesterday"), "Invalid Date");
        assert_eq!(format_date("2024-13-40"), "Invalid Date");
    }

    #[test]
    fn ids_print_naturally() {
        assert_eq!(format_id(7.0), "7");
        assert_eq!(format_id(7.5), "7.5");
    }
}
