// Small formatting helpers shared by the renderer and console output.
use chrono::Local;
use num_format::{Locale, ToFormattedString};

/// Render one yield figure for a table cell.
///
/// Integral values keep a single decimal place (`3.0` rather than `3`), which
/// matches how the figures are published; everything else uses the shortest
/// `f64` display form. No thousands separators, no rounding.
pub fn format_yield(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        v.to_string()
    }
}

/// Generation date for the footer, formatted DD-MM-YYYY.
pub fn report_date() -> String {
    Local::now().format("%d-%m-%Y").to_string()
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values. This is used
    // for counts in console messages (e.g., `9,855 rows loaded`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_yield_keeps_one_decimal_for_integral_values() {
        assert_eq!(format_yield(3.0), "3.0");
        assert_eq!(format_yield(0.0), "0.0");
        assert_eq!(format_yield(-2.0), "-2.0");
    }

    #[test]
    fn format_yield_passes_fractional_values_through() {
        assert_eq!(format_yield(3.2), "3.2");
        assert_eq!(format_yield(0.45), "0.45");
        assert_eq!(format_yield(1234.5), "1234.5");
    }

    #[test]
    fn format_int_inserts_thousands_separators() {
        assert_eq!(format_int(9855i64), "9,855");
        assert_eq!(format_int(12usize), "12");
    }

    #[test]
    fn report_date_is_day_month_year() {
        let d = report_date();
        let parts: Vec<&str> = d.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 4);
    }
}
