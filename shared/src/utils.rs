// Display helpers for the result panel, shared by the engine and any presentation layer.
// Values are rendered with comma thousands separators and a '.' decimal point,
// e.g. "¥24,942,500.00", "64.46 %", "498,850".

pub mod display_format {
    // Formats `value` with `decimals` fraction digits and groups the integer part by thousands.
    pub fn format_grouped(value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return "-".to_string();
        }
        let formatted = format!("{:.decimals$}", value.abs(), decimals = decimals);
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (idx, ch) in int_part.chars().enumerate() {
            if idx > 0 && (int_part.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        // "-0.00" reads badly, only keep the sign when something non-zero survived rounding
        let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
        let mut out = String::new();
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&grouped);
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }

    pub fn format_currency(value: f64) -> String {
        let grouped = format_grouped(value, 2);
        match grouped.strip_prefix('-') {
            Some(rest) => format!("-¥{}", rest),
            None => format!("¥{}", grouped),
        }
    }

    pub fn format_percent(value: f64) -> String {
        format!("{} %", format_grouped(value, 2))
    }

    pub fn format_units(value: f64) -> String {
        format_grouped(value.round(), 0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_grouped_large_number() {
            assert_eq!(format_grouped(24_942_500.0, 2), "24,942,500.00");
        }

        #[test]
        fn test_format_grouped_small_number() {
            assert_eq!(format_grouped(644.614, 2), "644.61");
            assert_eq!(format_grouped(999.0, 0), "999");
        }

        #[test]
        fn test_format_grouped_negative() {
            assert_eq!(format_grouped(-1234.5, 1), "-1,234.5");
            assert_eq!(format_grouped(-0.001, 2), "0.00");
        }

        #[test]
        fn test_format_grouped_not_finite() {
            assert_eq!(format_grouped(f64::NAN, 2), "-");
        }

        #[test]
        fn test_result_panel_labels() {
            assert_eq!(format_currency(24_942_500.0), "¥24,942,500.00");
            assert_eq!(format_currency(-12.5), "-¥12.50");
            assert_eq!(format_percent(64.4614), "64.46 %");
            assert_eq!(format_units(498_850.4), "498,850");
        }
    }
}
