//! Small formatting helpers shared by response templates and reports

/// Format a numeric metric value the way the dashboard renders it: whole
/// numbers without a decimal point, everything else to one decimal place.
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Format a percentage value, with trailing `%`.
pub fn fmt_pct(value: f64) -> String {
    format!("{}%", fmt_num(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_drop_the_decimal() {
        assert_eq!(fmt_num(87.0), "87");
        assert_eq!(fmt_pct(94.0), "94%");
    }

    #[test]
    fn fractions_keep_one_decimal() {
        assert_eq!(fmt_num(98.5), "98.5");
        assert_eq!(fmt_pct(94.3), "94.3%");
    }

    #[test]
    fn float_drift_is_rounded_away() {
        assert_eq!(fmt_num(94.89999999999999), "94.9");
        assert_eq!(fmt_num(15.000000000000002), "15");
    }
}
