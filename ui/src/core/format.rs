//! Formatting helpers for catalog figures.

pub fn format_rating(value: f32) -> String {
    format!("{value:.1}")
}

pub fn format_discount(percent: u8) -> String {
    format!("-{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_has_one_decimal() {
        assert_eq!(format_rating(4.0), "4.0");
        assert_eq!(format_rating(4.75), "4.8");
    }

    #[test]
    fn discount_is_negative_percent() {
        assert_eq!(format_discount(50), "-50%");
    }
}
