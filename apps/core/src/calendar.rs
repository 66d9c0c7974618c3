use chrono::Month;

/// Full English month name for a zero-indexed month offset.
pub fn month_name(month_index: u32) -> &'static str {
    u8::try_from(month_index + 1)
        .ok()
        .and_then(|number| Month::try_from(number).ok())
        .map_or("Unknown", |month| month.name())
}

#[cfg(test)]
mod tests {
    use super::month_name;

    #[test]
    fn names_every_month() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(5), "June");
        assert_eq!(month_name(11), "December");
        assert_eq!(month_name(12), "Unknown");
    }
}
