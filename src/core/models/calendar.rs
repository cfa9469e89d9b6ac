use chrono::NaiveDate;

/// Fixed calendar date for seed records. An impossible date is logged and
/// replaced by chrono's default date rather than aborting the app.
pub(crate) fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => {
            log::error!("Invalid seed date {}-{:02}-{:02}", year, month, day);
            NaiveDate::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_dates_pass_through() {
        assert_eq!(
            seed_date(2024, 1, 15),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn impossible_date_falls_back_to_default() {
        assert_eq!(seed_date(2024, 2, 30), NaiveDate::default());
    }
}
