use chrono::Datelike;
use retroclock_types::{CalendarDigits, DigitPair, DigitValue};

/// Splits a date into month, day and four year digits.
///
/// Years outside `0..=9999` keep their last four digits.
pub fn decompose_date<D: Datelike>(date: &D) -> CalendarDigits {
    let year = date.year().rem_euclid(10_000) as i64;
    CalendarDigits {
        month: DigitPair::split(date.month()),
        day: DigitPair::split(date.day()),
        year: [
            DigitValue::new(year / 1000),
            DigitValue::new(year / 100),
            DigitValue::new(year / 10),
            DigitValue::new(year),
        ],
    }
}

/// `MM/DD/YYYY`, the date line under the clock face.
pub fn format_date<D: Datelike>(date: &D) -> String {
    format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_decompose_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let digits = decompose_date(&date);
        assert_eq!(digits.to_string(), "06/05/2024");
        assert_eq!(digits.short_year().to_string(), "24");
    }

    #[test]
    fn test_format_date_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_date(&date), "01/01/2024");
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(format_date(&date), "12/31/1999");
    }

    #[test]
    fn test_year_digits() {
        let date = NaiveDate::from_ymd_opt(1987, 3, 14).unwrap();
        let year: Vec<u8> = decompose_date(&date).year.iter().map(|d| d.get()).collect();
        assert_eq!(year, vec![1, 9, 8, 7]);
    }
}
