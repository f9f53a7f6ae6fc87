use chrono::NaiveDate;

use crate::constants::DATE_FORMATS;

/// Normalize a raw birth-date cell into `YYYY-MM-DD`.
///
/// Internal spaces are stripped and `.` separators unified to `/` before the
/// format list is tried in order; the first format yielding a valid calendar
/// date wins. Returns `None` when nothing matches.
pub fn normalize_date(raw: &str) -> Option<String> {
    let cleaned = raw.replace(' ', "").replace('.', "/");
    for fmt in DATE_FORMATS {
        // chrono's %Y accepts short years, so gate four-digit-year formats
        // on an actual four-digit run; "10/02/87" must fall through to %y.
        if fmt.contains("%Y") && !has_four_digit_run(&cleaned) {
            continue;
        }
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, fmt) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    None
}

fn has_four_digit_run(s: &str) -> bool {
    let mut run = 0;
    for c in s.chars() {
        if c.is_ascii_digit() {
            run += 1;
            if run >= 4 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_month_year_slash() {
        assert_eq!(normalize_date("05/09/1981"), Some("1981-09-05".to_string()));
    }

    #[test]
    fn test_iso_input_is_unchanged() {
        assert_eq!(normalize_date("1990-12-01"), Some("1990-12-01".to_string()));
    }

    #[test]
    fn test_period_separator_unified() {
        assert_eq!(normalize_date("10.02.1987"), Some("1987-02-10".to_string()));
    }

    #[test]
    fn test_dash_day_month_year() {
        assert_eq!(normalize_date("31-12-1999"), Some("1999-12-31".to_string()));
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(normalize_date("10/02/87"), Some("1987-02-10".to_string()));
    }

    #[test]
    fn test_internal_spaces_stripped() {
        assert_eq!(normalize_date("10 / 02 / 1987"), Some("1987-02-10".to_string()));
    }

    #[test]
    fn test_garbage_is_no_match() {
        assert_eq!(normalize_date("not-a-date"), None);
    }

    #[test]
    fn test_impossible_calendar_date() {
        assert_eq!(normalize_date("31/02/2000"), None);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let canonical = normalize_date("05/09/1981").unwrap();
        assert_eq!(normalize_date(&canonical), Some(canonical.clone()));
    }
}
