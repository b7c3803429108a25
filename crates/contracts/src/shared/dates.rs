use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

/// Смещение часового пояса школы (Asia/Bangkok, UTC+7).
/// Метки времени из таблиц переводятся в локальную дату по нему.
pub const LOCAL_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Разница между буддийской эрой (พ.ศ.) и григорианским годом
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

const THAI_MONTHS_SHORT: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.", "ธ.ค.",
];

/// Разбор календарной даты.
///
/// Принимает `YYYY-MM-DD` и RFC 3339 метки времени (последние переводятся
/// в местную дату). Пустая строка и мусор дают `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        let local = FixedOffset::east_opt(LOCAL_UTC_OFFSET_SECS)?;
        return Some(dt.with_timezone(&local).date_naive());
    }
    // "2024-01-15T08:30:00" без зоны: берём дату как есть
    value
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Последний день месяца
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// `"YYYY-MM"` -> (первый день, последний день) месяца
pub fn month_range(year_month: &str) -> Option<(NaiveDate, NaiveDate)> {
    let (year, month) = year_month.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = last_day_of_month(year, month)?;
    Some((first, last))
}

pub fn buddhist_year(date: NaiveDate) -> i32 {
    date.year() + BUDDHIST_ERA_OFFSET
}

/// Дата в тайском формате: `15 ม.ค. 2567`
pub fn format_thai_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!(
            "{} {} {}",
            d.day(),
            THAI_MONTHS_SHORT[d.month0() as usize],
            buddhist_year(d)
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_and_timestamp() {
        assert_eq!(parse_date("2024-01-15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date(" 2024-01-15 "), Some(ymd(2024, 1, 15)));
        // полночь по Бангкоку, сохранённая листом в UTC
        assert_eq!(parse_date("2024-01-14T17:00:00.000Z"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15T08:30:00"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-13-01"), None);
    }

    #[test]
    fn test_month_range() {
        assert_eq!(
            month_range("2024-01"),
            Some((ymd(2024, 1, 1), ymd(2024, 1, 31)))
        );
        assert_eq!(
            month_range("2024-02"),
            Some((ymd(2024, 2, 1), ymd(2024, 2, 29)))
        );
        assert_eq!(
            month_range("2023-12"),
            Some((ymd(2023, 12, 1), ymd(2023, 12, 31)))
        );
        assert_eq!(month_range("2024-13"), None);
        assert_eq!(month_range("2024"), None);
    }

    #[test]
    fn test_format_thai_date() {
        assert_eq!(format_thai_date(Some(ymd(2024, 1, 15))), "15 ม.ค. 2567");
        assert_eq!(format_thai_date(None), "");
    }
}
