use crate::{JulianDate, TimeError, TimeResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl ParsedDateTime {
    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate::from_calendar(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// Parses a UTC timestamp `YYYY-MM-DDTHH:MM:SS[.fff][Z]`.
///
/// A space is accepted in place of `T`. No time-zone offsets other than `Z`.
pub fn parse_iso8601(s: &str) -> TimeResult<ParsedDateTime> {
    let s = s.trim();

    const MAX_ISO8601_LENGTH: usize = 32;
    if s.len() > MAX_ISO8601_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }

    let s = s.strip_suffix('Z').unwrap_or(s);

    let (date_part, time_part) = s.split_once(['T', ' ']).ok_or_else(|| {
        TimeError::ParseError(format!(
            "Invalid datetime format: '{}'. Expected YYYY-MM-DDTHH:MM:SS",
            s
        ))
    })?;

    let date: Vec<&str> = date_part.split('-').collect();
    if date.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date_part
        )));
    }
    if date[0].len() != 4 || !date[0].bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!(
            "Invalid year: '{}'",
            date[0]
        )));
    }
    let year: i32 = date[0]
        .parse()
        .map_err(|_| TimeError::ParseError(format!("Invalid year: '{}'", date[0])))?;
    let month = parse_two_digits(date[1], "month")?;
    let day = parse_two_digits(date[2], "day")?;

    if !(1..=12).contains(&month) {
        return Err(TimeError::ParseError(format!(
            "Month out of range: {}",
            month
        )));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(TimeError::ParseError(format!(
            "Day out of range: {}-{:02}-{:02}",
            year, month, day
        )));
    }

    let time: Vec<&str> = time_part.split(':').collect();
    if time.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid time format: '{}'. Expected HH:MM:SS",
            time_part
        )));
    }
    let hour = parse_two_digits(time[0], "hour")?;
    let minute = parse_two_digits(time[1], "minute")?;
    let second = parse_seconds(time[2])?;

    if hour > 23 {
        return Err(TimeError::ParseError(format!("Hour out of range: {}", hour)));
    }
    if minute > 59 {
        return Err(TimeError::ParseError(format!(
            "Minute out of range: {}",
            minute
        )));
    }
    if !(0.0..60.0).contains(&second) {
        return Err(TimeError::ParseError(format!(
            "Second out of range: {}",
            second
        )));
    }

    Ok(ParsedDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

fn parse_two_digits(s: &str, name: &str) -> TimeResult<u8> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!("Invalid {}: '{}'", name, s)));
    }
    Ok(s.bytes().fold(0u8, |acc, b| acc * 10 + (b - b'0')))
}

fn parse_seconds(s: &str) -> TimeResult<f64> {
    let whole = s.split('.').next().unwrap_or("");
    if whole.is_empty() || whole.len() > 2 || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!("Invalid second: '{}'", s)));
    }
    s.parse()
        .map_err(|_| TimeError::ParseError(format!("Invalid second: '{}'", s)))
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
