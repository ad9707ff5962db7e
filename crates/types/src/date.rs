/// Kalendertag im proleptischen gregorianischen Kalender (UTC).
/// Ordnung ist chronologisch (Jahr, Monat, Tag).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TradingDate {
    year: i32,
    month: u32,
    day: u32,
}

/// Error parsing or constructing a calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateError(String);

impl std::fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid date: {}", self.0)
    }
}

impl std::error::Error for ParseDateError {}

impl TradingDate {
    /// Creates a date, rejecting out-of-range month/day combinations.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ParseDateError> {
        if month == 0 || month > 12 {
            return Err(ParseDateError(format!("invalid month: {year}-{month}-{day}")));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(ParseDateError(format!("invalid day: {year}-{month}-{day}")));
        }
        Ok(Self { year, month, day })
    }

    /// Year component
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1-12)
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day component (1-31)
    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Days since Unix epoch (1970-01-01), negative before.
    #[must_use]
    pub fn to_days(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Inverse of [`to_days`](Self::to_days).
    #[must_use]
    pub fn from_days(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self { year, month, day }
    }

    /// Date shifted by `n` calendar days (negative shifts backwards).
    #[must_use]
    pub fn add_days(&self, n: i64) -> Self {
        Self::from_days(self.to_days() + n)
    }

    /// Weekday index, 0 = Monday .. 6 = Sunday.
    #[must_use]
    pub fn weekday(&self) -> u32 {
        // Epoch (1970-01-01) war ein Donnerstag, daher Offset 3
        let wd = (self.to_days() + 3).rem_euclid(7);
        u32::try_from(wd).unwrap_or(0)
    }

    /// True for Monday through Friday.
    #[must_use]
    pub fn is_business_day(&self) -> bool {
        self.weekday() < 5
    }

    /// Next Monday-to-Friday date strictly after `self`.
    #[must_use]
    pub fn next_business_day(&self) -> Self {
        let mut d = self.add_days(1);
        while !d.is_business_day() {
            d = d.add_days(1);
        }
        d
    }

    /// Compact `YYYYMMDD` form used for artifact file names.
    #[must_use]
    pub fn compact(&self) -> String {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Display for TradingDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::str::FromStr for TradingDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(ParseDateError(format!("invalid date format: {s}")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|_| ParseDateError(format!("invalid year: {s}")))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| ParseDateError(format!("invalid month: {s}")))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|_| ParseDateError(format!("invalid day: {s}")))?;
        Self::new(year, month, day)
    }
}

fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let m = i64::from(month);
    let d = i64::from(day);
    let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if m <= 2 { y + 1 } else { y };
    (
        i32::try_from(year).unwrap_or(0),
        u32::try_from(m).unwrap_or(1),
        u32::try_from(d).unwrap_or(1),
    )
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
