use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Calendar unit used to bucket purchases for the "purchases per period" chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalendarPeriod {
    Year,
    Quarter,
    /// Default for the dashboard chart
    #[default]
    Month,
    Weekday,
}

impl std::fmt::Display for CalendarPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarPeriod::Year => write!(f, "Year"),
            CalendarPeriod::Quarter => write!(f, "Quarter"),
            CalendarPeriod::Month => write!(f, "Month"),
            CalendarPeriod::Weekday => write!(f, "Weekday"),
        }
    }
}

/// The calendar component a date falls into for a given [`CalendarPeriod`].
///
/// Components are extracted, not truncated: April 2022 and April 2023 share
/// the `Month(4)` bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKey {
    Year(i32),
    /// Calendar quarter, 1..=4
    Quarter(u32),
    /// Month of the year, 1..=12
    Month(u32),
    Weekday(Weekday),
}

impl PeriodKey {
    /// Extract the bucket key of `date` for `period`.
    pub fn of(period: CalendarPeriod, date: NaiveDate) -> Self {
        match period {
            CalendarPeriod::Year => PeriodKey::Year(date.year()),
            CalendarPeriod::Quarter => PeriodKey::Quarter(date.month0() / 3 + 1),
            CalendarPeriod::Month => PeriodKey::Month(date.month()),
            CalendarPeriod::Weekday => PeriodKey::Weekday(date.weekday()),
        }
    }

    /// Axis label for the bucket ("2022", "Q2", "April", "Monday").
    pub fn label(&self) -> String {
        match self {
            PeriodKey::Year(year) => year.to_string(),
            PeriodKey::Quarter(quarter) => format!("Q{quarter}"),
            PeriodKey::Month(month) => MONTH_NAMES
                .get(month.saturating_sub(1) as usize)
                .map(|name| name.to_string())
                .unwrap_or_else(|| month.to_string()),
            PeriodKey::Weekday(weekday) => {
                WEEKDAY_NAMES[weekday.num_days_from_monday() as usize].to_string()
            }
        }
    }
}

impl std::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
