//! Calendar date source, injectable so date-stamping logic stays
//! deterministic under test.

use chrono::NaiveDate;

pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Today as the `YYYY-MM-DD` string used in task records.
    fn today_iso(&self) -> String {
        self.today().format("%Y-%m-%d").to_string()
    }
}

/// Production clock reading the local wall time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
