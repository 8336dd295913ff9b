use chrono::{Datelike, Local};

use crate::{models::payment_form::CalendarMonth, services::Clock};

/// Month of the server's local time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> CalendarMonth {
        let today = Local::now().date_naive();
        CalendarMonth {
            year: today.year(),
            month: today.month(),
        }
    }
}
