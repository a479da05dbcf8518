use chrono::{DateTime, Datelike, TimeZone};
use rust_decimal::Decimal;

use crate::models::customer::CustomerModel;

/// Month-over-month change in the number of customers, as a percentage.
///
/// The exact `(this - last) * 100 / last` is rounded to two decimals for
/// display.
///
/// Compares the calendar month of `now` with the month before it (January
/// compares with December of the previous year). A previous month with no
/// customers yields 0 rather than an undefined rate.
pub fn growth_rate<'a, I, Tz>(records: I, now: &DateTime<Tz>) -> Decimal
where
    I: IntoIterator<Item = &'a CustomerModel>,
    Tz: TimeZone,
{
    let current = (now.year(), now.month());
    let previous = if now.month() == 1 {
        (now.year() - 1, 12)
    } else {
        (now.year(), now.month() - 1)
    };

    let mut this_month = 0usize;
    let mut last_month = 0usize;
    for record in records {
        let at = record.updated_at.with_timezone(&now.timezone());
        let month = (at.year(), at.month());
        if month == current {
            this_month += 1;
        } else if month == previous {
            last_month += 1;
        }
    }

    if last_month == 0 {
        return Decimal::ZERO;
    }
    let diff = Decimal::from(this_month) - Decimal::from(last_month);
    (diff * Decimal::ONE_HUNDRED / Decimal::from(last_month)).round_dp(2)
}
