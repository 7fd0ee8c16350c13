use chrono::{DateTime, Datelike, Timelike, Weekday};
use chrono_tz::Tz;

// NSW distribution use-of-system charges, $/MWh.
const PEAK_RATE: f64 = 148.3;
const SHOULDER_RATE: f64 = 62.1;
const OFF_PEAK_RATE: f64 = 31.4;

/// Time-of-use network charge at a local instant. Peak applies weekdays
/// 14:00-20:00, shoulder weekdays 07:00-14:00 and 20:00-22:00, off-peak
/// otherwise (nights and weekends).
pub fn network_charge_at(at: DateTime<Tz>) -> f64 {
    if matches!(at.weekday(), Weekday::Sat | Weekday::Sun) {
        return OFF_PEAK_RATE;
    }

    match at.hour() {
        14..=19 => PEAK_RATE,
        7..=13 | 20..=21 => SHOULDER_RATE,
        _ => OFF_PEAK_RATE,
    }
}
