use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use chrono_tz::Australia::Sydney;
use chrono_tz::Tz;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Query window for the market API, ending `settlement_lag_minutes` before
/// now. The API expects timezone-naive timestamps in network local time
/// (AEST/AEDT), so both ends are stripped of their offset.
pub fn market_window(lookback_minutes: i64, settlement_lag_minutes: i64) -> TimeWindow {
    window_at(
        Utc::now().with_timezone(&Sydney),
        lookback_minutes,
        settlement_lag_minutes,
    )
}

pub fn window_at(
    now: DateTime<Tz>,
    lookback_minutes: i64,
    settlement_lag_minutes: i64,
) -> TimeWindow {
    let end = now - Duration::minutes(settlement_lag_minutes);
    let start = end - Duration::minutes(lookback_minutes);
    TimeWindow {
        start: start.naive_local(),
        end: end.naive_local(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn ends_one_settlement_lag_before_now() {
        let now = Sydney.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        let w = window_at(now, 45, 30);
        assert_eq!(w.end, local(2025, 3, 14, 11, 30));
        assert_eq!(w.start, local(2025, 3, 14, 10, 45));
    }

    #[test]
    fn start_precedes_end_by_the_lookback() {
        let now = Sydney.with_ymd_and_hms(2025, 11, 2, 0, 10, 0).unwrap();
        let w = window_at(now, 45, 30);
        assert!(w.start < w.end);
        assert_eq!(w.end - w.start, Duration::minutes(45));
    }

    #[test]
    fn formats_without_an_offset() {
        let now = Sydney.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        let w = window_at(now, 45, 30);
        assert_eq!(
            w.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "2025-03-14T11:30:00"
        );
    }
}
