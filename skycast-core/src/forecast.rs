//! Reduction of the 3-hour forecast list into the dashboard's two views.

use chrono::Timelike;

use crate::model::ForecastEntry;

/// How many representative days the daily panel shows.
pub const DAILY_SLOTS: usize = 5;

/// How many 3-hour slots the hourly strip shows (about one day).
pub const HOURLY_SLOTS: usize = 8;

/// 3-hour slots per 24 hours, the stride of the fallback sampling.
const ENTRIES_PER_DAY: usize = 8;

/// Pick up to [`DAILY_SLOTS`] representative entries, one per day.
///
/// Prefers the 12:00:00 UTC slot of each day. When the list does not contain
/// five noon slots (short lists, or a list starting in the afternoon of the
/// last covered day), falls back to sampling every 8th entry from the start,
/// which is one entry per 24 hours.
pub fn daily_outlook(list: &[ForecastEntry]) -> Vec<ForecastEntry> {
    let noon: Vec<ForecastEntry> = list
        .iter()
        .filter(|e| {
            let t = e.at.time();
            t.hour() == 12 && t.minute() == 0 && t.second() == 0
        })
        .take(DAILY_SLOTS)
        .cloned()
        .collect();

    if noon.len() == DAILY_SLOTS {
        return noon;
    }

    list.iter().step_by(ENTRIES_PER_DAY).take(DAILY_SLOTS).cloned().collect()
}

/// The next [`HOURLY_SLOTS`] entries, in list order.
pub fn hourly_outlook(list: &[ForecastEntry]) -> Vec<ForecastEntry> {
    list.iter().take(HOURLY_SLOTS).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn entry(ts: &str, temp: f64) -> ForecastEntry {
        ForecastEntry {
            at: ts.parse::<DateTime<Utc>>().unwrap(),
            temperature_c: temp,
            description: "clear sky".into(),
            condition_code: 800,
            icon_code: "01d".into(),
        }
    }

    /// A full 5-day list as the API returns it: 40 slots, 3 hours apart,
    /// starting at 03:00.
    fn full_list() -> Vec<ForecastEntry> {
        let start = "2026-08-23T03:00:00Z".parse::<DateTime<Utc>>().unwrap();
        (0..40)
            .map(|i| {
                let at = start + chrono::Duration::hours(3 * i);
                ForecastEntry { at, ..entry("2026-08-23T03:00:00Z", i as f64) }
            })
            .collect()
    }

    #[test]
    fn prefers_noon_entries() {
        let days = daily_outlook(&full_list());
        assert_eq!(days.len(), 5);
        for e in &days {
            assert_eq!(e.at.time().hour(), 12);
            assert_eq!(e.at.time().minute(), 0);
        }
        // One per consecutive day.
        assert_eq!(days[0].at.to_rfc3339(), "2026-08-23T12:00:00+00:00");
        assert_eq!(days[4].at.to_rfc3339(), "2026-08-27T12:00:00+00:00");
    }

    #[test]
    fn falls_back_to_every_eighth_entry() {
        // Drop the tail so only 4 noon slots remain.
        let mut list = full_list();
        list.truncate(30);

        let days = daily_outlook(&list);
        assert_eq!(days.len(), 4);
        assert_eq!(days[0].at, list[0].at);
        assert_eq!(days[1].at, list[8].at);
        assert_eq!(days[2].at, list[16].at);
        assert_eq!(days[3].at, list[24].at);
    }

    #[test]
    fn empty_list_yields_empty_outlooks() {
        assert!(daily_outlook(&[]).is_empty());
        assert!(hourly_outlook(&[]).is_empty());
    }

    #[test]
    fn hourly_takes_the_first_eight() {
        let list = full_list();
        let hours = hourly_outlook(&list);
        assert_eq!(hours.len(), 8);
        assert_eq!(hours[0].at, list[0].at);
        assert_eq!(hours[7].at, list[7].at);

        let short = &list[..3];
        assert_eq!(hourly_outlook(short).len(), 3);
    }
}
