//! Past / upcoming classification of shows relative to a reference instant.

use crate::types::Timestamp;

/// Anything with a scheduled start time.
pub trait Scheduled {
    fn start_time(&self) -> Timestamp;
}

/// A show starting exactly at `now` is upcoming; only strictly earlier
/// starts are past.
pub fn is_upcoming(start_time: Timestamp, now: Timestamp) -> bool {
    start_time >= now
}

/// Shows split around a reference instant, each side ordered by start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowPartition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> ShowPartition<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn total(&self) -> usize {
        self.past.len() + self.upcoming.len()
    }
}

/// Partition `shows` into past and upcoming relative to `now`.
///
/// Every input lands in exactly one side, so
/// `past_count() + upcoming_count()` always equals the input length.
pub fn partition_shows<T: Scheduled>(mut shows: Vec<T>, now: Timestamp) -> ShowPartition<T> {
    shows.sort_by_key(Scheduled::start_time);
    let (upcoming, past) = shows
        .into_iter()
        .partition(|s| is_upcoming(s.start_time(), now));
    ShowPartition { past, upcoming }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Gig(&'static str, Timestamp);

    impl Scheduled for Gig {
        fn start_time(&self) -> Timestamp {
            self.1
        }
    }

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap()
    }

    #[test]
    fn show_at_now_is_upcoming() {
        let split = partition_shows(vec![Gig("now", now())], now());
        assert_eq!(split.upcoming_count(), 1);
        assert_eq!(split.past_count(), 0);
    }

    #[test]
    fn show_one_second_before_now_is_past() {
        let split = partition_shows(vec![Gig("early", now() - Duration::seconds(1))], now());
        assert_eq!(split.past_count(), 1);
        assert_eq!(split.upcoming_count(), 0);
    }

    #[test]
    fn counts_cover_every_show() {
        let shows = vec![
            Gig("a", now() - Duration::days(3)),
            Gig("b", now() + Duration::days(1)),
            Gig("c", now() - Duration::hours(1)),
            Gig("d", now()),
            Gig("e", now() + Duration::days(30)),
        ];
        let split = partition_shows(shows, now());
        assert_eq!(split.total(), 5);
        assert_eq!(split.past_count(), 2);
        assert_eq!(split.upcoming_count(), 3);
    }

    #[test]
    fn both_sides_are_ordered_by_start_time() {
        let shows = vec![
            Gig("late", now() + Duration::days(9)),
            Gig("old", now() - Duration::days(9)),
            Gig("soon", now() + Duration::days(1)),
            Gig("recent", now() - Duration::days(1)),
        ];
        let split = partition_shows(shows, now());
        let past: Vec<_> = split.past.iter().map(|g| g.0).collect();
        let upcoming: Vec<_> = split.upcoming.iter().map(|g| g.0).collect();
        assert_eq!(past, ["old", "recent"]);
        assert_eq!(upcoming, ["soon", "late"]);
    }

    #[test]
    fn empty_input_gives_empty_partition() {
        let split: ShowPartition<Gig> = partition_shows(Vec::new(), now());
        assert_eq!(split.total(), 0);
    }
}
