use chrono::{DateTime, Duration, Utc};

/// Default age in days after which an open PR counts as stale
pub const DEFAULT_STALE_AFTER_DAYS: u32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Stale,
}

/// Classify a PR by age. A PR exactly `threshold_days` old is still fresh.
pub fn classify(created_at: DateTime<Utc>, now: DateTime<Utc>, threshold_days: u32) -> Freshness {
    let age = now - created_at;
    if age > Duration::days(i64::from(threshold_days)) {
        Freshness::Stale
    } else {
        Freshness::Fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_exact_threshold_is_fresh() {
        let created = now() - Duration::days(14);
        assert_eq!(classify(created, now(), 14), Freshness::Fresh);
    }

    #[test]
    fn test_one_second_past_threshold_is_stale() {
        let created = now() - Duration::days(14) - Duration::seconds(1);
        assert_eq!(classify(created, now(), 14), Freshness::Stale);
    }

    #[test]
    fn test_recent_pr_is_fresh() {
        let created = now() - Duration::hours(3);
        assert_eq!(classify(created, now(), DEFAULT_STALE_AFTER_DAYS), Freshness::Fresh);
    }

    #[test]
    fn test_custom_threshold() {
        let created = now() - Duration::days(3);
        assert_eq!(classify(created, now(), 2), Freshness::Stale);
        assert_eq!(classify(created, now(), 3), Freshness::Fresh);
    }

    #[test]
    fn test_zero_threshold() {
        assert_eq!(classify(now(), now(), 0), Freshness::Fresh);
        let created = now() - Duration::minutes(1);
        assert_eq!(classify(created, now(), 0), Freshness::Stale);
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        let created = now() + Duration::hours(1);
        assert_eq!(classify(created, now(), 14), Freshness::Fresh);
    }

    #[test]
    fn test_offset_timestamps_compare_in_utc() {
        // 2024-03-01T14:00:00+02:00 is 12:00 UTC, exactly 14 days before now()
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let created = offset
            .with_ymd_and_hms(2024, 3, 1, 14, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(classify(created, now(), 14), Freshness::Fresh);
        assert_eq!(
            classify(created - Duration::seconds(1), now(), 14),
            Freshness::Stale
        );
    }
}
