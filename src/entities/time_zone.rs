// 🌐 TimeZone Entity - immutable UTC offset with a display label
//
// Validated once at construction, read-only afterwards.
// Equality is by value on (name, offset_hours, offset_minutes).

use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use std::fmt;

use crate::error::{AccountError, Result};

// ============================================================================
// OFFSET LIMITS
// ============================================================================

/// Most negative offset accepted, in minutes (-12:00)
pub const MIN_OFFSET_MINUTES: i64 = -12 * 60;

/// Most positive offset accepted, in minutes (+14:00)
pub const MAX_OFFSET_MINUTES: i64 = 14 * 60;

/// Bound on the minutes component, both directions
pub const MINUTES_COMPONENT_LIMIT: i32 = 59;

// ============================================================================
// TIMEZONE
// ============================================================================

#[derive(Debug, Clone)]
pub struct TimeZone {
    /// Trimmed, non-empty label (e.g., "UTC", "PKT")
    name: String,

    offset_hours: i32,

    /// Always within [-59, 59]
    offset_minutes: i32,

    /// hours + minutes, within [-12:00, +14:00]
    offset: Duration,

    fixed_offset: FixedOffset,
}

impl TimeZone {
    /// Build a validated time zone.
    ///
    /// Hours and minutes are summed as signed values, so `(5, -30)` is +04:30
    /// and `(-3, -30)` is -03:30.
    pub fn new(name: &str, offset_hours: i32, offset_minutes: i32) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AccountError::invalid(
                "name",
                "time zone name cannot be empty",
            ));
        }

        if !(-MINUTES_COMPONENT_LIMIT..=MINUTES_COMPONENT_LIMIT).contains(&offset_minutes) {
            return Err(AccountError::invalid(
                "offset_minutes",
                format!(
                    "must be between -59 and 59 (inclusive), got {}",
                    offset_minutes
                ),
            ));
        }

        let total_minutes = i64::from(offset_hours) * 60 + i64::from(offset_minutes);
        if !(MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&total_minutes) {
            return Err(AccountError::invalid(
                "offset",
                format!(
                    "must be between -12:00 and +14:00, got {}h {}m",
                    offset_hours, offset_minutes
                ),
            ));
        }

        // Range above keeps this well inside FixedOffset's +/-24h window
        let fixed_offset = i32::try_from(total_minutes * 60)
            .ok()
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| AccountError::invalid("offset", "not representable as a UTC offset"))?;

        Ok(TimeZone {
            name: name.to_string(),
            offset_hours,
            offset_minutes,
            offset: Duration::minutes(total_minutes),
            fixed_offset,
        })
    }

    /// The UTC zone used when an account is opened without one
    pub fn utc() -> Self {
        TimeZone {
            name: "UTC".to_string(),
            offset_hours: 0,
            offset_minutes: 0,
            offset: Duration::zero(),
            fixed_offset: Utc.fix(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset_hours(&self) -> i32 {
        self.offset_hours
    }

    pub fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    /// Combined signed displacement from UTC
    pub fn offset(&self) -> Duration {
        self.offset
    }

    pub fn fixed_offset(&self) -> FixedOffset {
        self.fixed_offset
    }

    /// Express a UTC instant in this zone's wall-clock time
    pub fn to_local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.fixed_offset)
    }
}

impl PartialEq for TimeZone {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.offset_hours == other.offset_hours
            && self.offset_minutes == other.offset_minutes
    }
}

impl Eq for TimeZone {}

impl Default for TimeZone {
    fn default() -> Self {
        TimeZone::utc()
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TimeZone(name={}, offset_hours={}, offset_minutes={})",
            self.name, self.offset_hours, self.offset_minutes
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_time_zone_creation() {
        let tz = TimeZone::new("PKT", 5, 0).unwrap();
        assert_eq!(tz.name(), "PKT");
        assert_eq!(tz.offset_hours(), 5);
        assert_eq!(tz.offset_minutes(), 0);
        assert_eq!(tz.offset(), Duration::hours(5));
    }

    #[test]
    fn test_time_zone_name_is_trimmed() {
        let tz = TimeZone::new("  IST  ", 5, 30).unwrap();
        assert_eq!(tz.name(), "IST");
        assert_eq!(tz.offset(), Duration::minutes(5 * 60 + 30));
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case("\t\n")]
    fn test_time_zone_rejects_blank_name(#[case] name: &str) {
        let err = TimeZone::new(name, 0, 0).unwrap_err();
        assert_eq!(err.field(), "name");
    }

    #[rstest]
    #[case(0, 60)]
    #[case(0, -60)]
    #[case(1, 75)]
    fn test_time_zone_rejects_minutes_out_of_range(#[case] hours: i32, #[case] minutes: i32) {
        let err = TimeZone::new("X", hours, minutes).unwrap_err();
        assert_eq!(err.field(), "offset_minutes");
    }

    #[rstest]
    #[case(15, 0)]
    #[case(-13, 0)]
    #[case(14, 1)]
    #[case(-12, -1)]
    #[case(i32::MAX, 0)]
    #[case(i32::MIN, 0)]
    fn test_time_zone_rejects_offset_out_of_range(#[case] hours: i32, #[case] minutes: i32) {
        let err = TimeZone::new("X", hours, minutes).unwrap_err();
        assert_eq!(err.field(), "offset");
    }

    #[rstest]
    #[case(14, 0)]
    #[case(-12, 0)]
    #[case(13, 59)]
    #[case(-11, -59)]
    fn test_time_zone_accepts_boundaries(#[case] hours: i32, #[case] minutes: i32) {
        let tz = TimeZone::new("X", hours, minutes).unwrap();
        assert_eq!(
            tz.offset(),
            Duration::hours(i64::from(hours)) + Duration::minutes(i64::from(minutes))
        );
    }

    #[test]
    fn test_time_zone_mixed_sign_components() {
        let tz = TimeZone::new("X", 5, -30).unwrap();
        assert_eq!(tz.offset(), Duration::minutes(4 * 60 + 30));

        let tz = TimeZone::new("X", -3, -30).unwrap();
        assert_eq!(tz.offset(), Duration::minutes(-(3 * 60 + 30)));
    }

    #[test]
    fn test_time_zone_equality_by_value() {
        let a = TimeZone::new("EST", -5, 0).unwrap();
        let b = TimeZone::new(" EST ", -5, 0).unwrap();
        let c = TimeZone::new("EST", -4, 0).unwrap();
        let d = TimeZone::new("CDT", -5, 0).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_time_zone_equality_compares_components_not_sum() {
        // Same total offset, different components
        let a = TimeZone::new("X", 1, -30).unwrap();
        let b = TimeZone::new("X", 0, 30).unwrap();
        assert_eq!(a.offset(), b.offset());
        assert_ne!(a, b);
    }

    #[test]
    fn test_utc_default() {
        let tz = TimeZone::default();
        assert_eq!(tz, TimeZone::new("UTC", 0, 0).unwrap());
        assert_eq!(tz.offset(), Duration::zero());
        assert_eq!(tz.fixed_offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_time_zone_display() {
        let tz = TimeZone::new("NPT", 5, 45).unwrap();
        assert_eq!(
            tz.to_string(),
            "TimeZone(name=NPT, offset_hours=5, offset_minutes=45)"
        );
    }

    #[test]
    fn test_to_local_applies_offset() {
        let tz = TimeZone::new("NPT", 5, 45).unwrap();
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let local = tz.to_local(instant);

        assert_eq!(local.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 05:45");
        assert_eq!(local, instant);
        assert_eq!(tz.fixed_offset().local_minus_utc(), (5 * 60 + 45) * 60);
    }

    proptest! {
        #[test]
        fn prop_valid_offsets_always_construct(
            hours in -12i32..=14,
            minutes in -59i32..=59,
        ) {
            let total = i64::from(hours) * 60 + i64::from(minutes);
            prop_assume!((MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&total));

            let tz = TimeZone::new("Zone", hours, minutes).unwrap();
            prop_assert_eq!(tz.offset(), Duration::minutes(total));
            prop_assert_eq!(i64::from(tz.fixed_offset().local_minus_utc()), total * 60);
        }

        #[test]
        fn prop_out_of_range_offsets_always_fail(
            hours in -40i32..=40,
            minutes in -59i32..=59,
        ) {
            let total = i64::from(hours) * 60 + i64::from(minutes);
            prop_assume!(!(MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&total));

            prop_assert!(TimeZone::new("Zone", hours, minutes).is_err());
        }
    }
}
