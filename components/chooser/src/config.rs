//! Host-facing configuration surface.

use core::fmt;

use datechooser_core::Capabilities;
use time::{Duration, OffsetDateTime};

use crate::style::ChooserStyle;

/// Errors raised while building or loading a [`DateChooserConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The wheel cannot step by this many minutes.
    #[error("minute interval {0} must be between 1 and 30 and divide 60 evenly")]
    InvalidMinuteInterval(u32),
    /// The configuration file is not valid TOML or has mistyped fields.
    #[cfg(feature = "serde")]
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Granularity of the minute column of the wheel.
///
/// Valid intervals lie in `1..=30` and divide an hour evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct MinuteInterval(u8);

impl MinuteInterval {
    /// Every minute is selectable.
    pub const ONE: Self = Self(1);
    /// The default five minute step.
    pub const FIVE: Self = Self(5);

    /// Validates a minute interval.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMinuteInterval`] if `minutes` is outside
    /// `1..=30` or does not divide 60.
    pub fn new(minutes: u32) -> Result<Self, ConfigError> {
        match u8::try_from(minutes) {
            Ok(value @ 1..=30) if 60 % value == 0 => Ok(Self(value)),
            _ => Err(ConfigError::InvalidMinuteInterval(minutes)),
        }
    }

    /// Interval length in minutes.
    #[must_use]
    pub const fn minutes(self) -> u8 {
        self.0
    }

    /// Rounds `moment` down to the closest wheel position, clearing seconds.
    #[must_use]
    pub fn snap(self, moment: OffsetDateTime) -> OffsetDateTime {
        let excess_minutes = moment.minute() % self.0;
        moment
            - Duration::minutes(i64::from(excess_minutes))
            - Duration::seconds(i64::from(moment.second()))
            - Duration::nanoseconds(i64::from(moment.nanosecond()))
    }
}

impl Default for MinuteInterval {
    fn default() -> Self {
        Self::FIVE
    }
}

impl TryFrom<u32> for MinuteInterval {
    type Error = ConfigError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<MinuteInterval> for u32 {
    fn from(interval: MinuteInterval) -> Self {
        Self::from(interval.0)
    }
}

impl fmt::Display for MinuteInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

/// Everything the embedding application can set on a date chooser.
///
/// With the `serde` feature every field is optional in a configuration file:
///
/// ```toml
/// capabilities = 19            # remove, set to current, combined wheel
/// minute_interval = 15
/// starting_moment = "2026-10-19T15:00:00+02:00"
///
/// [style]
/// destructive_color = "#C62828"
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DateChooserConfig {
    /// Enabled capabilities, stored as the host's integer bitmask.
    pub capabilities: Capabilities,
    /// Wheel granularity for time selection.
    pub minute_interval: MinuteInterval,
    /// Moment the wheel starts on; the current time when unset.
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339::option"))]
    pub starting_moment: Option<OffsetDateTime>,
    /// Cosmetic options.
    pub style: ChooserStyle,
}

#[cfg(feature = "serde")]
impl DateChooserConfig {
    /// Parses a configuration from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the source is malformed, including
    /// an invalid minute interval or color.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn minute_interval_bounds() {
        for minutes in [1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30] {
            assert_eq!(
                u32::from(MinuteInterval::new(minutes).unwrap().minutes()),
                minutes
            );
        }
        for minutes in [0, 7, 25, 45, 60, 300] {
            assert!(matches!(
                MinuteInterval::new(minutes),
                Err(ConfigError::InvalidMinuteInterval(m)) if m == minutes
            ));
        }
    }

    #[test]
    fn snap_rounds_down_and_clears_seconds() {
        let interval = MinuteInterval::new(15).unwrap();
        assert_eq!(
            interval.snap(datetime!(2026-10-19 15:44:59.5 UTC)),
            datetime!(2026-10-19 15:30 UTC)
        );
        assert_eq!(
            interval.snap(datetime!(2026-10-19 15:45 UTC)),
            datetime!(2026-10-19 15:45 UTC)
        );
    }

    #[test]
    fn snap_keeps_offset() {
        let snapped = MinuteInterval::FIVE.snap(datetime!(2026-10-19 00:03 -05:00));
        assert_eq!(snapped, datetime!(2026-10-19 00:00 -05:00));
        assert_eq!(snapped.offset(), datetime!(2026-10-19 00:00 -05:00).offset());
    }

    #[test]
    fn defaults() {
        let config = DateChooserConfig::default();
        assert_eq!(config.capabilities, Capabilities::STANDARD);
        assert_eq!(config.minute_interval, MinuteInterval::FIVE);
        assert!(config.starting_moment.is_none());
    }

    #[cfg(feature = "serde")]
    mod serde_support {
        use datechooser_color::Srgb;
        use time::macros::datetime;

        use super::super::*;

        #[test]
        fn toml_fields_are_optional() {
            let config = DateChooserConfig::from_toml_str("").unwrap();
            assert_eq!(config, DateChooserConfig::default());
        }

        #[test]
        fn toml_full_config() {
            let config = DateChooserConfig::from_toml_str(
                r##"
                capabilities = 19
                minute_interval = 15
                starting_moment = "2026-10-19T15:00:00+02:00"

                [style]
                destructive_color = "#C62828"
                corner_radius = 12.0
                "##,
            )
            .unwrap();

            assert_eq!(
                config.capabilities,
                Capabilities::REMOVE_DATE
                    | Capabilities::SET_TO_CURRENT
                    | Capabilities::DATE_AND_TIME_COMBINED
            );
            assert_eq!(config.minute_interval.minutes(), 15);
            assert_eq!(
                config.starting_moment,
                Some(datetime!(2026-10-19 15:00 +02:00))
            );
            assert_eq!(config.style.destructive_color, Srgb::from_hex("#C62828"));
            assert!((config.style.corner_radius - 12.0).abs() < f32::EPSILON);
            assert_eq!(config.style.title_color, Srgb::BLACK);
        }

        #[test]
        fn toml_rejects_bad_minute_interval() {
            let err = DateChooserConfig::from_toml_str("minute_interval = 7").unwrap_err();
            assert!(err.to_string().contains("minute interval 7"), "{err}");
        }

        #[test]
        fn toml_rejects_bad_color() {
            assert!(DateChooserConfig::from_toml_str("[style]\ntitle_color = \"blue\"").is_err());
        }

        #[test]
        fn json_round_trip_keeps_bitmask() {
            let config = DateChooserConfig {
                capabilities: Capabilities::DATE_AND_TIME_SEPARATE | Capabilities::TIME_ONLY,
                ..DateChooserConfig::default()
            };
            let json = serde_json::to_value(&config).unwrap();
            assert_eq!(json["capabilities"], 12);
            assert_eq!(json["minute_interval"], 5);
            assert!(json["starting_moment"].is_null());

            let back: DateChooserConfig = serde_json::from_value(json).unwrap();
            assert_eq!(back, config);
        }
    }
}
