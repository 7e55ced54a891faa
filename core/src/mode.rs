//! Wheel modes and formatter styles.

/// Which axis the wheel selector edits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickerMode {
    /// Calendar date only.
    #[default]
    DateOnly,
    /// Time of day only.
    TimeOnly,
    /// Date and time of day on one wheel.
    DateAndTime,
}

impl PickerMode {
    /// Returns `true` if the wheel lets the user pick hours and minutes.
    #[must_use]
    pub const fn edits_time(self) -> bool {
        matches!(self, Self::TimeOnly | Self::DateAndTime)
    }
}

/// How much of the calendar date a formatted moment shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateStyle {
    /// Leave the date out.
    #[default]
    None,
    /// Numeric date, e.g. `10/19/26`.
    Short,
    /// Spelled-out date, e.g. `Monday, October 19, 2026`.
    Full,
}

/// How much of the time of day a formatted moment shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeStyle {
    /// Leave the time out.
    #[default]
    None,
    /// Hours and minutes, e.g. `3:04 PM`.
    Short,
    /// Hours, minutes, seconds and offset, e.g. `3:04:05 PM UTC+02:00`.
    Full,
}

/// The pair of styles a [`MomentFormatter`](crate::MomentFormatter) renders with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatterConfig {
    /// Date component style.
    pub date_style: DateStyle,
    /// Time component style.
    pub time_style: TimeStyle,
}

impl FormatterConfig {
    /// Creates a formatter configuration from a date and time style.
    #[must_use]
    pub const fn new(date_style: DateStyle, time_style: TimeStyle) -> Self {
        Self {
            date_style,
            time_style,
        }
    }

    /// Full date without a time component.
    pub const DATE: Self = Self::new(DateStyle::Full, TimeStyle::None);
    /// Short time without a date component.
    pub const TIME: Self = Self::new(DateStyle::None, TimeStyle::Short);
    /// Full date followed by a short time.
    pub const DATE_AND_TIME: Self = Self::new(DateStyle::Full, TimeStyle::Short);
}
