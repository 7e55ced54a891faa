//! Rendering a moment as display text.
//!
//! The chooser never formats dates itself; it hands the moment and the
//! resolved [`FormatterConfig`] to a [`MomentFormatter`]. Hosts with their
//! own locale machinery plug in an implementation of the trait, everyone else
//! uses [`StandardFormatter`].

use core::fmt::Debug;

use time::{
    OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::{DateStyle, FormatterConfig, TimeStyle};

/// Error returned when a moment cannot be rendered.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    /// The `time` crate rejected the moment or the pattern.
    #[error("failed to format moment: {0}")]
    Time(#[from] time::error::Format),
    /// A formatter supplied by the host failed.
    #[error("formatter failed: {0}")]
    Custom(String),
}

/// A service that turns a moment into human-readable text.
pub trait MomentFormatter: Debug {
    /// Formats `moment` with the given styles. A `None` style leaves its
    /// component out; if both are `None` the result is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the moment cannot be represented with the requested styles.
    fn format(&self, moment: OffsetDateTime, config: FormatterConfig)
    -> Result<String, FormatError>;
}

impl<F: MomentFormatter + ?Sized> MomentFormatter for Box<F> {
    fn format(
        &self,
        moment: OffsetDateTime,
        config: FormatterConfig,
    ) -> Result<String, FormatError> {
        (**self).format(moment, config)
    }
}

/// en-US styles rendered with `time` format descriptions.
///
/// | style | date                       | time                   |
/// |-------|----------------------------|------------------------|
/// | short | `10/19/26`                 | `3:04 PM`              |
/// | full  | `Monday, October 19, 2026` | `3:04:05 PM UTC+02:00` |
///
/// A full date is joined to a time with `" at "`, a short one with `", "`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardFormatter;

const SHORT_DATE: &[BorrowedFormatItem<'_>] =
    format_description!("[month padding:none]/[day padding:none]/[year repr:last_two]");
const FULL_DATE: &[BorrowedFormatItem<'_>] =
    format_description!("[weekday], [month repr:long] [day padding:none], [year]");
const SHORT_TIME: &[BorrowedFormatItem<'_>] =
    format_description!("[hour repr:12 padding:none]:[minute] [period]");
const FULL_TIME: &[BorrowedFormatItem<'_>] = format_description!(
    "[hour repr:12 padding:none]:[minute]:[second] [period] UTC[offset_hour sign:mandatory]:[offset_minute]"
);

impl StandardFormatter {
    fn date(moment: OffsetDateTime, style: DateStyle) -> Result<Option<String>, FormatError> {
        let pattern = match style {
            DateStyle::None => return Ok(None),
            DateStyle::Short => SHORT_DATE,
            DateStyle::Full => FULL_DATE,
        };
        Ok(Some(moment.format(pattern)?))
    }

    fn time(moment: OffsetDateTime, style: TimeStyle) -> Result<Option<String>, FormatError> {
        let pattern = match style {
            TimeStyle::None => return Ok(None),
            TimeStyle::Short => SHORT_TIME,
            TimeStyle::Full => FULL_TIME,
        };
        Ok(Some(moment.format(pattern)?))
    }
}

impl MomentFormatter for StandardFormatter {
    fn format(
        &self,
        moment: OffsetDateTime,
        config: FormatterConfig,
    ) -> Result<String, FormatError> {
        let date = Self::date(moment, config.date_style)?;
        let time = Self::time(moment, config.time_style)?;

        Ok(match (date, time) {
            (Some(date), Some(time)) => {
                let joiner = if config.date_style == DateStyle::Full {
                    " at "
                } else {
                    ", "
                };
                format!("{date}{joiner}{time}")
            }
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => String::new(),
        })
    }
}
