//! Mapping from a capability set to what the chooser presents.

use crate::{Capabilities, FormatterConfig, Message, PickerMode};

/// Which optional sections of the chooser are shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleSections {
    /// The "Remove date" separator and button.
    pub remove_date: bool,
    /// The "Set to current" separator and button.
    pub set_to_current: bool,
    /// The segmented date/time switch.
    pub mode_switch: bool,
}

/// Everything derived from a [`Capabilities`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Optional sections to show.
    pub sections: VisibleSections,
    /// Axis the wheel edits.
    pub picker_mode: PickerMode,
    /// Styles used to render the chosen moment.
    pub formatter: FormatterConfig,
    /// Title of the "Set to current" button.
    pub set_to_current_label: Message,
}

impl Resolution {
    /// English text of the "Set to current" button.
    #[must_use]
    pub const fn set_to_current_label_text(&self) -> &'static str {
        self.set_to_current_label.key()
    }
}

impl Default for Resolution {
    fn default() -> Self {
        resolve(Capabilities::default())
    }
}

/// Resolves a capability set into its presentation.
///
/// Total and pure: any set, including the empty one, yields exactly one
/// picker mode and one formatter configuration. Section visibility follows
/// each flag directly, while mode, styles and label take the first match of
/// `DATE_AND_TIME_SEPARATE`, `TIME_ONLY`, `DATE_AND_TIME_COMBINED`, falling
/// back to a date-only wheel.
#[must_use]
pub fn resolve(capabilities: Capabilities) -> Resolution {
    let separate = capabilities.contains(Capabilities::DATE_AND_TIME_SEPARATE);
    let sections = VisibleSections {
        remove_date: capabilities.contains(Capabilities::REMOVE_DATE),
        set_to_current: capabilities.contains(Capabilities::SET_TO_CURRENT),
        mode_switch: separate,
    };

    let (picker_mode, formatter, set_to_current_label) = if separate {
        (
            PickerMode::TimeOnly,
            FormatterConfig::DATE_AND_TIME,
            Message::SetToCurrentDateTime,
        )
    } else if capabilities.contains(Capabilities::TIME_ONLY) {
        (
            PickerMode::TimeOnly,
            FormatterConfig::TIME,
            Message::SetToCurrentTime,
        )
    } else if capabilities.contains(Capabilities::DATE_AND_TIME_COMBINED) {
        (
            PickerMode::DateAndTime,
            FormatterConfig::DATE_AND_TIME,
            Message::SetToCurrentDateTime,
        )
    } else {
        (
            PickerMode::DateOnly,
            FormatterConfig::DATE,
            Message::SetToCurrentDate,
        )
    };

    Resolution {
        sections,
        picker_mode,
        formatter,
        set_to_current_label,
    }
}
