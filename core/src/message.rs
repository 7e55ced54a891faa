use core::fmt;

/// Every user-visible string the date chooser displays.
///
/// A message's lookup key is its English text, so an untranslated message
/// still reads correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Date segment of the mode switch.
    DateSegment,
    /// Time segment of the mode switch.
    TimeSegment,
    /// Title of the remove button.
    RemoveDate,
    /// Title of the save button.
    Save,
    /// Set-to-current title when the wheel edits the date only.
    SetToCurrentDate,
    /// Set-to-current title when the wheel edits the time only.
    SetToCurrentTime,
    /// Set-to-current title when both date and time are edited.
    SetToCurrentDateTime,
    /// Title placeholder once the date has been removed.
    NoDate,
}

impl Message {
    /// All messages, in display order.
    pub const ALL: [Self; 8] = [
        Self::DateSegment,
        Self::TimeSegment,
        Self::RemoveDate,
        Self::Save,
        Self::SetToCurrentDate,
        Self::SetToCurrentTime,
        Self::SetToCurrentDateTime,
        Self::NoDate,
    ];

    /// Returns the lookup key, which doubles as the English text.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::DateSegment => "Date",
            Self::TimeSegment => "Time",
            Self::RemoveDate => "Remove date",
            Self::Save => "Save",
            Self::SetToCurrentDate => "Set to current date",
            Self::SetToCurrentTime => "Set to current time",
            Self::SetToCurrentDateTime => "Set to current date/time",
            Self::NoDate => "No date",
        }
    }

    /// A note for translators describing where the message appears.
    #[must_use]
    pub const fn comment(self) -> &'static str {
        match self {
            Self::DateSegment => "Title for date in segmented control",
            Self::TimeSegment => "Title for time in segmented control",
            Self::RemoveDate => "Button title to remove date",
            Self::Save => "Save button title",
            Self::SetToCurrentDate => "Button title to set date to current date",
            Self::SetToCurrentTime => "Button title to set date to current time",
            Self::SetToCurrentDateTime => {
                "Button title to set date to current date and time"
            }
            Self::NoDate => "Title shown when no date is chosen",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
