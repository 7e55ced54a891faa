//! Backend-neutral description of the chooser's view tree.
//!
//! A [`ChooserLayout`] is a vertical stack of [`Section`]s in a fixed order.
//! Sections are never added or removed when capabilities change; they are
//! hidden instead, so a backend can keep one native view per [`SectionId`]
//! and only toggle visibility.
//
// ═══════════════════════════════════════════════════════════════════════════
// INTERNAL: Layout Contract for Backend Implementers
// ═══════════════════════════════════════════════════════════════════════════
//
// Stack: vertical, children fill the width, inset `top_inset` from the top.
// Rules and buttons have a fixed height; everything else sizes to content.
// Hidden sections take no space.
//
// ═══════════════════════════════════════════════════════════════════════════

use datechooser_color::Srgb;
use datechooser_core::PickerMode;
use time::OffsetDateTime;

use crate::{
    ChooserEvent, Segment,
    config::MinuteInterval,
    style::Font,
};

/// Spacing between the chooser's edge and its content, in points.
pub const INNER_MARGIN: f32 = 8.0;
/// Thickness of the rules above each button, in points.
pub const INNER_RULE_HEIGHT: f32 = 1.0;
/// Height of each action button, in points.
pub const BUTTON_HEIGHT: f32 = 44.0;

/// Edge insets of a section within the stack.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Insets {
    /// Top inset.
    pub top: f32,
    /// Leading inset.
    pub leading: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Trailing inset.
    pub trailing: f32,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates insets from all four edges.
    #[must_use]
    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Equal leading and trailing insets.
    #[must_use]
    pub const fn horizontal(value: f32) -> Self {
        Self::new(0.0, value, 0.0, value)
    }
}

/// The three action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    /// Clears the chosen moment.
    RemoveDate,
    /// Sets the chosen moment to now.
    SetToCurrent,
    /// Hands the chosen moment to the host.
    Save,
}

impl ButtonRole {
    /// Event a backend sends when the button is tapped.
    #[must_use]
    pub const fn event(self) -> ChooserEvent {
        match self {
            Self::RemoveDate => ChooserEvent::RemoveDate,
            Self::SetToCurrent => ChooserEvent::SetToCurrent,
            Self::Save => ChooserEvent::Save,
        }
    }
}

/// Stable identity of each slot in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Label showing the chosen moment.
    Title,
    /// Segmented date/time switch.
    ModeSwitch,
    /// Full date shown in place of the wheel.
    DateLabel,
    /// Wheel selector.
    Wheel,
    /// Rule above the remove button.
    RemoveDateRule,
    /// Remove button.
    RemoveDateButton,
    /// Rule above the set-to-current button.
    SetToCurrentRule,
    /// Set-to-current button.
    SetToCurrentButton,
    /// Rule above the save button.
    SaveRule,
    /// Save button.
    SaveButton,
}

/// What a section displays.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionKind {
    /// A line of text.
    Label {
        /// Text to display.
        text: String,
        /// Text color.
        color: Srgb,
        /// Text font.
        font: Font,
    },
    /// Two-segment control switching between date and time.
    ModeSwitch {
        /// Localized titles of the date and time segments.
        segments: [String; 2],
        /// Selected segment.
        selected: Segment,
        /// Selection tint.
        tint: Srgb,
    },
    /// The wheel selector.
    Wheel {
        /// Axis the wheel edits.
        mode: PickerMode,
        /// Step of the minute column.
        minute_interval: MinuteInterval,
        /// Moment the wheel shows.
        value: OffsetDateTime,
    },
    /// A thin horizontal rule.
    Rule {
        /// Rule color.
        color: Srgb,
    },
    /// An action button.
    Button {
        /// Which action the button triggers.
        role: ButtonRole,
        /// Localized title.
        title: String,
        /// Title tint.
        tint: Srgb,
        /// Title font.
        font: Font,
    },
}

/// One slot of the chooser's vertical stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Identity of the slot.
    pub id: SectionId,
    /// Content of the slot.
    pub kind: SectionKind,
    /// Whether the slot is collapsed.
    pub hidden: bool,
    /// Insets around the content.
    pub insets: Insets,
    /// Fixed height, if any.
    pub height: Option<f32>,
}

impl Section {
    pub(crate) const fn new(id: SectionId, kind: SectionKind) -> Self {
        Self {
            id,
            kind,
            hidden: false,
            insets: Insets::ZERO,
            height: None,
        }
    }

    pub(crate) const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub(crate) const fn insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub(crate) const fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Text shown by a label or button section.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            SectionKind::Label { text, .. } | SectionKind::Button { title: text, .. } => {
                Some(text)
            }
            _ => None,
        }
    }
}

/// The complete view tree of a chooser.
#[derive(Debug, Clone, PartialEq)]
pub struct ChooserLayout {
    /// Corner radius of the background.
    pub corner_radius: f32,
    /// Inset of the stack from the top edge.
    pub top_inset: f32,
    /// Sections from top to bottom.
    pub sections: Vec<Section>,
}

impl ChooserLayout {
    /// Looks up a section by identity.
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Returns `true` if the section exists and is shown.
    #[must_use]
    pub fn is_visible(&self, id: SectionId) -> bool {
        self.section(id).is_some_and(|section| !section.hidden)
    }

    /// Shown sections from top to bottom.
    pub fn visible(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|section| !section.hidden)
    }

    /// Sum of the fixed heights of shown sections.
    #[must_use]
    pub fn fixed_height(&self) -> f32 {
        self.top_inset + self.visible().filter_map(|section| section.height).sum::<f32>()
    }
}
