//! The date chooser state machine.

use datechooser_core::{
    Capabilities, FormatterConfig, Message, MomentFormatter, Resolution, StandardFormatter,
    resolve,
};
use datechooser_i18n::{Localizer, Passthrough};
use nami::Binding;
use time::OffsetDateTime;

use crate::{
    clock::{Clock, SystemClock},
    config::{DateChooserConfig, MinuteInterval},
    layout::{
        BUTTON_HEIGHT, ButtonRole, ChooserLayout, INNER_MARGIN, INNER_RULE_HEIGHT, Insets,
        Section, SectionId, SectionKind,
    },
    style::ChooserStyle,
};

const TARGET: &str = "datechooser";

/// Segment of the date/time mode switch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Show the full date in place of the wheel.
    Date,
    /// Show the time wheel.
    #[default]
    Time,
}

/// Input a backend forwards from the native controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooserEvent {
    /// The mode switch moved to another segment.
    SegmentChanged(Segment),
    /// The wheel settled on a new moment.
    WheelChanged(OffsetDateTime),
    /// The remove button was tapped.
    RemoveDate,
    /// The set-to-current button was tapped.
    SetToCurrent,
    /// The save button was tapped.
    Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    /// Nothing picked yet; reads as the wheel's moment.
    Untouched,
    Chosen(OffsetDateTime),
    Removed,
}

/// A composite date/time picker.
///
/// The chooser stacks a title showing the chosen moment, an optional
/// date/time switch, a wheel, and up to three actions. Which of these appear
/// and how the title is formatted follow from the configured
/// [`Capabilities`] through [`resolve`].
///
/// The host passes a binding that receives the chosen moment when the user
/// taps "Save"; until then, edits stay inside the chooser.
///
/// # Examples
///
/// ```
/// use datechooser_core::Capabilities;
/// use datechooser_widget::DateChooser;
/// use nami::{Binding, binding};
/// use time::OffsetDateTime;
///
/// let saved: Binding<Option<OffsetDateTime>> = binding(None::<OffsetDateTime>);
/// let mut chooser = DateChooser::new(&saved);
/// chooser.set_capabilities(Capabilities::TIME_ONLY | Capabilities::SET_TO_CURRENT);
///
/// chooser.set_to_current();
/// chooser.save();
/// assert!(saved.get().is_some());
/// ```
#[derive(Debug)]
pub struct DateChooser {
    config: DateChooserConfig,
    resolution: Resolution,
    segment: Segment,
    wheel: OffsetDateTime,
    selection: Selection,
    title: String,
    saved: Binding<Option<OffsetDateTime>>,
    localizer: Box<dyn Localizer>,
    formatter: Box<dyn MomentFormatter>,
    clock: Box<dyn Clock>,
}

impl DateChooser {
    /// Creates a chooser with the standard configuration that saves into `saved`.
    #[must_use]
    pub fn new(saved: &Binding<Option<OffsetDateTime>>) -> Self {
        Self::with_config(DateChooserConfig::default(), saved)
    }

    /// Creates a chooser from an explicit configuration.
    #[must_use]
    pub fn with_config(
        config: DateChooserConfig,
        saved: &Binding<Option<OffsetDateTime>>,
    ) -> Self {
        let mut chooser = Self {
            resolution: resolve(config.capabilities),
            config,
            segment: Segment::default(),
            wheel: OffsetDateTime::UNIX_EPOCH,
            selection: Selection::Untouched,
            title: String::new(),
            saved: saved.clone(),
            localizer: Box::new(Passthrough),
            formatter: Box::new(StandardFormatter),
            clock: Box::new(SystemClock),
        };
        chooser.seed_from_starting_moment();
        chooser.apply_configuration();
        chooser
    }

    /// Replaces the translation service.
    #[must_use]
    pub fn localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self.apply_configuration();
        self
    }

    /// Replaces the formatting service.
    #[must_use]
    pub fn formatter(mut self, formatter: impl MomentFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self.apply_configuration();
        self
    }

    /// Replaces the clock and re-reads "now" if no starting moment is set.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self.seed_from_starting_moment();
        self.apply_configuration();
        self
    }

    /// Edits the configuration, then applies it once.
    ///
    /// A changed starting moment also moves the wheel and resets the selection.
    pub fn update(&mut self, edit: impl FnOnce(&mut DateChooserConfig)) {
        let previous_start = self.config.starting_moment;
        edit(&mut self.config);
        if self.config.starting_moment != previous_start {
            self.seed_from_starting_moment();
        }
        self.apply_configuration();
    }

    /// Replaces the capability set.
    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.update(|config| config.capabilities = capabilities);
    }

    /// Replaces the wheel's minute step.
    pub fn set_minute_interval(&mut self, interval: MinuteInterval) {
        self.update(|config| config.minute_interval = interval);
    }

    /// Replaces the cosmetic options.
    pub fn set_style(&mut self, style: ChooserStyle) {
        self.update(|config| config.style = style);
    }

    /// Moves the wheel to `moment`, or to now when `None`, and makes it the
    /// chosen moment. Always re-seeds, even if the value is unchanged.
    pub fn set_starting_moment(&mut self, moment: Option<OffsetDateTime>) {
        let unchanged = self.config.starting_moment == moment;
        self.update(|config| config.starting_moment = moment);
        if unchanged {
            self.seed_from_starting_moment();
            self.align_to_grid();
            self.render_title();
        }
    }

    /// Re-derives presentation from the configuration and re-renders the title.
    ///
    /// Every configuration change funnels through here. When the wheel edits
    /// time, the held moments are moved onto the minute grid.
    pub fn apply_configuration(&mut self) {
        self.resolution = resolve(self.config.capabilities);
        self.align_to_grid();
        tracing::debug!(
            target: TARGET,
            capabilities = self.config.capabilities.bits(),
            picker_mode = ?self.resolution.picker_mode,
            formatter = ?self.resolution.formatter,
            sections = ?self.resolution.sections,
            "applied configuration"
        );
        self.render_title();
    }

    /// Dispatches a backend event.
    pub fn handle(&mut self, event: ChooserEvent) {
        match event {
            ChooserEvent::SegmentChanged(segment) => self.select_segment(segment),
            ChooserEvent::WheelChanged(moment) => self.wheel_changed(moment),
            ChooserEvent::RemoveDate => self.remove_date(),
            ChooserEvent::SetToCurrent => self.set_to_current(),
            ChooserEvent::Save => {
                self.save();
            }
        }
    }

    /// Switches between the date label and the time wheel.
    ///
    /// Only affects the layout; the resolved picker mode stays as configured.
    pub fn select_segment(&mut self, segment: Segment) {
        tracing::trace!(target: TARGET, ?segment, "segment changed");
        self.segment = segment;
    }

    /// Takes the wheel's new position as the chosen moment.
    ///
    /// Moments from a wheel that edits time are snapped down to the minute
    /// interval.
    pub fn wheel_changed(&mut self, moment: OffsetDateTime) {
        let moment = self.on_grid(moment);
        tracing::trace!(target: TARGET, %moment, "wheel changed");
        self.wheel = moment;
        self.selection = Selection::Chosen(moment);
        self.render_title();
    }

    /// Clears the chosen moment.
    pub fn remove_date(&mut self) {
        tracing::debug!(target: TARGET, "date removed");
        self.selection = Selection::Removed;
        self.render_title();
    }

    /// Chooses the current moment and moves the wheel to it.
    ///
    /// Snapped down to the minute interval when the wheel edits time.
    pub fn set_to_current(&mut self) {
        let now = self.on_grid(self.clock.now());
        tracing::debug!(target: TARGET, %now, "set to current");
        self.wheel = now;
        self.selection = Selection::Chosen(now);
        self.render_title();
    }

    /// Hands the chosen moment to the host binding and returns it.
    pub fn save(&mut self) -> Option<OffsetDateTime> {
        let moment = self.chosen_moment();
        match moment {
            Some(moment) => tracing::info!(target: TARGET, %moment, "saved date"),
            None => tracing::info!(target: TARGET, "saved without a date"),
        }
        self.saved.set(moment);
        moment
    }

    /// The moment the chooser currently holds: the wheel's moment if nothing
    /// was picked yet, `None` after removal.
    #[must_use]
    pub const fn chosen_moment(&self) -> Option<OffsetDateTime> {
        match self.selection {
            Selection::Untouched => Some(self.wheel),
            Selection::Chosen(moment) => Some(moment),
            Selection::Removed => None,
        }
    }

    /// The last saved moment, as seen by the host.
    #[must_use]
    pub fn saved_moment(&self) -> Option<OffsetDateTime> {
        self.saved.get()
    }

    /// The moment the wheel shows.
    #[must_use]
    pub const fn wheel_moment(&self) -> OffsetDateTime {
        self.wheel
    }

    /// The title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Presentation derived from the current capabilities.
    #[must_use]
    pub const fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// The selected segment of the mode switch.
    #[must_use]
    pub const fn segment(&self) -> Segment {
        self.segment
    }

    /// The current configuration.
    #[must_use]
    pub const fn config(&self) -> &DateChooserConfig {
        &self.config
    }

    /// Builds the view tree for the current state.
    #[must_use]
    pub fn layout(&self) -> ChooserLayout {
        let style = &self.config.style;
        let sections = self.resolution.sections;
        let show_date_label = sections.mode_switch && self.segment == Segment::Date;

        let mut stack = vec![
            Section::new(
                SectionId::Title,
                SectionKind::Label {
                    text: self.title.clone(),
                    color: style.title_color,
                    font: style.title_font,
                },
            )
            .insets(Insets::horizontal(INNER_MARGIN)),
            Section::new(
                SectionId::ModeSwitch,
                SectionKind::ModeSwitch {
                    segments: [
                        self.localizer.message(Message::DateSegment).into_owned(),
                        self.localizer.message(Message::TimeSegment).into_owned(),
                    ],
                    selected: self.segment,
                    tint: style.tint_color,
                },
            )
            .insets(Insets::new(
                INNER_MARGIN,
                INNER_MARGIN * 2.0,
                INNER_MARGIN,
                INNER_MARGIN * 2.0,
            ))
            .hidden(!sections.mode_switch),
            Section::new(
                SectionId::DateLabel,
                SectionKind::Label {
                    text: self.render(FormatterConfig::DATE),
                    color: style.title_color,
                    font: style.title_font,
                },
            )
            .insets(Insets::horizontal(INNER_MARGIN))
            .hidden(!show_date_label),
            Section::new(
                SectionId::Wheel,
                SectionKind::Wheel {
                    mode: self.resolution.picker_mode,
                    minute_interval: self.config.minute_interval,
                    value: self.wheel,
                },
            )
            .hidden(show_date_label),
        ];

        let actions = [
            (
                SectionId::RemoveDateRule,
                SectionId::RemoveDateButton,
                ButtonRole::RemoveDate,
                Message::RemoveDate,
                style.destructive_color,
                sections.remove_date,
            ),
            (
                SectionId::SetToCurrentRule,
                SectionId::SetToCurrentButton,
                ButtonRole::SetToCurrent,
                self.resolution.set_to_current_label,
                style.neutral_color,
                sections.set_to_current,
            ),
            (
                SectionId::SaveRule,
                SectionId::SaveButton,
                ButtonRole::Save,
                Message::Save,
                style.tint_color,
                true,
            ),
        ];

        for (rule, button, role, message, tint, visible) in actions {
            stack.push(
                Section::new(
                    rule,
                    SectionKind::Rule {
                        color: style.inner_border_color,
                    },
                )
                .height(INNER_RULE_HEIGHT)
                .hidden(!visible),
            );
            stack.push(
                Section::new(
                    button,
                    SectionKind::Button {
                        role,
                        title: self.localizer.message(message).into_owned(),
                        tint,
                        font: style.button_font,
                    },
                )
                .height(BUTTON_HEIGHT)
                .hidden(!visible),
            );
        }

        ChooserLayout {
            corner_radius: style.corner_radius,
            top_inset: INNER_MARGIN,
            sections: stack,
        }
    }

    fn seed_from_starting_moment(&mut self) {
        match self.config.starting_moment {
            Some(moment) => {
                self.wheel = moment;
                self.selection = Selection::Chosen(moment);
            }
            None => {
                self.wheel = self.clock.now();
                self.selection = Selection::Untouched;
            }
        }
    }

    fn on_grid(&self, moment: OffsetDateTime) -> OffsetDateTime {
        if self.resolution.picker_mode.edits_time() {
            self.config.minute_interval.snap(moment)
        } else {
            moment
        }
    }

    // The wheel cannot show a moment between two minute steps.
    fn align_to_grid(&mut self) {
        self.wheel = self.on_grid(self.wheel);
        if let Selection::Chosen(moment) = self.selection {
            self.selection = Selection::Chosen(self.on_grid(moment));
        }
    }

    fn render_title(&mut self) {
        self.title = self.render(self.resolution.formatter);
    }

    fn render(&self, config: FormatterConfig) -> String {
        let Some(moment) = self.chosen_moment() else {
            return self.localizer.message(Message::NoDate).into_owned();
        };
        match self.formatter.format(moment, config) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(target: TARGET, %moment, error = %err, "failed to format moment");
                String::new()
            }
        }
    }
}
