use std::rc::Rc;

use datechooser_core::{
    Capabilities, FormatError, FormatterConfig, MomentFormatter, PickerMode,
};
use datechooser_i18n::Catalog;
use nami::{Binding, binding};
use time::{Duration, OffsetDateTime, macros::datetime};

use crate::*;

const NOW: OffsetDateTime = datetime!(2026-10-19 15:04:05 UTC);
const NOW_ON_GRID: OffsetDateTime = datetime!(2026-10-19 15:00 UTC);

fn saved() -> Binding<Option<OffsetDateTime>> {
    binding(None::<OffsetDateTime>)
}

fn chooser(capabilities: Capabilities, saved: &Binding<Option<OffsetDateTime>>) -> DateChooser {
    let config = DateChooserConfig {
        capabilities,
        ..DateChooserConfig::default()
    };
    DateChooser::with_config(config, saved).clock(ManualClock::new(NOW))
}

fn button_title(layout: &ChooserLayout, id: SectionId) -> String {
    layout.section(id).and_then(Section::text).unwrap().to_owned()
}

#[derive(Debug)]
struct Failing;

impl MomentFormatter for Failing {
    fn format(&self, _: OffsetDateTime, _: FormatterConfig) -> Result<String, FormatError> {
        Err(FormatError::Custom("no locale data".into()))
    }
}

#[test]
fn untouched_chooser_reads_as_now() {
    let saved = saved();
    let chooser = chooser(Capabilities::STANDARD, &saved);

    assert_eq!(chooser.chosen_moment(), Some(NOW));
    assert_eq!(chooser.wheel_moment(), NOW);
    assert_eq!(chooser.title(), "Monday, October 19, 2026");
    assert_eq!(chooser.saved_moment(), None);
}

#[test]
fn empty_capabilities_hide_every_option() {
    let saved = saved();
    let chooser = chooser(Capabilities::empty(), &saved);
    let layout = chooser.layout();

    assert_eq!(chooser.resolution().picker_mode, PickerMode::DateOnly);
    for id in [
        SectionId::ModeSwitch,
        SectionId::DateLabel,
        SectionId::RemoveDateRule,
        SectionId::RemoveDateButton,
        SectionId::SetToCurrentRule,
        SectionId::SetToCurrentButton,
    ] {
        assert!(!layout.is_visible(id), "{id:?} should be hidden");
    }
    for id in [
        SectionId::Title,
        SectionId::Wheel,
        SectionId::SaveRule,
        SectionId::SaveButton,
    ] {
        assert!(layout.is_visible(id), "{id:?} should be shown");
    }
    assert_eq!(button_title(&layout, SectionId::SetToCurrentButton), "Set to current date");
}

#[test]
fn combined_wheel_with_actions() {
    let saved = saved();
    let chooser = chooser(
        Capabilities::REMOVE_DATE
            | Capabilities::SET_TO_CURRENT
            | Capabilities::DATE_AND_TIME_COMBINED,
        &saved,
    );
    let layout = chooser.layout();

    assert!(layout.is_visible(SectionId::RemoveDateButton));
    assert!(layout.is_visible(SectionId::SetToCurrentButton));
    assert!(!layout.is_visible(SectionId::ModeSwitch));
    assert_eq!(
        button_title(&layout, SectionId::SetToCurrentButton),
        "Set to current date/time"
    );
    assert_eq!(chooser.title(), "Monday, October 19, 2026 at 3:00 PM");

    let Some(SectionKind::Wheel { mode, minute_interval, value }) =
        layout.section(SectionId::Wheel).map(|section| &section.kind)
    else {
        panic!("wheel section missing");
    };
    assert_eq!(*mode, PickerMode::DateAndTime);
    assert_eq!(*minute_interval, MinuteInterval::FIVE);
    assert_eq!(*value, NOW_ON_GRID);
}

#[test]
fn separate_mode_switches_between_label_and_wheel() {
    let saved = saved();
    let mut chooser = chooser(
        Capabilities::DATE_AND_TIME_SEPARATE | Capabilities::TIME_ONLY,
        &saved,
    );

    assert_eq!(chooser.segment(), Segment::Time);
    let layout = chooser.layout();
    assert!(layout.is_visible(SectionId::ModeSwitch));
    assert!(layout.is_visible(SectionId::Wheel));
    assert!(!layout.is_visible(SectionId::DateLabel));
    assert_eq!(chooser.title(), "Monday, October 19, 2026 at 3:00 PM");

    chooser.handle(ChooserEvent::SegmentChanged(Segment::Date));
    let layout = chooser.layout();
    assert!(!layout.is_visible(SectionId::Wheel));
    assert!(layout.is_visible(SectionId::DateLabel));
    assert_eq!(
        button_title(&layout, SectionId::DateLabel),
        "Monday, October 19, 2026"
    );
    assert_eq!(chooser.resolution().picker_mode, PickerMode::TimeOnly);
}

#[test]
fn segment_is_ignored_without_mode_switch() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::TIME_ONLY, &saved);
    chooser.select_segment(Segment::Date);

    let layout = chooser.layout();
    assert!(layout.is_visible(SectionId::Wheel));
    assert!(!layout.is_visible(SectionId::DateLabel));
}

#[test]
fn wheel_changes_snap_to_interval() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::TIME_ONLY, &saved);
    chooser.set_minute_interval(MinuteInterval::new(10).unwrap());

    chooser.handle(ChooserEvent::WheelChanged(datetime!(2026-10-19 08:47:31 UTC)));

    assert_eq!(chooser.chosen_moment(), Some(datetime!(2026-10-19 08:40 UTC)));
    assert_eq!(chooser.wheel_moment(), datetime!(2026-10-19 08:40 UTC));
    assert_eq!(chooser.title(), "8:40 AM");
}

#[test]
fn set_to_current_lands_on_minute_grid() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::TIME_ONLY, &saved);

    chooser.set_to_current();

    assert_eq!(chooser.chosen_moment(), Some(NOW_ON_GRID));
    let layout = chooser.layout();
    let Some(SectionKind::Wheel { value, .. }) =
        layout.section(SectionId::Wheel).map(|section| &section.kind)
    else {
        panic!("wheel section missing");
    };
    assert_eq!(*value, NOW_ON_GRID);
    assert_eq!(chooser.save(), Some(NOW_ON_GRID));
}

#[test]
fn off_grid_starting_moment_is_snapped() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::TIME_ONLY, &saved);

    chooser.set_starting_moment(Some(datetime!(2026-10-19 10:17:42 UTC)));
    assert_eq!(chooser.wheel_moment(), datetime!(2026-10-19 10:15 UTC));
    assert_eq!(chooser.chosen_moment(), Some(datetime!(2026-10-19 10:15 UTC)));

    chooser.set_starting_moment(Some(datetime!(2026-10-19 10:17:42 UTC)));
    assert_eq!(chooser.chosen_moment(), Some(datetime!(2026-10-19 10:15 UTC)));
}

#[test]
fn changing_interval_resnaps_held_moment() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::TIME_ONLY, &saved);
    chooser.set_minute_interval(MinuteInterval::new(15).unwrap());
    chooser.wheel_changed(datetime!(2026-10-19 08:45 UTC));

    chooser.set_minute_interval(MinuteInterval::new(20).unwrap());

    assert_eq!(chooser.chosen_moment(), Some(datetime!(2026-10-19 08:40 UTC)));
    assert_eq!(chooser.wheel_moment(), datetime!(2026-10-19 08:40 UTC));
    assert_eq!(chooser.title(), "8:40 AM");
}

#[test]
fn date_only_moments_keep_their_minutes() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::STANDARD, &saved);

    chooser.set_to_current();
    assert_eq!(chooser.chosen_moment(), Some(NOW));
}

#[test]
fn date_wheel_changes_are_not_snapped() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::empty(), &saved);
    let moment = datetime!(2026-12-24 08:47:31 UTC);

    chooser.wheel_changed(moment);

    assert_eq!(chooser.chosen_moment(), Some(moment));
    assert_eq!(chooser.title(), "Thursday, December 24, 2026");
}

#[test]
fn remove_then_save_publishes_none() {
    let saved = saved();
    saved.set(Some(NOW));
    let mut chooser = chooser(Capabilities::STANDARD, &saved);

    chooser.handle(ChooserEvent::RemoveDate);
    assert_eq!(chooser.chosen_moment(), None);
    assert_eq!(chooser.title(), "No date");
    assert_eq!(saved.get(), Some(NOW), "nothing is published before save");

    chooser.handle(ChooserEvent::Save);
    assert_eq!(saved.get(), None);
}

#[test]
fn save_publishes_chosen_moment() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::DATE_AND_TIME_COMBINED, &saved);
    let moment = datetime!(2027-03-01 12:30 UTC);

    chooser.wheel_changed(moment);
    assert_eq!(chooser.save(), Some(moment));
    assert_eq!(saved.get(), Some(moment));
    assert_eq!(chooser.saved_moment(), Some(moment));
}

#[test]
fn save_without_interaction_publishes_wheel() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::STANDARD, &saved);

    chooser.save();
    assert_eq!(saved.get(), Some(NOW));
}

#[test]
fn set_to_current_follows_clock() {
    let clock = Rc::new(ManualClock::new(NOW));
    let saved = saved();
    let mut chooser = DateChooser::new(&saved).clock(Rc::clone(&clock));

    chooser.remove_date();
    clock.advance(Duration::hours(2));
    chooser.handle(ChooserEvent::SetToCurrent);

    let later = NOW + Duration::hours(2);
    assert_eq!(chooser.chosen_moment(), Some(later));
    assert_eq!(chooser.wheel_moment(), later);
    assert_eq!(chooser.title(), "Monday, October 19, 2026");
}

#[test]
fn set_to_current_is_idempotent() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::STANDARD, &saved);

    chooser.set_to_current();
    let once = chooser.chosen_moment();
    chooser.set_to_current();

    assert_eq!(chooser.chosen_moment(), once);
}

#[test]
fn set_to_current_with_system_clock_stays_within_drift() {
    let saved = saved();
    let mut chooser = DateChooser::new(&saved);

    chooser.set_to_current();
    let once = chooser.chosen_moment().unwrap();
    chooser.set_to_current();
    let twice = chooser.chosen_moment().unwrap();

    assert!((twice - once).abs() < Duration::seconds(1));
}

#[test]
fn starting_moment_seeds_wheel_and_selection() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::DATE_AND_TIME_COMBINED, &saved);
    let start = datetime!(2025-07-04 18:00 UTC);

    chooser.set_starting_moment(Some(start));
    assert_eq!(chooser.wheel_moment(), start);
    assert_eq!(chooser.chosen_moment(), Some(start));
    assert_eq!(chooser.title(), "Friday, July 4, 2025 at 6:00 PM");

    chooser.wheel_changed(datetime!(2025-07-05 09:00 UTC));
    chooser.set_starting_moment(Some(start));
    assert_eq!(chooser.chosen_moment(), Some(start), "same value re-seeds");

    chooser.set_starting_moment(None);
    assert_eq!(chooser.wheel_moment(), NOW_ON_GRID);
    assert_eq!(chooser.chosen_moment(), Some(NOW_ON_GRID));
}

#[test]
fn replacing_capabilities_rerenders_title() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::empty(), &saved);
    assert_eq!(chooser.title(), "Monday, October 19, 2026");

    chooser.set_capabilities(Capabilities::TIME_ONLY);
    assert_eq!(chooser.title(), "3:00 PM");
    assert_eq!(
        chooser.resolution().set_to_current_label_text(),
        "Set to current time"
    );
}

#[test]
fn update_applies_batched_changes_once() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::empty(), &saved);
    let start = datetime!(2026-01-01 10:17 UTC);

    chooser.update(|config| {
        config.capabilities = Capabilities::DATE_AND_TIME_COMBINED;
        config.minute_interval = MinuteInterval::new(15).unwrap();
        config.starting_moment = Some(start);
    });

    assert_eq!(chooser.resolution().picker_mode, PickerMode::DateAndTime);
    assert_eq!(chooser.config().minute_interval.minutes(), 15);
    assert_eq!(chooser.title(), "Thursday, January 1, 2026 at 10:15 AM");
    assert_eq!(chooser.chosen_moment(), Some(datetime!(2026-01-01 10:15 UTC)));
}

#[test]
fn localized_titles() {
    let saved = saved();
    let chooser = chooser(
        Capabilities::all() - Capabilities::TIME_ONLY - Capabilities::DATE_AND_TIME_COMBINED,
        &saved,
    )
    .localizer(Catalog::builtin("de").unwrap());
    let layout = chooser.layout();

    assert_eq!(button_title(&layout, SectionId::RemoveDateButton), "Datum entfernen");
    assert_eq!(
        button_title(&layout, SectionId::SetToCurrentButton),
        "Auf aktuelles Datum/Uhrzeit setzen"
    );
    assert_eq!(button_title(&layout, SectionId::SaveButton), "Sichern");
    let Some(SectionKind::ModeSwitch { segments, .. }) =
        layout.section(SectionId::ModeSwitch).map(|section| &section.kind)
    else {
        panic!("mode switch missing");
    };
    assert_eq!(segments, &["Datum".to_owned(), "Uhrzeit".to_owned()]);
}

#[test]
fn localized_placeholder_after_removal() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::STANDARD, &saved)
        .localizer(Catalog::builtin("fr").unwrap());

    chooser.remove_date();
    assert_eq!(chooser.title(), "Aucune date");
}

#[test]
fn formatter_failure_leaves_title_empty() {
    let saved = saved();
    let chooser = chooser(Capabilities::STANDARD, &saved).formatter(Failing);
    assert_eq!(chooser.title(), "");
}

#[test]
fn style_reaches_layout() {
    let saved = saved();
    let mut chooser = chooser(Capabilities::STANDARD, &saved);
    let style = ChooserStyle {
        corner_radius: 10.0,
        destructive_color: datechooser_color::Srgb::from_hex("#B00020"),
        button_font: Font::system(18.0).weight(FontWeight::SemiBold),
        ..ChooserStyle::default()
    };
    chooser.set_style(style.clone());
    let layout = chooser.layout();

    assert!((layout.corner_radius - 10.0).abs() < f32::EPSILON);
    let Some(SectionKind::Button { tint, font, role, .. }) =
        layout.section(SectionId::RemoveDateButton).map(|section| &section.kind)
    else {
        panic!("remove button missing");
    };
    assert_eq!(*role, ButtonRole::RemoveDate);
    assert_eq!(*tint, style.destructive_color);
    assert_eq!(*font, style.button_font);
}

#[test]
fn layout_order_and_fixed_heights() {
    let saved = saved();
    let chooser = chooser(Capabilities::all(), &saved);
    let layout = chooser.layout();

    let order: Vec<SectionId> = layout.sections.iter().map(|section| section.id).collect();
    assert_eq!(
        order,
        [
            SectionId::Title,
            SectionId::ModeSwitch,
            SectionId::DateLabel,
            SectionId::Wheel,
            SectionId::RemoveDateRule,
            SectionId::RemoveDateButton,
            SectionId::SetToCurrentRule,
            SectionId::SetToCurrentButton,
            SectionId::SaveRule,
            SectionId::SaveButton,
        ]
    );
    // top inset + three rules + three buttons
    assert!((layout.fixed_height() - (8.0 + 3.0 * 1.0 + 3.0 * 44.0)).abs() < f32::EPSILON);
    assert_eq!(
        layout.section(SectionId::ModeSwitch).unwrap().insets,
        layout::Insets::new(8.0, 16.0, 8.0, 16.0)
    );
}

#[test]
fn button_roles_map_to_events() {
    assert_eq!(ButtonRole::RemoveDate.event(), ChooserEvent::RemoveDate);
    assert_eq!(ButtonRole::SetToCurrent.event(), ChooserEvent::SetToCurrent);
    assert_eq!(ButtonRole::Save.event(), ChooserEvent::Save);
}
