//! Terminal playground for the date chooser.
//!
//! ```text
//! chooser-demo --with time-only --with remove-date --minute-interval 15 \
//!     wheel=2026-10-19T08:52:00Z save
//! ```

use std::{path::PathBuf, str::FromStr};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use datechooser::{
    debug,
    i18n::{Catalog, Catalogs},
    prelude::*,
};
use time::format_description::well_known::Rfc3339;

#[derive(Parser)]
#[command(name = "chooser-demo")]
#[command(about = "Drive a date chooser and print what it would show", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load the chooser configuration from a TOML file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Raw capability bitmask, replacing the configured set
    #[arg(long, value_name = "BITS")]
    capabilities: Option<u32>,

    /// Enable a capability on top of the configured set
    #[arg(long = "with", value_enum, value_name = "CAPABILITY")]
    with: Vec<CapabilityArg>,

    /// Minute step of the time wheel
    #[arg(long, value_name = "MINUTES")]
    minute_interval: Option<u32>,

    /// Starting moment of the wheel (RFC 3339)
    #[arg(long, value_name = "MOMENT")]
    start: Option<String>,

    /// Locale for the chooser's strings; the system locale when omitted
    #[arg(long, value_name = "TAG")]
    locale: Option<String>,

    /// Extra translation catalog to consider
    #[arg(long, value_name = "PATH")]
    catalog: Vec<PathBuf>,

    /// Interactions to replay: date, time, wheel=<MOMENT>, remove, current, save
    steps: Vec<Step>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CapabilityArg {
    /// Show the "Remove date" action
    RemoveDate,
    /// Show the "Set to current" action
    SetToCurrent,
    /// Time wheel with a date/time switch
    Separate,
    /// Time wheel only
    TimeOnly,
    /// Combined date and time wheel
    Combined,
}

impl From<CapabilityArg> for Capabilities {
    fn from(arg: CapabilityArg) -> Self {
        match arg {
            CapabilityArg::RemoveDate => Self::REMOVE_DATE,
            CapabilityArg::SetToCurrent => Self::SET_TO_CURRENT,
            CapabilityArg::Separate => Self::DATE_AND_TIME_SEPARATE,
            CapabilityArg::TimeOnly => Self::TIME_ONLY,
            CapabilityArg::Combined => Self::DATE_AND_TIME_COMBINED,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Step(ChooserEvent);

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let event = match s {
            "date" => ChooserEvent::SegmentChanged(Segment::Date),
            "time" => ChooserEvent::SegmentChanged(Segment::Time),
            "remove" => ChooserEvent::RemoveDate,
            "current" => ChooserEvent::SetToCurrent,
            "save" => ChooserEvent::Save,
            other => {
                let Some(moment) = other.strip_prefix("wheel=") else {
                    return Err(format!("unknown step `{other}`"));
                };
                ChooserEvent::WheelChanged(parse_moment(moment)?)
            }
        };
        Ok(Self(event))
    }
}

fn parse_moment(value: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|err| format!("invalid moment `{value}`: {err}"))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    debug::install_tracing_with_level(match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    });

    let config = load_config(&cli)?;
    let localizer = load_localizer(&cli)?;

    let saved: Binding<Option<OffsetDateTime>> = binding(None::<OffsetDateTime>);
    let mut chooser = DateChooser::with_config(config, &saved).localizer(localizer);

    print_layout(&chooser.layout());
    replay(&mut chooser, &cli.steps);

    match saved.get() {
        Some(moment) => tracing::info!(%moment, "host binding holds a date"),
        None => tracing::info!("host binding holds no date"),
    }
    Ok(())
}

fn replay(chooser: &mut DateChooser, steps: &[Step]) {
    for &Step(event) in steps {
        tracing::info!(?event, "replaying step");
        chooser.handle(event);
        print_layout(&chooser.layout());
    }
}

fn load_config(cli: &Cli) -> Result<DateChooserConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            DateChooserConfig::from_toml_str(&source)
                .wrap_err_with(|| format!("failed to parse {}", path.display()))?
        }
        None => DateChooserConfig::default(),
    };

    if let Some(bits) = cli.capabilities {
        config.capabilities = Capabilities::from_raw(bits);
    }
    for capability in &cli.with {
        config.capabilities |= Capabilities::from(*capability);
    }
    if let Some(minutes) = cli.minute_interval {
        config.minute_interval = MinuteInterval::new(minutes)?;
    }
    if let Some(start) = &cli.start {
        config.starting_moment = Some(parse_moment(start).map_err(color_eyre::eyre::Report::msg)?);
    }
    Ok(config)
}

fn load_localizer(cli: &Cli) -> Result<Catalog> {
    let mut catalogs = Catalogs::builtin()?;
    for path in &cli.catalog {
        catalogs.push(Catalog::load(path)?);
    }
    Ok(match &cli.locale {
        Some(locale) => catalogs.localizer_for(locale),
        None => catalogs.for_system(),
    })
}

fn print_layout(layout: &ChooserLayout) {
    println!();
    for section in layout.visible() {
        match &section.kind {
            SectionKind::Label { text, .. } => println!("  {text}"),
            SectionKind::ModeSwitch {
                segments: [date, time],
                selected,
                ..
            } => match selected {
                Segment::Date => println!("  [{date}] {time} "),
                Segment::Time => println!("   {date} [{time}]"),
            },
            SectionKind::Wheel {
                mode,
                minute_interval,
                value,
            } => println!("  <wheel {mode:?}, {minute_interval}: {value}>"),
            SectionKind::Rule { .. } => println!("  ----------------"),
            SectionKind::Button { title, tint, .. } => println!("  ( {title} ) {tint}"),
        }
    }
}
