use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, NaiveDateTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;

use life_milestones::config::{MilestoneSettings, ProfileDocument};
use life_milestones::domain::{age, formatting, queries, MilestoneService, Origin};
use shared::{
    CustomEvent, CustomEventCategory, GenerateMilestonesRequest, Milestone, MilestoneCategory,
    MilestoneFilter, TimeFilter, BIRTH_LABEL,
};

#[derive(Parser)]
#[command(author, version, about = "Find the mathematically interesting dates in your life")]
struct Cli {
    /// Path to the settings file. Defaults to <config dir>/life-milestones/settings.yaml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List milestones
    List {
        #[command(flatten)]
        origin: OriginArgs,
        /// all, future or past
        #[arg(long, default_value = "all")]
        when: TimeFilter,
        /// Only show one category (e.g. Power, Birthday, Custom)
        #[arg(long)]
        category: Option<MilestoneCategory>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Maximum rows to print. Defaults to the settings' display_limit
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show the next upcoming milestones
    Next {
        #[command(flatten)]
        origin: OriginArgs,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Show current age statistics and the birthday countdown
    Age {
        #[command(flatten)]
        origin: OriginArgs,
    },
}

#[derive(Args)]
struct OriginArgs {
    /// YAML file with `profile` and `custom_events`
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    dob: Option<String>,
    /// Time of birth, HH:MM
    #[arg(long)]
    tob: Option<String>,
    /// Custom event as NAME=YYYY-MM-DD (repeatable)
    #[arg(long = "event", value_parser = parse_event)]
    events: Vec<CustomEvent>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Serialize)]
struct MilestoneRow<'a> {
    id: &'a str,
    date: String,
    title: &'a str,
    category: &'static str,
    value: u64,
    unit: &'static str,
    source: &'a str,
    is_past: bool,
    description: &'a str,
}

impl<'a> From<&'a Milestone> for MilestoneRow<'a> {
    fn from(m: &'a Milestone) -> Self {
        Self {
            id: &m.id,
            date: m.date.format("%Y-%m-%d %H:%M").to_string(),
            title: &m.title,
            category: m.category.as_str(),
            value: m.value,
            unit: m.unit.as_str(),
            source: &m.source_event_name,
            is_past: m.is_past,
            description: &m.description,
        }
    }
}

fn parse_event(raw: &str) -> Result<CustomEvent, String> {
    match raw.split_once('=') {
        Some((name, date)) if !name.trim().is_empty() && !date.trim().is_empty() => Ok(
            CustomEvent::new(name.trim(), date.trim(), CustomEventCategory::Other),
        ),
        _ => Err(format!("Invalid event '{}'. Expected NAME=YYYY-MM-DD", raw)),
    }
}

fn build_request(args: &OriginArgs, settings: &MilestoneSettings) -> Result<GenerateMilestonesRequest> {
    let mut request = match &args.profile {
        Some(path) => ProfileDocument::load_from(path)?.to_request(settings),
        None => GenerateMilestonesRequest {
            time_of_birth: settings.default_time_of_birth.clone(),
            ..GenerateMilestonesRequest::default()
        },
    };

    if let Some(dob) = &args.dob {
        request.date_of_birth = Some(dob.clone());
    }
    if let Some(tob) = &args.tob {
        request.time_of_birth = Some(tob.clone());
    }
    request.custom_events.extend(args.events.iter().cloned());

    if request.date_of_birth.is_none() {
        bail!("A date of birth is required (--dob or --profile)");
    }
    Ok(request)
}

fn print_milestones(milestones: &[&Milestone], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for m in milestones {
                let marker = if m.is_past { "✓" } else { " " };
                let source = if m.is_from_birth() {
                    String::new()
                } else {
                    format!(" [{}]", m.source_event_name)
                };
                println!(
                    "{} {}  {:<22} {:<9}{}",
                    m.date.format("%Y-%m-%d %H:%M"),
                    marker,
                    m.title,
                    m.category,
                    source
                );
                println!("                     {}", m.description);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(milestones).context("Failed to encode milestones")?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            for m in milestones {
                writer.serialize(MilestoneRow::from(*m))?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn print_age(request: &GenerateMilestonesRequest, milestones: &[Milestone], now: NaiveDateTime) -> Result<()> {
    let origin = Origin::from_parts(
        BIRTH_LABEL,
        request.date_of_birth.as_deref(),
        request.time_of_birth.as_deref(),
    )?;
    let stats = age::age_stats(origin.start, now);

    println!("Months:  {}", formatting::group_thousands(stats.months.max(0) as u64));
    println!("Weeks:   {}", formatting::group_thousands(stats.weeks.max(0) as u64));
    println!("Days:    {}", formatting::group_thousands(stats.days.max(0) as u64));
    println!("Hours:   {}", formatting::group_thousands(stats.hours.max(0) as u64));
    println!("Minutes: {}", formatting::group_thousands(stats.minutes.max(0) as u64));
    println!("Seconds: {}", formatting::group_thousands(stats.seconds.max(0) as u64));

    if let Some(countdown) = age::birthday_countdown(origin.start.date(), now.date()) {
        println!(
            "Turning {} on {} ({} days left)",
            countdown.turning_age,
            formatting::format_long_date(countdown.next_birthday),
            countdown.days_left
        );
    }
    println!(
        "Milestones this year: {}",
        queries::in_year(milestones, now.year()).len()
    );

    let nearby = queries::around(milestones, now, queries::RECENT_HIGHLIGHTS_LIMIT);
    if !nearby.is_empty() {
        println!();
        println!("Around now:");
        for m in nearby {
            let when = if m.is_past { "reached" } else { "coming" };
            println!("  {} {} ({})", formatting::format_short_date(m.date.date()), m.title, when);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let settings = MilestoneSettings::load(cli.config.as_deref())?;
    let service = MilestoneService::with_palette(settings.palette()?);
    let now = Local::now().naive_local();

    match cli.command {
        Commands::List { origin, when, category, format, limit } => {
            let request = build_request(&origin, &settings)?;
            let milestones = service.generate_at(&request, now);
            let filter = MilestoneFilter { time: when, category };
            let mut selected = queries::filter_milestones(&milestones, &filter);
            let total = selected.len();
            selected.truncate(limit.unwrap_or(settings.display_limit));
            info!("Showing {} of {} milestones", selected.len(), total);
            print_milestones(&selected, format)?;
        }
        Commands::Next { origin, count } => {
            let request = build_request(&origin, &settings)?;
            let milestones = service.generate_at(&request, now);
            match queries::next_milestone(&milestones) {
                Some(next) => {
                    print_milestones(&queries::upcoming(&milestones, count), OutputFormat::Table)?;
                    println!();
                    println!("{}", formatting::share_text(next));
                }
                None => println!("No upcoming milestones within 100 years."),
            }
        }
        Commands::Age { origin } => {
            let request = build_request(&origin, &settings)?;
            let milestones = service.generate_at(&request, now);
            print_age(&request, &milestones, now)?;
        }
    }

    Ok(())
}
