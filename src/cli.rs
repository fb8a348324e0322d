//! Command line front end.
//!
//! Plays the part of the UI collaborator: it collects the range, cadence and
//! weekday selection, asks the library for dates, and prints lists or month
//! calendars.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use recurring_calendar::models::date_entry::DateEntry;
use recurring_calendar::models::recurrence::{
    Cadence, DateRange, GenerationMode, RecurrenceRequest,
};
use recurring_calendar::models::settings::{OutputFormat, Settings};
use recurring_calendar::services::calendar::{to_html, to_text};
use recurring_calendar::services::recurrence::{generate_request, generate_single};
use recurring_calendar::services::settings::SettingsService;
use recurring_calendar::ui::view_state::CalendarViewState;
use recurring_calendar::utils::date::parse_date;

#[derive(Parser)]
#[command(name = "recurring-calendar")]
#[command(about = "Generate recurring event dates and show them on a month calendar")]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the dates produced by a recurrence rule
    Generate {
        #[command(flatten)]
        rule: RuleArgs,

        /// Print JSON instead of the configured output format
        #[arg(long)]
        json: bool,
    },

    /// Create a single, non-recurring date
    Single {
        /// Event date (defaults to today)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Print JSON instead of the configured output format
        #[arg(long)]
        json: bool,
    },

    /// Show month calendars with the generated dates marked
    Show {
        #[command(flatten)]
        rule: RuleArgs,

        /// Year to display (with --month); defaults to the first generated date
        #[arg(long)]
        year: Option<i32>,

        /// Month to display, 1-12 (with --year)
        #[arg(long)]
        month: Option<u32>,

        /// Number of consecutive months to show
        #[arg(long, default_value = "1")]
        months: u32,

        /// Emit an HTML table instead of text
        #[arg(long)]
        html: bool,
    },

    /// Inspect or write the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigAction {
    /// Print the settings file location
    Path,
    /// Print the effective settings as TOML
    Show,
    /// Write a settings file with the defaults, if none exists yet
    Init,
    /// Overwrite the settings file with the defaults
    Reset,
}

#[derive(Args)]
struct RuleArgs {
    /// First day of the range (defaults to today)
    #[arg(long, value_name = "DATE")]
    start: Option<String>,

    /// Last day of the range (defaults to start + configured range days)
    #[arg(long, value_name = "DATE")]
    end: Option<String>,

    /// weekly, fortnightly, monthly or bimonthly
    #[arg(short, long, default_value = "weekly")]
    cadence: Cadence,

    /// Weekday name; repeat for weekly rules
    #[arg(short, long = "weekday", value_name = "NAME", default_value = "Monday")]
    weekdays: Vec<String>,

    /// calendar or stride (defaults to the configured mode)
    #[arg(long)]
    mode: Option<GenerationMode>,
}

pub fn run(cli: Cli) -> Result<()> {
    let settings_service = match cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location(),
    };

    if let Command::Config { action } = cli.command {
        println!("{}", run_config(action, &settings_service)?);
        return Ok(());
    }

    let settings = settings_service.get()?;
    let today = Local::now().date_naive();

    match cli.command {
        Command::Generate { rule, json } => {
            let entries = generate_entries(&rule, &settings, today)?;
            println!("{}", format_entries(&entries, output_format(json, &settings))?);
        }
        Command::Single { date, json } => {
            let date = match date {
                Some(value) => parse_input_date(&value, &settings)?,
                None => today,
            };
            let entries = generate_single(date);
            println!("{}", format_entries(&entries, output_format(json, &settings))?);
        }
        Command::Show {
            rule,
            year,
            month,
            months,
            html,
        } => {
            let entries = generate_entries(&rule, &settings, today)?;
            let mut view = initial_view(year, month, today)?;
            view.set_entries(entries);
            if year.is_none() {
                view.focus_first_entry();
            }

            print!("{}", render_months(&mut view, months, html, &settings)?);
        }
        Command::Config { .. } => {}
    }

    Ok(())
}

/// Log the full error chain and build the single line shown to the user.
pub fn report_error(err: &anyhow::Error) -> String {
    log::debug!("{err:?}");
    format!("Error: {err:#}")
}

fn run_config(action: ConfigAction, service: &SettingsService) -> Result<String> {
    match action {
        ConfigAction::Path => Ok(service.path().display().to_string()),
        ConfigAction::Show => {
            let settings = service.get()?;
            toml::to_string_pretty(&settings).context("failed to serialize settings")
        }
        ConfigAction::Init => {
            if service.path().exists() {
                bail!("settings file already exists at {}", service.path().display());
            }
            service.update(&Settings::default())?;
            Ok(format!("Wrote default settings to {}", service.path().display()))
        }
        ConfigAction::Reset => {
            service.reset()?;
            Ok(format!("Reset settings at {}", service.path().display()))
        }
    }
}

fn generate_entries(rule: &RuleArgs, settings: &Settings, today: NaiveDate) -> Result<Vec<DateEntry>> {
    let start = match &rule.start {
        Some(value) => parse_input_date(value, settings)?,
        None => today,
    };
    let range = match &rule.end {
        Some(value) => DateRange::new(start, parse_input_date(value, settings)?),
        None => DateRange::starting_at(start, settings.default_range_days),
    };

    let request = RecurrenceRequest {
        cadence: rule.cadence,
        weekdays: rule.weekdays.clone(),
        range,
    };
    let mode = rule.mode.unwrap_or(settings.generation_mode);

    let entries = generate_request(request, settings.range_policy(), mode)?;
    Ok(entries)
}

fn parse_input_date(value: &str, settings: &Settings) -> Result<NaiveDate> {
    let date = parse_date(value, Some(&settings.input_date_format))?;
    Ok(date)
}

fn output_format(json: bool, settings: &Settings) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        settings.output_format
    }
}

fn initial_view(year: Option<i32>, month: Option<u32>, today: NaiveDate) -> Result<CalendarViewState> {
    match (year, month) {
        (Some(year), Some(month)) => Ok(CalendarViewState::new(year, month)?),
        (None, None) => Ok(CalendarViewState::containing(today)),
        _ => bail!("--year and --month must be given together"),
    }
}

fn render_months(
    view: &mut CalendarViewState,
    months: u32,
    html: bool,
    settings: &Settings,
) -> Result<String> {
    let mut output = String::new();

    for index in 0..months.max(1) {
        if index > 0 {
            view.next_month();
            output.push('\n');
        }

        let grid = view.grid()?;
        if html {
            output.push_str(&to_html(&grid, &settings.weekday_headers));
        } else {
            output.push_str(&to_text(&grid));
            output.push('\n');
        }
    }

    Ok(output)
}

fn format_entries(entries: &[DateEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            if entries.is_empty() {
                return Ok("No dates match the selection.".to_string());
            }
            let lines: Vec<String> = entries.iter().map(ToString::to_string).collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(entries).context("failed to serialize dates")
        }
    }
}
