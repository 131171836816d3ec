use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use moodlog::application::{
    init, ConfigService, ListEntriesService, LogEntryService, LogOptions, OpenNoteService,
    WeekReportService, WeekSelect,
};
use moodlog::cli::{format_entry_list, format_trend, format_week_report, Cli, Commands};
use moodlog::domain::{EntryCategory, MoodLabel, TimeReference};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::FileSystemRepository;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Log {
            mood,
            message,
            category,
            date,
            at,
        }) => {
            let repo = FileSystemRepository::discover()?;

            let mood = MoodLabel::from_str(&mood).map_err(MoodlogError::UnknownMood)?;
            let category = parse_category_arg(category.as_deref())?;

            let now = Local::now().naive_local();
            let date = match date {
                Some(raw) => TimeReference::parse(&raw)?.resolve(now.date()),
                None => now.date(),
            };
            let time = match at {
                Some(raw) => parse_clock_time(&raw)?,
                None => now.time(),
            };

            let options = LogOptions {
                mood,
                message,
                category,
                date,
                time,
            };
            let filename = LogEntryService::new(repo).execute(&options)?;
            println!("Logged {} in {}", options.mood, filename);
            Ok(())
        }
        Some(Commands::List { from, to, limit }) => {
            let repo = FileSystemRepository::discover()?;

            let from = from.as_deref().map(parse_date_arg).transpose()?;
            let to = to.as_deref().map(parse_date_arg).transpose()?;

            let listing = ListEntriesService::new(repo).execute(from, to, limit)?;
            println!(
                "{}",
                format_entry_list(&listing.entries, listing.skipped).trim_end_matches('\n')
            );
            Ok(())
        }
        Some(Commands::Week {
            time_ref,
            prev,
            next,
        }) => {
            let repo = FileSystemRepository::discover()?;

            let now = reference_time(time_ref.as_deref())?;
            let report = WeekReportService::new(repo).execute(now, week_select(prev, next))?;
            println!("{}", format_week_report(&report).trim_end_matches('\n'));
            Ok(())
        }
        Some(Commands::Trend {
            time_ref,
            prev,
            next,
            category,
        }) => {
            let repo = FileSystemRepository::discover()?;

            let category = parse_category_arg(category.as_deref())?;
            let now = reference_time(time_ref.as_deref())?;
            let report = WeekReportService::new(repo).execute(now, week_select(prev, next))?;
            println!(
                "{}",
                format_trend(&report, category).trim_end_matches('\n')
            );
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("default_category = {}", config.default_category);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: editor, default_category, created");
                Ok(())
            }
        }
        None => {
            if let Some(time_ref) = cli.time_ref {
                let repo = FileSystemRepository::discover()?;
                let service = OpenNoteService::new(repo);
                let today = Local::now().date_naive();
                let filename = service.execute(&time_ref, today, true)?;
                println!("Opened {}", filename);
                Ok(())
            } else {
                println!("moodlog - Mood journal with weekly trend reports");
                println!("Use --help for usage information");
                Ok(())
            }
        }
    }
}

/// Select the reporting week relative to the reference.
fn week_select(prev: bool, next: bool) -> WeekSelect {
    if prev {
        WeekSelect::Previous
    } else if next {
        WeekSelect::Next
    } else {
        WeekSelect::Current
    }
}

/// Reference timestamp for weekly reports.
///
/// An explicit reference resolves to that day at midnight; without one the
/// current local time is used.
fn reference_time(time_ref: Option<&str>) -> Result<NaiveDateTime, MoodlogError> {
    let now = Local::now().naive_local();
    match time_ref {
        Some(raw) => {
            let date = TimeReference::parse(raw)?.resolve(now.date());
            Ok(date.and_time(NaiveTime::MIN))
        }
        None => Ok(now),
    }
}

fn parse_category_arg(raw: Option<&str>) -> Result<Option<EntryCategory>, MoodlogError> {
    match raw {
        Some(raw) => EntryCategory::from_str(raw)
            .map(Some)
            .map_err(MoodlogError::Config),
        None => Ok(None),
    }
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, MoodlogError> {
    NaiveDate::parse_from_str(raw, "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map_err(|_| {
            MoodlogError::Config(format!(
                "Invalid date '{}'. Expected date format DD-MM-YYYY or YYYY-MM-DD",
                raw
            ))
        })
}

fn parse_clock_time(raw: &str) -> Result<NaiveTime, MoodlogError> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| {
        MoodlogError::Config(format!("Invalid time '{}'. Expected 24-hour HH:MM", raw))
    })
}
