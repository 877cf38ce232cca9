use std::{env, io, path::PathBuf};

use chrono::{DateTime, Duration, Utc};

use event_stamp::{
    apply::{ApplyReport, Confirm, PromptConfirm, SessionState, apply_form, ensure_master_categories},
    calendar::CalendarItem,
    form::EventFormInput,
    host::InMemoryItem,
    storage::Config,
};

pub const USAGE: &str = "Usage: event-stamp --category C --artists A --description D --location L \
[--attendees E] [--start RFC3339] [--minutes N] [--yes|--no] [--json] [--config PATH]";

/// Longest initial span accepted for the in-memory item, one week.
pub const MAX_MINUTES: i64 = 7 * 24 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub form: EventFormInput,
    pub start: Option<DateTime<Utc>>,
    pub minutes: i64,
    pub answer: Option<bool>,
    pub json: bool,
    pub config: Option<PathBuf>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            form: EventFormInput::default(),
            start: None,
            minutes: 60,
            answer: None,
            json: false,
            config: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Help,
    Apply(CliArgs),
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> Result<CliMode, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| format!("Missing value for {}", flag))
        };

        match arg.as_str() {
            "--category" => parsed.form.category = value(&arg)?,
            "--artists" => parsed.form.participants = value(&arg)?,
            "--description" => parsed.form.description = value(&arg)?,
            "--location" => parsed.form.location = value(&arg)?,
            "--attendees" => parsed.form.attendees = value(&arg)?,
            "--start" => {
                let raw = value(&arg)?;
                let start = DateTime::parse_from_rfc3339(&raw)
                    .map_err(|_| format!("Invalid start '{}'. Use RFC 3339, e.g. 2025-01-31T20:00:00Z.", raw))?;
                parsed.start = Some(start.with_timezone(&Utc));
            }
            "--minutes" => {
                let raw = value(&arg)?;
                parsed.minutes = raw
                    .parse::<i64>()
                    .ok()
                    .filter(|minutes| (0..=MAX_MINUTES).contains(minutes))
                    .ok_or_else(|| format!("Invalid minutes '{}'.", raw))?;
            }
            "--yes" => parsed.answer = Some(true),
            "--no" => parsed.answer = Some(false),
            "--json" => parsed.json = true,
            "--config" => parsed.config = Some(PathBuf::from(value(&arg)?)),
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(CliMode::Apply(parsed))
}

pub fn load_config(args: &CliArgs) -> Result<Config, io::Error> {
    let loaded = match &args.config {
        Some(path) => Config::load_or_create_at(path),
        None => Config::load_or_create(),
    };
    loaded.map_err(|e| io::Error::other(e.to_string()))
}

pub async fn run_apply(args: CliArgs, config: &Config) -> Result<(), io::Error> {
    let start = args.start.unwrap_or_else(Utc::now);
    let end = start
        .checked_add_signed(Duration::minutes(args.minutes))
        .ok_or_else(|| io::Error::other(format!("Invalid minutes '{}'.", args.minutes)))?;
    let item = CalendarItem::new(start, end);
    let mut host = InMemoryItem::new(item);
    let mut session = SessionState::new();

    ensure_master_categories(&mut host).await;

    let mut confirmer: Box<dyn Confirm> = match args.answer {
        Some(answer) => Box::new(move |message: &str| {
            println!("{} [{}]", message, if answer { "yes" } else { "no" });
            answer
        }),
        None => Box::new(PromptConfirm::stdin()),
    };

    let report = match apply_form(&mut host, &args.form, &mut session, confirmer.as_mut(), &config.form).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            tracing::error!("Validation failed: {}", e);
            return Ok(());
        }
    };

    println!("{}", format_report(&report));

    if args.json {
        let json = serde_json::to_string_pretty(&host.item)
            .map_err(|e| io::Error::other(e.to_string()))?;
        println!("{}", json);
    } else {
        println!("{}", format_item(&host.item));
    }

    Ok(())
}

pub fn format_report(report: &ApplyReport) -> String {
    let mut lines = Vec::new();

    if !report.warnings.is_empty() {
        lines.push("Warnings:".to_string());
        lines.extend(report.warnings.iter().map(|w| format!("- {}", w)));
    }

    lines.extend(report.errors.iter().map(|e| format!("Error: {}", e)));

    if let Some(status) = report.status() {
        lines.push(status);
    }

    lines.join("\n")
}

pub fn format_item(item: &CalendarItem) -> String {
    let time_label = if item.all_day {
        "All Day".to_string()
    } else {
        format!(
            "{}-{} ({} min)",
            item.start.format("%Y-%m-%d %H:%M"),
            item.end.format("%H:%M"),
            item.duration_minutes()
        )
    };

    let mut lines = vec![
        format!("Subject:    {}", item.subject),
        format!("Location:   {}", item.location),
        format!("When:       {}", time_label),
        format!("Categories: {}", item.categories.join(", ")),
    ];
    if !item.attendees.is_empty() {
        lines.push(format!("Attendees:  {}", item.attendees.join("; ")));
    }

    lines.join("\n")
}
