//! Plain-text rendering of pages for the terminal

use chrono::{DateTime, Local, Utc};
use console::style;
use serde::Serialize;

use kennel_domain::{Dog, Entity, Program, SessionStats, SessionStatus, SessionTiming};
use kennel_usecase::SessionRow;

pub fn dog_line(dog: &Dog) -> String {
    let mut line = format!(
        "#{:<3} {} ({}, {})",
        dog.id().value(),
        dog.name(),
        dog.breed(),
        dog.age_text()
    );
    if let Some(temperament) = dog.temperament() {
        line.push_str(&format!(" - {}", temperament));
    }
    line
}

pub fn dog_detail(dog: &Dog) -> String {
    format!(
        "{}\n  Added {}",
        dog_line(dog),
        short_date(dog.created_at())
    )
}

pub fn program_line(program: &Program) -> String {
    format!("#{:<3} {} - {}", program.id().value(), program.name(), program.objectives())
}

pub fn program_detail(program: &Program) -> String {
    format!(
        "{}\n  {}\n  Created {}",
        program_line(program),
        program.description(),
        short_date(program.created_at())
    )
}

pub fn session_line(row: &SessionRow) -> String {
    let when = match row.timing {
        SessionTiming::Today => "Today".to_string(),
        _ => short_date(row.date),
    };
    let time = row.date.with_timezone(&Local).format("%-I:%M %p");
    format!(
        "#{:<3} {} -> {}  {} {}  [{}]",
        row.id.value(),
        row.dog_name,
        row.program_name,
        when,
        time,
        status_badge(row.status)
    )
}

pub fn status_badge(status: SessionStatus) -> String {
    let label = status.label();
    match status {
        SessionStatus::Upcoming => style(label).blue().to_string(),
        SessionStatus::Completed => style(label).green().to_string(),
        SessionStatus::Cancelled => style(label).dim().to_string(),
    }
}

pub fn stats_line(stats: &SessionStats) -> String {
    format!(
        "Upcoming: {}  Completed: {}  Cancelled: {}  Total: {}",
        stats.upcoming, stats.completed, stats.cancelled, stats.total
    )
}

fn short_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%b %-d, %Y").to_string()
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
