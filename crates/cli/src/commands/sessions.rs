//! kennel sessions command

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use clap::{Args, Subcommand};

use kennel_domain::{Dog, Entity, Program, Session, StatusFilter};
use kennel_usecase::{parse_id, KennelContext};

use super::{with_spinner, Output};
use crate::render;

const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a session date: RFC 3339, or `YYYY-MM-DD HH:MM` in local time.
pub fn parse_when(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    parse_when_in(raw, &Local)
}

fn parse_when_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> anyhow::Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }
    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| {
            anyhow::anyhow!("Invalid date '{}'. Use YYYY-MM-DD HH:MM or RFC 3339", raw)
        })?;
    // Earliest of an ambiguous fall-back hour; a skipped spring-forward time has none
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|date| date.with_timezone(&Utc))
        .ok_or_else(|| anyhow::anyhow!("{} does not exist in the local time zone", raw))
}

#[derive(Debug, Args)]
pub struct SessionsCommand {
    #[command(subcommand)]
    pub command: SessionsSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum SessionsSubcommand {
    /// List sessions, upcoming first
    List {
        /// Matches dog or program name, ignoring case
        #[arg(short, long, default_value = "")]
        search: String,
        /// all, upcoming, completed or cancelled
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Show session counts
    Stats,
    /// Book a session for a dog in a program
    Schedule {
        /// Dog id
        dog: String,
        /// Program id
        program: String,
        /// YYYY-MM-DD HH:MM (local time) or RFC 3339
        when: String,
    },
    /// Mark a session completed
    Complete {
        /// Session id
        id: String,
    },
    /// Mark a session cancelled
    Cancel {
        /// Session id
        id: String,
    },
}

impl SessionsCommand {
    pub async fn run(&self, ctx: &KennelContext, output: Output) -> anyhow::Result<()> {
        match &self.command {
            SessionsSubcommand::List { search, status } => {
                let page = with_spinner(
                    output,
                    "Loading sessions...",
                    ctx.sessions_page(search, *status),
                )
                .await;
                if output.json {
                    println!("{}", render::json(&page)?);
                } else if page.is_empty_collection() {
                    println!("No training sessions scheduled yet.");
                } else if page.no_matches() {
                    println!("No sessions found matching your criteria.");
                } else {
                    for row in &page.sessions {
                        println!("{}", render::session_line(row));
                    }
                    println!();
                    println!("{}", render::stats_line(&page.stats));
                }
            }
            SessionsSubcommand::Stats => {
                let page = ctx.sessions_page("", StatusFilter::All).await;
                if output.json {
                    println!("{}", render::json(&page.stats)?);
                } else {
                    println!("{}", render::stats_line(&page.stats));
                }
            }
            SessionsSubcommand::Schedule { dog, program, when } => {
                let dog_id = parse_id::<Dog>(dog)?;
                let program_id = parse_id::<Program>(program)?;
                let date = parse_when(when)?;
                let session = ctx.schedule_session(dog_id, program_id, date).await?;
                if output.json {
                    println!("{}", render::json(&session)?);
                } else {
                    println!(
                        "✓ Scheduled session #{} on {}",
                        session.id(),
                        session.date().with_timezone(&Local).format("%b %-d, %Y %-I:%M %p")
                    );
                }
            }
            SessionsSubcommand::Complete { id } => {
                let session = ctx.complete_session(parse_id::<Session>(id)?).await?;
                report(&session, output)?;
            }
            SessionsSubcommand::Cancel { id } => {
                let session = ctx.cancel_session(parse_id::<Session>(id)?).await?;
                report(&session, output)?;
            }
        }
        Ok(())
    }
}

fn report(session: &Session, output: Output) -> anyhow::Result<()> {
    if output.json {
        println!("{}", render::json(session)?);
    } else {
        println!(
            "✓ Session #{} is now {}",
            session.id(),
            render::status_badge(session.status())
        );
    }
    Ok(())
}
