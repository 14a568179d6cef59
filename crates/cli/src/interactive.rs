//! Interactive REPL mode

use std::io::{self, Write};

use kennel_domain::{Dog, Program, Session, StatusFilter};
use kennel_usecase::{parse_id, DogForm, KennelContext, ProgramForm};

use crate::commands::sessions::parse_when;
use crate::render;

/// Interactive CLI over one kennel context
pub struct InteractiveCli {
    ctx: KennelContext,
}

impl InteractiveCli {
    pub fn new(ctx: KennelContext) -> Self {
        Self { ctx }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!("Kennel Interactive Mode");
        println!("Type /help for commands, /quit to exit");
        println!();

        loop {
            print!("kennel> ");
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            if !input.starts_with('/') {
                println!("Commands start with '/'. Type /help for a list.");
                continue;
            }

            match self.handle_command(input).await {
                Ok(true) => break,
                Ok(false) => continue,
                Err(e) => println!("Error: {}", e),
            }
        }

        Ok(())
    }

    async fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => print_help(),
            "/dogs" => {
                let page = self.ctx.dogs_page(rest).await;
                if page.is_empty_collection() {
                    println!("No dogs yet. Add one with /add-dog.");
                } else if page.no_matches() {
                    println!("No dogs found matching \"{}\".", rest);
                }
                for dog in &page.items {
                    println!("{}", render::dog_line(dog));
                }
            }
            "/programs" => {
                let page = self.ctx.programs_page(rest).await;
                if page.is_empty_collection() {
                    println!("No training programs yet. Add one with /add-program.");
                } else if page.no_matches() {
                    println!("No training programs found matching \"{}\".", rest);
                }
                for program in &page.items {
                    println!("{}", render::program_line(program));
                }
            }
            "/sessions" => {
                // An optional leading status word, then the search text
                let (filter, query) = match rest.split_once(char::is_whitespace) {
                    Some((first, tail)) => match first.parse::<StatusFilter>() {
                        Ok(filter) => (filter, tail.trim()),
                        Err(_) => (StatusFilter::All, rest),
                    },
                    None => match rest.parse::<StatusFilter>() {
                        Ok(filter) => (filter, ""),
                        Err(_) => (StatusFilter::All, rest),
                    },
                };
                let page = self.ctx.sessions_page(query, filter).await;
                if page.is_empty_collection() {
                    println!("No training sessions scheduled yet.");
                } else if page.no_matches() {
                    println!("No sessions found matching your criteria.");
                }
                for row in &page.sessions {
                    println!("{}", render::session_line(row));
                }
            }
            "/stats" => {
                let page = self.ctx.sessions_page("", StatusFilter::All).await;
                println!("{}", render::stats_line(&page.stats));
            }
            "/dog" => {
                let (dog, sessions) = self.ctx.dog_sessions(parse_id::<Dog>(rest)?).await?;
                println!("{}", render::dog_detail(&dog));
                for row in &sessions {
                    println!("  {}", render::session_line(row));
                }
            }
            "/program" => {
                let (program, sessions) = self
                    .ctx
                    .program_sessions(parse_id::<Program>(rest)?)
                    .await?;
                println!("{}", render::program_detail(&program));
                for row in &sessions {
                    println!("  {}", render::session_line(row));
                }
            }
            "/add-dog" => {
                let fields = pipe_fields(rest);
                let form = DogForm {
                    name: field(&fields, 0),
                    breed: field(&fields, 1),
                    age: field(&fields, 2),
                    temperament: field(&fields, 3),
                };
                let dog = self.ctx.add_dog(&form).await?;
                println!("✓ Added {}", render::dog_line(&dog));
            }
            "/add-program" => {
                let fields = pipe_fields(rest);
                let form = ProgramForm {
                    name: field(&fields, 0),
                    objectives: field(&fields, 1),
                    description: field(&fields, 2),
                };
                let program = self.ctx.add_program(&form).await?;
                println!("✓ Added {}", render::program_line(&program));
            }
            "/schedule" => {
                let mut parts = rest.splitn(3, char::is_whitespace);
                let (Some(dog), Some(program), Some(when)) =
                    (parts.next(), parts.next(), parts.next())
                else {
                    anyhow::bail!("Usage: /schedule <dog id> <program id> <YYYY-MM-DD HH:MM>");
                };
                let session = self
                    .ctx
                    .schedule_session(
                        parse_id::<Dog>(dog)?,
                        parse_id::<Program>(program)?,
                        parse_when(when)?,
                    )
                    .await?;
                println!("✓ Scheduled session #{}", kennel_domain::Entity::id(&session));
            }
            "/complete" => {
                let session = self.ctx.complete_session(parse_id::<Session>(rest)?).await?;
                print_status(&session);
            }
            "/cancel" => {
                let session = self.ctx.cancel_session(parse_id::<Session>(rest)?).await?;
                print_status(&session);
            }
            "/remove-dog" => {
                let deleted = self.ctx.remove_dog(parse_id::<Dog>(rest)?).await?;
                println!("✓ Removed dog #{}", deleted.id);
            }
            "/remove-program" => {
                let deleted = self.ctx.remove_program(parse_id::<Program>(rest)?).await?;
                println!("✓ Removed program #{}", deleted.id);
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /dogs [search]                    - List dogs");
    println!("  /dog <id>                         - Show a dog and its sessions");
    println!("  /programs [search]                - List training programs");
    println!("  /program <id>                     - Show a program and its sessions");
    println!("  /sessions [status] [search]       - List sessions");
    println!("  /stats                            - Session counts");
    println!("  /add-dog name|breed|age|temperament");
    println!("  /add-program name|objectives|description");
    println!("  /schedule <dog> <program> <when>  - Book a session");
    println!("  /complete <id>, /cancel <id>      - Record a session outcome");
    println!("  /remove-dog <id>, /remove-program <id>");
    println!("  /quit                             - Exit");
}

fn print_status(session: &Session) {
    println!(
        "✓ Session #{} is now {}",
        kennel_domain::Entity::id(session),
        render::status_badge(session.status())
    );
}

fn pipe_fields(rest: &str) -> Vec<&str> {
    rest.split('|').map(str::trim).collect()
}

fn field(fields: &[&str], index: usize) -> String {
    fields.get(index).copied().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::{TimeZone, Utc};
    use kennel_adapter::{FixedClock, SeedData};
    use kennel_domain::{SessionId, SessionStatus};

    fn cli() -> InteractiveCli {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap());
        let ctx = KennelContext::in_memory(
            SeedData::builtin().unwrap(),
            Duration::ZERO,
            Arc::new(clock),
        );
        InteractiveCli::new(ctx)
    }

    // ============== Exit Commands ==============

    #[tokio::test]
    async fn test_handle_quit_command() {
        let mut cli = cli();
        assert!(cli.handle_command("/quit").await.unwrap());
        assert!(cli.handle_command("/exit").await.unwrap());
        assert!(cli.handle_command("/q").await.unwrap());
    }

    // ============== Read Commands ==============

    #[tokio::test]
    async fn test_read_commands_keep_running() {
        let mut cli = cli();
        for input in [
            "/help",
            "/dogs",
            "/dogs lab",
            "/programs",
            "/sessions",
            "/sessions upcoming",
            "/sessions completed bella",
            "/stats",
            "/dog 1",
            "/program 2",
        ] {
            assert!(!cli.handle_command(input).await.unwrap(), "{}", input);
        }
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let mut cli = cli();
        assert!(!cli.handle_command("/unknown").await.unwrap());
        assert!(!cli.handle_command("/").await.unwrap());
    }

    #[tokio::test]
    async fn test_show_missing_dog_is_error() {
        let mut cli = cli();
        assert!(cli.handle_command("/dog 999").await.is_err());
        assert!(cli.handle_command("/dog abc").await.is_err());
    }

    // ============== Write Commands ==============

    #[tokio::test]
    async fn test_add_dog() {
        let mut cli = cli();
        let before = cli.ctx.dogs().count().await;
        cli.handle_command("/add-dog Pepper | Beagle | 0.5 | Curious")
            .await
            .unwrap();
        assert_eq!(cli.ctx.dogs().count().await, before + 1);

        let page = cli.ctx.dogs_page("pepper").await;
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].breed(), "Beagle");
    }

    #[tokio::test]
    async fn test_add_dog_invalid_age() {
        let mut cli = cli();
        let before = cli.ctx.dogs().count().await;
        let err = cli
            .handle_command("/add-dog Pepper | Beagle | old")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Valid age is required"));
        assert_eq!(cli.ctx.dogs().count().await, before);
    }

    #[tokio::test]
    async fn test_add_program() {
        let mut cli = cli();
        cli.handle_command("/add-program Scent Work | Nose games | Finding hidden treats")
            .await
            .unwrap();
        assert_eq!(cli.ctx.programs_page("scent").await.items.len(), 1);
    }

    #[tokio::test]
    async fn test_schedule_and_complete() {
        let mut cli = cli();
        let before = cli.ctx.sessions().count().await;
        cli.handle_command("/schedule 1 2 2027-05-01 10:00")
            .await
            .unwrap();
        assert_eq!(cli.ctx.sessions().count().await, before + 1);

        let id = SessionId::new(before as u64 + 1);
        cli.handle_command(&format!("/complete {}", id))
            .await
            .unwrap();
        let session = cli.ctx.sessions().get_by_id(id).await.unwrap();
        assert_eq!(session.status(), SessionStatus::Completed);
    }

    #[tokio::test]
    async fn test_schedule_usage_error() {
        let mut cli = cli();
        assert!(cli.handle_command("/schedule 1").await.is_err());
        assert!(cli.handle_command("/schedule 1 2 someday").await.is_err());
    }

    #[tokio::test]
    async fn test_cancel_missing_session() {
        let mut cli = cli();
        assert!(cli.handle_command("/cancel 999").await.is_err());
    }

    #[tokio::test]
    async fn test_remove_dog_keeps_sessions() {
        let mut cli = cli();
        let sessions = cli.ctx.sessions().count().await;
        cli.handle_command("/remove-dog 1").await.unwrap();
        assert!(cli.handle_command("/dog 1").await.is_err());
        assert_eq!(cli.ctx.sessions().count().await, sessions);
    }
}
