//! kennel programs command

use clap::{Args, Subcommand};

use kennel_domain::Program;
use kennel_usecase::{parse_id, KennelContext, ProgramForm};

use super::{with_spinner, Output};
use crate::render;

#[derive(Debug, Args)]
pub struct ProgramsCommand {
    #[command(subcommand)]
    pub command: ProgramsSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ProgramsSubcommand {
    /// List programs, optionally matching a search term
    List {
        /// Matches name, objectives or description, ignoring case
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show one program and its sessions
    Show {
        /// Program id
        id: String,
    },
    /// Add a training program
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        objectives: String,
        #[arg(long)]
        description: String,
    },
}

impl ProgramsCommand {
    pub async fn run(&self, ctx: &KennelContext, output: Output) -> anyhow::Result<()> {
        match &self.command {
            ProgramsSubcommand::List { search } => {
                let page =
                    with_spinner(output, "Loading programs...", ctx.programs_page(search)).await;
                if output.json {
                    println!("{}", render::json(&page)?);
                } else if page.is_empty_collection() {
                    println!("No training programs yet. Add one with `kennel programs add`.");
                } else if page.no_matches() {
                    println!("No training programs found matching \"{}\".", search);
                } else {
                    for program in &page.items {
                        println!("{}", render::program_line(program));
                    }
                }
            }
            ProgramsSubcommand::Show { id } => {
                let id = parse_id::<Program>(id)?;
                let (program, sessions) =
                    with_spinner(output, "Loading program...", ctx.program_sessions(id)).await?;
                if output.json {
                    println!(
                        "{}",
                        render::json(
                            &serde_json::json!({ "program": program, "sessions": sessions })
                        )?
                    );
                } else {
                    println!("{}", render::program_detail(&program));
                    for row in &sessions {
                        println!("  {}", render::session_line(row));
                    }
                }
            }
            ProgramsSubcommand::Add {
                name,
                objectives,
                description,
            } => {
                let form = ProgramForm {
                    name: name.clone(),
                    objectives: objectives.clone(),
                    description: description.clone(),
                };
                let program = ctx.add_program(&form).await?;
                if output.json {
                    println!("{}", render::json(&program)?);
                } else {
                    println!("✓ Added {}", render::program_line(&program));
                }
            }
        }
        Ok(())
    }
}
