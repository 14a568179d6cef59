//! kennel dogs command

use clap::{Args, Subcommand};
use dialoguer::Confirm;

use kennel_domain::Dog;
use kennel_usecase::{parse_id, DogForm, KennelContext};

use super::{with_spinner, Output};
use crate::render;

#[derive(Debug, Args)]
pub struct DogsCommand {
    #[command(subcommand)]
    pub command: DogsSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum DogsSubcommand {
    /// List dogs, optionally matching a search term
    List {
        /// Matches name or breed, ignoring case
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show one dog and its sessions
    Show {
        /// Dog id
        id: String,
    },
    /// Add a dog profile
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        breed: String,
        /// Age in years; fractions for puppies (0.5 = six months)
        #[arg(long)]
        age: String,
        #[arg(long, default_value = "")]
        temperament: String,
    },
    /// Remove a dog. Its sessions are kept.
    Delete {
        /// Dog id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl DogsCommand {
    pub async fn run(&self, ctx: &KennelContext, output: Output) -> anyhow::Result<()> {
        match &self.command {
            DogsSubcommand::List { search } => {
                let page = with_spinner(output, "Loading dogs...", ctx.dogs_page(search)).await;
                if output.json {
                    println!("{}", render::json(&page)?);
                } else if page.is_empty_collection() {
                    println!("No dogs yet. Add one with `kennel dogs add`.");
                } else if page.no_matches() {
                    println!("No dogs found matching \"{}\".", search);
                } else {
                    for dog in &page.items {
                        println!("{}", render::dog_line(dog));
                    }
                }
            }
            DogsSubcommand::Show { id } => {
                let id = parse_id::<Dog>(id)?;
                let (dog, sessions) =
                    with_spinner(output, "Loading dog...", ctx.dog_sessions(id)).await?;
                if output.json {
                    println!(
                        "{}",
                        render::json(&serde_json::json!({ "dog": dog, "sessions": sessions }))?
                    );
                } else {
                    println!("{}", render::dog_detail(&dog));
                    for row in &sessions {
                        println!("  {}", render::session_line(row));
                    }
                }
            }
            DogsSubcommand::Add {
                name,
                breed,
                age,
                temperament,
            } => {
                let form = DogForm {
                    name: name.clone(),
                    breed: breed.clone(),
                    age: age.clone(),
                    temperament: temperament.clone(),
                };
                let dog = ctx.add_dog(&form).await?;
                if output.json {
                    println!("{}", render::json(&dog)?);
                } else {
                    println!("✓ Added {}", render::dog_line(&dog));
                }
            }
            DogsSubcommand::Delete { id, yes } => {
                let id = parse_id::<Dog>(id)?;
                if !*yes
                    && !Confirm::new()
                        .with_prompt(format!("Remove dog #{}?", id))
                        .default(false)
                        .interact()?
                {
                    println!("Cancelled");
                    return Ok(());
                }
                let deleted = ctx.remove_dog(id).await?;
                if output.json {
                    println!(
                        "{}",
                        render::json(&serde_json::json!({ "success": true, "id": deleted.id }))?
                    );
                } else {
                    println!("✓ Removed dog #{}", deleted.id);
                }
            }
        }
        Ok(())
    }
}
