use super::{
    command::{Cli, Commands},
    confirm_action, display_contacts, get_input_to_lower,
    image::acquire_image,
};
use crate::{
    domain::store::ContactStore,
    errors::AppError,
    storage::{self, StorageMediums},
};
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    init_logging();

    let medium = StorageMediums::from(&cli.storage)?;
    let slot = storage::parse_storage_slot(medium, cli.path)?;
    info!(medium = medium.is_which(), "opening contact storage");
    if medium.is_mem() {
        warn!("contacts are kept in memory only and are lost when the command exits");
    }

    let mut store = ContactStore::open(slot);

    execute(&mut store, cli.command, &mut io::stdin().lock())
}

/// Runs one subcommand against `store`. `input` answers confirmation prompts.
pub fn execute(
    store: &mut ContactStore,
    command: Commands,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    match command {
        Commands::Add { name, phone, image } => {
            let image = image.as_deref().map(acquire_image).transpose()?;

            let contact = store.create(&name, &phone, image.as_deref())?;

            println!("Contact added successfully");
            println!("id: {}", contact.id);
            Ok(())
        }

        // Listing contacts
        Commands::List => {
            let contacts = store.search("");
            if contacts.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            display_contacts(&contacts);
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            id,
            name,
            phone,
            image,
            clear_image,
        } => {
            // Pre-fill the edit with what is stored, like an edit form would
            let current = store
                .search("")
                .into_iter()
                .find(|c| c.id == id)
                .ok_or_else(|| AppError::NotFound(format!("Contact with id '{}'", id)))?;

            let image = match (image, clear_image) {
                (_, true) => None,
                (Some(input), false) => Some(acquire_image(&input)?),
                (None, false) => current.image.clone(),
            };

            let updated = store.update(
                &id,
                name.as_deref().unwrap_or(&current.name),
                phone.as_deref().unwrap_or(&current.phone),
                image.as_deref(),
            )?;

            println!("Contact updated successfully");
            display_contacts(&[updated]);
            Ok(())
        }

        // Delete Contact
        Commands::Delete { id, yes } => {
            if !yes {
                confirm_action(&format!("delete contact '{}'", id))?;

                if get_input_to_lower(input)? != "y" {
                    println!("Delete cancelled");
                    return Ok(());
                }
            }

            store.delete(&id)?;
            println!("Contact deleted successfully");
            Ok(())
        }

        // Search for a contact
        Commands::Search { query } => {
            let found = store.search(&query);
            if found.is_empty() {
                println!("No contact matches '{}'", query);
                return Ok(());
            }

            display_contacts(&found);
            Ok(())
        }
    }
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
