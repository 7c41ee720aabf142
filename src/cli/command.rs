use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rusty-contacts", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage medium for the contact list (json, mem)
    #[arg(long, env = "CONTACTS_STORAGE", default_value_t = String::from("json"))]
    pub storage: String,

    /// Path of the json contact file
    #[arg(long, env = "CONTACTS_PATH")]
    pub path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Photo as a local image file or an existing URI
        #[arg(long)]
        image: Option<String>,
    },
    /// List contacts in the order they were added
    List,
    /// Edit an existing contact by id
    /// Fields left out keep their current value
    Edit {
        /// Id of the contact to edit
        #[arg(long)]
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New photo as a local image file or an existing URI
        #[arg(long, conflicts_with = "clear_image")]
        image: Option<String>,

        /// Go back to the default avatar
        #[arg(long)]
        clear_image: bool,
    },
    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete
        #[arg(long)]
        id: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Search contacts by name
    Search {
        /// Part of the name, case is ignored
        #[arg(short, long, default_value = "")]
        query: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_edit_flags() {
        let cli = Cli::try_parse_from([
            "rusty-contacts",
            "--storage",
            "mem",
            "edit",
            "--id",
            "42",
            "--clear-image",
        ])
        .unwrap();

        assert_eq!(cli.storage, "mem");
        match cli.command {
            Commands::Edit {
                id,
                name,
                clear_image,
                ..
            } => {
                assert_eq!(id, "42");
                assert!(name.is_none());
                assert!(clear_image);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn image_and_clear_image_conflict() {
        let parsed = Cli::try_parse_from([
            "rusty-contacts",
            "edit",
            "--id",
            "42",
            "--image",
            "a.png",
            "--clear-image",
        ]);

        assert!(parsed.is_err());
    }
}
