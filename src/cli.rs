use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "petfriends")]
#[command(author, version, about = "Drive the PetFriends API by hand")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Override the service base URL
    #[arg(long, global = true, env = "PETFRIENDS_URL")]
    pub base_url: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Request an auth key (defaults to the configured credentials)
    Key(KeyArgs),

    /// List pets
    Pets {
        /// Only pets owned by the authenticated user
        #[arg(long)]
        mine: bool,
    },

    /// Add a pet with a photo
    Add {
        #[command(flatten)]
        fields: PetFieldArgs,

        /// Photo file to upload
        #[arg(long)]
        photo: PathBuf,
    },

    /// Add a pet without a photo
    AddSimple {
        #[command(flatten)]
        fields: PetFieldArgs,
    },

    /// Upload a photo for an existing pet
    SetPhoto {
        pet_id: String,

        #[arg(long)]
        photo: PathBuf,
    },

    /// Update a pet's name, type and age
    Update {
        pet_id: String,

        #[command(flatten)]
        fields: PetFieldArgs,
    },

    /// Delete a pet
    Delete { pet_id: String },
}

#[derive(Args, Clone)]
pub struct KeyArgs {
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,
}

/// Pet fields are sent verbatim, so empty values are allowed.
#[derive(Args, Clone)]
pub struct PetFieldArgs {
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub name: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub animal_type: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub age: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
