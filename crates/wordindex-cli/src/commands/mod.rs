use crate::commands::{
    decode::DecodeArgs,
    encode::EncodeArgs,
    feed::FeedArgs,
    inspect::InspectArgs,
    list_components::ListComponentsArgs,
};

pub mod decode;
pub mod encode;
pub mod feed;
pub mod inspect;
pub mod list_components;

/// Subcommands for wordindex-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Learn a vocabulary from corpus files; one text per line.
    Feed(FeedArgs),

    /// Encode text lines into index lines.
    Encode(EncodeArgs),

    /// Decode index lines into text lines.
    Decode(DecodeArgs),

    /// Describe a saved vocabulary.
    Inspect(InspectArgs),

    /// List the built-in segmenters and pretreatments.
    ListComponents(ListComponentsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Feed(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::ListComponents(cmd) => cmd.run(),
        }
    }
}
