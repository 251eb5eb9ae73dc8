use wordindex::{ComponentRegistry, VocabCodec, vocab::io::load_vocab_json_path};

/// Saved vocabulary arg group.
#[derive(clap::Args, Debug)]
pub struct VocabSelectorArgs {
    /// Path to a JSON vocabulary written by `feed`.
    #[arg(long)]
    vocab: String,
}

impl VocabSelectorArgs {
    /// The vocabulary path.
    pub fn path(&self) -> &str {
        &self.vocab
    }

    /// Load the codec.
    pub fn load_codec(&self) -> Result<VocabCodec<u32>, Box<dyn std::error::Error>> {
        log::info!("loading vocab: {}", self.path());
        let codec = load_vocab_json_path(self.path(), &ComponentRegistry::default())?;
        Ok(codec)
    }
}
