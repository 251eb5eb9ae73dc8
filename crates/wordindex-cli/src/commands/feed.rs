use std::io::{BufRead, Write};

use wordindex::{
    ReservedSymbols,
    VocabCodec,
    VocabOptions,
    vocab::{DEFAULT_END, DEFAULT_MAX_LENGTH, DEFAULT_START, DEFAULT_UNKNOWN, io::write_vocab_json},
};

use crate::{
    LogArgs,
    input_output::{OutputArgs, open_reader},
};

/// Args for the feed command.
#[derive(clap::Args, Debug)]
pub struct FeedArgs {
    /// Corpus files, one text per line; "-" or none reads stdin.
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Segmenter name; see `list-components`.
    #[arg(long, default_value = "chars")]
    segmenter: String,

    /// Pretreatment name; see `list-components`.
    #[arg(long, default_value = "strip_whitespace")]
    pretreatment: String,

    /// Max tokens per text, markers included.
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Drop tokens seen in this many texts or fewer.
    #[arg(long, default_value_t = 0)]
    min_frequency: u64,

    /// START marker; empty disables it.
    #[arg(long, default_value = DEFAULT_START)]
    start: String,

    /// END marker; empty disables it.
    #[arg(long, default_value = DEFAULT_END)]
    end: String,

    /// UNKNOWN marker; empty disables it.
    #[arg(long, default_value = DEFAULT_UNKNOWN)]
    unknown: String,

    /// Disable all reserved markers.
    #[arg(long)]
    no_reserved: bool,

    /// Stop words, dropped from segmenter output.
    #[arg(long = "stop-word")]
    stop_words: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

impl FeedArgs {
    /// The codec options selected by the args.
    pub fn options(&self) -> VocabOptions {
        let reserved = if self.no_reserved {
            ReservedSymbols::disabled()
        } else {
            ReservedSymbols::new(self.start.as_str(), self.end.as_str(), self.unknown.as_str())
        };

        VocabOptions::default()
            .with_segmenter(self.segmenter.as_str())
            .with_pretreatment(self.pretreatment.as_str())
            .with_max_length(self.max_length)
            .with_min_frequency(self.min_frequency)
            .with_reserved(reserved)
            .with_stop_words(self.stop_words.iter().cloned())
    }

    /// Run the feed command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut codec: VocabCodec<u32> = VocabCodec::new(self.options())?;

        let mut texts: Vec<String> = Vec::new();
        if self.files.is_empty() {
            read_texts(None, &mut texts)?;
        }
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            read_texts(Some(path.as_str()).filter(|p| *p != "-"), &mut texts)?;
        }

        log::info!("Feeding {} texts...", texts.len());
        codec.feed(&texts)?;
        log::info!("Vocabulary Size: {}", codec.vocab().len());

        if let Some(path) = &self.output.output {
            log::info!("output: {path}");
        }
        let mut writer = self.output.open_writer()?;
        write_vocab_json(&codec, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

fn read_texts(
    path: Option<&str>,
    texts: &mut Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in open_reader(path)?.lines() {
        texts.push(line?);
    }
    Ok(())
}
