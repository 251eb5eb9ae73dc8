use std::io::{BufRead, Write};

use wordindex::{DecodeOptions, UnknownPolicy, VocabCodec};

use crate::{
    LogArgs,
    input_output::{InputArgs, OutputArgs},
    vocab_selector::VocabSelectorArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    vocab: VocabSelectorArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Drop UNKNOWN markers from the output.
    #[arg(long)]
    drop_unknown: bool,

    /// Fail on out-of-range indices.
    #[arg(long)]
    strict: bool,

    /// Token separator.
    #[arg(long, default_value = "")]
    separator: String,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// The decode options selected by the args.
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::default()
            .with_unknown(if self.drop_unknown {
                UnknownPolicy::Drop
            } else {
                UnknownPolicy::Retain
            })
            .with_strict(self.strict)
            .with_separator(self.separator.as_str())
    }

    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let codec = self
            .vocab
            .load_codec()?
            .with_decode_options(self.decode_options());

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;
        run_decode(&mut reader, &mut writer, &codec)
    }
}

fn run_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    codec: &VocabCodec<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let indices = line?
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()?;

        writeln!(writer, "{}", codec.decode_to_string(&indices)?)?;
    }
    writer.flush()?;
    Ok(())
}
