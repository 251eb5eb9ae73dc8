use std::io::{BufRead, Write};

use wordindex::VocabCodec;

use crate::{
    LogArgs,
    input_output::{InputArgs, OutputArgs},
    vocab_selector::VocabSelectorArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    vocab: VocabSelectorArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Pad every line to exactly `max_length` indices.
    #[arg(long)]
    fill: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let codec = self.vocab.load_codec()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;
        run_encode(&mut reader, &mut writer, &codec, self.fill)
    }
}

fn run_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    codec: &VocabCodec<u32>,
    fill: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let indices = codec.encode(&line?, fill)?;

        for (idx, index) in indices.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, index)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
