use std::io::Write;

use wordindex::VocabCodec;

use crate::{LogArgs, input_output::OutputArgs, vocab_selector::VocabSelectorArgs};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    vocab: VocabSelectorArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let codec = self.vocab.load_codec()?;
        let options = codec.options();
        log::info!("segmenter: {}", options.segmenter);
        log::info!("pretreatment: {}", options.pretreatment);
        log::info!("max_length: {}", options.max_length);
        log::info!("min_frequency: {}", options.min_frequency);
        log::info!("reserved: {:?}", options.reserved);
        log::info!("stop_words: {:?}", options.stop_words);
        log::info!("Vocabulary Size: {}", codec.vocab().len());

        let mut writer = self.output.open_writer()?;
        write_listing(&mut writer, &codec)
    }
}

fn write_listing(
    writer: &mut dyn Write,
    codec: &VocabCodec<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for (index, token) in codec.vocab().iter() {
        writeln!(writer, "{index}\t{token:?}")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use wordindex::VocabOptions;

    use super::*;

    #[test]
    fn test_write_listing() {
        let mut codec: VocabCodec<u32> = VocabCodec::new(VocabOptions::default()).unwrap();
        codec.feed(["ab", "b"]).unwrap();

        let mut out: Vec<u8> = Vec::new();
        write_listing(&mut out, &codec).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0\t\"#\"\n1\t\"&\"\n2\t\"@\"\n3\t\"b\"\n4\t\"a\"\n"
        );
    }
}
