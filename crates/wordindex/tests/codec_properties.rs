#![allow(missing_docs)]

use proptest::prelude::*;
use wordindex::{
    DecodeOptions,
    ReservedSymbols,
    UnknownPolicy,
    VocabCodec,
    VocabOptions,
    WordindexError,
};

const SAMPLES: &[&str] = &[
    "abcde",
    "cdefgg",
    "scdea",
    "hello world",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}",
    "",
];

fn fed(options: VocabOptions) -> VocabCodec<u32> {
    let mut codec = VocabCodec::new(options).unwrap();
    codec.feed(SAMPLES).unwrap();
    codec
}

#[test]
fn test_reference_example() {
    let mut codec: VocabCodec<u32> =
        VocabCodec::new(VocabOptions::default().with_max_length(10)).unwrap();
    codec.feed(["abcde", "cdefgg", "scdea"]).unwrap();

    let indices = codec.encode("as12356df", false).unwrap();
    assert_eq!(
        codec.decode(&indices).unwrap(),
        vec!["a", "s", "@", "@", "@", "@", "@", "d", "f"]
    );
}

#[test]
fn test_indices_are_dense() {
    for options in [
        VocabOptions::default(),
        VocabOptions::default().with_placeholders(false),
        VocabOptions::default().with_min_frequency(1),
        VocabOptions::default().with_segmenter("words"),
    ] {
        let codec = fed(options);
        let vocab = codec.vocab();
        assert_eq!(vocab.token_to_index().len(), vocab.len());

        let mut indices: Vec<u32> = vocab.token_to_index().values().copied().collect();
        indices.sort();
        assert_eq!(indices, (0..vocab.len() as u32).collect::<Vec<_>>());

        for (token, &index) in vocab.token_to_index() {
            assert_eq!(vocab.lookup_token(index), Some(token.as_str()));
        }
    }
}

#[test]
fn test_reserved_lead_the_vocab() {
    let codec = fed(VocabOptions::default().with_reserved(ReservedSymbols::new("<s>", "", "<unk>")));
    assert_eq!(codec.vocab().index_to_token()[..2], ["<s>", "<unk>"]);
    assert_eq!(codec.start_index(), Some(0));
    assert_eq!(codec.end_index(), None);
    assert_eq!(codec.unknown_index(), Some(1));
}

#[test]
fn test_whitespace_is_stripped() {
    let codec = fed(VocabOptions::default());
    for ws in [" ", "\t", "\n", "\r"] {
        assert!(!codec.vocab().contains(ws));
    }
    assert_eq!(
        codec.encode("a b\tc", false).unwrap(),
        codec.encode("abc", false).unwrap()
    );
}

#[test]
fn test_words_segmenter_stop_words() {
    let codec = fed(
        VocabOptions::default()
            .with_segmenter("words")
            .with_pretreatment("identity")
            .with_stop_words(["world"]),
    );
    assert!(codec.vocab().contains("hello"));
    assert!(!codec.vocab().contains("world"));

    let tokens = codec.decode(&codec.encode("hello world", false).unwrap()).unwrap();
    assert_eq!(tokens, vec!["hello"]);
}

#[test]
fn test_unknown_disabled_errors() {
    let codec = fed(VocabOptions::default().with_placeholders(false));
    match codec.encode("zzz", false) {
        Err(WordindexError::UnknownToken { token }) => assert_eq!(token, "z"),
        other => panic!("expected UnknownToken, got {other:?}"),
    }
}

fn drop_unknown() -> DecodeOptions {
    DecodeOptions::default().with_unknown(UnknownPolicy::Drop)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn encode_is_deterministic(
        corpus in proptest::collection::vec("[a-h ]{0,12}", 0..8),
        text in "[a-k ]{0,40}",
        fill in any::<bool>(),
    ) {
        let mut a: VocabCodec<u32> = VocabCodec::new(VocabOptions::default()).unwrap();
        a.feed(&corpus).unwrap();

        let mut reversed = corpus.clone();
        reversed.reverse();
        let mut b: VocabCodec<u32> = VocabCodec::new(VocabOptions::default()).unwrap();
        b.feed(&reversed).unwrap();

        prop_assert_eq!(a.vocab().index_to_token(), b.vocab().index_to_token());
        prop_assert_eq!(a.encode(&text, fill).unwrap(), b.encode(&text, fill).unwrap());
        prop_assert_eq!(a.encode(&text, fill).unwrap(), a.encode(&text, fill).unwrap());
    }

    #[test]
    fn encode_respects_max_length(
        text in "\\PC{0,60}",
        max_length in 1..40usize,
    ) {
        let codec = fed(VocabOptions::default().with_max_length(max_length));

        let indices = codec.encode(&text, false).unwrap();
        prop_assert!(indices.len() <= max_length);

        let filled = codec.encode(&text, true).unwrap();
        prop_assert_eq!(filled.len(), max_length);
        prop_assert_eq!(&filled[..indices.len()], &indices[..]);

        let unknown = codec.unknown_index().unwrap();
        prop_assert!(filled[indices.len()..].iter().all(|&i| i == unknown));
    }

    #[test]
    fn known_text_round_trips(
        corpus in proptest::collection::vec("[a-z0-9]{1,10}", 1..6),
        pick in any::<proptest::sample::Index>(),
    ) {
        let mut codec: VocabCodec<u32> =
            VocabCodec::new(VocabOptions::default().with_max_length(64)).unwrap();
        codec.feed(&corpus).unwrap();

        let text = pick.get(&corpus);
        let indices = codec.encode(text, true).unwrap();
        let decoded = codec.decode_with(&indices, &drop_unknown()).unwrap();
        prop_assert_eq!(decoded.concat(), text.clone());
    }

    #[test]
    fn truncated_text_round_trips_prefix(
        corpus in proptest::collection::vec("[a-z0-9]{1,10}", 1..6),
        pick in any::<proptest::sample::Index>(),
        max_length in 1..8usize,
    ) {
        let mut codec: VocabCodec<u32> =
            VocabCodec::new(VocabOptions::default().with_max_length(max_length)).unwrap();
        codec.feed(&corpus).unwrap();

        let text = pick.get(&corpus);
        let indices = codec.encode(text, false).unwrap();
        prop_assert!(indices.len() <= max_length);
        prop_assert_eq!(indices[0], codec.start_index().unwrap());

        // START takes the first slot; END is cut first.
        let expected: String = text.chars().take(max_length - 1).collect();
        let decoded = codec.decode_with(&indices, &drop_unknown()).unwrap();
        prop_assert_eq!(decoded.concat(), expected);
    }

    #[test]
    fn unknown_tokens_substitute(
        text in "[a-z]{0,20}",
    ) {
        let codec = fed(VocabOptions::default().with_max_length(32));
        let decoded = codec.decode(&codec.encode(&text, false).unwrap()).unwrap();

        let chars: Vec<String> = text.chars().map(String::from).collect();
        prop_assert_eq!(decoded.len(), chars.len());
        for (c, token) in chars.iter().zip(&decoded) {
            if codec.vocab().contains(c) {
                prop_assert_eq!(c, token);
            } else {
                prop_assert_eq!(token, "@");
            }
        }
    }
}
