#![allow(missing_docs)]

use std::{sync::Arc, thread};

use wordindex::{
    ComponentRegistry,
    VocabCodec,
    VocabOptions,
    WordindexError,
    segmentation::{FnSegmenter, TextSegmenter},
    vocab::io::{load_vocab_json_path, save_vocab_json_path},
};

const CORPUS: &[&str] = &[
    "the quick brown fox",
    "jumps over the lazy dog",
    "the dog sleeps",
    "a fox, a dog!",
];

const TEXTS: &[&str] = &["the fox", "the cat sleeps", "", "dog dog dog dog dog dog dog"];

fn word_codec() -> VocabCodec<u32> {
    let options = VocabOptions::default()
        .with_segmenter("words")
        .with_pretreatment("lowercase")
        .with_max_length(6)
        .with_stop_words(["a"]);
    let mut codec = VocabCodec::new(options).unwrap();
    codec.feed(CORPUS).unwrap();
    codec
}

fn assert_equivalent(
    a: &VocabCodec<u32>,
    b: &VocabCodec<u32>,
) {
    assert_eq!(a.options(), b.options());
    assert_eq!(a.vocab().index_to_token(), b.vocab().index_to_token());
    for text in TEXTS {
        for fill in [false, true] {
            let indices = a.encode(text, fill).unwrap();
            assert_eq!(indices, b.encode(text, fill).unwrap(), "{text:?}");
            assert_eq!(a.decode(&indices).unwrap(), b.decode(&indices).unwrap());
        }
    }
}

#[test]
fn test_save_restore_bytes() {
    let codec = word_codec();
    let restored = VocabCodec::restore(&codec.save().unwrap()).unwrap();
    assert_equivalent(&codec, &restored);

    // Saving a restored codec is stable.
    assert_eq!(restored.save().unwrap(), codec.save().unwrap());
}

#[test]
fn test_save_restore_unfed() {
    let codec: VocabCodec<u32> = VocabCodec::new(VocabOptions::default()).unwrap();
    let restored: VocabCodec<u32> = VocabCodec::restore(&codec.save().unwrap()).unwrap();

    assert_eq!(restored.options(), codec.options());
    assert!(restored.vocab().is_empty());
    assert_eq!(restored.unknown_index(), None);
    for text in ["", "abc"] {
        assert!(matches!(
            restored.encode(text, false),
            Err(WordindexError::UnknownToken { .. })
        ));
    }

    // Feeding a restored, unfed codec matches feeding a fresh one.
    let fed = word_codec();
    let unfed: VocabCodec<u32> = VocabCodec::new(fed.options().clone()).unwrap();
    let mut refed: VocabCodec<u32> = VocabCodec::restore(&unfed.save().unwrap()).unwrap();
    refed.feed(CORPUS).unwrap();
    assert_equivalent(&fed, &refed);
}

#[test]
fn test_save_restore_path() {
    let codec = word_codec();

    tempdir::TempDir::new("wordindex_persistence")
        .and_then(|dir| {
            let path = dir.path().join("vocab.json");
            save_vocab_json_path(&codec, &path).expect("Failed to save vocab");

            let restored: VocabCodec<u32> =
                load_vocab_json_path(&path, &ComponentRegistry::default())
                    .expect("Failed to load vocab");
            assert_equivalent(&codec, &restored);

            Ok(())
        })
        .unwrap();
}

#[test]
fn test_restore_missing_file() {
    let result: Result<VocabCodec<u32>, _> =
        load_vocab_json_path("/nonexistent/wordindex/vocab.json", &ComponentRegistry::default());
    assert!(matches!(result, Err(WordindexError::Io(_))));
}

#[test]
fn test_custom_segmenter_restore() {
    fn reversed_words() -> Arc<dyn TextSegmenter> {
        Arc::new(FnSegmenter::new("reversed_words", |s: &str| {
            s.split(',').map(|w| w.chars().rev().collect::<String>()).collect()
        }))
    }

    let registry = ComponentRegistry::default()
        .with_segmenter(reversed_words())
        .unwrap();
    let options = VocabOptions::default().with_segmenter("reversed_words");

    let mut codec: VocabCodec<u32> = VocabCodec::from_registry(options, &registry).unwrap();
    codec.feed(["ab,cd", "ab"]).unwrap();
    assert_eq!(codec.vocab().lookup_index("ba"), Some(3));

    let bytes = codec.save().unwrap();
    assert!(matches!(
        VocabCodec::<u32>::restore(&bytes),
        Err(WordindexError::InvalidConfiguration(_))
    ));

    let restored: VocabCodec<u32> = VocabCodec::restore_with_registry(&bytes, &registry).unwrap();
    assert_eq!(
        restored.encode("cd,ab", false).unwrap(),
        codec.encode("cd,ab", false).unwrap()
    );
}

#[test]
fn test_concurrent_reads() {
    let codec = Arc::new(word_codec());
    let expected: Vec<Vec<u32>> = TEXTS
        .iter()
        .map(|text| codec.encode(text, true).unwrap())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let codec = codec.clone();
            thread::spawn(move || {
                (0..50)
                    .map(|_| {
                        TEXTS
                            .iter()
                            .map(|text| codec.encode(text, true).unwrap())
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for round in handle.join().unwrap() {
            assert_eq!(round, expected);
        }
    }

    let batch = codec.encode_batch(TEXTS, true).unwrap();
    assert_eq!(batch, expected);
}
