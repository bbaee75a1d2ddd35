//! Property-based tests for the character splitter

use pagechunk_core::{chunk_text, ChunkConfig, OversizePolicy};
use proptest::prelude::*;

/// Chunk size and an overlap strictly below it
fn size_and_overlap() -> impl Strategy<Value = (usize, usize)> {
    (1usize..60).prop_flat_map(|size| (Just(size), 0..size))
}

proptest! {
    #[test]
    fn chunks_fit_unless_single_segment(
        text in "[a-z \n]{0,300}",
        separator in prop::sample::select(vec![" ", "\n"]),
        (size, overlap) in size_and_overlap(),
    ) {
        let config = ChunkConfig::new(separator, size, overlap).unwrap();
        for chunk in chunk_text(&text, &config) {
            prop_assert!(!chunk.is_empty());
            prop_assert!(
                chunk.chars().count() <= size || !chunk.contains(separator),
                "chunk {:?} exceeds {} and spans a separator",
                chunk,
                size
            );
        }
    }

    #[test]
    fn hard_split_always_fits(
        text in "[a-z \n]{0,300}",
        (size, overlap) in size_and_overlap(),
    ) {
        let config = ChunkConfig::builder()
            .separator("\n")
            .chunk_size(size)
            .chunk_overlap(overlap)
            .oversize(OversizePolicy::HardSplit)
            .build()
            .unwrap();
        for chunk in chunk_text(&text, &config) {
            prop_assert!(chunk.chars().count() <= size);
        }
    }

    #[test]
    fn character_chunks_overlap_exactly(
        text in "[a-z]{0,200}",
        (size, overlap) in size_and_overlap(),
    ) {
        let config = ChunkConfig::new("", size, overlap).unwrap();
        let chunks = chunk_text(&text, &config);

        let mut rebuilt = chunks.first().cloned().unwrap_or_default();
        for pair in chunks.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            prop_assert!(next.len() > overlap);
            prop_assert_eq!(&prev[prev.len() - overlap..], &next[..overlap]);
            rebuilt.push_str(&next[overlap..]);
        }
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn segment_chunks_share_at_most_overlap(
        words in prop::collection::hash_set("[a-z]{1,8}", 0..60),
        separator in prop::sample::select(vec![" ", "\n"]),
        (size, overlap) in size_and_overlap(),
    ) {
        // Distinct words make the shared run of segments unambiguous
        let words: Vec<String> = words.into_iter().collect();
        let text = words.join(separator);
        let config = ChunkConfig::new(separator, size, overlap).unwrap();
        let chunks = chunk_text(&text, &config);

        for pair in chunks.windows(2) {
            let prev: Vec<&str> = pair[0].split(separator).collect();
            let next: Vec<&str> = pair[1].split(separator).collect();
            let shared = (1..=prev.len().min(next.len()))
                .rev()
                .find(|&k| prev[prev.len() - k..] == next[..k])
                .unwrap_or(0);

            let run = next[..shared].join(separator);
            prop_assert!(
                config.measure(&run) <= overlap,
                "{:?} and {:?} share {:?}, longer than {}",
                pair[0],
                pair[1],
                run,
                overlap
            );
        }
    }

    #[test]
    fn word_chunks_are_substrings_in_order(
        words in prop::collection::vec("[a-z]{1,8}", 0..60),
        (size, overlap) in size_and_overlap(),
    ) {
        let text = words.join(" ");
        let config = ChunkConfig::new(" ", size, overlap).unwrap();
        let chunks = chunk_text(&text, &config);

        let mut search_from = 0;
        for chunk in &chunks {
            let found = text[search_from..].find(chunk.as_str());
            prop_assert!(found.is_some(), "chunk {:?} not found in order", chunk);
            search_from += found.unwrap_or(0);
        }
    }

    #[test]
    fn splitting_is_deterministic(
        text in "\\PC{0,200}",
        (size, overlap) in size_and_overlap(),
    ) {
        let config = ChunkConfig::new(".", size, overlap).unwrap();
        prop_assert_eq!(chunk_text(&text, &config), chunk_text(&text, &config));
    }
}
