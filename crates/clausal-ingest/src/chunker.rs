//! Overlapping fixed-size window chunker.
//!
//! Windows are measured in characters and advance by
//! `window_size - overlap`, so adjacent chunks share exactly `overlap`
//! characters and every character of the input lands in at least one
//! chunk. Splitting mid-word is accepted; the retrieval tiers tokenize
//! chunks themselves and the overlap keeps boundary words intact in a
//! neighbor.

use clausal_core::config::ChunkerConfig;
use clausal_core::models::Chunk;

/// Split normalized text into overlapping windows.
///
/// Empty input yields an empty sequence; input no longer than the window
/// yields exactly one chunk equal to the whole text. The config must have
/// been validated (`overlap < window_size`).
pub fn chunk(text: &str, config: &ChunkerConfig) -> Vec<Chunk> {
    if text.is_empty() {
        return Vec::new();
    }

    // Char-indexed view so windows never split a multi-byte character.
    let char_offsets: Vec<usize> = text
        .char_indices()
        .map(|(byte_idx, _)| byte_idx)
        .collect();
    let char_len = char_offsets.len();

    let byte_at = |char_pos: usize| -> usize {
        if char_pos >= char_len {
            text.len()
        } else {
            char_offsets[char_pos]
        }
    };

    if char_len <= config.window_size {
        return vec![Chunk {
            text: text.to_string(),
            start: 0,
            end: text.len(),
            index: 0,
        }];
    }

    // Validated configs guarantee overlap < window_size; the clamp keeps
    // the loop finite even if an unvalidated config slips through.
    let stride = config.window_size.saturating_sub(config.overlap).max(1);
    let mut chunks = Vec::new();
    let mut start = 0usize;

    loop {
        let end = (start + config.window_size).min(char_len);
        let byte_start = byte_at(start);
        let byte_end = byte_at(end);
        chunks.push(Chunk {
            text: text[byte_start..byte_end].to_string(),
            start: byte_start,
            end: byte_end,
            index: chunks.len(),
        });
        if end == char_len {
            break;
        }
        start += stride;
    }

    chunks
}
