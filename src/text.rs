//! Text normalization and chunking for the speech provider.
//!
//! The provider rejects requests longer than [`MAX_CHUNK_CHARS`] characters,
//! so longer input is cut into sentence-like pieces which are then packed back
//! together up to that budget.

/// Longest text the provider accepts in a single request, in characters.
pub const MAX_CHUNK_CHARS: usize = 100;

const SENTENCE_DELIMITERS: &[char] = &[
    '.', ',', '!', '?', ';', ':', '…', '‥', '¡', '¿', '—', '。', '，', '、', '：', '；', '！',
    '？', '،', '؟',
];

fn is_delimiter(c: char) -> bool {
    SENTENCE_DELIMITERS.contains(&c)
}

fn is_speakable(piece: &str) -> bool {
    piece.chars().any(char::is_alphanumeric)
}

/// Normalize raw input before chunking.
///
/// Rejoins words hyphenated across a line break, turns remaining line breaks
/// into spaces and collapses whitespace runs.
pub fn prepare(text: &str) -> String {
    let joined = text.replace("-\r\n", "").replace("-\n", "");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split prepared text into provider-sized chunks.
///
/// Every returned chunk is non-empty, contains at least one alphanumeric
/// character and is at most `max_chars` characters long. Returns an empty
/// vector when nothing in `text` can be spoken.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    let parts = split_pieces(text)
        .into_iter()
        .map(str::trim)
        .filter(|piece| is_speakable(piece))
        .flat_map(|piece| hard_split(piece, max_chars))
        .filter(|part| is_speakable(part));

    for part in parts {
        let part_len = part.chars().count();
        if current.is_empty() {
            current = part;
            current_len = part_len;
        } else if current_len + 1 + part_len > max_chars {
            chunks.push(std::mem::take(&mut current));
            current = part;
            current_len = part_len;
        } else {
            current.push(' ');
            current.push_str(&part);
            current_len += 1 + part_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Cut after each run of sentence delimiters, keeping the delimiters.
///
/// `.` and `,` between two digits belong to a number and do not cut.
fn split_pieces(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut pieces = Vec::new();
    let mut start = 0usize;

    for (pos, &(idx, c)) in chars.iter().enumerate() {
        if !is_delimiter(c) {
            continue;
        }
        let prev = pos.checked_sub(1).map(|p| chars[p].1);
        let next = chars.get(pos + 1).map(|&(_, n)| n);
        let inside_number = matches!(c, '.' | ',')
            && prev.is_some_and(|p| p.is_ascii_digit())
            && next.is_some_and(|n| n.is_ascii_digit());
        if inside_number || next.is_some_and(is_delimiter) {
            continue;
        }
        let end = idx + c.len_utf8();
        pieces.push(&text[start..end]);
        start = end;
    }

    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

/// Break a piece longer than `max_chars` at whitespace, or mid-word when a
/// single word exceeds the budget.
fn hard_split(piece: &str, max_chars: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut remaining = piece;

    while remaining.chars().count() > max_chars {
        let cut = remaining
            .char_indices()
            .nth(max_chars)
            .map(|(idx, _)| idx)
            .unwrap_or(remaining.len());
        let window = &remaining[..cut];
        match window.rfind(char::is_whitespace) {
            Some(space) if space > 0 => {
                parts.push(window[..space].trim_end().to_string());
                remaining = remaining[space..].trim_start();
            }
            _ => {
                parts.push(window.to_string());
                remaining = &remaining[cut..];
            }
        }
    }

    if !remaining.is_empty() {
        parts.push(remaining.to_string());
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_collapses_whitespace_and_line_breaks() {
        assert_eq!(prepare("  Xin   chào\n\tbạn  "), "Xin chào bạn");
        assert_eq!(prepare("Việt\r\nNam"), "Việt Nam");
    }

    #[test]
    fn prepare_rejoins_hyphenated_line_breaks() {
        assert_eq!(prepare("hyphen-\nated word"), "hyphenated word");
        assert_eq!(prepare("hyphen-\r\nated"), "hyphenated");
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        assert_eq!(split_chunks("Xin chào.", MAX_CHUNK_CHARS), vec!["Xin chào."]);
    }

    #[test]
    fn empty_or_punctuation_only_text_has_no_chunks() {
        assert!(split_chunks("", MAX_CHUNK_CHARS).is_empty());
        assert!(split_chunks(" ... !? ", MAX_CHUNK_CHARS).is_empty());
    }

    #[test]
    fn long_text_respects_budget_and_keeps_words() {
        let text = prepare(&"Hôm nay trời đẹp, chúng ta đi chơi nhé! ".repeat(12));
        let chunks = split_chunks(&text, MAX_CHUNK_CHARS);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= MAX_CHUNK_CHARS, "chunk too long: {chunk}");
        }
        let rejoined = chunks.join(" ");
        let original_words: Vec<&str> = text.split_whitespace().collect();
        let chunk_words: Vec<&str> = rejoined.split_whitespace().collect();
        assert_eq!(chunk_words, original_words);
    }

    #[test]
    fn decimals_do_not_split() {
        let pieces = split_pieces("Giá là 3.14 và 1,5 đồng. Xong");
        assert_eq!(pieces, vec!["Giá là 3.14 và 1,5 đồng.", " Xong"]);
    }

    #[test]
    fn delimiter_runs_stay_together() {
        let pieces = split_pieces("Thật sao?! Ừ...");
        assert_eq!(pieces, vec!["Thật sao?!", " Ừ..."]);
    }

    #[test]
    fn oversized_word_is_split_mid_word() {
        let word = "a".repeat(250);
        let chunks = split_chunks(&word, MAX_CHUNK_CHARS);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 100);
        assert_eq!(chunks[2].len(), 50);
    }

    #[test]
    fn hard_split_prefers_whitespace() {
        let parts = hard_split("một hai ba bốn", 8);
        assert_eq!(parts, vec!["một hai", "ba bốn"]);
    }
}
