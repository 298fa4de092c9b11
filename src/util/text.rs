/// Clip `text` to its first `max_chars` characters, appending `suffix` only
/// when something was cut off.
///
/// Counts Unicode scalar values, never bytes, so multi-byte names are never
/// split mid-character.
pub fn clip(text: &str, max_chars: usize, suffix: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut clipped = String::with_capacity(cut + suffix.len());
            clipped.push_str(&text[..cut]);
            clipped.push_str(suffix);
            clipped
        }
        None => text.to_string(),
    }
}
