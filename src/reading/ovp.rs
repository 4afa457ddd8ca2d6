use unicode_segmentation::UnicodeSegmentation;

/// Focus letter position for a chunk of text.
///
/// The focus sits one third into the text, never on the first or last
/// grapheme unless the text is too short to avoid it:
/// - 0-1 graphemes → 0
/// - 2 graphemes → 1
/// - otherwise → `len / 3`, clamped to `1..=len-1`
pub fn calculate_anchor_position(text: &str) -> usize {
    let len = text.graphemes(true).count();
    if len <= 1 {
        return 0;
    }
    (len / 3).min(len - 1).max(1)
}

/// Splits text into the part before the focus grapheme, the focus grapheme
/// itself, and the rest.
pub fn split_at_anchor(text: &str) -> (String, String, String) {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.is_empty() {
        return (String::new(), String::new(), String::new());
    }

    let anchor = calculate_anchor_position(text);
    (
        graphemes[..anchor].concat(),
        graphemes[anchor].to_string(),
        graphemes[anchor + 1..].concat(),
    )
}
