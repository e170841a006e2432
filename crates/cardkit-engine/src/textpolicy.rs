use std::borrow::Cow;
use tracing::warn;

/// Transport ceiling for one text block, in UTF-8 bytes. Teams rejects
/// payloads past ~28 KB, so individual blocks stay under 27 KiB.
pub const MAX_BLOCK_BYTES: usize = 27 * 1024;

/// Characters kept when a block is truncated. Prefix cut, no word-boundary
/// awareness.
pub const TRUNCATE_CHARS: usize = 5000;

/// Bounds one text payload to the transport ceiling.
///
/// Returns the text (borrowed when untouched) and whether it was truncated.
/// `str::len` is the exact UTF-8 byte size, so the in-budget decision is a
/// single O(1) comparison; the character walk - the only work proportional to
/// input size - happens solely on the over-ceiling path, for text that is
/// about to be cut anyway. Output is always within budget, so applying the
/// policy to its own output is a no-op.
pub fn bound_text(text: &str) -> (Cow<'_, str>, bool) {
    let byte_len = text.len();
    if byte_len <= MAX_BLOCK_BYTES {
        return (Cow::Borrowed(text), false);
    }

    let Some((cut, _)) = text.char_indices().nth(TRUNCATE_CHARS) else {
        // Fewer than TRUNCATE_CHARS characters cannot exceed the ceiling
        // (UTF-8 tops out at 4 bytes per character), so this arm is
        // unreachable while the constants keep TRUNCATE_CHARS * 4 under
        // MAX_BLOCK_BYTES; the full text is already as short as a cut would
        // leave it.
        return (Cow::Borrowed(text), false);
    };

    warn!(
        bytes = byte_len,
        kept_chars = TRUNCATE_CHARS,
        "truncating oversized text block"
    );

    (Cow::Owned(text[..cut].to_string()), true)
}
