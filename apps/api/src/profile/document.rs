//! Raw document intake: the only place the core can reject its input.

use crate::errors::AnalysisError;

/// Validates that `text` is usable as a profile document.
///
/// Empty or structureless text is fine. NUL characters mean the caller handed
/// over a binary payload rather than extracted text.
pub fn validate_text(text: &str) -> Result<&str, AnalysisError> {
    if text.contains('\0') {
        return Err(AnalysisError::InvalidInput(
            "document contains NUL characters; expected extracted plaintext".to_string(),
        ));
    }
    Ok(text)
}

/// Decodes raw bytes into a document string.
pub fn decode_document(bytes: &[u8]) -> Result<String, AnalysisError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        AnalysisError::InvalidInput(format!("document is not valid UTF-8 text: {e}"))
    })?;
    // Tolerate a UTF-8 byte order mark from text exports.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    validate_text(text).map(String::from)
}
