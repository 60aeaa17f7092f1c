//! # Output Blob Validation
//!
//! The policy checks a caller applies before persisting rendered bytes to
//! blob storage: magic-byte signature, trailing end-of-file marker, and a
//! size ceiling. This wraps the engine's output contract — it is not part
//! of rendering, and `render` never consults it. A storage layer that
//! receives a rejection is expected to delete the blob and surface the
//! error to the user.

use thiserror::Error;

/// Maximum accepted size for a stored resume PDF.
pub const MAX_PDF_BYTES: usize = 5 * 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_EOF: &[u8] = b"%%EOF";

/// Why a rendered blob was rejected for storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing %PDF- signature at start of file")]
    MissingMagic,
    #[error("missing %%EOF marker near end of file")]
    MissingEof,
    #[error("file is {size} bytes, exceeding the {max}-byte ceiling", max = MAX_PDF_BYTES)]
    TooLarge { size: usize },
}

/// Check that `bytes` looks like a storable PDF document.
///
/// The `%%EOF` marker is searched within the last kilobyte only; a valid
/// writer puts it at the very end, and scanning the whole file would let a
/// PDF-shaped prefix on arbitrary trailing data pass.
pub fn validate_pdf_blob(bytes: &[u8]) -> Result<(), ValidationError> {
    if bytes.len() > MAX_PDF_BYTES {
        return Err(ValidationError::TooLarge { size: bytes.len() });
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(ValidationError::MissingMagic);
    }
    let tail_start = bytes.len().saturating_sub(1024);
    let tail = &bytes[tail_start..];
    if !tail.windows(PDF_EOF.len()).any(|w| w == PDF_EOF) {
        return Err(ValidationError::MissingEof);
    }
    Ok(())
}
