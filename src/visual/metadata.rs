//! EXIF metadata presence check
//!
//! Missing EXIF and unreadable EXIF are both treated as "issue found". This
//! conflates absence of optional data with an actual read failure; it is
//! intentionally conservative and kept as-is (see DESIGN.md).

use std::io::Cursor;

/// Check image metadata for inconsistencies
///
/// Returns true when an issue is flagged:
/// - no raw container bytes are available (bare pixel input),
/// - the container carries no EXIF segment,
/// - the EXIF segment cannot be parsed,
/// - the EXIF segment parses but holds no fields.
pub fn metadata_issue(raw_bytes: Option<&[u8]>) -> bool {
    let bytes = match raw_bytes {
        Some(bytes) => bytes,
        None => {
            log::debug!("Metadata check: no raw bytes available");
            return true;
        }
    };

    match exif::Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => {
            let empty = exif.fields().next().is_none();
            if empty {
                log::debug!("Metadata check: EXIF segment present but empty");
            }
            empty
        }
        Err(e) => {
            log::debug!("Metadata check: EXIF unreadable ({})", e);
            true
        }
    }
}
