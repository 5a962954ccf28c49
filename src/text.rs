use ascii::AsciiStr;

use crate::error::FieldError;

/// Reads a null-terminated ascii string out of a fixed-width field.
///
/// A field of `N + 1` bytes holds at most `N` characters, anything after the
/// first null is padding and ignored.
pub fn read_null_ascii(data: &[u8]) -> Result<String, FieldError> {
    let end = data.iter().position(|&b| b == 0).ok_or(FieldError::NoNull)?;
    let text = &data[..end];

    let text = AsciiStr::from_ascii(text).map_err(|err| {
        let pos = err.valid_up_to();
        FieldError::NotAscii { pos, byte: text[pos] }
    })?;

    Ok(text.as_str().to_owned())
}
