// ============================================================================
// C ABI Host Binding
// Thin extern "C" layer exposing parse/format to a hosting runtime
// ============================================================================
//
// Contract for every function here:
// - Never panics across the boundary
// - Strings returned are owned by this library; release them with
//   `janum_free_string`
// - Failures are reported as an `ErrorKind` code plus an optional message
//   written through `out_error`

use crate::domain::{FormatOptions, FormatStyle};
use crate::engine;
use crate::numeric::{ErrorKind, NumeralError, NumeralResult};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

/// Health-check string returned by [`janum_ping`].
pub const PING_MESSAGE: &str = "japanese_number is working";

/// Status returned on success.
pub const STATUS_OK: i32 = 0;

/// Transcode strings for FFI consumption by stripping interior NUL bytes.
fn sanitize_for_c(value: String) -> CString {
    match CString::new(value) {
        Ok(cstring) => cstring,
        Err(err) => {
            let mut bytes = err.into_vec();
            bytes.retain(|b| *b != 0);
            // No NUL bytes remain, so this cannot fail
            CString::new(bytes).unwrap_or_default()
        }
    }
}

fn into_raw_string(value: String) -> *mut c_char {
    sanitize_for_c(value).into_raw()
}

unsafe fn clear_out_error(out_error: *mut *mut c_char) {
    if !out_error.is_null() {
        *out_error = ptr::null_mut();
    }
}

unsafe fn store_error(out_error: *mut *mut c_char, err: &NumeralError) {
    if !out_error.is_null() {
        *out_error = into_raw_string(err.to_string());
    }
}

unsafe fn read_text<'a>(text: *const c_char) -> NumeralResult<&'a str> {
    if text.is_null() {
        return Err(NumeralError::new(
            ErrorKind::EmptyInput,
            "text pointer must not be NULL",
        ));
    }
    CStr::from_ptr(text).to_str().map_err(|err| {
        NumeralError::new(
            ErrorKind::UnknownCharacter,
            format!("text is not valid UTF-8 after byte {}", err.valid_up_to()),
        )
    })
}

/// Returns a fixed string confirming the library is loaded.
///
/// The returned string must be freed with `janum_free_string`.
#[no_mangle]
pub extern "C" fn janum_ping() -> *mut c_char {
    into_raw_string(PING_MESSAGE.to_string())
}

/// Parses numeral text into a 64-bit integer.
///
/// # Safety
/// - `text` must be NULL or a valid NUL-terminated C string
/// - `out_value` must be NULL or valid for writes
/// - `out_error` must be NULL or valid for writes; on failure it receives a
///   message that must be freed with `janum_free_string`
///
/// # Returns
/// - 0 on success
/// - the `ErrorKind` code on failure; values outside `i64` report `Overflow`
#[no_mangle]
pub unsafe extern "C" fn janum_parse(
    text: *const c_char,
    out_value: *mut i64,
    out_error: *mut *mut c_char,
) -> i32 {
    clear_out_error(out_error);

    let result = read_text(text).and_then(engine::parse).and_then(|value| {
        i64::try_from(value).map_err(|_| NumeralError::overflow(None))
    });

    match result {
        Ok(value) => {
            if !out_value.is_null() {
                *out_value = value;
            }
            STATUS_OK
        }
        Err(err) => {
            store_error(out_error, &err);
            err.kind.code()
        }
    }
}

/// Formats an integer in everyday kanji.
///
/// The returned string must be freed with `janum_free_string`.
#[no_mangle]
pub extern "C" fn janum_format(value: i64) -> *mut c_char {
    into_raw_string(engine::format(value as i128))
}

/// Formats an integer in the given style: 0 kanji, 1 daiji, 2 positional,
/// 3 mixed.
///
/// Returns NULL for an unknown style. The returned string must be freed with
/// `janum_free_string`.
#[no_mangle]
pub extern "C" fn janum_format_style(value: i64, style: i32) -> *mut c_char {
    let Some(style) = FormatStyle::from_code(style) else {
        return ptr::null_mut();
    };
    let options = match style {
        FormatStyle::Mixed => FormatOptions::mixed(),
        other => FormatOptions::new(other),
    };
    into_raw_string(engine::format_with(value as i128, &options))
}

/// Frees a string returned by this library.
///
/// # Safety
/// - `s` must be NULL or a pointer returned by a `janum_*` function
/// - The pointer must not be used after calling this function
#[no_mangle]
pub unsafe extern "C" fn janum_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_for_c() {
        let cstring = sanitize_for_c("一\0二".to_string());
        assert_eq!(cstring.to_str().unwrap(), "一二");
    }

    #[test]
    fn test_read_text_null() {
        let err = unsafe { read_text(ptr::null()) }.unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyInput);
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let bytes = CString::new(vec![0xe4, 0xb8]).unwrap();
        let err = unsafe { read_text(bytes.as_ptr()) }.unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownCharacter);
    }
}
