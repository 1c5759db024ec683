use crate::AppError;

use std::io;

/// WHAT: IO failures convert into `AppError::IoError` with a location
/// WHY: Config directory creation propagates IO errors with `?`
#[test]
fn given_io_error_when_converted_then_io_variant_with_location() {
    // Given: A permission failure
    let source = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");

    // When: Converted with `?`-style From
    let err = AppError::from(source);

    // Then: IO variant, message carries the source and call site
    assert!(matches!(err, AppError::IoError { .. }));
    let message = err.to_string();
    assert!(message.contains("read-only"));
    assert!(message.contains("error.rs"));
}
