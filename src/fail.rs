//! Bridge from assertion results to test failures.
//!
//! A Rust test fails by panicking. Tests that prefer not to return a `Result`
//! can end any assertion with [`or_fail`](OrFail::or_fail), which turns an
//! error into a panic carrying the assertion's message and reporting the
//! caller's location.

use std::fmt::Display;

/// Unwraps an assertion result or fails the current test.
///
/// # Example
///
/// ```rust
/// use jsonapi_testing::{DocumentTester, OrFail, ResourceIdentity};
///
/// let resource = DocumentTester::create(r#"{"data": {"type": "posts", "id": "1"}}"#)
///     .or_fail()
///     .assert_resource()
///     .or_fail();
///
/// resource.assert_type_is("posts").or_fail();
/// ```
///
/// ```rust,should_panic
/// use jsonapi_testing::{DocumentTester, OrFail, ResourceIdentity};
///
/// let resource = DocumentTester::create(r#"{"data": {"type": "posts", "id": "1"}}"#)
///     .or_fail()
///     .assert_resource()
///     .or_fail();
///
/// // panics with "expected type to be comments, got posts"
/// resource.assert_type_is("comments").or_fail();
/// ```
pub trait OrFail<T> {
    /// Returns the success value, or panics with the error's message.
    fn or_fail(self) -> T;
}

impl<T, E: Display> OrFail<T> for Result<T, E> {
    #[track_caller]
    fn or_fail(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_passes_value_through() {
        let result: Result<u8, String> = Ok(7);
        assert_eq!(result.or_fail(), 7);
    }

    #[test]
    #[should_panic(expected = "expected type to be comments, got posts")]
    fn test_err_panics_with_message() {
        let result: Result<(), String> =
            Err("expected type to be comments, got posts".to_string());
        result.or_fail();
    }
}
