//! Result type alias for sample-extract

use super::errors::ExtractError;

/// Result type alias for fallible operations
///
/// # Examples
///
/// ```
/// use sample_extract::domain::result::Result;
/// use sample_extract::domain::errors::ExtractError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ExtractError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(ExtractError::Validation("test error".to_string()));
        assert!(result.is_err());
    }
}
