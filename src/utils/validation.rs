// Common validation utilities for Stackgen CLI commands

use crate::utils::error::{Result, StackgenError};

/// Validate a project name before it touches the file system.
///
/// The name becomes a directory name and is interpolated into the
/// generated go.mod and docker-compose.yml, so anything that could
/// escape a path or a manifest value is rejected up front.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(StackgenError::ValidationError(
            "Project name cannot be empty.\n\nUsage: stackgen init <project-name>\nExample: stackgen init demo".to_string()
        ));
    }

    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(StackgenError::ValidationError(
            format!("Invalid project name '{}' - cannot contain path separators or '..'.\n\nProject names should be simple identifiers:\n  ✓ demo\n  ✓ my-app\n  ✗ ../demo\n  ✗ apps/demo", name)
        ));
    }

    if !name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
        return Err(StackgenError::ValidationError(
            format!("Invalid project name '{}' (must be valid identifier).\n\nAllowed characters are letters, digits, '-' and '_':\n  ✓ demo\n  ✓ my_app\n  ✗ my app\n  ✗ demo!", name)
        ));
    }

    if name.starts_with('-') || name.starts_with('_') || name.ends_with('-') || name.ends_with('_') {
        return Err(StackgenError::ValidationError(
            format!("Invalid project name '{}' (must be valid identifier).\n\nNames cannot start or end with '-' or '_'.", name)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_project_name_valid() {
        assert!(validate_project_name("demo").is_ok());
        assert!(validate_project_name("my-app").is_ok());
        assert!(validate_project_name("my_app").is_ok());
        assert!(validate_project_name("app123").is_ok());
    }

    #[test]
    fn test_validate_project_name_rejects_empty() {
        assert!(validate_project_name("").is_err());
    }

    #[test]
    fn test_validate_project_name_rejects_path_traversal() {
        assert!(validate_project_name("../evil").is_err());
        assert!(validate_project_name("..").is_err());
        assert!(validate_project_name("apps/demo").is_err());
        assert!(validate_project_name("apps\\demo").is_err());
    }

    #[test]
    fn test_validate_project_name_rejects_invalid_characters() {
        assert!(validate_project_name("my app").is_err());
        assert!(validate_project_name("demo!").is_err());
        assert!(validate_project_name("my:app").is_err());
    }

    #[test]
    fn test_validate_project_name_rejects_leading_trailing_punctuation() {
        assert!(validate_project_name("-demo").is_err());
        assert!(validate_project_name("demo-").is_err());
        assert!(validate_project_name("_demo").is_err());
        assert!(validate_project_name("demo_").is_err());
    }
}
