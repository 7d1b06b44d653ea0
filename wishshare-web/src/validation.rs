//! Validation logic for the auth, create-community and add-member forms.
//!
//! Extracted from the page components so each rule runs before any network
//! call and can be tested without a rendering environment.

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty
    Required,
    /// Email address is invalid (missing @ symbol)
    InvalidEmail,
    /// Password confirmation doesn't match password
    PasswordsDoNotMatch,
    /// Community name is too short (less than 2 characters)
    CommunityNameTooShort,
}

/// Validates the display name on the sign-up form.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must contain an '@' symbol
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if !trimmed.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validates a password.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates that the password confirmation matches the password.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    Ok(())
}

/// Validates a new community's name.
///
/// # Validation rules
/// - Name must not be blank
/// - Name must be at least 2 characters long
pub fn validate_community_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if name.chars().count() < 2 {
        return Err(ValidationError::CommunityNameTooShort);
    }
    Ok(())
}

/// Validates the user id entered on the add-member form.
pub fn validate_member_user_id(user_id: &str) -> Result<(), ValidationError> {
    if user_id.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Dana").is_ok());
        assert_eq!(validate_name(""), Err(ValidationError::Required));
        assert_eq!(validate_name("   "), Err(ValidationError::Required));
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user.name+tag@example.com").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert_eq!(validate_email(""), Err(ValidationError::Required));
        assert_eq!(validate_email("   "), Err(ValidationError::Required));
        assert_eq!(
            validate_email("userexample.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("hunter22").is_ok());
        assert_eq!(validate_password(""), Err(ValidationError::Required));
    }

    #[test]
    fn test_validate_confirm_password() {
        assert!(validate_confirm_password("secret", "secret").is_ok());
        assert_eq!(
            validate_confirm_password("secret", "Secret"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn test_validate_community_name() {
        assert!(validate_community_name("ab").is_ok());
        assert!(validate_community_name("Board games").is_ok());

        // One character fails before any network call is made.
        assert_eq!(
            validate_community_name("a"),
            Err(ValidationError::CommunityNameTooShort)
        );
        assert_eq!(validate_community_name(""), Err(ValidationError::Required));
        assert_eq!(
            validate_community_name("  "),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn test_validate_member_user_id() {
        assert!(validate_member_user_id("u123").is_ok());
        assert_eq!(validate_member_user_id(""), Err(ValidationError::Required));
        assert_eq!(
            validate_member_user_id("   "),
            Err(ValidationError::Required)
        );
    }
}
