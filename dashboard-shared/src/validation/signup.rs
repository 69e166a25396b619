/// Account signup schema
///
/// All values are trimmed before any rule runs. Name and email use the
/// `validator` derive rules; the password rules are checked one by one so
/// that every unmet rule is listed.

use crate::auth::password::password_rule_violations;
use crate::form::FormData;
use crate::validation::FieldErrors;
use validator::Validate;

/// Validated signup credentials
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct SignupInput {
    #[validate(length(min = 2, message = "Name must be at least 2 characters long."))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email."))]
    pub email: String,

    /// Plaintext password; hash it before it leaves the action
    pub password: String,
}

impl SignupInput {
    /// Parses and validates the signup fields of a submission
    ///
    /// Missing fields are treated as empty strings and fail their rules.
    ///
    /// # Errors
    ///
    /// Returns every failing field with all of its violated rules.
    pub fn parse(form: &FormData) -> Result<Self, FieldErrors> {
        let field = |name: &str| form.get(name).unwrap_or_default().trim().to_string();

        let input = Self {
            name: field("name"),
            email: field("email"),
            password: field("password"),
        };

        let mut errors = match input.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        for message in password_rule_violations(&input.password) {
            errors.add("password", message);
        }

        errors.into_result(|| input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, password: &str) -> FormData {
        FormData::from_pairs([("name", name), ("email", email), ("password", password)])
    }

    #[test]
    fn test_valid_signup_is_trimmed() {
        let input = SignupInput::parse(&form("  Ada ", " ada@example.com ", " p@ssw0rd! ")).unwrap();
        assert_eq!(input.name, "Ada");
        assert_eq!(input.email, "ada@example.com");
        assert_eq!(input.password, "p@ssw0rd!");
    }

    #[test]
    fn test_password_missing_special_only() {
        let errors = SignupInput::parse(&form("Ada", "ada@example.com", "abc12345")).unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some(&["Contain at least one special character.".to_string()][..])
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_password_rules_not_short_circuited() {
        let errors = SignupInput::parse(&form("Ada", "ada@example.com", "!")).unwrap_err();
        let messages = errors.get("password").unwrap();
        assert_eq!(
            messages,
            &[
                "Be at least 8 characters long".to_string(),
                "Contain at least one letter.".to_string(),
                "Contain at least one number.".to_string(),
            ][..]
        );
    }

    #[test]
    fn test_short_name_and_bad_email() {
        let errors = SignupInput::parse(&form(" A ", "not-an-email", "p@ssw0rd!")).unwrap_err();
        assert_eq!(
            errors.get("name"),
            Some(&["Name must be at least 2 characters long.".to_string()][..])
        );
        assert_eq!(
            errors.get("email"),
            Some(&["Please enter a valid email.".to_string()][..])
        );
        assert!(!errors.contains("password"));
    }

    #[test]
    fn test_missing_fields() {
        let errors = SignupInput::parse(&FormData::new()).unwrap_err();
        assert!(errors.contains("name"));
        assert!(errors.contains("email"));
        assert_eq!(errors.get("password").map(|m| m.len()), Some(4));
    }
}
