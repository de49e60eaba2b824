use lazy_static::lazy_static;
use regex::Regex;

use super::dto::UserPayload;

/// A payload that passed validation: name trimmed, email trimmed and
/// lowercased, ready for the repository. Phone and message pass through
/// unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    email.is_ascii() && EMAIL_RE.is_match(email)
}

/// Pure check shared by create and update (both replace the full record).
/// Collects every violated rule rather than stopping at the first.
pub fn validate_user(payload: UserPayload) -> Result<NewUser, Vec<String>> {
    let mut problems = Vec::new();

    let name = payload
        .name
        .map(|n| n.trim().to_string())
        .unwrap_or_default();
    if name.is_empty() {
        problems.push("name is required".to_string());
    }

    let email = payload
        .email
        .map(|e| e.trim().to_lowercase())
        .unwrap_or_default();
    if email.is_empty() {
        problems.push("email is required".to_string());
    } else if !is_valid_email(&email) {
        problems.push("email is invalid".to_string());
    }

    if !problems.is_empty() {
        return Err(problems);
    }

    Ok(NewUser {
        name,
        email,
        phone: payload.phone,
        message: payload.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str) -> UserPayload {
        UserPayload {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            phone: None,
            message: None,
        }
    }

    #[test]
    fn normalizes_name_and_email() {
        let user = validate_user(payload("  Ann Lee  ", " Ann@Example.COM ")).unwrap();
        assert_eq!(user.name, "Ann Lee");
        assert_eq!(user.email, "ann@example.com");
    }

    #[test]
    fn phone_and_message_pass_through_unmodified() {
        let user = validate_user(UserPayload {
            name: Some("Ann".into()),
            email: Some("ann@example.com".into()),
            phone: Some("  +1 555 0100 ".into()),
            message: Some("hello\nthere".into()),
        })
        .unwrap();
        assert_eq!(user.phone.as_deref(), Some("  +1 555 0100 "));
        assert_eq!(user.message.as_deref(), Some("hello\nthere"));
    }

    #[test]
    fn collects_all_violations() {
        let problems = validate_user(UserPayload {
            name: Some("   ".into()),
            email: Some("not-an-email".into()),
            phone: None,
            message: None,
        })
        .unwrap_err();
        assert_eq!(problems, vec!["name is required", "email is invalid"]);
    }

    #[test]
    fn missing_fields_are_required() {
        let problems = validate_user(UserPayload {
            name: None,
            email: None,
            phone: None,
            message: None,
        })
        .unwrap_err();
        assert_eq!(problems, vec!["name is required", "email is required"]);
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("ümlaut@example.com"));
    }
}
