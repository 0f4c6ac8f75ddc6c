//! Validation rules for the feedback form fields.

pub fn is_valid_name(value: &str) -> bool {
    value.trim().chars().count() >= 2
}

/// Accepts anything shaped like `local@domain.tld`: exactly one `@`, no
/// whitespace, and a dot strictly inside the domain part.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && domain.find('.').is_some_and(|dot| dot > 0 && dot < domain.len() - 1)
        }
        _ => false,
    }
}

pub fn is_valid_message(value: &str) -> bool {
    value.trim().chars().count() >= 10
}

/// Returns the inline error message for a field, or `None` when the value
/// passes. Fields without a rule validate clean.
pub fn validate_field(field: &str, value: &str) -> Option<&'static str> {
    match field {
        "name" if !is_valid_name(value) => Some("Please enter your name (at least 2 characters)"),
        "email" if !is_valid_email(value) => Some("Please enter a valid email address"),
        "message" if !is_valid_message(value) => {
            Some("Please enter your message (at least 10 characters)")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_needs_two_characters() {
        assert!(is_valid_name("Al"));
        assert!(!is_valid_name("A"));
        assert!(is_valid_name("  Al  "));
        assert!(!is_valid_name(" A "));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn email_needs_local_domain_and_tld() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn message_needs_ten_characters() {
        assert!(!is_valid_message("short"));
        assert!(is_valid_message("Hello there!!"));
        assert!(!is_valid_message("         a"));
    }

    #[test]
    fn validate_field_maps_failures_to_messages() {
        assert_eq!(
            validate_field("name", "A"),
            Some("Please enter your name (at least 2 characters)")
        );
        assert_eq!(
            validate_field("email", "nope"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate_field("message", "short"),
            Some("Please enter your message (at least 10 characters)")
        );
        assert_eq!(validate_field("name", "Ana"), None);
        assert_eq!(validate_field("email", "ana@x.com"), None);
        assert_eq!(validate_field("message", "Hello there!!"), None);
        // No rule registered for the category select.
        assert_eq!(validate_field("category", ""), None);
    }
}
