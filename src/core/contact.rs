//! Contact form stub.
//!
//! The form never leaves the browser: a submission is checked for the three
//! required fields and the email shape, then reported as a single diagnostic line.

use derive_more::Display;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ContactField {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("message")]
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Jane Smith",
            ContactField::Email => "jane@framer.com",
            ContactField::Message => "Tell us about your project...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("required field is empty: {0}")]
    MissingField(ContactField),
    #[error("not an email address: {0}")]
    InvalidEmail(String),
}

/// Same shape the browser accepts for `type="email"`: one `@` with a
/// non-empty local part and domain, no whitespace
pub fn is_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Current values of the three inputs
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Required fields that are empty or whitespace, in form order
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ContactFormError> {
        if let Some(field) = self.missing_fields().first() {
            return Err(ContactFormError::MissingField(*field));
        }
        if !is_email(&self.email) {
            return Err(ContactFormError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }

    /// Check the required fields and the email shape, then snapshot the values for reporting
    pub fn submit(&self) -> Result<ContactSubmission, ContactFormError> {
        self.validate()?;
        Ok(ContactSubmission { form: self.clone() })
    }
}

/// A validated submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    form: ContactForm,
}

impl ContactSubmission {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Line written to the diagnostic log
    pub fn diagnostic_line(&self) -> String {
        let values = serde_json::to_string(&self.form)
            .unwrap_or_else(|_| format!("{:?}", self.form));
        format!("Form submitted: {values}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Jane");
        form.set(ContactField::Email, "jane@x.com");
        form.set(ContactField::Message, "Hello");
        form
    }

    #[test]
    fn test_empty_form_reports_all_fields_missing() {
        let form = ContactForm::new();
        assert_eq!(
            form.missing_fields(),
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
        assert_eq!(
            form.validate(),
            Err(ContactFormError::MissingField(ContactField::Name))
        );
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut form = filled();
        form.set(ContactField::Message, "   ");
        assert_eq!(
            form.submit(),
            Err(ContactFormError::MissingField(ContactField::Message))
        );
    }

    #[test]
    fn test_set_and_get_round_trip_by_field() {
        let form = filled();
        assert_eq!(form.get(ContactField::Name), "Jane");
        assert_eq!(form.get(ContactField::Email), "jane@x.com");
        assert_eq!(form.get(ContactField::Message), "Hello");
    }

    #[test]
    fn test_diagnostic_line_contains_values() {
        let submission = filled().submit().unwrap();
        assert_eq!(
            submission.diagnostic_line(),
            r#"Form submitted: {"name":"Jane","email":"jane@x.com","message":"Hello"}"#
        );
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut form = filled();
        form.set(ContactField::Email, "jane");
        assert_eq!(
            form.submit(),
            Err(ContactFormError::InvalidEmail("jane".to_string()))
        );

        for bad in ["@x.com", "jane@", "jane@@x.com", "ja ne@x.com", "jane@.com"] {
            assert!(!is_email(bad), "{bad}");
        }
        assert!(is_email("jane@x.com"));
        assert!(is_email("a@b"));
    }

    #[test]
    fn test_error_message_names_field() {
        let err = ContactFormError::MissingField(ContactField::Email);
        assert_eq!(err.to_string(), "required field is empty: email");
    }
}
