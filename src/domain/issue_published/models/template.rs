use std::collections::HashMap;

use crate::domain::issue_published::models::locale::Locale;

/// An email template as the platform stores it: one subject and one body per
/// locale, under a stable key scoped to a context. Variable substitution in
/// the text happens downstream in the mail pipeline; this type only hands
/// out the stored strings.
#[derive(Debug, Clone)]
pub struct EmailTemplate {
    key: String,
    subjects: HashMap<Locale, String>,
    bodies: HashMap<Locale, String>,
}

impl EmailTemplate {
    pub fn new(key: String) -> Self {
        Self {
            key,
            subjects: HashMap::new(),
            bodies: HashMap::new(),
        }
    }

    pub fn with_localized(mut self, locale: Locale, subject: String, body: String) -> Self {
        self.subjects.insert(locale.clone(), subject);
        self.bodies.insert(locale, body);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn subject(&self, locale: &Locale) -> Option<&str> {
        self.subjects.get(locale).map(String::as_str)
    }

    pub fn body(&self, locale: &Locale) -> Option<&str> {
        self.bodies.get(locale).map(String::as_str)
    }
}
