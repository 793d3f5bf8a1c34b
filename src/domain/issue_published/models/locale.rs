#[derive(thiserror::Error, Debug)]
pub enum LocaleError {
    #[error("Locale cannot be empty.")]
    Empty,
    #[error("Locale contains forbidden characters: {0}")]
    ContainsForbiddenCharacters(String),
}

/// A locale code as stored with the platform's localized entities,
/// e.g. `en`, `fr_CA`. Membership in the context's supported-locale list is
/// not checked here; an unknown locale simply falls back when the template
/// is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    pub fn parse(s: String) -> Result<Locale, LocaleError> {
        if s.trim().is_empty() {
            return Err(LocaleError::Empty);
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '@')
        {
            return Err(LocaleError::ContainsForbiddenCharacters(s));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locale::parse(value)
    }
}
