use crate::domain::issue_published::models::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(i64);

impl ContextId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ContextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The journal (publication venue) an issue belongs to. Resolved once per
/// task execution; its primary locale is the fallback for template
/// localisation.
#[derive(Debug, Clone)]
pub struct Context {
    pub id: ContextId,
    pub path: String,
    pub primary_locale: Locale,
}
