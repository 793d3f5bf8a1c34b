use validator::validate_email;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum UserEmailError {
    #[error("{0} is not a valid user email")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserEmail(String);

impl UserEmail {
    pub fn parse(s: String) -> Result<UserEmail, UserEmailError> {
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(UserEmailError::Invalid(s))
        }
    }
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<UserEmail> for String {
    fn from(email: UserEmail) -> Self {
        email.0
    }
}

/// A platform user as the stores hand it out. Recipients and the mail
/// sender are both plain users; the task does not care about roles.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: UserEmail,
    pub full_name: String,
}

impl User {
    pub fn new(id: UserId, email: UserEmail, full_name: String) -> Self {
        Self {
            id,
            email,
            full_name,
        }
    }
}
