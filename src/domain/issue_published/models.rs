pub mod context;
pub mod issue;
pub mod locale;
pub mod mailable;
pub mod notification;
pub mod template;
pub mod user;
