pub mod issue_published;
