#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssueId(i64);

impl IssueId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for IssueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A published issue, already loaded by whoever enqueued the job. The task
/// never goes back to the issue store; the id is all it records against the
/// notification.
#[derive(Debug, Clone)]
pub struct Issue {
    id: IssueId,
}

impl Issue {
    pub fn new(id: IssueId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> IssueId {
        self.id
    }
}
