use serde::{Deserialize, Serialize};

/// A complaint filed by a user.
///
/// `user_secret_code` binds the complaint to the secret that submitted it and
/// is never reassigned. `resolved` only ever moves from false to true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub user_secret_code: String,
    pub severity: i64,
    pub resolved: bool,
}

/// Payload for submitting a complaint.
#[derive(Debug, Clone)]
pub struct ComplaintCreate {
    pub title: String,
    pub summary: String,
    pub severity: i64,
    pub user_secret_code: String,
}

/// Row selection for complaint snapshots.
#[derive(Debug, Clone, PartialEq)]
pub enum ComplaintQuery {
    All,
    OwnedBy(String),
}

impl ComplaintCreate {
    /// Title and summary must be present and severity at least 1.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.summary.is_empty() && self.severity >= 1
    }
}

impl Complaint {
    pub fn new(id: impl Into<String>, params: ComplaintCreate) -> Self {
        Self {
            id: id.into(),
            title: params.title,
            summary: params.summary,
            user_secret_code: params.user_secret_code,
            severity: params.severity,
            resolved: false,
        }
    }

    pub fn is_owned_by(&self, secret_code: &str) -> bool {
        self.user_secret_code == secret_code
    }
}
