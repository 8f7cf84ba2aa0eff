use serde::{Deserialize, Serialize};

use crate::domain::{ComplaintCreate, UserCreate};

// Absent fields decode to empty values so that handlers report them as
// missing rather than as a malformed body.

/// Body of `/login` and `/getAllComplaintsForUser`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretCodeReq {
    pub secret_code: String,
}

/// Body of `/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterReq {
    pub name: String,
    pub email_address: String,
}

/// Body of `/submitComplaint`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitComplaintReq {
    pub title: String,
    pub summary: String,
    pub severity: i64,
    pub user_secret_code: String,
}

/// Body of `/viewComplaint` and `/resolveComplaint`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplaintAccessReq {
    pub secret_code: String,
    pub complaint_id: String,
}

impl From<RegisterReq> for UserCreate {
    fn from(req: RegisterReq) -> Self {
        UserCreate::new(req.name, req.email_address)
    }
}

impl From<SubmitComplaintReq> for ComplaintCreate {
    fn from(req: SubmitComplaintReq) -> Self {
        Self {
            title: req.title,
            summary: req.summary,
            severity: req.severity,
            user_secret_code: req.user_secret_code,
        }
    }
}
