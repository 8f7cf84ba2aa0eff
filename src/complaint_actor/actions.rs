use crate::domain::Complaint;

/// Operations on a stored complaint that require the caller's secret code.
///
/// Both actions are refused with `Forbidden` unless `caller` is the secret
/// code the complaint was submitted under.
#[derive(Debug, Clone)]
pub enum ComplaintAction {
    /// Returns a copy of the complaint.
    View { caller: String },
    /// Flips `resolved` from false to true.
    ///
    /// # Errors
    /// `AlreadyResolved` if the flag is already set.
    Resolve { caller: String },
}

/// Results from ComplaintActions - variants match 1:1 with ComplaintAction
#[derive(Debug, Clone)]
pub enum ComplaintActionResult {
    View(Complaint),
    Resolve(()),
}
