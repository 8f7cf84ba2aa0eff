use crate::actor_framework::Entity;
use crate::domain::{Complaint, ComplaintCreate, ComplaintQuery};
use super::actions::{ComplaintAction, ComplaintActionResult};
use super::ComplaintError;

impl Entity for Complaint {
    type Id = String;
    type CreateParams = ComplaintCreate;
    type Query = ComplaintQuery;
    type Action = ComplaintAction;
    type ActionResult = ComplaintActionResult;
    type Error = ComplaintError;

    const KIND: &'static str = "complaint";

    fn id(&self) -> &String { &self.id }

    /// Stores the complaint under the submitting secret code. The owner is
    /// not checked against the User Table here.
    fn from_create_params(id: String, params: ComplaintCreate) -> Result<Self, ComplaintError> {
        if !params.is_complete() {
            return Err(ComplaintError::InvalidInput(
                "Invalid complaint details. Title, summary, and severity are required.".to_string(),
            ));
        }
        Ok(Complaint::new(id, params))
    }

    fn matches(&self, query: &ComplaintQuery) -> bool {
        match query {
            ComplaintQuery::All => true,
            ComplaintQuery::OwnedBy(owner) => self.is_owned_by(owner),
        }
    }

    fn handle_action(&mut self, action: ComplaintAction) -> Result<ComplaintActionResult, ComplaintError> {
        match action {
            ComplaintAction::View { caller } => {
                self.authorize(&caller)?;
                Ok(ComplaintActionResult::View(self.clone()))
            }
            ComplaintAction::Resolve { caller } => {
                self.authorize(&caller)?;
                if self.resolved {
                    return Err(ComplaintError::AlreadyResolved);
                }
                self.resolved = true;
                Ok(ComplaintActionResult::Resolve(()))
            }
        }
    }
}

impl Complaint {
    fn authorize(&self, caller: &str) -> Result<(), ComplaintError> {
        if self.is_owned_by(caller) {
            Ok(())
        } else {
            Err(ComplaintError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Complaint {
        Complaint::from_create_params(
            "c1".into(),
            ComplaintCreate {
                title: "Broken heater".into(),
                summary: "No heat since Monday".into(),
                severity: 3,
                user_secret_code: "owner123".into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_zero_severity() {
        let result = Complaint::from_create_params(
            "c1".into(),
            ComplaintCreate {
                title: "t".into(),
                summary: "s".into(),
                severity: 0,
                user_secret_code: "owner123".into(),
            },
        );
        assert!(matches!(result, Err(ComplaintError::InvalidInput(_))));
    }

    #[test]
    fn test_resolve_once() {
        let mut complaint = stored();
        let first = complaint.handle_action(ComplaintAction::Resolve { caller: "owner123".into() });
        assert!(matches!(first, Ok(ComplaintActionResult::Resolve(()))));
        assert!(complaint.resolved);

        let second = complaint.handle_action(ComplaintAction::Resolve { caller: "owner123".into() });
        assert!(matches!(second, Err(ComplaintError::AlreadyResolved)));
        assert!(complaint.resolved);
    }

    #[test]
    fn test_foreign_caller_is_forbidden() {
        let mut complaint = stored();
        let view = complaint.handle_action(ComplaintAction::View { caller: "intruder".into() });
        assert!(matches!(view, Err(ComplaintError::Forbidden)));
        let resolve = complaint.handle_action(ComplaintAction::Resolve { caller: "intruder".into() });
        assert!(matches!(resolve, Err(ComplaintError::Forbidden)));
        assert!(!complaint.resolved);
    }

    #[test]
    fn test_query_matching() {
        let complaint = stored();
        assert!(complaint.matches(&ComplaintQuery::All));
        assert!(complaint.matches(&ComplaintQuery::OwnedBy("owner123".into())));
        assert!(!complaint.matches(&ComplaintQuery::OwnedBy("other".into())));
    }
}
