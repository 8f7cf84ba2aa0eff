use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate};
use super::UserError;

impl Entity for User {
    type Id = String;
    type CreateParams = UserCreate;
    type Query = ();
    type Action = ();
    type ActionResult = ();
    type Error = UserError;

    const KIND: &'static str = "user";

    fn id(&self) -> &String { &self.secret_code }

    /// Creates a new User keyed by the generated secret code.
    ///
    /// # Errors
    /// `InvalidInput` when the name or email address is empty.
    fn from_create_params(secret_code: String, params: UserCreate) -> Result<Self, UserError> {
        if !params.is_complete() {
            return Err(UserError::InvalidInput(
                "Name and email address are required".to_string(),
            ));
        }
        Ok(User::new(secret_code, params))
    }

    /// Email addresses are unique across all registered users.
    fn check_conflict(&self, existing: &Self) -> Result<(), UserError> {
        if existing.email_address == self.email_address {
            return Err(UserError::DuplicateEmail);
        }
        Ok(())
    }

    /// Users are never mutated after registration.
    fn handle_action(&mut self, _action: ()) -> Result<(), UserError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_missing_fields() {
        let result = User::from_create_params("k".into(), UserCreate::new("", "a@x.com"));
        assert!(matches!(result, Err(UserError::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_email_conflicts() {
        let a = User::from_create_params("k1".into(), UserCreate::new("Alice", "a@x.com")).unwrap();
        let b = User::from_create_params("k2".into(), UserCreate::new("Bob", "a@x.com")).unwrap();
        let c = User::from_create_params("k3".into(), UserCreate::new("Carol", "c@x.com")).unwrap();
        assert_eq!(b.check_conflict(&a), Err(UserError::DuplicateEmail));
        assert_eq!(c.check_conflict(&a), Ok(()));
        assert_eq!(a.id(), "k1");
    }
}
