use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::complaint_actor::{ComplaintAction, ComplaintActionResult, ComplaintError};
use crate::domain::{Complaint, ComplaintCreate, ComplaintQuery};

/// Client for interacting with the Complaint Table actor.
#[derive(Clone)]
pub struct ComplaintClient {
    inner: ResourceClient<Complaint>,
}

impl_basic_client!(ComplaintClient, Complaint, ComplaintError, complaint);

fn unexpected(result: ComplaintActionResult) -> ComplaintError {
    ComplaintError::Unavailable(format!("Unexpected result: {:?}", result))
}

impl ComplaintClient {
    #[instrument(skip_all, fields(severity = params.severity))]
    pub async fn submit(&self, params: ComplaintCreate) -> Result<Complaint, ComplaintError> {
        debug!("Sending request");
        let complaint = self.inner.create(params).await?;
        info!(complaint_id = %complaint.id, "Complaint submitted");
        Ok(complaint)
    }

    /// Snapshot of every stored complaint.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Complaint>, ComplaintError> {
        debug!("Sending request");
        self.inner.list(ComplaintQuery::All).await
    }

    /// Snapshot of the complaints submitted under `secret_code`.
    #[instrument(skip_all)]
    pub async fn list_for_owner(&self, secret_code: &str) -> Result<Vec<Complaint>, ComplaintError> {
        debug!("Sending request");
        self.inner
            .list(ComplaintQuery::OwnedBy(secret_code.to_string()))
            .await
    }

    #[instrument(skip(self, caller))]
    pub async fn view(&self, complaint_id: &str, caller: &str) -> Result<Complaint, ComplaintError> {
        debug!("Sending request");
        let action = ComplaintAction::View { caller: caller.to_string() };
        match self.inner.perform_action(complaint_id.to_string(), action).await? {
            ComplaintActionResult::View(complaint) => Ok(complaint),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, caller))]
    pub async fn resolve(&self, complaint_id: &str, caller: &str) -> Result<(), ComplaintError> {
        debug!("Sending request");
        let action = ComplaintAction::Resolve { caller: caller.to_string() };
        match self.inner.perform_action(complaint_id.to_string(), action).await? {
            ComplaintActionResult::Resolve(()) => {
                info!("Complaint resolved");
                Ok(())
            }
            other => Err(unexpected(other)),
        }
    }
}
