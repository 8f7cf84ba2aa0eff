use std::sync::Arc;

use anyhow::anyhow;
use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::api::AppState;
use crate::auth::AlwaysAdmin;
use crate::clients::{ComplaintClient, UserClient};
use crate::domain::{Complaint, User};
use crate::ids;

/// The application system: starts one actor per table and hands out the
/// clients that reach them.
///
/// Nothing here is global. Build one `ComplaintSystem` at startup and pass its
/// `AppState` to the router.
pub struct ComplaintSystem {
    pub user_client: UserClient,
    pub complaint_client: ComplaintClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ComplaintSystem {
    pub fn new(mailbox_size: usize) -> Self {
        // 1. User Table, keyed by secret code
        let (user_actor, user_resource_client) = ResourceActor::<User>::new(mailbox_size, || {
            ids::non_empty(ids::generate_secret_code())
        });
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        // 2. Complaint Table, keyed by complaint id
        let (complaint_actor, complaint_resource_client) =
            ResourceActor::<Complaint>::new(mailbox_size, || ids::non_empty(ids::generate_id()));
        let complaint_client = ComplaintClient::new(complaint_resource_client);
        let complaint_handle = tokio::spawn(complaint_actor.run());

        info!(mailbox_size, "Complaint system started");

        Self {
            user_client,
            complaint_client,
            handles: vec![user_handle, complaint_handle],
        }
    }

    /// Router state wired to this system, with the fixed admin grant.
    pub fn app_state(&self) -> AppState {
        AppState {
            users: self.user_client.clone(),
            complaints: self.complaint_client.clone(),
            credentials: Arc::new(self.user_client.clone()),
            admin: Arc::new(AlwaysAdmin),
        }
    }

    /// Waits for both actors to drain. Every `AppState` handed out must be
    /// dropped first, otherwise the mailboxes stay open.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        info!("Shutting down system...");

        // Actors stop once every sender is gone.
        drop(self.user_client);
        drop(self.complaint_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(anyhow!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
