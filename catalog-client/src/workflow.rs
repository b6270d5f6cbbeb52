//! Catalog creation workflow
//!
//! ```text
//! Idle ──submit(≥1 selected)──▶ Creating ──ok──▶ Succeeded { link }
//!   ▲                              │
//!   └────────── Failed { message } ◀┘ err
//! ```
//!
//! `Failed` behaves as `Idle` with an inline error. Only one request can be
//! in flight per workflow.

use shared::models::{CatalogCreated, CreateCatalogRequest};
use shared::{SelectionSet, catalog_link};
use thiserror::Error;

use crate::api::CatalogApi;
use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CreationState {
    #[default]
    Idle,
    Creating,
    Succeeded {
        uuid: String,
        link: String,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Nothing checked; rejected before any request
    #[error("Select at least one product")]
    EmptySelection,

    /// A previous submit has not settled yet
    #[error("A catalog is already being created")]
    InFlight,

    #[error("Catalog could not be created: {}", .0.user_message())]
    Client(#[from] ClientError),
}

/// Per-page catalog creation state
#[derive(Debug, Clone)]
pub struct CatalogCreation {
    origin: String,
    state: CreationState,
}

impl CatalogCreation {
    /// `origin` prefixes the shareable link
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            state: CreationState::Idle,
        }
    }

    pub fn state(&self) -> &CreationState {
        &self.state
    }

    /// Submit button disabled while true
    pub fn is_creating(&self) -> bool {
        self.state == CreationState::Creating
    }

    /// Link of the last created catalog
    pub fn link(&self) -> Option<&str> {
        match &self.state {
            CreationState::Succeeded { link, .. } => Some(link),
            _ => None,
        }
    }

    /// Inline error of the last attempt
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            CreationState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Enter `Creating` and return the request to send.
    pub fn begin(&mut self, selection: &SelectionSet) -> Result<CreateCatalogRequest, WorkflowError> {
        if self.is_creating() {
            return Err(WorkflowError::InFlight);
        }
        if selection.is_empty() {
            tracing::debug!("Catalog submit with empty selection rejected");
            return Err(WorkflowError::EmptySelection);
        }
        self.state = CreationState::Creating;
        Ok(CreateCatalogRequest {
            product_ids: selection.ids().to_vec(),
        })
    }

    /// Settle the in-flight request. Success clears the selection.
    pub fn finish(
        &mut self,
        result: ClientResult<CatalogCreated>,
        selection: &mut SelectionSet,
    ) -> Result<String, WorkflowError> {
        match result {
            Ok(created) => {
                let link = catalog_link(&self.origin, &created.uuid);
                selection.clear();
                self.state = CreationState::Succeeded {
                    uuid: created.uuid,
                    link: link.clone(),
                };
                Ok(link)
            }
            Err(e) => {
                let message = e.user_message();
                tracing::warn!(error = %e, "Catalog creation failed");
                self.state = CreationState::Failed { message };
                Err(WorkflowError::Client(e))
            }
        }
    }

    /// Run one full submit against the backend.
    pub async fn submit<H: HttpClient>(
        &mut self,
        api: &mut CatalogApi<H>,
        selection: &mut SelectionSet,
    ) -> Result<String, WorkflowError> {
        let request = self.begin(selection)?;
        let result = api.create_catalog(&request.product_ids).await;
        self.finish(result, selection)
    }
}
