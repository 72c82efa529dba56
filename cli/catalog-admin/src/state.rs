//! Ephemeral UI state for the admin session.
//!
//! The original interface kept the pending-delete id and the current
//! by-id intent as globals; here they are explicit values threaded
//! through the command handlers and cleared on every exit path.

use std::str::FromStr;

use catalog_client::CatalogId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("Please enter a valid positive Catalog ID.")]
pub struct InvalidIdInput;

/// The intent recorded when the user is prompted for a record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByIdAction {
    Update,
    Delete,
    View,
}

impl ByIdAction {
    /// Title shown on the id prompt.
    pub fn prompt_title(&self) -> &'static str {
        match self {
            ByIdAction::Update => "Enter Catalog ID to Update",
            ByIdAction::Delete => "Enter Catalog ID to Delete",
            ByIdAction::View => "Enter Catalog ID to View",
        }
    }

    /// Validate an id entered for this action.
    ///
    /// Rejects non-numeric and non-positive input locally; no network
    /// call is made for invalid entries.
    pub fn submit(&self, input: &str) -> Result<CatalogId, InvalidIdInput> {
        CatalogId::from_str(input).map_err(|_| InvalidIdInput)
    }
}

/// Confirmation state for the deletion flow.
///
/// `Idle -> PendingConfirmation -> Idle`; both confirming and
/// cancelling clear the pending id and prompt text.
#[derive(Debug, Default, PartialEq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    PendingConfirmation {
        id: CatalogId,
        prompt: String,
    },
}

impl DeleteFlow {
    /// Record a delete request and produce the confirmation prompt.
    pub fn request(&mut self, id: CatalogId) {
        *self = DeleteFlow::PendingConfirmation {
            id,
            prompt: format!(
                "Are you sure you want to delete catalog ID {id}? This action cannot be undone."
            ),
        };
    }

    /// The prompt to show while a deletion awaits confirmation.
    pub fn prompt(&self) -> Option<&str> {
        match self {
            DeleteFlow::Idle => None,
            DeleteFlow::PendingConfirmation { prompt, .. } => Some(prompt),
        }
    }

    /// Confirm the pending deletion, returning the id to delete.
    pub fn confirm(&mut self) -> Option<CatalogId> {
        match std::mem::take(self) {
            DeleteFlow::Idle => None,
            DeleteFlow::PendingConfirmation { id, .. } => Some(id),
        }
    }

    /// Abandon the pending deletion without a backend call.
    pub fn cancel(&mut self) {
        *self = DeleteFlow::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DeleteFlow::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> CatalogId {
        CatalogId::try_from(n).unwrap()
    }

    #[test]
    fn submit_rejects_bad_input_without_dispatch() {
        for action in [ByIdAction::Update, ByIdAction::Delete, ByIdAction::View] {
            assert_eq!(action.submit("abc"), Err(InvalidIdInput));
            assert_eq!(action.submit("0"), Err(InvalidIdInput));
            assert_eq!(action.submit("-2"), Err(InvalidIdInput));
            assert_eq!(action.submit("12"), Ok(id(12)));
        }
    }

    #[test]
    fn request_records_pending_id_and_prompt() {
        let mut flow = DeleteFlow::default();
        assert!(flow.is_idle());

        flow.request(id(5));
        assert!(!flow.is_idle());
        assert_eq!(
            flow.prompt(),
            Some("Are you sure you want to delete catalog ID 5? This action cannot be undone.")
        );
    }

    #[test]
    fn cancel_returns_to_idle_and_clears_pending_id() {
        let mut flow = DeleteFlow::default();
        flow.request(id(5));
        flow.cancel();
        assert!(flow.is_idle());
        assert_eq!(flow.prompt(), None);
        // nothing left to confirm after a cancel
        assert_eq!(flow.confirm(), None);
    }

    #[test]
    fn confirm_yields_the_id_exactly_once() {
        let mut flow = DeleteFlow::default();
        flow.request(id(5));
        assert_eq!(flow.confirm(), Some(id(5)));
        assert!(flow.is_idle());
        assert_eq!(flow.confirm(), None);
    }
}
