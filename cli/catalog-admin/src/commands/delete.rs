use anyhow::{Result, bail};
use bpaf::Bpaf;
use catalog_client::{Client, ClientTrait};
use tracing::instrument;

use super::{fetch_list_view, resolve_id, spin_on};
use crate::state::{ByIdAction, DeleteFlow};
use crate::utils::dialog::{Confirm, Dialog};
use crate::utils::message;

// Delete a catalog record
#[derive(Debug, Bpaf, Clone)]
pub struct Delete {
    /// Delete the record without confirmation.
    #[bpaf(short, long)]
    force: bool,

    /// ID of the record to delete; prompted for when omitted
    #[bpaf(positional("id"))]
    id: Option<String>,
}

impl Delete {
    #[instrument(name = "delete", skip_all)]
    pub async fn handle(self, client: &Client) -> Result<()> {
        let id = resolve_id(self.id, ByIdAction::Delete).await?;

        // Fetch first so a missing id is reported before any
        // confirmation is asked for.
        spin_on("Fetching catalog...", client.get_catalog(id))?;

        let mut flow = DeleteFlow::default();
        flow.request(id);

        let confirmed = if self.force {
            true
        } else if Dialog::can_prompt() {
            let confirm = Dialog {
                message: flow.prompt().expect("deletion was requested above"),
                help_message: Some("Use '-f' to skip confirmation"),
                typed: Confirm {
                    default: Some(false),
                },
            };
            confirm.prompt().await?
        } else {
            flow.cancel();
            bail!("Cannot prompt for confirmation; pass '--force' to delete without it.");
        };

        if !confirmed {
            flow.cancel();
            bail!("Catalog deletion cancelled");
        }

        let id = flow.confirm().expect("deletion was requested above");
        let receipt = spin_on("Deleting catalog...", client.delete_catalog(id))?;

        message::deleted(&receipt.message);
        println!("{}", fetch_list_view(client, None));
        Ok(())
    }
}
