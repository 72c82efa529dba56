use anyhow::Result;
use bpaf::Bpaf;
use catalog_client::{CatalogId, Client, ClientTrait};
use tracing::instrument;

use super::{resolve_id, spin_on};
use crate::render::render_list;
use crate::state::ByIdAction;
use crate::utils::message;

// Show a single catalog record
#[derive(Debug, Bpaf, Clone)]
pub struct View {
    /// ID of the record to show; prompted for when omitted
    #[bpaf(positional("id"))]
    id: Option<String>,
}

impl View {
    #[instrument(name = "view", skip_all)]
    pub async fn handle(self, client: &Client) -> Result<()> {
        let id = resolve_id(self.id, ByIdAction::View).await?;
        println!("{}", sole_record_view(client, id));
        Ok(())
    }
}

/// Fetch one record and render it as the sole row of the listing.
///
/// A missing record or a failed request reports the error and leaves
/// the listing in its empty state.
pub(crate) fn sole_record_view(client: &Client, id: CatalogId) -> String {
    match spin_on("Fetching catalog...", client.get_catalog(id)) {
        Ok(record) => {
            let view = render_list(&[record]);
            message::updated(format!("Catalog ID {id} found and displayed."));
            view
        },
        Err(err) => {
            message::error(err.to_string());
            render_list(&[])
        },
    }
}
