use anyhow::Result;
use bpaf::Bpaf;
use catalog_client::{Client, ClientTrait};
use tracing::instrument;

use super::{fetch_list_view, report_save_error, spin_on, validated_submission};
use crate::form::CatalogForm;
use crate::utils::dialog::{Dialog, prompt_catalog_form};
use crate::utils::message;

// Create a new catalog record
#[derive(Debug, Bpaf, Clone)]
pub struct Create {
    /// Name of the record, up to 30 characters
    #[bpaf(long, argument("name"))]
    name: Option<String>,

    /// Description of the record, up to 50 characters
    #[bpaf(long, argument("text"))]
    description: Option<String>,

    /// First day of the record's date range (YYYY-MM-DD)
    #[bpaf(long, argument("date"))]
    start_date: Option<String>,

    /// Last day of the record's date range (YYYY-MM-DD)
    #[bpaf(long, argument("date"))]
    end_date: Option<String>,

    /// One of: active, inactive, upcoming, expired
    #[bpaf(long, argument("status"))]
    status: Option<String>,
}

impl Create {
    #[instrument(name = "create", skip_all)]
    pub async fn handle(self, client: &Client) -> Result<()> {
        let all_given = self.name.is_some()
            && self.description.is_some()
            && self.start_date.is_some()
            && self.end_date.is_some()
            && self.status.is_some();

        let mut form = CatalogForm {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            start_date: self.start_date.unwrap_or_default(),
            end_date: self.end_date.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
        };

        if !all_given && Dialog::can_prompt() {
            form = prompt_catalog_form(&form).await?;
        }

        let submission = validated_submission(&form)?;

        let receipt = spin_on("Saving catalog...", client.create_catalog(&submission))
            .map_err(report_save_error)?;

        message::created(&receipt.message);
        println!("{}", fetch_list_view(client, None));
        Ok(())
    }
}
