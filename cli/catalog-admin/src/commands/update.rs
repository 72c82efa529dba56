use anyhow::Result;
use bpaf::Bpaf;
use catalog_client::{Client, ClientTrait};
use tracing::instrument;

use super::{fetch_list_view, report_save_error, resolve_id, spin_on, validated_submission};
use crate::form::CatalogForm;
use crate::state::ByIdAction;
use crate::utils::dialog::{Dialog, prompt_catalog_form};
use crate::utils::message;

// Update an existing catalog record
#[derive(Debug, Bpaf, Clone)]
pub struct Update {
    /// New name, up to 30 characters
    #[bpaf(long, argument("name"))]
    name: Option<String>,

    /// New description, up to 50 characters
    #[bpaf(long, argument("text"))]
    description: Option<String>,

    /// New first day of the date range (YYYY-MM-DD)
    #[bpaf(long, argument("date"))]
    start_date: Option<String>,

    /// New last day of the date range (YYYY-MM-DD)
    #[bpaf(long, argument("date"))]
    end_date: Option<String>,

    /// New status, one of: active, inactive, upcoming, expired
    #[bpaf(long, argument("status"))]
    status: Option<String>,

    /// ID of the record to update; prompted for when omitted
    #[bpaf(positional("id"))]
    id: Option<String>,
}

impl Update {
    #[instrument(name = "update", skip_all)]
    pub async fn handle(self, client: &Client) -> Result<()> {
        let id = resolve_id(self.id, ByIdAction::Update).await?;

        // The current record seeds the form; flags and prompt answers
        // replace individual fields.
        let record = spin_on("Fetching catalog...", client.get_catalog(id))?;
        let mut form = CatalogForm::from_record(&record);

        let edits_given = self.name.is_some()
            || self.description.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.status.is_some();

        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(start_date) = self.start_date {
            form.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            form.end_date = end_date;
        }
        if let Some(status) = self.status {
            form.status = status;
        }

        if !edits_given && Dialog::can_prompt() {
            form = prompt_catalog_form(&form).await?;
        }

        let submission = validated_submission(&form)?;

        let receipt = spin_on("Saving catalog...", client.update_catalog(id, &submission))
            .map_err(report_save_error)?;

        message::updated(&receipt.message);
        println!("{}", fetch_list_view(client, None));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use catalog_client::{CatalogId, CatalogRecord, MockClient, RecordedCall, SaveReceipt};

    use super::*;
    use crate::utils::message::history::History;

    fn mock_client() -> (Client, MockClient) {
        let mock = MockClient::new();
        (Client::Mock(mock.clone()), mock)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn update_prefills_from_the_fetched_record() {
        let (client, mock) = mock_client();
        let record = CatalogRecord::new_mock(4, "Spring Sale");
        mock.push_get_response(record.clone());
        mock.push_save_response(SaveReceipt {
            message: "Catalog ID 4 updated successfully.".to_string(),
            catalog_id: None,
        });
        mock.push_list_response(vec![]);

        let history = History::global();
        history.clear();

        let args = Update {
            name: Some("Renamed Sale".to_string()),
            description: None,
            start_date: None,
            end_date: None,
            status: None,
            id: Some("4".to_string()),
        };
        args.handle(&client).await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], RecordedCall::Get(CatalogId::try_from(4).unwrap()));
        // Unedited fields carry the fetched record's values.
        assert!(matches!(&calls[1], RecordedCall::Update(id, submission)
            if id.get() == 4
                && submission.name == "Renamed Sale"
                && submission.description == record.description
                && submission.start_date == record.start_date));
        assert_eq!(calls[2], RecordedCall::List { search: None });
        assert!(
            history
                .messages()
                .iter()
                .any(|m| m.contains("Catalog ID 4 updated successfully.")),
            "history: {:?}",
            history.messages()
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn invalid_id_argument_never_reaches_the_network() {
        let (client, mock) = mock_client();

        let args = Update {
            name: None,
            description: None,
            start_date: None,
            end_date: None,
            status: None,
            id: Some("not-a-number".to_string()),
        };
        let result = args.handle(&client).await;

        assert!(result.is_err());
        assert_eq!(mock.calls(), vec![]);
    }
}
