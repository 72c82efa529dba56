use anyhow::Result;
use bpaf::Bpaf;
use catalog_client::Client;
use tracing::instrument;

use super::fetch_list_view;
use crate::utils::message;

const VIEW_HINT: &str = "Use 'catalog-admin view <id>' to show a single record";

// List catalog records
#[derive(Debug, Bpaf, Clone)]
pub struct List {
    /// Only show records whose name or description matches a search term
    #[bpaf(short, long, argument("term"))]
    search: Option<String>,
}

impl List {
    #[instrument(name = "list", skip_all)]
    pub async fn handle(self, client: &Client) -> Result<()> {
        println!("{}", fetch_list_view(client, self.search.as_deref()));
        message::plain(format!("\n{VIEW_HINT}"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use catalog_client::{
        CatalogClientError,
        CatalogRecord,
        MockClient,
        RecordedCall,
        StatusCode,
    };

    use super::*;
    use crate::render::EMPTY_STATE;
    use crate::utils::message::history::History;

    fn mock_client() -> (Client, MockClient) {
        let mock = MockClient::new();
        (Client::Mock(mock.clone()), mock)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn empty_backend_renders_the_empty_state() {
        let (client, mock) = mock_client();
        mock.push_list_response(vec![]);

        let view = fetch_list_view(&client, Some(""));
        assert_eq!(view, EMPTY_STATE);
        assert_eq!(mock.calls(), vec![RecordedCall::List {
            search: Some("".to_string())
        }]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn records_render_in_insertion_order() {
        let (client, mock) = mock_client();
        mock.push_list_response(vec![
            CatalogRecord::new_mock(2, "second"),
            CatalogRecord::new_mock(1, "first"),
        ]);

        let view = fetch_list_view(&client, None);
        let second_pos = view.find("second").unwrap();
        let first_pos = view.find("first").unwrap();
        assert!(second_pos < first_pos, "insertion order not preserved:\n{view}");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn backend_failure_surfaces_error_and_empty_state() {
        let (client, mock) = mock_client();
        mock.push_error_response(CatalogClientError::ErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Failed to connect to the database. Please try again later.".to_string(),
        });

        let history = History::global();
        history.clear();

        let view = fetch_list_view(&client, None);
        assert_eq!(view, EMPTY_STATE);
        assert!(
            history
                .messages()
                .iter()
                .any(|m| m.contains("Failed to connect to the database")),
            "missing error message, history: {:?}",
            history.messages()
        );
    }
}
