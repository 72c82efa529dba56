mod create;
mod delete;
mod list;
mod update;
mod view;

use std::collections::BTreeSet;
use std::time::Duration;

use anyhow::{Result, bail};
use bpaf::Bpaf;
use catalog_client::{
    CatalogClient,
    CatalogClientConfig,
    CatalogClientError,
    CatalogId,
    CatalogSubmission,
    Client,
    ClientTrait,
};
use chrono::Local;
use indoc::indoc;

use crate::config::Config;
use crate::form::{CatalogForm, route_backend_detail};
use crate::render::render_list;
use crate::state::ByIdAction;
use crate::utils::dialog::{Dialog, Spinner, Text};
use crate::utils::message;

static ADMIN_DESCRIPTION: &'_ str = indoc! {"
    catalog-admin manages catalog records through the catalog REST service.

    Records carry a name, a description, a date range and a status, and are
    listed, created, updated and deleted by commands of this tool."
};

fn vec_len<T>(x: Vec<T>) -> usize {
    Vec::len(&x)
}

#[derive(Bpaf, Clone, Copy, Debug)]
pub enum Verbosity {
    Verbose(
        /// Increase logging verbosity
        ///
        /// Invoke multiple times for increasing detail.
        #[bpaf(short('v'), long("verbose"), req_flag(()), many, map(vec_len))]
        usize,
    ),

    /// Silence logs except for errors
    #[bpaf(short, long)]
    Quiet,
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Verbose(0)
    }
}

#[derive(Bpaf)]
#[bpaf(options, descr(ADMIN_DESCRIPTION))]
pub struct CatalogAdminCli(#[bpaf(external(catalog_admin_args))] pub CatalogAdminArgs);

/// Main argument parser
///
/// Composable with other parsers; use [`catalog_admin_cli()`] to parse
/// the CLI itself.
#[derive(Debug, Bpaf)]
#[bpaf(ignore_rustdoc)] // we don't want this struct to be interpreted as a group
pub struct CatalogAdminArgs {
    /// Verbose mode
    ///
    /// Invoke multiple times for increasing detail.
    #[bpaf(external, fallback(Default::default()))]
    pub verbosity: Verbosity,

    #[bpaf(external(commands))]
    command: Commands,
}

impl CatalogAdminArgs {
    pub async fn handle(self, config: Config) -> Result<()> {
        let client = init_client(&config)?;

        match self.command {
            Commands::List(args) => args.handle(&client).await,
            Commands::View(args) => args.handle(&client).await,
            Commands::Create(args) => args.handle(&client).await,
            Commands::Update(args) => args.handle(&client).await,
            Commands::Delete(args) => args.handle(&client).await,
        }
    }
}

/// Catalog admin commands
#[derive(Debug, Bpaf, Clone)]
enum Commands {
    /// List catalog records, optionally filtered by a search term
    #[bpaf(command)]
    List(#[bpaf(external(list::list))] list::List),

    /// Show a single catalog record
    #[bpaf(command)]
    View(#[bpaf(external(view::view))] view::View),

    /// Create a new catalog record
    #[bpaf(command)]
    Create(#[bpaf(external(create::create))] create::Create),

    /// Update an existing catalog record
    #[bpaf(command)]
    Update(#[bpaf(external(update::update))] update::Update),

    /// Delete a catalog record
    #[bpaf(command)]
    Delete(#[bpaf(external(delete::delete))] delete::Delete),
}

/// Build the HTTP client from user configuration.
pub(crate) fn init_client(config: &Config) -> Result<Client, CatalogClientError> {
    let client_config = CatalogClientConfig {
        base_url: config.catalog_url.clone(),
        extra_headers: Default::default(),
        user_agent: config.user_agent.clone(),
    };
    Ok(Client::Catalog(CatalogClient::new(client_config)?))
}

/// Run a request behind an in-flight spinner.
///
/// The spinner is cleared on every exit path, so a failing request
/// never leaves a stale indicator behind.
pub(crate) fn spin_on<T: Send>(message: &str, fut: impl Future<Output = T> + Send) -> T {
    Dialog {
        message,
        help_message: None,
        typed: Spinner::new(|| tokio::runtime::Handle::current().block_on(fut)),
    }
    .spin_with_delay(Duration::from_secs(1))
}

/// Fetch the catalog listing and render it.
///
/// Failures surface the error message and fall back to the empty
/// state; stale rows are never shown.
pub(crate) fn fetch_list_view(client: &Client, search: Option<&str>) -> String {
    match spin_on("Fetching catalogs...", client.list_catalogs(search)) {
        Ok(records) => render_list(&records),
        Err(err) => {
            message::error(err.to_string());
            render_list(&[])
        },
    }
}

/// Resolve a record id from an argument, or prompt for one.
///
/// Entered ids are validated locally; invalid input never reaches the
/// network. When prompting, the user may retry until the entry parses.
pub(crate) async fn resolve_id(arg: Option<String>, action: ByIdAction) -> Result<CatalogId> {
    if let Some(input) = arg {
        return action.submit(&input).map_err(Into::into);
    }

    if !Dialog::can_prompt() {
        bail!("A catalog ID is required when running non-interactively.");
    }

    loop {
        let input = Dialog {
            message: action.prompt_title(),
            help_message: None,
            typed: Text { default: None },
        }
        .prompt()
        .await?;

        match action.submit(&input) {
            Ok(id) => return Ok(id),
            Err(err) => message::error(err),
        }
    }
}

/// Validate the form, reporting every field error on failure.
///
/// A failing validation blocks submission entirely; nothing is sent.
pub(crate) fn validated_submission(form: &CatalogForm) -> Result<CatalogSubmission> {
    match form.validate(Local::now().date_naive()) {
        Ok(submission) => Ok(submission),
        Err(errors) => {
            for (_, error) in errors.iter() {
                message::error(error);
            }
            bail!("Validation failed for catalog data.");
        },
    }
}

/// Turn a failed save into a reported error.
///
/// Backend validation details are routed to the matching field and
/// printed; anything unroutable degrades to a general message.
pub(crate) fn report_save_error(err: CatalogClientError) -> anyhow::Error {
    if let CatalogClientError::Validation { message, details } = &err {
        if let Some(field_errors) = route_backend_detail(details) {
            // An anonymous date detail lands on both date fields;
            // print each distinct message once.
            let messages: BTreeSet<&str> = field_errors.iter().map(|(_, m)| m).collect();
            for error in messages {
                message::error(error);
            }
            return anyhow::anyhow!("{message}");
        }
    }
    err.into()
}
