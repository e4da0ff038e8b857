use error_stack::{report, Context, Result, ResultExt};
use google_drive3::DriveHub;
use google_sheets4::{api::ValueRange, Sheets};
use tracing::instrument;

use crate::config::sheets_config::SpreadsheetConfig;
use crate::sheets::domain::a1_notation::A1Notation;
use crate::sheets::{auth, http_client};

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<
        google_sheets4::hyper_rustls::HttpsConnector<google_sheets4::hyper::client::HttpConnector>,
    >,
    drive: DriveHub<
        google_sheets4::hyper_rustls::HttpsConnector<google_sheets4::hyper::client::HttpConnector>,
    >,
}

impl std::fmt::Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

#[derive(Debug)]
pub enum SpreadsheetManagerError {
    FailedToBuildAuthenticator,
    FailedToListSpreadsheets,
    SpreadsheetNotFound(String),
    AmbiguousSpreadsheetName(String),
    FailedToFetchSheetTitle,
    FailedToWriteRange,
}

impl std::fmt::Display for SpreadsheetManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Context for SpreadsheetManagerError {}

impl SpreadsheetManager {
    /// Builds both API hubs over one authenticated client, so the token cache
    /// is shared between the Drive lookup and the Sheets write.
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(config: SpreadsheetConfig) -> Result<Self, SpreadsheetManagerError> {
        let client = http_client::http_client();
        let auth = auth::auth(&config, client.clone()).await?;
        let hub = Sheets::new(client.clone(), auth.clone());
        let drive = DriveHub::new(client, auth);

        Ok(SpreadsheetManager { config, hub, drive })
    }

    /// Resolves a spreadsheet by name through the Drive API. The name has to
    /// match exactly one non-trashed spreadsheet visible to the service
    /// account; an ambiguous name is an error rather than an arbitrary pick.
    #[instrument]
    pub async fn find_spreadsheet_id(&self, name: &str) -> Result<String, SpreadsheetManagerError> {
        let query = format!(
            "name = '{}' and mimeType = 'application/vnd.google-apps.spreadsheet' and trashed = false",
            name
        );

        let response = self
            .drive
            .files()
            .list()
            .q(&query)
            .param("fields", "files(id, name)")
            .add_scope(google_drive3::api::Scope::Full)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToListSpreadsheets)?;

        let mut files = response.1.files.unwrap_or_default();
        match files.len() {
            0 => Err(report!(SpreadsheetManagerError::SpreadsheetNotFound(
                name.to_owned()
            ))),
            1 => files
                .remove(0)
                .id
                .ok_or(report!(SpreadsheetManagerError::FailedToListSpreadsheets)),
            count => Err(report!(SpreadsheetManagerError::AmbiguousSpreadsheetName(
                name.to_owned()
            )))
            .attach_printable_lazy(|| format!("{} spreadsheets share this name", count)),
        }
    }

    /// Title of the first sheet tab, the only tab the publisher writes to.
    #[instrument]
    pub async fn first_sheet_title(
        &self,
        spreadsheet_id: &str,
    ) -> Result<String, SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .get(spreadsheet_id)
            .add_scope(google_sheets4::api::Scope::Spreadsheet)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchSheetTitle)?;

        let sheets = response
            .1
            .sheets
            .ok_or(SpreadsheetManagerError::FailedToFetchSheetTitle)?;

        let first = sheets
            .into_iter()
            .next()
            .ok_or(SpreadsheetManagerError::FailedToFetchSheetTitle)?;

        first
            .properties
            .and_then(|properties| properties.title)
            .ok_or(report!(SpreadsheetManagerError::FailedToFetchSheetTitle))
    }

    #[instrument]
    pub async fn write_range(
        &self,
        spreadsheet_id: &str,
        range_str: &A1Notation,
        value_range: ValueRange,
    ) -> Result<(), SpreadsheetManagerError> {
        self.hub
            .spreadsheets()
            .values_update(value_range, spreadsheet_id, range_str.as_ref())
            .value_input_option("USER_ENTERED")
            .add_scope(google_sheets4::api::Scope::Spreadsheet)
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetManagerError::FailedToWriteRange)
            .attach_printable_lazy(|| format!("Failed to write to range {}", range_str))
    }
}
