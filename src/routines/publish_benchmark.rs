use std::path::Path;

use async_trait::async_trait;
use error_stack::ResultExt;
use google_sheets4::api::ValueRange;
use tracing::instrument;

use crate::benchmark::{BenchmarkReport, RESULT_FILE};
use crate::config::publisher_config::PublisherConfig;
use crate::routines::routine::{Routine, RoutineError};
use crate::sheets::domain::a1_notation::{A1Notation, ToA1Notation};
use crate::sheets::domain::row::Row;
use crate::sheets::ranges;
use crate::sheets::spreadsheet_manager::SpreadsheetManager;
use crate::sheets::value_range_factory::ValueRangeFactory;

/// Publishes the timing samples of the latest benchmark run into the shared
/// spreadsheet, replacing whatever the previous run left in the target row.
pub struct PublishBenchmarkRoutine {
    config: PublisherConfig,
}

impl PublishBenchmarkRoutine {
    pub fn new(config: PublisherConfig) -> Self {
        PublishBenchmarkRoutine { config }
    }

    fn target_range(sheet_title: &str) -> A1Notation {
        Row::from_row(ranges::RW_TIMES_ROW).to_a1_notation(Some(sheet_title))
    }
}

#[async_trait]
impl Routine for PublishBenchmarkRoutine {
    fn name(&self) -> &'static str {
        "PublishBenchmarkRoutine"
    }

    #[instrument(skip(self))]
    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        // The report is read and validated before any credential exchange, so
        // a broken result.json never reaches the network.
        let report = BenchmarkReport::load(Path::new(RESULT_FILE)).change_context(
            RoutineError::RoutineFailure("loading benchmark results".to_owned()),
        )?;
        let run = report.first_run().change_context(RoutineError::RoutineFailure(
            "selecting the benchmark run".to_owned(),
        ))?;
        let row = run.times_row();

        tracing::info!(
            command = run.command.as_deref().unwrap_or("<unknown>"),
            samples = row.len(),
            mean = run.mean,
            "publishing benchmark timings"
        );

        let manager = SpreadsheetManager::new(self.config.sheets.clone())
            .await
            .change_context(RoutineError::RoutineFailure(
                "authenticating to the spreadsheet API".to_owned(),
            ))?;

        let spreadsheet_id = manager
            .find_spreadsheet_id(ranges::SPREADSHEET_NAME)
            .await
            .change_context(RoutineError::RoutineFailure(
                "resolving the benchmark spreadsheet".to_owned(),
            ))?;

        let sheet_title = manager
            .first_sheet_title(&spreadsheet_id)
            .await
            .change_context(RoutineError::RoutineFailure(
                "selecting the first sheet".to_owned(),
            ))?;

        manager
            .write_range(
                &spreadsheet_id,
                &Self::target_range(&sheet_title),
                ValueRange::from_single_row(&row),
            )
            .await
            .change_context(RoutineError::RoutineFailure(
                "writing the timings row".to_owned(),
            ))?;

        tracing::info!(cells = row.len(), sheet = %sheet_title, "benchmark row published");

        Ok(())
    }
}
