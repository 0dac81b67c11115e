use core_types::{RemoteApiSummary, RunContext};

use crate::error::Error;

/// One structured record emitted at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunRecord {
    TitleImported {
        context: RunContext,
        title: String,
    },
    ApiSummaryFetched {
        context: RunContext,
        summary: RemoteApiSummary,
    },
    ApiFetchFailed {
        context: RunContext,
        error: Error,
    },
}

impl RunRecord {
    pub fn context(&self) -> &RunContext {
        match self {
            RunRecord::TitleImported { context, .. }
            | RunRecord::ApiSummaryFetched { context, .. }
            | RunRecord::ApiFetchFailed { context, .. } => context,
        }
    }

    pub fn success(&self) -> bool {
        !matches!(self, RunRecord::ApiFetchFailed { .. })
    }
}

/// Sink for run records, passed explicitly into every run.
pub trait RunReporter {
    fn report(&self, record: &RunRecord);
}

/// Writes each record as a single tracing event with flat fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl RunReporter for TracingReporter {
    fn report(&self, record: &RunRecord) {
        let success = record.success();
        let RunContext {
            client,
            run_id,
            job_id,
        } = record.context();

        match record {
            RunRecord::TitleImported { title, .. } => tracing::info!(
                client = %client,
                run_id,
                job_id,
                title = %title,
                success,
                "Job title imported"
            ),
            RunRecord::ApiSummaryFetched { summary, .. } => tracing::info!(
                client = %client,
                run_id,
                job_id,
                characters = %summary.characters,
                locations = %summary.locations,
                episodes = %summary.episodes,
                success,
                "Remote API summary fetched"
            ),
            RunRecord::ApiFetchFailed { error, .. } => tracing::error!(
                client = %client,
                run_id,
                job_id,
                error_kind = error.kind(),
                error = %error,
                success,
                "Remote API fetch failed"
            ),
        }
    }
}
