use core_types::{RemoteApiSummary, RunContext};
use http_fetcher::ops::HttpOps;

use crate::error::Error;
use crate::reporter::{RunRecord, RunReporter};
use crate::settings::ProbeSettings;

/// Fetch the remote API summary and report either the decoded values or the
/// failure. Nothing is reported as a success unless the fetch and decode
/// both succeeded.
///
/// # Arguments
///
/// * `context` - Client, run and job identifiers for the record.
/// * `settings` - Where to fetch from. The timeout is applied by whoever built `http`.
/// * `http` - Transport used for the single GET request.
/// * `reporter` - Receives exactly one record.
pub fn run_api_probe(
    context: &RunContext,
    settings: &ProbeSettings,
    http: &dyn HttpOps,
    reporter: &dyn RunReporter,
) -> Result<RemoteApiSummary, Error> {
    tracing::debug!(
        url = %settings.url,
        timeout_ms = settings.timeout.as_millis(),
        "Fetching remote API summary"
    );

    match http_fetcher::fetch_api_summary(http, &settings.url) {
        Ok(summary) => {
            reporter.report(&RunRecord::ApiSummaryFetched {
                context: context.clone(),
                summary: summary.clone(),
            });
            Ok(summary)
        }
        Err(err) => {
            let error = Error::from(err);
            report_probe_failure(context, &error, reporter);
            Err(error)
        }
    }
}

/// Report a probe that failed before or during the fetch.
pub fn report_probe_failure(context: &RunContext, error: &Error, reporter: &dyn RunReporter) {
    reporter.report(&RunRecord::ApiFetchFailed {
        context: context.clone(),
        error: error.clone(),
    });
}
