use core_types::RunContext;
use domain::models::Job;

use crate::reporter::{RunRecord, RunReporter};

/// Normalize `raw_title` into a fresh job and report the result.
pub fn run_title_import(context: &RunContext, raw_title: &str, reporter: &dyn RunReporter) -> Job {
    let mut job = Job::new();
    job.parse_title_from_str(raw_title);

    reporter.report(&RunRecord::TitleImported {
        context: context.clone(),
        title: job.title.clone(),
    });

    job
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockReporter;

    #[test]
    fn test_run_title_import() {
        let reporter = MockReporter::new();
        let context = RunContext::new("railway_test_client", 1, 301);

        let job = run_title_import(&context, "  Senior Software Engineer (m/f/d)  ", &reporter);

        assert_eq!(job.title, "senior software engineer (m/f/d)");
        assert_eq!(
            reporter.records(),
            vec![RunRecord::TitleImported {
                context,
                title: "senior software engineer (m/f/d)".to_string(),
            }]
        );
    }

    #[test]
    fn test_run_title_import_with_empty_title() {
        let reporter = MockReporter::new();
        let context = RunContext::new("railway_test_client", 1, 302);

        let job = run_title_import(&context, "   ", &reporter);

        assert_eq!(job.title, "");
        assert_eq!(reporter.record_count(), 1);
        assert!(reporter.last_record().unwrap().success());
    }
}
