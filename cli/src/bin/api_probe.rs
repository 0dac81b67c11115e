use std::process::ExitCode;

use clap::Parser;
use cli::{args::ApiProbeCli, contexts, logging::init_logging};
use http_fetcher::reqwest_ops::ReqwestHttp;
use service::{
    api_probe::{report_probe_failure, run_api_probe},
    error::Error,
    reporter::TracingReporter,
    title_import::run_title_import,
};

fn main() -> ExitCode {
    let args = ApiProbeCli::parse();
    let _guard = init_logging(args.log.log_dir.as_deref());
    let reporter = TracingReporter;

    run_title_import(&contexts::secondary_title_import(), &args.title, &reporter);

    let settings = args.probe_settings();
    let context = contexts::api_probe();

    let http = match ReqwestHttp::new(settings.timeout) {
        Ok(http) => http,
        Err(e) => {
            report_probe_failure(&context, &Error::from(e), &reporter);
            return ExitCode::FAILURE;
        }
    };

    match run_api_probe(&context, &settings, &http, &reporter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
