use std::process::ExitCode;

use clap::Parser;
use cli::{args::TitleImportCli, contexts, logging::init_logging};
use service::{reporter::TracingReporter, title_import::run_title_import};

fn main() -> ExitCode {
    let args = TitleImportCli::parse();
    let _guard = init_logging(args.log.log_dir.as_deref());

    run_title_import(&contexts::title_import(), &args.title, &TracingReporter);

    ExitCode::SUCCESS
}
