use core_types::RunContext;

pub const TITLE_IMPORT_CLIENT: &str = "railway_test_client";
pub const SECONDARY_TITLE_IMPORT_CLIENT: &str = "railway_test_client_two";
pub const API_PROBE_CLIENT: &str = "ricky-morty-call";

pub const RUN_ID: u64 = 1;
pub const TITLE_IMPORT_JOB_ID: u64 = 301;
pub const API_PROBE_JOB_ID: u64 = 200;

pub fn title_import() -> RunContext {
    RunContext::new(TITLE_IMPORT_CLIENT, RUN_ID, TITLE_IMPORT_JOB_ID)
}

/// Title import done by the api probe program before it fetches.
pub fn secondary_title_import() -> RunContext {
    RunContext::new(SECONDARY_TITLE_IMPORT_CLIENT, RUN_ID, TITLE_IMPORT_JOB_ID)
}

pub fn api_probe() -> RunContext {
    RunContext::new(API_PROBE_CLIENT, RUN_ID, API_PROBE_JOB_ID)
}
