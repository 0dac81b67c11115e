use serde::{Deserialize, Serialize};

pub type RunId = u64;
pub type JobId = u64;

/// Summary document served at the root of the remote API.
///
/// Each field holds whatever string the API returns for the key of the same
/// name (in practice an URL to the collection). Missing keys decode to empty
/// strings and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteApiSummary {
    pub characters: String,
    pub locations: String,
    pub episodes: String,
}

/// Identifies who produced a run record and for which run and job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub client: String,
    pub run_id: RunId,
    pub job_id: JobId,
}

impl RunContext {
    pub fn new(client: impl Into<String>, run_id: RunId, job_id: JobId) -> Self {
        Self {
            client: client.into(),
            run_id,
            job_id,
        }
    }
}
