use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser};
use http_fetcher::DEFAULT_API_URL;
use service::settings::ProbeSettings;

pub const SENIOR_TITLE: &str = "  Senior Software Engineer (m/f/d)  ";
pub const JUNIOR_TITLE: &str = "  Junior Software Engineer (m/f/d)  ";

#[derive(Args, Debug, Clone, PartialEq)]
pub struct LogArgs {
    /// Directory for daily rotated JSON log files, written in addition to stdout
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Normalize a job title and log the result
#[derive(Parser, Debug)]
pub struct TitleImportCli {
    /// Raw job title to normalize
    #[arg(long, default_value = SENIOR_TITLE)]
    pub title: String,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Normalize a job title, then fetch the remote API summary and log both
#[derive(Parser, Debug)]
pub struct ApiProbeCli {
    /// Raw job title to normalize
    #[arg(long, default_value = JUNIOR_TITLE)]
    pub title: String,

    /// URL of the JSON document to fetch
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub url: String,

    /// Total request timeout in seconds, body read included
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    #[command(flatten)]
    pub log: LogArgs,
}

impl ApiProbeCli {
    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            url: self.url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definitions() {
        TitleImportCli::command().debug_assert();
        ApiProbeCli::command().debug_assert();
    }

    #[test]
    fn test_title_import_defaults() {
        let args = TitleImportCli::try_parse_from(["title_import"]).unwrap();
        assert_eq!(args.title, SENIOR_TITLE);
        assert_eq!(args.log.log_dir, None);
    }

    #[test]
    fn test_api_probe_defaults_match_probe_settings() {
        let args = ApiProbeCli::try_parse_from(["api_probe"]).unwrap();
        assert_eq!(args.title, JUNIOR_TITLE);
        assert_eq!(args.probe_settings(), ProbeSettings::default());
    }

    #[test]
    fn test_api_probe_overrides() {
        let args = ApiProbeCli::try_parse_from([
            "api_probe",
            "--url",
            "http://localhost:8080/api",
            "--timeout-secs",
            "2",
            "--log-dir",
            "/tmp/probe-logs",
        ])
        .unwrap();

        let settings = args.probe_settings();
        assert_eq!(settings.url, "http://localhost:8080/api");
        assert_eq!(settings.timeout, Duration::from_secs(2));
        assert_eq!(args.log.log_dir, Some(PathBuf::from("/tmp/probe-logs")));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let result = ApiProbeCli::try_parse_from(["api_probe", "--timeout-secs", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = ApiProbeCli::try_parse_from(["api_probe", "--timeout-secs", "0"]);
        assert!(result.is_err());

        let args = ApiProbeCli::try_parse_from(["api_probe", "--timeout-secs", "1"]).unwrap();
        assert_eq!(args.probe_settings().timeout, Duration::from_secs(1));
    }
}
