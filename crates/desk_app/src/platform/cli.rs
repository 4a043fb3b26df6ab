use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

/// Stage local files, upload them for ingestion and generate analytics reports.
#[derive(Debug, Parser)]
#[command(name = "report_desk", version, about)]
pub struct Cli {
    /// RON config file; missing is fine.
    #[arg(long, default_value = "report_desk.ron")]
    pub config: PathBuf,

    /// Backend base URL, e.g. http://127.0.0.1:8000
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory downloaded PDF reports are saved into.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log file used by `--log file` and `--log both`; appended to.
    #[arg(long, default_value = "report_desk.log")]
    pub log_file: PathBuf,

    /// Log workflow state transitions too.
    #[arg(short, long)]
    pub verbose: bool,

    /// Files to stage on startup.
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_overrides_parse() {
        let cli = Cli::parse_from(["report_desk"]);
        assert_eq!(cli.config, PathBuf::from("report_desk.ron"));
        assert_eq!(cli.log, LogDestination::File);
        assert_eq!(cli.log_file, PathBuf::from("report_desk.log"));
        assert!(cli.files.is_empty());

        let cli = Cli::parse_from([
            "report_desk",
            "--base-url",
            "http://backend:9000",
            "--log",
            "both",
            "-v",
            "a.csv",
            "b.png",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://backend:9000"));
        assert_eq!(cli.log, LogDestination::Both);
        assert!(cli.verbose);
        assert_eq!(cli.files, vec![PathBuf::from("a.csv"), PathBuf::from("b.png")]);
    }
}
