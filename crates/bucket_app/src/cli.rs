use std::path::PathBuf;
use std::time::Duration;

use bucket_core::DEFAULT_TEMPLATE;
use bucket_engine::{ProbeSettings, ScanConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "bucketscan",
    version,
    about = "Enumerate object-storage bucket names from a wordlist",
    after_help = "Example:\n  bucketscan -i input.txt -o results.txt -t 20"
)]
pub struct Cli {
    /// Wordlist, one word per line
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Where accepted bucket names are written (default: output-<unix time>.txt)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Modifier list, one per line (default: built-in list)
    #[arg(short = 'm', long = "modifiers", value_name = "FILE")]
    pub modifiers: Option<PathBuf>,

    /// Number of concurrent probes, capped by the open file limit
    #[arg(short = 't', long = "threads", default_value_t = 10)]
    pub threads: usize,

    /// Print every failed probe
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Per-probe request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 15)]
    pub timeout: u64,

    /// Probe URL pattern; {bucket} must be the first host label
    #[arg(long, value_name = "PATTERN", default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Also write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            requested_concurrency: self.threads,
            verbose: self.verbose,
            probe: ProbeSettings {
                request_timeout: Duration::from_secs(self.timeout.max(1)),
                ..ProbeSettings::default()
            },
            ..ScanConfig::default()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("output-{}.txt", chrono::Utc::now().timestamp()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_required() {
        let err = Cli::try_parse_from(["bucketscan", "-t", "5"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn defaults_match_documented_flags() {
        let cli = Cli::try_parse_from(["bucketscan", "-i", "words.txt"]).unwrap();
        assert_eq!(cli.threads, 10);
        assert!(!cli.verbose);
        assert_eq!(cli.template, DEFAULT_TEMPLATE);
        assert!(cli.modifiers.is_none());

        let config = cli.scan_config();
        assert_eq!(config.requested_concurrency, 10);
        assert_eq!(config.probe.request_timeout, Duration::from_secs(15));
    }

    #[test]
    fn short_flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "bucketscan", "-i", "in.txt", "-o", "out.txt", "-m", "mods.txt", "-t", "32", "-v",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("in.txt"));
        assert_eq!(cli.output_path(), PathBuf::from("out.txt"));
        assert_eq!(cli.modifiers, Some(PathBuf::from("mods.txt")));
        assert_eq!(cli.threads, 32);
        assert!(cli.scan_config().verbose);
    }

    #[test]
    fn default_output_is_timestamped() {
        let cli = Cli::try_parse_from(["bucketscan", "-i", "in.txt"]).unwrap();
        let name = cli.output_path().to_string_lossy().into_owned();
        assert!(name.starts_with("output-"));
        assert!(name.ends_with(".txt"));
    }
}
