use clap::Parser;

/// Query the status API and render runs, approvals, and the run-event timeline.
#[derive(Debug, Parser)]
#[command(name = "panel", version)]
pub struct Cli {
    /// Request identifier to look up
    #[arg(default_value = "demo-121")]
    pub request_id: String,

    /// Status API endpoint (overrides STATUS_API_URL)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Expand string payloads on run events
    #[arg(long)]
    pub payloads: bool,

    /// Also print the raw response document
    #[arg(long)]
    pub raw: bool,

    /// Prompt for request ids until EOF or `quit`
    #[arg(short, long)]
    pub interactive: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["panel"]);
        assert_eq!(cli.request_id, "demo-121");
        assert!(cli.endpoint.is_none());
        assert!(!cli.payloads && !cli.raw && !cli.interactive);
    }

    #[test]
    fn flags() {
        let cli = Cli::parse_from([
            "panel",
            "req-9",
            "--endpoint",
            "http://localhost:7071/api/status",
            "--payloads",
            "--raw",
            "-i",
        ]);
        assert_eq!(cli.request_id, "req-9");
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:7071/api/status"));
        assert!(cli.payloads && cli.raw && cli.interactive);
    }
}
