mod echo;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use seolens_core::{
    AnalyzerConfig, CrawlOutcome, Document, OutputFormat, fetch_file, fetch_robots, fetch_stdin, fetch_url,
};
use url::Url;

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Format(OutputFormat);

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self(OutputFormat::Text)),
            "json" => Ok(Self(OutputFormat::Json)),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Audit the on-page SEO signals of a web page
#[derive(Parser, Debug)]
#[command(name = "seolens")]
#[command(author = "SeoLens Contributors")]
#[command(version)]
#[command(about = "Audit the on-page SEO signals of a web page", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: Format,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Number of keywords to report
    #[arg(long, default_value = "10", value_name = "NUM")]
    max_keywords: usize,

    /// Minimum keyword length in characters
    #[arg(long, default_value = "4", value_name = "NUM")]
    min_keyword_length: usize,

    /// Also fetch robots.txt (URL input only)
    #[arg(long)]
    robots: bool,

    /// Show progress, keyword counts and timings on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn analyzer_config(&self) -> AnalyzerConfig {
        let mut builder = AnalyzerConfig::builder()
            .timeout(self.timeout)
            .max_keywords(self.max_keywords)
            .min_keyword_length(self.min_keyword_length);

        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        builder.build()
    }

    /// The input as an HTTP(S) URL, if it is one.
    fn input_url(&self) -> Option<Url> {
        Url::parse(&self.input)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
    }
}

fn write_output(path: Option<&PathBuf>, output: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(output.as_bytes()).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.analyzer_config();
    let started = Instant::now();
    let mut timings = Vec::new();

    if args.verbose {
        echo::print_banner();
    }

    let input_url = args.input_url();
    let step = Instant::now();
    let html = if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 4, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else if let Some(url) = &input_url {
        if args.verbose {
            echo::print_step(1, 4, &format!("Fetching {}", url.as_str().bright_white().underline()));
        }

        match fetch_url(url.as_str(), &config.fetch).await {
            Ok(html) => html,
            Err(e) => {
                echo::print_error(&e.to_string());
                let outcome = CrawlOutcome::error(e);
                write_output(args.output.as_ref(), &outcome.to_format(args.format.0)?)?;
                std::process::exit(1);
            }
        }
    } else {
        if args.verbose {
            echo::print_step(1, 4, &format!("Reading from file {}", args.input.bright_white()));
        }
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };
    timings.push(("Read", step.elapsed()));

    if args.verbose {
        echo::print_detail("Size", &echo::format_size(html.len()));
        eprintln!();
        echo::print_step(2, 4, "Parsing HTML document");
    }

    let step = Instant::now();
    let doc = Document::parse(&html);
    timings.push(("Parse", step.elapsed()));

    if args.verbose {
        if let Some(title) = doc.extract_title() {
            echo::print_detail("Title", &title);
        }
        eprintln!();
        echo::print_step(3, 4, "Extracting SEO signals");
    }

    let step = Instant::now();
    let report = doc.extract_report(&config.keywords);
    timings.push(("Extract", step.elapsed()));

    if args.verbose {
        echo::print_keywords(&doc.extract_keywords(&config.keywords));
        eprintln!();
    }

    let outcome = CrawlOutcome::from(report);
    let mut output = outcome.to_format(args.format.0).context("Failed to render report")?;

    if args.robots {
        match &input_url {
            Some(url) => {
                if args.verbose {
                    echo::print_info("Fetching robots.txt");
                }
                let robots = fetch_robots(url.as_str(), &config.fetch).await;
                output = append_robots(&output, &robots, args.format.0)?;
            }
            None => echo::print_warning("--robots is only used with URL input"),
        }
    }

    if args.verbose {
        echo::print_step(4, 4, "Writing output");
        echo::print_detail("Format", &format!("{:?}", args.format.0));
        eprintln!();
        echo::print_timing_summary(started.elapsed(), &timings);
    }

    write_output(args.output.as_ref(), &output)
}

/// Adds the robots.txt body to already-rendered output.
fn append_robots(output: &str, robots: &str, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\nrobots.txt:\n{}\n", output, robots.trim_end())),
        OutputFormat::Json => {
            let mut value: serde_json::Value = serde_json::from_str(output).context("Failed to reparse report")?;
            if let Some(object) = value.as_object_mut() {
                object.insert("robots".to_string(), serde_json::Value::String(robots.to_string()));
            }
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<Format>(), Ok(Format(OutputFormat::Json)));
        assert_eq!("txt".parse::<Format>(), Ok(Format(OutputFormat::Text)));
        assert!("yaml".parse::<Format>().is_err());
    }

    #[test]
    fn test_append_robots_json() {
        let output = append_robots(r#"{"status":"success"}"#, "User-agent: *", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["robots"], "User-agent: *");
    }

    #[test]
    fn test_input_url_detection() {
        let args = Args::parse_from(["seolens", "https://example.com"]);
        assert!(args.input_url().is_some());

        let args = Args::parse_from(["seolens", "page.html"]);
        assert!(args.input_url().is_none());

        let args = Args::parse_from(["seolens", "file:///tmp/page.html"]);
        assert!(args.input_url().is_none());
    }

    #[test]
    fn test_completions_match_flags() {
        use clap::CommandFactory;

        let script = fs::read_to_string(concat!(env!("OUT_DIR"), "/completions/seolens.bash")).unwrap();
        for arg in Args::command().get_arguments() {
            if let Some(long) = arg.get_long() {
                assert!(script.contains(&format!("--{long}")), "completions are missing --{long}");
            }
        }
        assert!(!script.contains("--max_keywords"));
    }
}
