use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

use webfreq::core::{
    print_error_message, print_info_message, print_warning_message, Analysis, AnalysisOptions,
    Notice, SegmenterKind,
};
use webfreq::env::{self, EnvConfig, EnvVar};
use webfreq::error::{WebfreqError, WebfreqResult};
use webfreq::frequency::Pair;
use webfreq::network::Fetcher;
use webfreq::presentation::{to_pairs, ChartKind, ChartSeries};
use webfreq::session::AnalysisSession;

#[derive(Parser, Debug)]
#[command(
    name = "webfreq",
    version,
    about = "Fetch a web page and count the words in its main text"
)]
struct Cli {
    /// URL of the page to analyze (http or https)
    #[arg(required_unless_present = "input_file", conflicts_with = "input_file")]
    url: Option<String>,

    /// Read HTML from a local file instead of fetching a URL
    #[arg(short, long, value_name = "PATH")]
    input_file: Option<PathBuf>,

    /// Number of words in the ranked list
    #[arg(short = 'n', long, value_name = "N")]
    top_n: Option<usize>,

    /// Minimum count for the filtered word list
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..=20)
    )]
    min_frequency: Option<u64>,

    /// Print the data for one chart: wordcloud, bar, line, pie, scatter, funnel, radar
    #[arg(short, long, value_name = "KIND", value_parser = parse_chart_kind)]
    chart: Option<ChartKind>,

    /// Word segmenter to use
    #[arg(short, long, value_name = "NAME", value_parser = parse_segmenter_kind)]
    segmenter: Option<SegmenterKind>,

    /// Only emit words found in the segmenter's dictionary
    #[arg(long)]
    no_hmm: bool,

    /// Request timeout in seconds
    #[arg(
        short,
        long,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..=300)
    )]
    timeout: Option<u64>,

    /// Custom User-Agent string
    #[arg(short, long, value_name = "UA")]
    user_agent: Option<String>,

    /// Print a JSON report instead of text
    #[arg(short, long)]
    json: bool,

    /// Number of characters shown in the content preview
    #[arg(long, value_name = "N")]
    preview_chars: Option<usize>,
}

fn parse_chart_kind(value: &str) -> Result<ChartKind, String> {
    value.parse().map_err(|e: WebfreqError| e.to_string())
}

fn parse_segmenter_kind(value: &str) -> Result<SegmenterKind, String> {
    value.parse().map_err(|e: WebfreqError| e.to_string())
}

#[derive(Serialize)]
struct Report<'a> {
    generated_at: String,
    url: &'a str,
    title: &'a str,
    preview: String,
    options: &'a AnalysisOptions,
    total_words: u64,
    distinct_words: usize,
    top_words: Vec<Pair>,
    filtered_words: Vec<Pair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<ChartSeries>,
    notices: &'a [Notice],
}

fn init_logging() {
    let level = env::core::LogLevel::get_or_default("warn".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// 命令行参数覆盖环境变量，环境变量覆盖默认值
fn resolve_options(cli: &Cli, config: &EnvConfig) -> AnalysisOptions {
    let mut options = config.to_options();

    if let Some(top_n) = cli.top_n {
        options.top_n = top_n;
    }
    if let Some(min_frequency) = cli.min_frequency {
        options.min_frequency = min_frequency;
    }
    if let Some(segmenter) = cli.segmenter {
        options.segmenter = segmenter;
    }
    if cli.no_hmm {
        options.hmm = false;
    }
    if let Some(timeout) = cli.timeout {
        options.timeout = timeout;
    }
    if let Some(user_agent) = &cli.user_agent {
        options.user_agent = Some(user_agent.clone());
    }
    if let Some(preview_chars) = cli.preview_chars {
        options.preview_chars = preview_chars;
    }

    options
}

fn file_url(path: &Path) -> String {
    path.canonicalize()
        .ok()
        .and_then(|absolute| Url::from_file_path(absolute).ok())
        .map(|url| url.to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn run(cli: &Cli, options: AnalysisOptions) -> WebfreqResult<()> {
    let mut session = AnalysisSession::new(options)?;

    match (&cli.input_file, &cli.url) {
        (Some(path), _) => {
            debug!(path = %path.display(), "reading local document");
            let data = fs::read(path)?;
            session.analyze_html(&file_url(path), &data, None);
        }
        (None, Some(url)) => {
            let fetcher = Fetcher::new(session.options())?;
            session.analyze_url(&fetcher, url)?;
        }
        (None, None) => {
            return Err(WebfreqError::invalid_option(
                "either a URL or --input-file is required",
            ))
        }
    }

    let analysis = session
        .active()
        .ok_or_else(|| WebfreqError::insufficient_data("no document was analyzed"))?;

    for notice in &analysis.notices {
        print_warning_message(&format!("Warning: {notice}"));
    }

    let top_words = to_pairs(&session.ranked()?);
    let filtered_words = to_pairs(&session.filtered()?);
    let chart = cli.chart.map(|kind| session.chart(kind)).transpose()?;

    if cli.json {
        print_json_report(analysis, session.options(), top_words, filtered_words, chart)
    } else {
        print_text_report(analysis, session.options(), &top_words, &filtered_words, chart.as_ref());
        Ok(())
    }
}

fn print_json_report(
    analysis: &Analysis,
    options: &AnalysisOptions,
    top_words: Vec<Pair>,
    filtered_words: Vec<Pair>,
    chart: Option<ChartSeries>,
) -> WebfreqResult<()> {
    let report = Report {
        generated_at: Utc::now().to_rfc3339(),
        url: &analysis.document.url,
        title: &analysis.document.title,
        preview: analysis.document.preview(options.preview_chars),
        options,
        total_words: analysis.table.total(),
        distinct_words: analysis.table.len(),
        top_words,
        filtered_words,
        chart,
        notices: &analysis.notices,
    };

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| WebfreqError::Io(std::io::Error::other(e)))?;
    print_info_message(&json);
    Ok(())
}

fn print_text_report(
    analysis: &Analysis,
    options: &AnalysisOptions,
    top_words: &[Pair],
    filtered_words: &[Pair],
    chart: Option<&ChartSeries>,
) {
    print_info_message(&format!("Title: {}", analysis.document.title));
    print_info_message(&format!("URL: {}", analysis.document.url));
    print_info_message("");
    print_info_message("Content preview:");
    print_info_message(&analysis.document.preview(options.preview_chars));
    print_info_message("");

    print_info_message(&format!(
        "Top {} words ({} total, {} distinct):",
        options.top_n,
        analysis.table.total(),
        analysis.table.len()
    ));
    for (rank, (word, count)) in top_words.iter().enumerate() {
        print_info_message(&format!("{:>4}. {}\t{}", rank + 1, word, count));
    }
    print_info_message("");

    print_info_message(&format!(
        "Words appearing at least {} times:",
        options.min_frequency
    ));
    if filtered_words.is_empty() {
        print_info_message("  (none)");
    }
    for (word, count) in filtered_words {
        print_info_message(&format!("  {}\t{}", word, count));
    }

    if let Some(series) = chart {
        print_info_message("");
        print_info_message(&format!("{} ({}):", series.title, series.kind));
        for (label, value) in &series.pairs {
            print_info_message(&format!("  {}\t{}", label, value));
        }
        if let Some(axis_max) = series.axis_max {
            print_info_message(&format!("  axis max\t{}", axis_max));
        }
    }
}

fn retry_hint(error: &WebfreqError) -> Option<&'static str> {
    match error {
        WebfreqError::Fetch(fetch_error) if fetch_error.is_retryable() => {
            Some("The failure may be temporary; retrying later may help.")
        }
        _ => None,
    }
}

fn main() {
    dotenv::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            print_error_message(&format!("Error: {e}"));
            process::exit(1);
        }
    };

    let options = resolve_options(&cli, &config);

    if let Err(e) = run(&cli, options) {
        print_error_message(&format!("Error: {e}"));
        if let Some(hint) = retry_hint(&e) {
            print_warning_message(hint);
        }
        process::exit(1);
    }
}
