use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::Parser;
use convoscope::{loader, CoordinateReference, DashboardOpts, DashboardSnapshot};
use itertools::Itertools;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "convoscope", version, about = "Dashboard analytics for assistant conversation logs")]
struct Cli {
    /// Conversation CSV (`-` for stdin)
    #[arg(default_value = "-")]
    input: String,

    /// Knowledge base JSON mapping place groups to coordinates
    #[arg(long = "knowledge-base")]
    knowledge_base: Option<PathBuf>,

    /// JSON file with dashboard options
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Keep records on or after this date (YYYY-MM-DD)
    #[arg(long = "from")]
    from: Option<String>,
    /// Keep records on or before this date (YYYY-MM-DD)
    #[arg(long = "to")]
    to: Option<String>,

    /// Landmark anchoring the hub-spoke view
    #[arg(long = "anchor")]
    anchor: Option<String>,
    #[arg(long = "hub-label")]
    hub_label: Option<String>,
    #[arg(long = "top")]
    top: Option<usize>,

    /// Print one section: metrics | daily | hours | categories | locations | routes | hub | heatmap | audience | conversations
    #[arg(long = "only")]
    only: Option<String>,
    /// Output format for locations, routes and hub: json | table
    #[arg(long = "format", default_value = "json")]
    format: String,

    #[arg(long = "verbose", short = 'v', default_value_t = false)]
    verbose: bool,
}

/// `-v` forces debug; otherwise `RUST_LOG` wins, falling back to warn.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();
}

fn parse_date_bound(flag: &str, value: Option<&str>) -> anyhow::Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) => {
            NaiveDate::parse_from_str(v, "%Y-%m-%d")
                .with_context(|| format!("--{flag} expects YYYY-MM-DD, got {v:?}"))?;
            Ok(Some(v.to_string()))
        }
    }
}

fn load_opts(cli: &Cli) -> anyhow::Result<DashboardOpts> {
    let mut opts = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => DashboardOpts::default(),
    };
    if let Some(a) = &cli.anchor { opts.anchor_landmark = a.clone(); }
    if let Some(h) = &cli.hub_label { opts.hub_label = Some(h.clone()); }
    if let Some(k) = cli.top { opts.top_n = k; }
    Ok(opts)
}

fn load_input(input: &str) -> anyhow::Result<Vec<convoscope::ConversationRecord>> {
    if input == "-" {
        return loader::load_records_from_reader(io::stdin().lock()).context("reading conversations from stdin");
    }
    loader::load_records(Path::new(input)).with_context(|| format!("reading conversations from {input}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let from = parse_date_bound("from", cli.from.as_deref())?;
    let to = parse_date_bound("to", cli.to.as_deref())?;
    let opts = load_opts(&cli)?;

    let records = load_input(&cli.input)?;
    let reference = match &cli.knowledge_base {
        Some(path) => loader::load_reference(path)
            .with_context(|| format!("reading knowledge base {}", path.display()))?,
        None => CoordinateReference::new(),
    };
    let filtered = convoscope::filter::filter_by_date_range(&records, from.as_deref(), to.as_deref());
    debug!(loaded = records.len(), kept = filtered.len(), "applied date range");

    let snapshot = convoscope::build_snapshot(&filtered, &reference, &opts);
    print_section(&snapshot, cli.only.as_deref(), &cli.format)
}

fn print_section(s: &DashboardSnapshot, only: Option<&str>, format: &str) -> anyhow::Result<()> {
    let table = format == "table";
    let json = match only {
        None => serde_json::to_string_pretty(s)?,
        Some("metrics") => serde_json::to_string_pretty(&s.metrics)?,
        Some("daily") => serde_json::to_string_pretty(&s.daily_traffic)?,
        Some("hours") => serde_json::to_string_pretty(&serde_json::json!({
            "peak_hours": s.peak_hours,
            "category_hourly": s.category_hourly,
        }))?,
        Some("categories") => serde_json::to_string_pretty(&s.place_type_breakdown)?,
        Some("locations") if table => {
            print_table(
                &["Location", "Category", "Volume", "Latency"],
                s.location_rows.iter().map(|r| vec![r.location.clone(), r.category.clone(), r.volume.clone(), r.latency.clone()]),
            );
            return Ok(());
        }
        Some("locations") => serde_json::to_string_pretty(&s.location_rows)?,
        Some("routes") if table => {
            print_table(&["Route", "Mentions"], s.bus_route_rows.iter().map(|r| vec![r.route.clone(), r.volume.clone()]));
            return Ok(());
        }
        Some("routes") => serde_json::to_string_pretty(&s.bus_route_rows)?,
        Some("hub") if table => {
            println!("# {}{}", s.hub_spoke.hub, if s.hub_spoke.fallback { " (overall top locations)" } else { "" });
            print_table(&["Destination", "Count"], s.hub_spoke.spokes.iter().map(|sp| vec![sp.label.clone(), sp.value.to_string()]));
            return Ok(());
        }
        Some("hub") => serde_json::to_string_pretty(&s.hub_spoke)?,
        Some("heatmap") => serde_json::to_string_pretty(&s.heatmap_points)?,
        Some("audience") => serde_json::to_string_pretty(&s.audience_intelligence)?,
        Some("conversations") => serde_json::to_string_pretty(&s.conversations)?,
        Some(other) => bail!("unknown section {other:?}"),
    };
    println!("{json}");
    Ok(())
}

fn print_table<I>(headers: &[&str], rows: I)
where
    I: Iterator<Item = Vec<String>>,
{
    let rows: Vec<Vec<String>> = rows.collect();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| rows.iter().map(|r| r[i].chars().count()).chain([h.len()]).max().unwrap_or(0))
        .collect();
    let line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .join("  ")
            .trim_end()
            .to_string()
    };
    println!("{}", line(headers.iter().map(|h| h.to_string()).collect()));
    for r in rows {
        println!("{}", line(r));
    }
}
