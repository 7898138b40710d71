use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::{FieldNames, SearchConfig};
use crate::loader::load_records;
use crate::query::{Query, QueryError, parse_condition, parse_polygon};
use crate::search::{par_search, search};
use crate::sinks::{GeoJsonSink, GeoJsonlSink, ResultSink, SearchSummary, TextSink};

#[derive(Parser, Debug)]
#[command(author, version, about = "Search an image library CSV", long_about = None)]
pub struct Cli {
    /// Path to the image library CSV
    #[arg(long, default_value = "image_library.csv")]
    pub csv: PathBuf,

    /// Field condition: field=value, field>value, field<value, field>=value or field<=value
    #[arg(long = "tag", value_name = "EXPR")]
    pub conditions: Vec<String>,

    /// User tag to match (case-insensitive)
    #[arg(long = "user-tag", value_name = "TAG")]
    pub user_tags: Vec<String>,

    /// Polygon coordinates as "lat1,lon1 lat2,lon2 lat3,lon3"
    #[arg(long, allow_hyphen_values = true)]
    pub polygon: Option<String>,

    /// Show detailed results for each image found
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file, or - for stdout
    #[arg(short, long, default_value = "-")]
    pub output: PathBuf,

    /// Search in parallel on this many threads
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Settings file (YAML)
    #[arg(short, long, env = "IMGFENCE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum OutputFormat {
    #[value(name = "text")]
    Text,
    #[value(name = "geojson")]
    GeoJson,
    #[value(name = "geojsonl", alias = "jsonl")]
    GeoJsonl,
}

pub fn output_format_label(format: &OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::GeoJson => "geojson",
        OutputFormat::GeoJsonl => "geojsonl",
    }
}

/// Build the query from command-line arguments.
///
/// This is the only point where malformed user input is rejected.
pub fn build_query(cli: &Cli) -> Result<Query, QueryError> {
    let mut query = Query::new();

    for expr in &cli.conditions {
        query = query.with_condition(parse_condition(expr)?);
    }

    for tag in &cli.user_tags {
        query = query.with_tag(tag.as_str());
    }

    if let Some(polygon) = cli.polygon.as_deref()
        && let Some(coords) = parse_polygon(polygon)?
    {
        query = query.with_polygon(coords);
    }

    Ok(query)
}

pub fn summarize_query(query: &Query) -> String {
    let conditions: Vec<String> = query.conditions.iter().map(ToString::to_string).collect();
    let vertices = query.polygon.as_ref().map_or(0, Vec::len);
    format!(
        "conditions: [{}], tags: [{}], polygon vertices: {}",
        conditions.join(", "),
        query.tags.join(", "),
        vertices
    )
}

pub fn init_sink(
    format: &OutputFormat,
    output: &Path,
    fields: &FieldNames,
    verbose: bool,
) -> Result<Box<dyn ResultSink>> {
    let to_stdout = output == Path::new("-");
    match format {
        OutputFormat::Text => {
            if to_stdout {
                Ok(Box::new(TextSink::stdout(fields.clone(), verbose)))
            } else {
                tracing::info!("Sink: {} -> {:?}", output_format_label(format), output);
                Ok(Box::new(
                    TextSink::new(output, fields.clone(), verbose)
                        .with_context(|| format!("Sink: Failed to create {:?}", output))?,
                ))
            }
        }
        OutputFormat::GeoJson => {
            if to_stdout {
                bail!("CLI: GeoJSON output to stdout is not supported; use geojsonl instead");
            }
            tracing::info!("Sink: {} -> {:?}", output_format_label(format), output);
            Ok(Box::new(
                GeoJsonSink::new(output)
                    .with_context(|| format!("Sink: Failed to create {:?}", output))?,
            ))
        }
        OutputFormat::GeoJsonl => {
            if to_stdout {
                tracing::info!("Sink: {} -> stdout", output_format_label(format));
                Ok(Box::new(GeoJsonlSink::stdout()?))
            } else {
                tracing::info!("Sink: {} -> {:?}", output_format_label(format), output);
                Ok(Box::new(
                    GeoJsonlSink::new(output)
                        .with_context(|| format!("Sink: Failed to create {:?}", output))?,
                ))
            }
        }
    }
}

/// Load the library, run the query and write the matches.
pub fn run(cli: &Cli, config: &SearchConfig) -> Result<SearchSummary> {
    let query = build_query(cli)?;
    tracing::info!("Query: {}", summarize_query(&query));

    let records = load_records(&cli.csv, &config.fields)?;
    let mut sink = init_sink(&cli.format, &cli.output, &config.fields, cli.verbose)?;

    let start = std::time::Instant::now();
    let found = if cli.threads.is_some() {
        par_search(&records, &query)
    } else {
        search(&records, &query)
    };
    tracing::info!(
        "Matched {} of {} records in {:.3}s",
        found.len(),
        records.len(),
        start.elapsed().as_secs_f64()
    );

    for record in &found {
        sink.add_record(record)?;
    }

    let summary = SearchSummary {
        loaded: records.len(),
        found: found.len(),
    };
    sink.finish(&summary)?;
    Ok(summary)
}
