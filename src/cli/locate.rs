use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::query::{Located, Query};
use crate::core::types::{Series, Value};
use crate::matching::{Locator, LocatorConfig, ScanStrategy};
use crate::parsing::series::{parse_series_file, SeriesFormat};
use crate::parsing::value::parse_value;

#[derive(Args)]
pub struct LocateArgs {
    /// Reference series file (TSV, CSV, or plain text; `.gz` accepted)
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Query values (numbers or timestamps). A single value yields a single index
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Read query values from a file instead of the command line
    #[arg(long = "queries", conflicts_with = "values")]
    pub query_file: Option<PathBuf>,

    /// Column of the reference file holding the values (1-based)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub column: u32,

    /// Column of the query file holding the values (1-based)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub query_column: u32,

    /// Field delimiter (default: ',' for .csv files, tab otherwise)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Search strategy
    #[arg(long, value_enum, default_value = "auto")]
    pub strategy: ScanStrategy,
}

/// Execute locate subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be parsed or the lookup fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LocateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reference = parse_series_file(
        &args.reference,
        &file_format(&args.reference, args.delimiter, args.column),
    )?;

    if verbose {
        eprintln!(
            "Loaded {} {} reference values from {}",
            reference.len(),
            reference.kind(),
            args.reference.display()
        );
    }

    let query = read_query(&args)?;

    let locator = Locator::with_config(LocatorConfig {
        strategy: args.strategy,
        ..LocatorConfig::default()
    });

    if verbose {
        eprintln!(
            "Locating {} query values using {:?} search",
            query.len(),
            locator.resolve_strategy(reference.len(), query.len())
        );
    }

    let located = locator.locate_series(&reference, &query)?;

    match format {
        OutputFormat::Text => print_text_results(&located),
        OutputFormat::Json => print_json_results(&args, &reference, &query, &located)?,
        OutputFormat::Tsv => print_tsv_results(&reference, &query, &located),
    }

    Ok(())
}

fn file_format(path: &std::path::Path, delimiter: Option<char>, column: u32) -> SeriesFormat {
    let format = SeriesFormat::for_path(path).with_column(column as usize - 1);
    match delimiter {
        Some(d) => format.with_delimiter(d),
        None => format,
    }
}

fn read_query(args: &LocateArgs) -> anyhow::Result<Query<Value>> {
    if let Some(path) = &args.query_file {
        let series = parse_series_file(
            path,
            &file_format(path, args.delimiter, args.query_column),
        )?;
        return Ok(Query::Many(series.to_values()));
    }

    let mut values = args
        .values
        .iter()
        .map(|raw| {
            parse_value(raw).ok_or_else(|| anyhow::anyhow!("Invalid query value '{raw}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    match values.len() {
        0 => anyhow::bail!("No query values given (pass values or --queries FILE)"),
        1 => Ok(Query::One(values.remove(0))),
        _ => Ok(Query::Many(values)),
    }
}

fn print_text_results(located: &Located) {
    for index in located.as_slice() {
        println!("{index}");
    }
}

fn print_json_results(
    args: &LocateArgs,
    reference: &Series,
    query: &Query<Value>,
    located: &Located,
) -> anyhow::Result<()> {
    let matches: Vec<serde_json::Value> = query
        .as_slice()
        .iter()
        .zip(located.as_slice())
        .map(|(value, &index)| {
            serde_json::json!({
                "query": value,
                "index": index,
                "value": reference.get(index),
            })
        })
        .collect();

    let output = serde_json::json!({
        "reference": {
            "path": args.reference.display().to_string(),
            "kind": reference.kind(),
            "length": reference.len(),
        },
        "indices": located,
        "matches": matches,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(reference: &Series, query: &Query<Value>, located: &Located) {
    println!("query\tindex\tvalue");
    for (value, &index) in query.as_slice().iter().zip(located.as_slice()) {
        let matched = reference
            .get(index)
            .map(|v| v.to_string())
            .unwrap_or_default();
        println!("{value}\t{index}\t{matched}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse_locate(args: &[&str]) -> Result<LocateArgs, clap::Error> {
        let cli = Cli::try_parse_from(["sciutil", "locate", "ref.txt"].iter().chain(args))?;
        match cli.command {
            Commands::Locate(args) => Ok(args),
            Commands::Convert(_) => unreachable!("locate subcommand was given"),
        }
    }

    #[test]
    fn test_strategy_flag() {
        assert_eq!(parse_locate(&["1"]).unwrap().strategy, ScanStrategy::Auto);
        assert_eq!(
            parse_locate(&["--strategy", "linear", "1"]).unwrap().strategy,
            ScanStrategy::Linear
        );
        assert_eq!(
            parse_locate(&["--strategy", "sorted", "1"]).unwrap().strategy,
            ScanStrategy::Sorted
        );
        assert!(parse_locate(&["--strategy", "fastest", "1"]).is_err());
    }

    #[test]
    fn test_negative_values_and_column() {
        let args = parse_locate(&["--column", "2", "-7", "4.5"]).unwrap();
        assert_eq!(args.column, 2);
        assert_eq!(args.values, vec!["-7", "4.5"]);
        assert!(parse_locate(&["--column", "0", "1"]).is_err());
    }
}
