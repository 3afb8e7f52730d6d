use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::value::parse_datetime;
use crate::time::{datenum_to_datetime, datetime_to_datenum, datetime_to_unix, unix_to_datetime};

/// Time representation accepted and produced by `convert`
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum TimeFormat {
    /// Seconds since 1970-01-01T00:00:00Z
    Unix,
    /// MATLAB serial day number
    Datenum,
    /// ISO 8601 / RFC 3339 timestamp in UTC
    Iso,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Values to convert
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Representation of the input values
    #[arg(long, value_enum)]
    pub from: TimeFormat,

    /// Representation to produce
    #[arg(long, value_enum, default_value = "iso")]
    pub to: TimeFormat,
}

/// Execute convert subcommand
///
/// # Errors
///
/// Returns an error if any value cannot be read in the `--from` representation
/// or is outside the representable time range.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ConvertArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let converted = args
        .values
        .iter()
        .map(|raw| -> anyhow::Result<(String, String)> {
            let instant = read_time(raw, args.from)?;
            Ok((raw.clone(), write_time(&instant, args.to)))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if verbose {
        eprintln!(
            "Converted {} values from {:?} to {:?}",
            converted.len(),
            args.from,
            args.to
        );
    }

    match format {
        OutputFormat::Text => {
            for (_, output) in &converted {
                println!("{output}");
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = converted
                .iter()
                .map(|(input, output)| serde_json::json!({ "input": input, "output": output }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("input\toutput");
            for (input, output) in &converted {
                println!("{input}\t{output}");
            }
        }
    }

    Ok(())
}

fn read_time(raw: &str, from: TimeFormat) -> anyhow::Result<DateTime<Utc>> {
    let number = || {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| anyhow::anyhow!("Invalid number '{raw}'"))
    };

    match from {
        TimeFormat::Unix => Ok(unix_to_datetime(number()?)?),
        TimeFormat::Datenum => Ok(datenum_to_datetime(number()?)?),
        TimeFormat::Iso => {
            parse_datetime(raw).ok_or_else(|| anyhow::anyhow!("Invalid timestamp '{raw}'"))
        }
    }
}

fn write_time(t: &DateTime<Utc>, to: TimeFormat) -> String {
    match to {
        TimeFormat::Unix if t.nanosecond() == 0 => datetime_to_unix(t).to_string(),
        TimeFormat::Unix => {
            #[allow(clippy::cast_precision_loss)]
            let seconds = t.timestamp_micros() as f64 / 1e6;
            format!("{seconds:.6}")
        }
        TimeFormat::Datenum => format!("{:.10}", datetime_to_datenum(t)),
        TimeFormat::Iso => t.to_rfc3339_opts(SecondsFormat::AutoSi, true),
    }
}
