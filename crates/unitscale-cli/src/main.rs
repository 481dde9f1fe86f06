//! unitscale: read a quantity in one notation and print it in another.

use tracing_subscriber::EnvFilter;
use unitscale_core::{Domain, FormatOptions, NumberStyle};

const USAGE: &str = "\
usage: unitscale <domain> <value> [table] [--precision N] [--style fixed|scientific|general]
  domains: size, length, mass, volume, bandwidth
  e.g. unitscale size 1.5GiB binary-iec
       unitscale mass 1lb troy
       unitscale length 1m imperial --precision 2";

#[derive(Debug, PartialEq)]
struct Args {
    domain: Domain,
    value: String,
    table: Option<String>,
    options: FormatOptions,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut options = FormatOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--precision" | "-p" => {
                let n = iter.next().ok_or("--precision needs a value")?;
                let digits = n
                    .parse::<usize>()
                    .map_err(|_| format!("invalid precision `{n}`"))?;
                options = options.precision(digits);
            }
            "--style" | "-s" => {
                let name = iter.next().ok_or("--style needs a value")?;
                let style =
                    NumberStyle::from_name(name).ok_or_else(|| format!("unknown style `{name}`"))?;
                options = options.style(style);
            }
            _ => positional.push(arg.as_str()),
        }
    }

    let (domain, value, table) = match positional.as_slice() {
        [domain, value] => (domain, value, None),
        [domain, value, table] => (domain, value, Some(table.to_string())),
        _ => return Err("expected <domain> <value> [table]".to_string()),
    };
    let domain = Domain::from_name(domain).map_err(|e| e.to_string())?;
    Ok(Args {
        domain,
        value: value.to_string(),
        table,
        options,
    })
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unitscale_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    if raw.is_empty() || raw.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };
    tracing::debug!(?args, "parsed arguments");

    match args.domain.convert(&args.value, args.table.as_deref(), &args.options) {
        Ok(out) if out.is_empty() => println!("0"),
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
