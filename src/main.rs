use cidr_range::config::Config;
use cidr_range::models::PrefixOverrides;
use cidr_range::output::{compute_rows, render_groups, render_json, render_table};
use cidr_range::processing::{group_by_range, log_groups};
use cidr_range::{read_address_file, read_addresses};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use std::error::Error;
use std::path::Path;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cidr-range")]
#[command(about = "Print the CIDR block containing each IP address")]
struct Args {
    /// Addresses to look up; read from stdin (one per line) when omitted
    addresses: Vec<String>,

    /// Read addresses from a file instead of stdin
    #[arg(short, long)]
    input: Option<String>,

    /// JSON config file with default prefixes
    #[arg(short, long)]
    config: Option<String>,

    /// Prefix length for IPv4 addresses
    #[arg(long)]
    ipv4_prefix: Option<u8>,

    /// Prefix length for IPv6 addresses
    #[arg(long)]
    ipv6_prefix: Option<u8>,

    #[arg(short, long, value_enum, default_value = "table")]
    format: Format,

    /// Group addresses by block instead of listing them
    #[arg(short, long)]
    group: bool,

    /// With --group, only show the N largest groups
    #[arg(long, requires = "group")]
    top: Option<usize>,
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
    } else {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = LogConfig::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs, logic belongs in the library
    init_logging()?;
    dotenv::dotenv().ok();
    let args = Args::parse();
    log::info!("#Start main() {:?}", args);

    let mut config = Config::load(args.config.as_deref())?;
    let overrides = PrefixOverrides {
        ipv4: args.ipv4_prefix,
        ipv6: args.ipv6_prefix,
    };
    if !overrides.is_empty() {
        log::info!("Command line prefix overrides {:?}", overrides);
        config.prefixes = config.prefixes.merge(&overrides);
        config.validate()?;
    }

    let addresses = if !args.addresses.is_empty() {
        args.addresses
    } else if let Some(file) = &args.input {
        read_address_file(file)?
    } else {
        read_addresses(std::io::stdin().lock())?
    };

    if args.group {
        let groups = group_by_range(&addresses, &config.prefixes);
        log_groups(&groups);
        match args.format {
            Format::Table => print!("{}", render_groups(&groups, args.top)),
            Format::Json => println!("{}", serde_json::to_string_pretty(&groups)?),
        }
    } else {
        let rows = compute_rows(&addresses, &config.prefixes);
        match args.format {
            Format::Table => print!("{}", render_table(&rows)),
            Format::Json => println!("{}", render_json(&rows)?),
        }
    }

    Ok(())
}
