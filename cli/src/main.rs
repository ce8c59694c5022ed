use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use eyre::{Result, WrapErr};
use log::{debug, error, info};

mod config;
mod transport;

use config::{FileConfig, Overrides, Settings};

fn main() {
    if let Err(err) = try_main() {
        error!("{err:#}");
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    // quiet still shows errors
    let verbosity = if cli.quiet {
        0
    } else {
        usize::from(cli.verbose) + 1
    };
    stderrlog::new()
        .module(module_path!())
        .module("lookup_core")
        .verbosity(verbosity)
        .init()
        .wrap_err("failed to initialize logging")?;

    let file = FileConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli.overrides(), file)?;
    let request = &settings.request;
    info!(
        "looking up barcode {} at {}",
        request.barcode(),
        request.endpoint()
    );

    let http_request = lookup_core::build_lookup(request);
    let response = transport::execute(&http_request, settings.timeout)?;
    debug!("lookup service answered {}", response.status);

    let outcome = lookup_core::interpret(&response)
        .wrap_err_with(|| format!("could not read the product listing for barcode {}", request.barcode()))?;
    println!("{outcome}");

    Ok(())
}

#[derive(Parser)]
#[command(name = "barcode-lookup")]
#[command(about = "Look up a product title by barcode")]
#[command(version)]
struct Cli {
    /// The barcode to look up
    barcode: Option<String>,

    /// Access key for the lookup service
    #[arg(long, env = "BARCODE_LOOKUP_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// URL of the lookup service's products endpoint
    #[arg(long, env = "BARCODE_LOOKUP_ENDPOINT")]
    endpoint: Option<String>,

    /// Seconds to wait for the lookup service before giving up
    #[arg(long, env = "BARCODE_LOOKUP_TIMEOUT")]
    timeout_secs: Option<u64>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How chatty the program is on stderr
    ///
    /// Repeat to increase verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            api_key: self.api_key.clone(),
            barcode: self.barcode.clone(),
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
