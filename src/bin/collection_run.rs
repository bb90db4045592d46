//! Collection runner binary.
//!
//! Sends a single request through the collection hooks and prints the
//! response body to stdout. Hook lines and diagnostics go to stderr through
//! `env_logger`; set `RUST_LOG` to change verbosity (default `info`).

use clap::Parser;
use collection_hooks::config::{get_config, load_config_file};
use collection_hooks::console::LogConsole;
use collection_hooks::executor::HookedExecutor;
use collection_hooks::models::{HttpMethod, HttpRequest};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "collection-run", version, about = "Send a request through the collection hooks")]
struct Cli {
    /// HTTP method (GET, POST, ...)
    #[arg(value_parser = parse_method)]
    method: HttpMethod,

    /// Target URL
    url: String,

    /// Request header as "Name: value" (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Request body
    #[arg(short = 'd', long = "data")]
    data: Option<String>,

    /// JSON settings file with a "collection" section
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

fn parse_method(s: &str) -> Result<HttpMethod, String> {
    HttpMethod::parse(s).ok_or_else(|| format!("unknown HTTP method: {}", s))
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected \"Name: value\", got {:?}", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in {:?}", s));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => get_config(),
    };

    let mut request = HttpRequest::with_generated_id(cli.method, cli.url);
    for (name, value) in cli.headers {
        request.set_header(name, value);
    }
    if let Some(data) = cli.data {
        request.set_body(data);
    }

    let executor = HookedExecutor::collection(&config, Arc::new(LogConsole));
    match executor.send(request).await {
        Ok(response) => {
            println!("{}", String::from_utf8_lossy(&response.body));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
