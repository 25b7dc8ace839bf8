// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! httplog CLI
//!
//! Sends a single request with the logging stage attached and prints the
//! logged call.

use std::env;
use std::process::ExitCode;

use anyhow::{bail, Context};
use httplog::{HttpClient, HttpLoggingInterceptor, LogLevel, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparseable
const DEFAULT_FILTER: &str = "httplog=debug";

#[tokio::main]
async fn main() -> ExitCode {
    let rust_log = env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref()))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "fetch" => match fetch(&args[2..]).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::from(1)
            }
        },
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("httplog {}", httplog::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"httplog - HTTP call logging

USAGE:
    httplog fetch <url> [OPTIONS]

OPTIONS:
    --level <none|basic|headers|body>   Verbosity (default: body)
    --config <file>                     Load settings from a JSON file
    --skip <pattern>                    Skip logging for URLs containing pattern
    --hide-request-header <name>        Drop a request header from the log
    --hide-response-header <name>       Drop a response header from the log
    --tag <tag>                         Log tag attached to every line

Set RUST_LOG to adjust tracing output, e.g. RUST_LOG=httplog=debug.
"#
    );
}

fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Arguments of `httplog fetch`
#[derive(Debug)]
struct FetchArgs {
    url: String,
    config: LoggingConfig,
    tag: Option<String>,
}

/// `--config` is loaded first wherever it appears; the other flags apply on top
fn parse_fetch_args(args: &[String]) -> anyhow::Result<FetchArgs> {
    let Some(url) = args.first() else {
        bail!("Usage: httplog fetch <url>");
    };

    let mut flags = Vec::new();
    let mut config_path = None;
    let mut rest = args[1..].iter();
    while let Some(flag) = rest.next() {
        let value = rest
            .next()
            .with_context(|| format!("missing value for {}", flag))?;
        if flag == "--config" {
            if config_path.replace(value).is_some() {
                bail!("--config given more than once");
            }
        } else {
            flags.push((flag.as_str(), value));
        }
    }

    let mut config = match config_path {
        Some(path) => {
            LoggingConfig::from_file(path).with_context(|| format!("loading {}", path))?
        }
        None => LoggingConfig {
            level: LogLevel::Body,
            ..Default::default()
        },
    };

    let mut tag = None;
    for (flag, value) in flags {
        match flag {
            "--level" => config.level = value.parse()?,
            "--skip" => config.skip_urls.push(value.clone()),
            "--hide-request-header" => config.exclude_request_headers.push(value.clone()),
            "--hide-response-header" => config.exclude_response_headers.push(value.clone()),
            "--tag" => tag = Some(value.clone()),
            other => bail!("unknown option {}", other),
        }
    }

    Ok(FetchArgs {
        url: url.clone(),
        config,
        tag,
    })
}

async fn fetch(args: &[String]) -> anyhow::Result<()> {
    let FetchArgs { url, config, tag } = parse_fetch_args(args)?;
    if let Some(tag) = tag {
        httplog::set_log_tag(tag);
    }

    let logging = HttpLoggingInterceptor::from_config(&config, None)?;
    let client = HttpClient::new()?.with_interceptor(logging);

    httplog::set_enabled(true);
    let response = client.get(&url).await?;

    println!("{} {} bytes", response.status, response.body.len());
    Ok(())
}
