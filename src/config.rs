// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line configuration for the landing page.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use url::Url;

use crate::logging::{LogConfig, LogFormat};
use crate::logic::submit::DEFAULT_ENDPOINT;
use crate::ui::layout::Layout;

/// EZ Works landing page with an email-capture contact form.
#[derive(Debug, Parser)]
#[command(name = "ezworks-landing", version, about)]
pub struct Cli {
    /// Endpoint receiving `{"email": ...}` contact requests.
    #[arg(long, env = "EZWORKS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    /// Page arrangement around the contact form.
    #[arg(long, value_enum, default_value_t = Layout::Marketing)]
    pub layout: Layout,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Validated settings the application starts with.
#[derive(Clone, Debug)]
pub struct LaunchConfig {
    pub endpoint: Url,
    pub layout: Layout,
    pub log: LogConfig,
}

impl LaunchConfig {
    /// Validate parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint is not an http(s) URL with a host.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        match cli.endpoint.scheme() {
            "http" | "https" => {}
            other => bail!("Endpoint must use http or https, got '{other}://'"),
        }
        if cli.endpoint.host_str().is_none() {
            bail!("Endpoint '{}' has no host", cli.endpoint);
        }

        Ok(Self {
            endpoint: cli.endpoint,
            layout: cli.layout,
            log: LogConfig::from_verbosity(cli.verbose, cli.log_format),
        })
    }
}
