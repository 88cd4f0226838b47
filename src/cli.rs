use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use oqm_boundary::{OfficerId, ServiceId, TicketId};
use oqm_frontend_api::{self as api, OfficerApi, PublicApi};

use crate::config::{self, Config};

#[derive(Debug, Parser)]
#[command(name = "oqm", version, about)]
struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base address of the REST API (overrides the configuration)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
enum Command {
    /// List the services a ticket can be requested for
    Services,
    /// Show status and waiting queue of a ticket
    Notifications { ticket_id: TicketId },
    /// Request a new ticket for a service
    CreateTicket { service_id: ServiceId },
    /// Call the next customer to the counter of an officer
    NextCustomer { officer_id: OfficerId },
}

pub async fn run() -> Result<ExitCode> {
    let args = Args::parse();
    let cfg = load_config(&args, config::api_url_from_env())?;
    log::debug!("Use API at {}", cfg.api.url);
    let printer = Printer {
        pretty: cfg.output.pretty,
    };
    let url = cfg.api.url;
    let succeeded = match args.command {
        Command::Services => printer.print(PublicApi::new(url).services().await),
        Command::Notifications { ticket_id } => {
            printer.print(PublicApi::new(url).notifications(ticket_id).await)
        }
        Command::CreateTicket { service_id } => {
            printer.print(PublicApi::new(url).create_ticket(service_id).await)
        }
        Command::NextCustomer { officer_id } => {
            printer.print(OfficerApi::new(url).next_customer(officer_id).await)
        }
    }?;
    if succeeded {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// `--api-url` wins over the environment, which wins over the file.
fn load_config(args: &Args, env_api_url: Option<String>) -> Result<Config> {
    let api_url = args.api_url.clone().or(env_api_url);
    Config::try_load_from_file_or_default(args.config.as_ref(), api_url)
}

struct Printer {
    pretty: bool,
}

impl Printer {
    /// Results go to stdout, normalized errors to stderr.
    fn print<T>(&self, outcome: api::Result<T>) -> Result<bool>
    where
        T: Serialize,
    {
        match outcome {
            Ok(value) => {
                println!("{}", self.render(&value)?);
                Ok(true)
            }
            Err(err) => {
                match &err {
                    api::Error::Fetch(cause) | api::Error::Parse(cause) => {
                        log::error!("{err}: {cause}");
                    }
                    api::Error::Api(_) | api::Error::Rejected(_) => {
                        log::error!("Request rejected: {err}");
                    }
                }
                eprintln!("{}", self.render(&err.to_payload())?);
                Ok(false)
            }
        }
    }

    fn render<T>(&self, value: &T) -> Result<String>
    where
        T: Serialize,
    {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}
