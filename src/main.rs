use log::{error, info};
use thiserror::Error;

use abstractions::{chain, ChainError};
use common::{cli, init_log, ChainConfig, ConfigError, LogError, Options};

mod amenities;
mod client;

use amenities::AmenityRef;
use client::Client;

/// Sub-chain entry point used when neither the command line nor the config
/// picks one: the second handler.
const DEFAULT_ENTRY: usize = 1;

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Log(#[from] LogError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("entry {entry} is out of range for a chain of {len} handlers")]
    EntryOutOfRange { entry: usize, len: usize },
}

impl From<&AppError> for i32 {
    fn from(err: &AppError) -> i32 {
        match err {
            AppError::Config(_) => 2,
            AppError::Log(_) => 3,
            AppError::Chain(_) => 4,
            AppError::EntryOutOfRange { .. } => 5,
        }
    }
}

/// Everything the demo needs once the inputs have been resolved.
struct Demo {
    head: AmenityRef,
    entry: AmenityRef,
    requests: Vec<String>,
}

impl Demo {
    fn prepare(options: &Options) -> Result<Self, AppError> {
        let config = options.config.as_deref().map(ChainConfig::load).transpose()?;

        let (handlers, configured_requests, configured_entry) = match config {
            Some(config) => (
                amenities::from_config(&config.handlers),
                config.requests,
                config.entry,
            ),
            None => (amenities::default_handlers(), None, None),
        };

        let len = handlers.len();
        let head = chain::build(handlers)?.ok_or(AppError::EntryOutOfRange { entry: 0, len })?;

        let entry = options
            .entry
            .or(configured_entry)
            .unwrap_or(DEFAULT_ENTRY.min(len - 1));
        let entry_node =
            chain::node_at(&head, entry).ok_or(AppError::EntryOutOfRange { entry, len })?;

        let requests = if !options.requests.is_empty() {
            options.requests.clone()
        } else {
            configured_requests.unwrap_or_else(amenities::default_requests)
        };

        Ok(Self {
            head,
            entry: entry_node,
            requests,
        })
    }

    fn run(&self) {
        let client = Client::new(self.requests.clone());

        println!("Chain: {}\n", chain::describe(&self.head));
        report(&client, &self.head);
        println!();

        println!("Subchain: {}\n", chain::describe(&self.entry));
        report(&client, &self.entry);
    }
}

fn report(client: &Client, entry: &AmenityRef) {
    let outcomes = client.serve(entry);
    for outcome in &outcomes {
        println!("{outcome}");
    }

    let served = outcomes.iter().filter(|outcome| outcome.is_served()).count();
    info!("{served} of {} requests served", outcomes.len());
}

fn main() {
    let options = Options::from_matches(&cli().get_matches());

    let result = init_log(&options.log_level, options.log_file.as_deref())
        .map_err(AppError::from)
        .and_then(|()| Demo::prepare(&options));

    match result {
        Ok(demo) => {
            demo.run();
            info!("demo finished");
        }
        Err(err) => {
            error!("{err}");
            eprintln!("concierge: {err}");
            std::process::exit(i32::from(&err));
        }
    }
}
