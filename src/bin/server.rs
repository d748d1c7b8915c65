//! Table server binary.
//!
//! Serves a fixed number of two-player blackjack games over TCP.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use bjduel::options::DEFAULT_CAPACITY;
use bjduel::transport::{
    DEFAULT_ACCEPT_TIMEOUT, DEFAULT_IO_TIMEOUT, DEFAULT_MAX_REQUESTS, Server,
};
use bjduel::{GameService, TableOptions};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Two-player blackjack table server", long_about = None)]
struct Args {
    /// Port to listen on.
    port: u16,
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,
    /// Number of game slots.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
    /// Seconds a status call may block before answering TURN_WAIT. Unbounded if omitted.
    #[arg(long)]
    wait_timeout: Option<u64>,
    /// Per-connection read/write timeout in seconds. 0 disables it.
    #[arg(long, default_value_t = DEFAULT_IO_TIMEOUT.as_secs())]
    io_timeout: u64,
    /// Seconds without a new connection before the server exits. 0 disables it.
    #[arg(long, default_value_t = DEFAULT_ACCEPT_TIMEOUT.as_secs())]
    accept_timeout: u64,
    /// Requests served per connection before it is closed. 0 removes the limit.
    #[arg(long, default_value_t = DEFAULT_MAX_REQUESTS)]
    max_requests: usize,
    /// Free finished games once both players have seen the result.
    #[arg(long)]
    recycle: bool,
    /// Seed for dealing.
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn table_options(&self) -> TableOptions {
        let options = TableOptions::default()
            .with_capacity(self.capacity)
            .with_wait_timeout(self.wait_timeout.map(Duration::from_secs))
            .with_recycle_finished(self.recycle);
        match self.seed {
            Some(seed) => options.with_seed(seed),
            None => options,
        }
    }

    fn io_timeout(&self) -> Option<Duration> {
        (self.io_timeout > 0).then(|| Duration::from_secs(self.io_timeout))
    }

    fn accept_timeout(&self) -> Option<Duration> {
        (self.accept_timeout > 0).then(|| Duration::from_secs(self.accept_timeout))
    }

    fn max_requests(&self) -> Option<usize> {
        (self.max_requests > 0).then_some(self.max_requests)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let service = Arc::new(GameService::new(args.table_options()));

    let server = match Server::bind((args.bind.as_str(), args.port), service) {
        Ok(server) => server
            .with_io_timeout(args.io_timeout())
            .with_accept_timeout(args.accept_timeout())
            .with_max_requests(args.max_requests()),
        Err(err) => {
            log::error!("cannot bind {}:{}: {err}", args.bind, args.port);
            return ExitCode::FAILURE;
        }
    };

    log::info!("{} game slots ready", args.capacity);

    match server.run() {
        Ok(()) => {
            log::info!("server idle, exiting");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("server stopped: {err}");
            ExitCode::FAILURE
        }
    }
}
