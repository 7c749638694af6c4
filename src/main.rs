use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use unish::dialect::Dialect;
use unish::exec::CannedFallback;
use unish::session::{self, Session};

fn main() -> Result<()> {
    // Logging goes to stderr so it never mixes with command output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let host = Dialect::host();
    session::print_banner(host);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let source = session::choose_dialect(&mut input)?;

    let mut session = Session::new(source, host, CannedFallback);
    session.run(&mut input)
}
