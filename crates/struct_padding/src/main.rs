use std::{
  io::{self, IsTerminal},
  process::ExitCode
};

use struct_padding::write_sizes;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .with_ansi(io::stderr().is_terminal())
    .init();

  match write_sizes(&mut io::stdout().lock()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      error!(%err, "size report aborted");
      ExitCode::FAILURE
    }
  }
}
