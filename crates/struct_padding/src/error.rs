use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
  #[error("failed to write the size of `{name}`: {source}")]
  Write {
    name:   &'static str,
    #[source]
    source: io::Error
  },

  #[error("failed to flush the size report: {0}")]
  Flush(#[source] io::Error)
}
