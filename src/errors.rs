use thiserror::Error;

/// Failures surfaced by the input and output adapters around the load
/// calculation. The calculation itself is total over finite inputs and has no
/// error cases of its own.
#[derive(Debug, Error)]
pub enum LoadCalcError {
    #[error("Input document was considered invalid due to error: {0}")]
    InvalidInput(#[from] serde_json::Error),
    #[error("I/O error while reading input or writing results: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error while writing the results file: {0}")]
    ResultsWrite(#[from] csv::Error),
    #[error("Error while opening the output destination: {0}")]
    Output(#[from] anyhow::Error),
}
