use thiserror::Error;

/// CLI-local result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by `vkey` commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Reading the input document failed.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input was not valid JSON, or output could not be encoded.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Flattening rejected the document.
	#[error(transparent)]
	Flatten(#[from] vkey::flatten::FlattenError),
}
