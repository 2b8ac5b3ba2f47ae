use thiserror::Error;

pub type Result<T> = std::result::Result<T, DynamodbError>;

#[derive(Error, Debug)]
pub enum DynamodbError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Table '{table_name}' not found, run `cargo xtask dynamodb deploy` first")]
    TableNotFound { table_name: String },

    #[error("Table '{table_name}' is keyed by '{partition_key}' instead of 'object_id'")]
    KeyConflict {
        table_name: String,
        partition_key: String,
    },

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Table '{table_name}' did not become active in time")]
    ActivationTimeout { table_name: String },

    #[error("Wrote {written} items but {remaining} were still unprocessed after retrying")]
    Unprocessed { written: usize, remaining: usize },
}

/// Flattens an SDK error chain into one message.
pub fn sdk_error<E: std::error::Error>(err: E) -> DynamodbError {
    DynamodbError::AwsSdk(aws_sdk_dynamodb::error::DisplayErrorContext(&err).to_string())
}
