//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `objects_core::storage`.
//! Every mapped error is a backend fault; absence is never reported as an
//! error because none of the item operations are conditional.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use objects_core::storage::RepositoryError;

/// Errors that never reached the service become connection failures.
fn is_transport<E, R>(err: &SdkError<E, R>) -> bool {
    matches!(
        err,
        SdkError::ConstructionFailure(_) | SdkError::TimeoutError(_) | SdkError::DispatchFailure(_)
    )
}

/// Maps any operation error, keeping the message the service sent back.
///
/// Service errors without a message fall back to the full error chain.
fn map_sdk_error<E, R>(operation: &str, err: SdkError<E, R>) -> RepositoryError
where
    E: ProvideErrorMetadata + Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    if is_transport(&err) {
        return RepositoryError::ConnectionFailed(DisplayErrorContext(&err).to_string());
    }

    tracing::debug!(operation, code = ?err.code(), "DynamoDB request failed");

    match err.message() {
        Some(message) => RepositoryError::QueryFailed(message.to_string()),
        None => RepositoryError::QueryFailed(format!(
            "{} failed: {}",
            operation,
            DisplayErrorContext(&err)
        )),
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    map_sdk_error("GetItem", err)
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    map_sdk_error("PutItem", err)
}

/// Map an UpdateItem SDK error to RepositoryError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> RepositoryError {
    map_sdk_error("UpdateItem", err)
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    map_sdk_error("DeleteItem", err)
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    map_sdk_error("Scan", err)
}
