//! Functional core for the objects handlers.
//!
//! Everything in this crate is pure: data types, the gateway request/response
//! contract, the error taxonomy and the traits the imperative shell implements.

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod export;
pub mod gateway;
pub mod item;
pub mod storage;
