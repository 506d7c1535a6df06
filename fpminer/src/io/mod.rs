//! Loaders that turn raw records into a [`TransactionSet`](crate::fp::TransactionSet).
//!
//! Nothing in [`crate::fp`] depends on these; they only feed it.

pub mod delimited;
pub mod document;
pub mod orders;

pub use delimited::{load_delimited, read_delimited};
pub use document::{load_document, read_document, DOCUMENT_ATTRIBUTE};
pub use orders::{group_order_lines, load_order_files, write_document, OrderColumns};
