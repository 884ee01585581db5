mod client;
mod error;
mod record_kind;

pub use client::RecordStoreClient;
pub use error::{Result, StoreError};
pub use record_kind::RecordKind;
