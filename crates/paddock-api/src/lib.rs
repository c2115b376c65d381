// paddock-api: Async Rust client for the Paddock admin REST API

pub mod client;
pub mod envelope;
pub mod error;
pub mod request;
pub mod resources;
pub mod transport;
pub mod types;

pub use client::AdminClient;
pub use envelope::{ListPage, MutationAck, PageMeta, UploadSummary};
pub use error::Error;
pub use request::ListRequest;
pub use resources::slides::SlideFields;
pub use transport::{TlsMode, TransportConfig};
pub use types::*;
