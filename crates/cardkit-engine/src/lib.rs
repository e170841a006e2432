// Engine crate - card assembly on top of the cardkit-types schema
// This layer turns titles, facts, errors, and typed records into ordered
// display blocks; rendering to a client wire format lives downstream

pub mod builder;
pub mod config;
pub mod error;
pub mod fields;
pub mod host;
pub mod textpolicy;

pub use builder::{error_text, CardBuilder};
pub use config::BuilderConfig;
pub use error::{Error, Result};
pub use fields::{CellValue, Field, FieldCache, FieldDescriptor, Record, TableSchema};
pub use textpolicy::{bound_text, MAX_BLOCK_BYTES, TRUNCATE_CHARS};
