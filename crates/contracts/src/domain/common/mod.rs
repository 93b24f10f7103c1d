//! Common types shared by every record collection

pub mod aggregate_id;
pub mod descriptor;
pub mod owner;
pub mod record;
pub mod record_id;

// Re-exports
pub use aggregate_id::AggregateId;
pub use descriptor::{FieldDescriptor, Fields, ResourceDescriptor};
pub use owner::OwnerSummary;
pub use record::Record;
pub use record_id::RecordId;
