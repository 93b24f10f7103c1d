//! Storage and CRUD semantics shared by every record collection.
//!
//! Collections differ only by their `ResourceDescriptor`; all of them live in
//! the same `documents` table keyed by collection name.

pub mod repository;
pub mod service;
