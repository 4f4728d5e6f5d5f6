//! Output pipeline: discovery, ordering and assembly.
//!
//! A calendar is handed to [`discovery`], which produces three buckets;
//! [`ordering`] sorts and filters them; [`assemble`] renders every entry and
//! merges the result with a metadata block.

pub mod assemble;
pub mod discovery;
pub mod ordering;

pub use assemble::{build_metadata, to_json, to_xml, NOT_AVAILABLE};
pub use discovery::{discover, is_eligible, Buckets, NamedDuration, NamedTimestamp, EXCLUDED_ACCESSORS};
pub use ordering::{order_buckets, DURATION_THRESHOLD_MILLIS};
