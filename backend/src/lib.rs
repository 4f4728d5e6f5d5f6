//! # zmanim-json
//!
//! Formatting and output assembly for astronomical calendar results.
//!
//! An astronomical computation layer produces event times (sunrise, tzais,
//! chatzos, ...) and elapsed-time quantities (temporal hours, offsets). This
//! crate turns those results into human-readable strings and into an ordered
//! `label -> string` document for JSON consumers.
//!
//! ## Architecture
//!
//! - [`models`]: time quantities, the [`models::CalendarSource`] collaborator
//!   contract and the output document
//! - [`format`]: duration modes, the XSD duration encoder, date patterns and
//!   the configurable [`format::ZmanimFormatter`]
//! - [`services`]: accessor discovery, ordering and document assembly
//! - [`config`]: TOML formatter configuration
//!
//! ## Example
//!
//! ```
//! use zmanim_json::format::{FormatMode, ZmanimFormatter};
//!
//! let formatter = ZmanimFormatter::from_zone_id("America/New_York")
//!     .unwrap()
//!     .with_time_format(FormatMode::SexagesimalSeconds);
//! assert_eq!(formatter.format(90 * 60_000_i64), "1:30:00");
//! assert_eq!(ZmanimFormatter::format_xsd_duration_time(-(90 * 60_000_i64)), "-PT1H30M");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod services;

pub use error::{FormatterError, FormatterResult};
pub use format::ZmanimFormatter;
