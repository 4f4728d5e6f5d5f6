pub mod calendar;
pub mod document;
pub mod time;

pub use calendar::*;
pub use document::*;
pub use time::*;
