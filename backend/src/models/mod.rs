//! Data models for the campus board.
//!
//! Persisted records keep the snake_case field names of the data file; request and
//! response bodies use camelCase like the rest of the HTTP surface.

mod announcement;
mod document;
mod principal;
mod representative;
mod student;

pub use announcement::*;
pub use document::*;
pub use principal::*;
pub use representative::*;
pub use student::*;
