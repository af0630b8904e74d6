//! Safe SQL pieces: identifiers from code only, values as parameters.

pub mod merge;
pub mod params;
mod update;
pub use merge::{is_present, merge, AllowedColumns, FieldSet, PartialUpdate};
pub use params::*;
pub use update::*;
