//! View models derived from fetched records.
//!
//! Pure functions over in-memory lists: option lists, dependent selection,
//! table rows, search filters, edit patches and the notices shown to users.

mod curriculum;
mod notice;
mod options;
mod subject;

pub use curriculum::*;
pub use notice::*;
pub use options::*;
pub use subject::*;
