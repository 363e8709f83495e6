//! List View pipeline
//!
//! fetch → sort → filter → paginate, with the view state expressed as plain
//! transition functions so it can be exercised without a renderer.

mod pipeline;
mod state;
mod actions;

pub use pipeline::{filter_records, matches_search, page_count, paginate, sort_records, SortDirection, SortSpec};
pub use state::{ListCommand, ListState};
pub use actions::{delete_and_reload, reload, set_completed_and_reload, MutationError};
