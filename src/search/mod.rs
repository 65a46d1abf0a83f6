//! Search engine: facet filtering, pagination and aggregate counts.

pub mod filter;
pub mod pagination;
pub mod stats;

pub use filter::{Facet, FilterState};
pub use pagination::{page_window, paginate, total_pages, Page};
pub use stats::{category_counts, show_category_panel, CategoryCount, QuickStats};
