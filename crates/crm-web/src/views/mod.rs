//! HTML page renderers. Each view turns page data into a complete document.

pub mod customer_list;
pub mod dashboard;
pub mod layout;
pub mod overview;

pub use customer_list::render_customer_list;
pub use dashboard::render_dashboard;
pub use layout::NavSection;
pub use overview::render_overview;
