//! Point-in-time lookup over the published configuration schedule.

pub mod fetch;
pub mod lookup;

pub use fetch::fetch_table;
pub use lookup::find_configuration;
