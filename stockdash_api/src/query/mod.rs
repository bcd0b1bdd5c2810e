mod common;
pub use self::common::Query;
mod chart;
pub use self::chart::{ChartQuery, Interval};

mod summary;
pub use self::summary::{SummaryModule, SummaryQuery};
