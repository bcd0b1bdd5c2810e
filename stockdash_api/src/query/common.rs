//! Shared query infrastructure: the [`Query`] trait and date-to-epoch conversion.

use chrono::{NaiveDate, NaiveTime};
use url::Url;

/// Trait implemented by all query builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Unix timestamp of `date` at midnight UTC.
pub(crate) fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}
