mod envelope;
pub use self::envelope::{ProviderError, RawValue};

mod chart;
pub use self::chart::{
    AdjCloseIndicator, Bar, ChartEnvelope, ChartMeta, ChartResponse, ChartResult, Indicators,
    QuoteIndicator,
};

mod summary;
pub use self::summary::{
    AssetProfile, DefaultKeyStatistics, Price, QuoteSummaryEnvelope, QuoteSummaryResponse,
    QuoteSummaryResult, SummaryDetail,
};
