use serde::{Deserialize, Serialize};

/// Error object carried inside a Yahoo response envelope.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProviderError {
    pub code: String,
    pub description: Option<String>,
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        self.code.eq_ignore_ascii_case("not found")
    }
}

/// Yahoo's wrapper for numeric fields: `{"raw": 1.25, "fmt": "1.25"}`.
///
/// Missing data arrives as `{}`, so `raw` is optional. `fmt` is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RawValue<T> {
    pub raw: Option<T>,
}

impl<T: Copy> RawValue<T> {
    pub fn get(&self) -> Option<T> {
        self.raw
    }
}
