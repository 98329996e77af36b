//! GitHub API interface.

mod errors;
mod interface;
pub mod review;
pub mod types;

pub use errors::{ApiError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockApiService;
pub use interface::ApiService;
