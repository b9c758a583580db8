//! Film Database API
//!
//! Read-only bindings to the public film database, organized by concern.

mod error;
mod http;

use async_trait::async_trait;

use crate::models::{Category, Film};

pub use error::{ApiError, ApiResult};
pub use http::{ClientConfig, HttpFilmClient};

/// Stateless request/response access to the film database.
///
/// Futures are not `Send`: in the browser every request runs on the
/// single UI thread.
#[async_trait(?Send)]
pub trait FilmApi {
    /// Fetch the whole film feed, every film unmarked
    async fn list_all(&self) -> ApiResult<Vec<Film>>;

    /// Free-text search within `category`, returning the film URLs of the
    /// first hit (empty when nothing matched)
    async fn search(&self, query: &str, category: Category) -> ApiResult<Vec<String>>;
}
