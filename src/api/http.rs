//! HTTP Film Client
//!
//! `reqwest` implementation of `FilmApi`. On wasm32 reqwest goes through
//! the browser's fetch.

use async_trait::async_trait;
use reqwest::{Client, Request, Response};

use super::{ApiError, ApiResult, FilmApi};
use crate::models::{Category, CrossReferences, Film, Page};

pub const DEFAULT_API_URL: &str = "https://swapi.py4e.com/api";

/// Where the film database lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HttpFilmClient {
    http: Client,
    config: ClientConfig,
}

impl HttpFilmClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    fn films_request(&self) -> ApiResult<Request> {
        let url = format!("{}/films", self.config.base_url);
        Ok(self.http.get(url).build()?)
    }

    fn search_request(&self, query: &str, category: Category) -> ApiResult<Request> {
        let url = format!("{}/{}/", self.config.base_url, category.path_segment());
        Ok(self.http.get(url).query(&[("search", query)]).build()?)
    }

    async fn send(&self, request: Request) -> ApiResult<Response> {
        let url = request.url().to_string();
        log::debug!("[API] GET {}", url);
        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("[API] {} -> {}", url, status);
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl FilmApi for HttpFilmClient {
    async fn list_all(&self) -> ApiResult<Vec<Film>> {
        let response = self.send(self.films_request()?).await?;
        let page: Page<Film> = response.json().await?;
        Ok(unmarked_films(page))
    }

    async fn search(&self, query: &str, category: Category) -> ApiResult<Vec<String>> {
        let response = self.send(self.search_request(query, category)?).await?;
        let page: Page<CrossReferences> = response.json().await?;
        Ok(first_films(page))
    }
}

/// Feed order preserved, every film unmarked
fn unmarked_films(page: Page<Film>) -> Vec<Film> {
    page.results
        .into_iter()
        .map(|film| Film { marked: false, ..film })
        .collect()
}

/// Film urls of the first search hit; empty when nothing matched
fn first_films(page: Page<CrossReferences>) -> Vec<String> {
    page.results
        .into_iter()
        .next()
        .map(|first| first.films)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpFilmClient {
        HttpFilmClient::new(ClientConfig::with_base_url("https://example.test/api/"))
    }

    #[test]
    fn test_default_config_points_at_public_api() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_films_request_url() {
        let request = client().films_request().unwrap();
        assert_eq!(request.url().as_str(), "https://example.test/api/films");
    }

    #[test]
    fn test_search_request_uses_plural_segments() {
        let client = client();
        let cases = [
            (Category::Starship, "/api/starships/"),
            (Category::Person, "/api/people/"),
            (Category::Vehicle, "/api/vehicles/"),
        ];
        for (category, path) in cases {
            let request = client.search_request("Falcon", category).unwrap();
            assert_eq!(request.url().path(), path);
            assert_eq!(request.url().query(), Some("search=Falcon"));
        }
    }

    #[test]
    fn test_search_query_is_encoded() {
        let request = client().search_request("Luke Skywalker&x", Category::Person).unwrap();
        assert_eq!(request.url().query(), Some("search=Luke+Skywalker%26x"));
    }

    #[test]
    fn test_first_films_empty_results() {
        let page: Page<CrossReferences> = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(first_films(page).is_empty());
    }

    #[test]
    fn test_first_films_takes_only_first_hit() {
        let json = r#"{"results": [
            {"name": "Darth Vader", "films": ["A", "B"]},
            {"name": "Darth Maul", "films": ["D"]}
        ]}"#;
        let page: Page<CrossReferences> = serde_json::from_str(json).unwrap();
        assert_eq!(first_films(page), vec!["A", "B"]);
    }

    #[test]
    fn test_unmarked_films_keeps_feed_order() {
        let json = r#"{"results": [
            {"url": "C", "title": "Return of the Jedi"},
            {"url": "A", "title": "A New Hope"},
            {"url": "B", "title": "The Empire Strikes Back"}
        ]}"#;
        let mut page: Page<Film> = serde_json::from_str(json).unwrap();
        page.results[1].marked = true;

        let films = unmarked_films(page);

        let urls: Vec<_> = films.iter().map(|f| f.url.as_str()).collect();
        assert_eq!(urls, vec!["C", "A", "B"]);
        assert!(films.iter().all(|f| !f.marked));
    }
}
