//! HTTP front end for SeoLens.
//!
//! `POST /crawl` takes `{"url": "..."}` and answers with the crawl outcome
//! JSON; `GET /` serves a small dashboard that calls it.

pub mod config;
pub mod routes;

pub use crate::config::ServerConfig;
pub use routes::{AppState, CrawlRequest, app};
