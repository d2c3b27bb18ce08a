//! Client for the Systembolaget assortment service.
//!
//! Fetches the article catalog and the store directory as XML and decodes
//! them into [`Articles`] and [`Stores`]. All fields are kept as the text the
//! service sent; [`typed`] offers parsed views on top.

pub mod client;
pub mod config;
pub mod error;
pub mod parse;
pub mod typed;
pub mod types;

pub use client::CatalogClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, LIBRARY_VERSION};
pub use error::{CatalogError, DecodeFailure};
pub use parse::{parse_articles, parse_stores};
pub use typed::Rt90;
pub use types::{Article, Articles, ArticlesInfo, Store, Stores, StoresInfo};
