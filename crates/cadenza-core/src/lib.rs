//! # Cadenza Core
//!
//! Core types shared by every layer of the Cadenza music catalog:
//! the unified error type, typed entity identifiers, pagination
//! parameters, and the domain entities themselves.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod validation;

pub use domain::entities::{Album, Song, User};
pub use error::CatalogError;
pub use id::{AlbumId, SongId, UserId};
pub use pagination::PageQuery;
pub use result::CatalogResult;
pub use validation::ValidateRequest;
