pub mod bookmarks;
pub mod error;
pub mod extractors;
pub mod index;
pub mod redirect;
