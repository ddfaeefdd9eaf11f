pub mod index;
pub mod index_view;
