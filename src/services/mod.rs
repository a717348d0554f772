pub mod catalog;
pub mod recommender;

pub use recommender::{Recommender, DEFAULT_LIMIT};
