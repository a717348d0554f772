mod movie;

pub use movie::{Movie, ScoredMovie};
