pub mod game;
pub mod rating;
