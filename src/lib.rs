pub mod models;
pub mod omdb;
pub mod search;
