pub mod article;
pub mod football;
