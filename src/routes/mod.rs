pub mod football;
pub mod news;
pub mod tts;
