pub(crate) mod football;
pub(crate) mod news;
pub(crate) mod tts;
