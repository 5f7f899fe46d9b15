pub mod appwrite;
pub mod tts_service;
