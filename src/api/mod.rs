mod voicevox;

pub use voicevox::VoicevoxClient;
