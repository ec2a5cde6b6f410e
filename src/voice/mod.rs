pub mod duration;
pub mod generator;
pub mod job;
pub mod speakers;

pub use generator::VoiceGenerator;
pub use job::VoiceJob;
pub use speakers::SpeakerTable;
