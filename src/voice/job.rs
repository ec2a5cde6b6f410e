use crate::scene::voice_file_name;
use crate::voice::speakers::SpeakerTable;
use serde::Serialize;

/// 一条待合成的语音任务
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceJob {
    pub id: u32,
    pub character: String,
    pub speaker_id: Option<u32>,
    pub text: String,
    pub output_file: String,
}

impl VoiceJob {
    pub fn plan(id: u32, character: &str, text: &str, speakers: &SpeakerTable) -> Self {
        Self {
            id,
            character: character.to_string(),
            speaker_id: speakers.speaker_id(character),
            text: text.to_string(),
            output_file: voice_file_name(id, character),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_resolves_speaker_and_file() {
        let speakers = SpeakerTable::builtin();

        let job = VoiceJob::plan(7, "gaoyan", "hello", &speakers);
        assert_eq!(job.speaker_id, Some(2));
        assert_eq!(job.output_file, "07_gaoyan.wav");

        let unknown = VoiceJob::plan(8, "metan", "hello", &speakers);
        assert_eq!(unknown.speaker_id, None);
        assert_eq!(unknown.output_file, "08_metan.wav");
    }
}
