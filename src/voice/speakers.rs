use std::collections::HashMap;

/// 角色 → VOICEVOX speaker id，启动时构建，之后只读
#[derive(Debug, Clone)]
pub struct SpeakerTable {
    speakers: HashMap<String, u32>,
}

impl SpeakerTable {
    pub fn builtin() -> Self {
        Self::from_pairs([("zundamon", 3), ("gaoyan", 2)])
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        let speakers = pairs
            .into_iter()
            .map(|(character, id)| (character.to_string(), id))
            .collect();
        Self { speakers }
    }

    pub fn speaker_id(&self, character: &str) -> Option<u32> {
        self.speakers.get(character).copied()
    }
}
