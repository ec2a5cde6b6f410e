//! 渲染端读取的静态台本数据。
//!
//! `durationInFrames` 由 `voices` 子命令输出的注释手动粘贴更新，
//! 表中的 emotion / visual / se 是手写的，不会被自动覆盖。

mod data;

pub use data::{BGM, SCENES, SCRIPT};

use crate::error::{PipelineError, Result};
use crate::scene::{voice_file_name, Background};
use crate::voice::{SpeakerTable, VoiceJob};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterId {
    Zundamon,
    Gaoyan,
}

impl CharacterId {
    pub fn as_str(self) -> &'static str {
        match self {
            CharacterId::Zundamon => "zundamon",
            CharacterId::Gaoyan => "gaoyan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationType {
    None,
    FadeIn,
    SlideUp,
    SlideLeft,
    ZoomIn,
    Bounce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualKind {
    Image,
    Text,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualContent {
    #[serde(rename = "type")]
    pub kind: VisualKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundEffect {
    pub src: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,
}

/// 整个视频共用的 BGM
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BgmConfig {
    pub src: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looped: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Normal,
    Happy,
    Surprised,
    Thinking,
    Sad,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableLine {
    pub id: u32,
    pub character: CharacterId,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<&'static str>,
    pub scene: u32,
    pub voice_file: &'static str,
    pub duration_in_frames: u32,
    pub pause_after: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual: Option<VisualContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se: Option<SoundEffect>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneInfo {
    pub id: u32,
    pub title: &'static str,
    pub background: Background,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<&'static str>,
}

#[derive(Serialize)]
struct RenderTables<'a> {
    bgm: Option<&'a BgmConfig>,
    scenes: &'a [SceneInfo],
    script: &'a [TableLine],
}

/// 检查台词引用的场景存在、语音文件名符合命名规则且不重复
pub fn validate(scenes: &[SceneInfo], lines: &[TableLine]) -> Result<()> {
    let scene_ids: HashSet<u32> = scenes.iter().map(|scene| scene.id).collect();
    let mut voice_files = HashSet::new();
    let mut problems = Vec::new();

    for line in lines {
        if !scene_ids.contains(&line.scene) {
            problems.push(format!("line {} references unknown scene {}", line.id, line.scene));
        }

        let expected = voice_file_name(line.id, line.character.as_str());
        if line.voice_file != expected {
            problems.push(format!(
                "line {} has voice file {}, expected {}",
                line.id, line.voice_file, expected
            ));
        }

        if !voice_files.insert(line.voice_file) {
            problems.push(format!("duplicate voice file {}", line.voice_file));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::TableError(problems.join("; ")))
    }
}

/// 校验后输出渲染端使用的 JSON
pub fn render_json() -> Result<String> {
    validate(SCENES, SCRIPT)?;

    let tables = RenderTables {
        bgm: BGM.as_ref(),
        scenes: SCENES,
        script: SCRIPT,
    };
    Ok(serde_json::to_string_pretty(&tables)?)
}

/// 为静态台词生成 VOICEVOX 合成任务列表
pub fn voice_jobs(lines: &[TableLine], speakers: &SpeakerTable) -> Vec<VoiceJob> {
    lines
        .iter()
        .map(|line| VoiceJob::plan(line.id, line.character.as_str(), line.text, speakers))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u32, scene: u32, voice_file: &'static str) -> TableLine {
        TableLine {
            id,
            character: CharacterId::Zundamon,
            text: "hello",
            display_text: None,
            scene,
            voice_file,
            duration_in_frames: 30,
            pause_after: 10,
            emotion: None,
            visual: None,
            se: None,
        }
    }

    fn scene(id: u32) -> SceneInfo {
        SceneInfo {
            id,
            title: "scene",
            background: Background::Gradient,
            background_image: None,
            background_color: None,
        }
    }

    #[test]
    fn bundled_tables_are_consistent() {
        validate(SCENES, SCRIPT).unwrap();
        assert_eq!(SCENES.len(), 7);
        assert_eq!(SCRIPT.len(), 7);
    }

    #[test]
    fn bundled_lines_carry_no_overrides() {
        assert!(SCRIPT
            .iter()
            .all(|line| line.emotion.is_none() && line.visual.is_none() && line.se.is_none()));
        assert_eq!(SCRIPT[3].display_text, SCRIPT[2].display_text);
    }

    #[test]
    fn visual_override_uses_renderer_field_names() {
        let mut with_visual = line(1, 1, "01_zundamon.wav");
        with_visual.emotion = Some(Emotion::Surprised);
        with_visual.visual = Some(VisualContent {
            kind: VisualKind::Text,
            src: None,
            text: Some("!"),
            font_size: Some(64),
            color: None,
            animation: Some(AnimationType::SlideUp),
        });

        let json = serde_json::to_value(&with_visual).unwrap();
        assert_eq!(json["emotion"], "surprised");
        assert_eq!(json["visual"]["type"], "text");
        assert_eq!(json["visual"]["fontSize"], 64);
        assert_eq!(json["visual"]["animation"], "slideUp");
        assert!(json["visual"].get("src").is_none());
    }

    #[test]
    fn validate_reports_broken_references() {
        let scenes = [scene(1)];
        let lines = [
            line(1, 1, "01_zundamon.wav"),
            line(2, 9, "02_zundamon.wav"),
            line(3, 1, "3_zundamon.wav"),
        ];

        let err = validate(&scenes, &lines).unwrap_err().to_string();
        assert!(err.contains("unknown scene 9"));
        assert!(err.contains("expected 03_zundamon.wav"));
        assert!(!err.contains("line 1 "));
    }

    #[test]
    fn validate_rejects_duplicate_voice_files() {
        let scenes = [scene(1)];
        let mut second = line(1, 1, "01_zundamon.wav");
        second.text = "again";
        let lines = [line(1, 1, "01_zundamon.wav"), second];

        let err = validate(&scenes, &lines).unwrap_err().to_string();
        assert!(err.contains("duplicate voice file 01_zundamon.wav"));
    }

    #[test]
    fn render_json_uses_renderer_field_names() {
        let json: serde_json::Value = serde_json::from_str(&render_json().unwrap()).unwrap();

        assert!(json["bgm"].is_null());
        assert_eq!(json["scenes"][0]["background"], "image");
        assert_eq!(json["scenes"][0]["backgroundImage"], "imported/260207_1.png");
        assert_eq!(json["script"][0]["voiceFile"], "01_zundamon.wav");
        assert_eq!(json["script"][0]["durationInFrames"], 240);
        assert_eq!(json["script"][0]["character"], "zundamon");
        assert!(json["script"][0].get("emotion").is_none());
    }

    #[test]
    fn voice_jobs_match_table_files() {
        let jobs = voice_jobs(SCRIPT, &SpeakerTable::builtin());

        assert_eq!(jobs.len(), SCRIPT.len());
        for (job, line) in jobs.iter().zip(SCRIPT) {
            assert_eq!(job.output_file, line.voice_file);
            assert!(job.speaker_id.is_some());
        }
        assert_eq!(jobs[1].speaker_id, Some(2));
    }
}
