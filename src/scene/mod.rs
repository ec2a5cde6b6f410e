use crate::config::DEFAULT_PAUSE_AFTER;
use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 场景背景模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Image,
    #[default]
    Gradient,
    Solid,
}

/// scenes.yaml 中的一个场景
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescriptor {
    pub id: u32,
    pub title: String,
    pub background: Background,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl SceneDescriptor {
    pub fn new(id: u32, title: String) -> Self {
        Self {
            id,
            title,
            background: Background::default(),
            background_image: None,
            background_color: None,
        }
    }

    pub fn with_image(mut self, relative_path: String) -> Self {
        self.background = Background::Image;
        self.background_image = Some(relative_path);
        self
    }
}

fn default_pause_after() -> u32 {
    DEFAULT_PAUSE_AFTER
}

/// script.yaml 中的一句台词
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptLine {
    pub id: u32,
    pub character: String,
    pub text: String,
    #[serde(default)]
    pub display_text: Option<String>,
    pub scene: u32,
    #[serde(default = "default_pause_after")]
    pub pause_after: u32,
    /// 时长覆盖（秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl ScriptLine {
    pub fn display_text(&self) -> &str {
        self.display_text.as_deref().unwrap_or(&self.text)
    }

    pub fn voice_file(&self) -> String {
        voice_file_name(self.id, &self.character)
    }
}

/// 语音文件命名规则：两位补零的 id + 角色名，导入和生成两端必须一致
pub fn voice_file_name(id: u32, character: &str) -> String {
    format!("{:02}_{}.wav", id, character)
}

/// 读取 script.yaml，空文档视为错误
pub async fn load_script(path: &Path) -> Result<Vec<ScriptLine>> {
    let content = tokio::fs::read_to_string(path).await?;
    let lines: Option<Vec<ScriptLine>> = serde_yaml::from_str(&content).map_err(|e| {
        PipelineError::ScriptError(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    match lines {
        Some(lines) if !lines.is_empty() => Ok(lines),
        _ => Err(PipelineError::ScriptError(format!(
            "No script lines found in {}",
            path.display()
        ))),
    }
}

pub async fn write_yaml<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let content = serde_yaml::to_string(value)?;
    tokio::fs::write(path, content).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u32, character: &str, scene: u32) -> ScriptLine {
        ScriptLine {
            id,
            character: character.to_string(),
            text: "hello".to_string(),
            display_text: Some("hello".to_string()),
            scene,
            pause_after: DEFAULT_PAUSE_AFTER,
            duration: None,
        }
    }

    #[test]
    fn voice_file_name_pads_id() {
        assert_eq!(voice_file_name(7, "gaoyan"), "07_gaoyan.wav");
        assert_eq!(voice_file_name(16, "zundamon"), "16_zundamon.wav");
        assert_eq!(voice_file_name(123, "zundamon"), "123_zundamon.wav");
        assert_eq!(line(1, "zundamon", 1).voice_file(), "01_zundamon.wav");
    }

    #[test]
    fn script_document_round_trips() {
        let mut second = line(3, "gaoyan", 2);
        second.duration = Some(2.5);
        let lines = vec![line(1, "zundamon", 1), second];

        let yaml = serde_yaml::to_string(&lines).unwrap();
        assert!(yaml.contains("displayText: hello"));
        assert!(yaml.contains("pauseAfter: 10"));
        assert_eq!(yaml.matches("duration:").count(), 1);

        let parsed: Vec<ScriptLine> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, lines);
    }

    #[test]
    fn missing_optional_fields_get_defaults() {
        let yaml = "- id: 2\n  character: zundamon\n  text: こんにちは\n  scene: 1\n";
        let parsed: Vec<ScriptLine> = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(parsed[0].pause_after, 10);
        assert_eq!(parsed[0].display_text(), "こんにちは");
        assert_eq!(parsed[0].duration, None);
    }

    #[test]
    fn scene_descriptor_omits_absent_fields() {
        let yaml = serde_yaml::to_string(&SceneDescriptor::new(1, "A".to_string())).unwrap();
        assert!(yaml.contains("background: gradient"));
        assert!(!yaml.contains("backgroundImage"));

        let scene = SceneDescriptor::new(2, "B".to_string()).with_image("imported/b.png".into());
        let yaml = serde_yaml::to_string(&scene).unwrap();
        assert!(yaml.contains("background: image"));
        assert!(yaml.contains("backgroundImage: imported/b.png"));
    }

    #[tokio::test]
    async fn load_script_rejects_empty_and_invalid_documents() {
        let dir = tempfile::tempdir().unwrap();

        let empty = dir.path().join("empty.yaml");
        std::fs::write(&empty, "").unwrap();
        assert!(matches!(load_script(&empty).await, Err(PipelineError::ScriptError(_))));

        let empty_list = dir.path().join("empty_list.yaml");
        std::fs::write(&empty_list, "[]\n").unwrap();
        assert!(matches!(load_script(&empty_list).await, Err(PipelineError::ScriptError(_))));

        let broken = dir.path().join("broken.yaml");
        std::fs::write(&broken, "- id: [not a number\n").unwrap();
        assert!(matches!(load_script(&broken).await, Err(PipelineError::ScriptError(_))));

        let good = dir.path().join("script.yaml");
        write_yaml(&good, &vec![line(1, "zundamon", 1)]).await.unwrap();
        assert_eq!(load_script(&good).await.unwrap().len(), 1);
    }
}
