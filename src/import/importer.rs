use crate::config::{Config, IMPORTED_IMAGE_PREFIX};
use crate::error::{PipelineError, Result};
use crate::import::encoding::decode_scenario;
use crate::scene::{write_yaml, SceneDescriptor, ScriptLine};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// scenario.csv 的一行
#[derive(Debug, Clone, Default)]
pub struct ScenarioRow {
    pub scene: String,
    pub character: String,
    pub text: String,
    pub subtitle: String,
    pub duration: String,
    pub image_file: String,
    pub image_prompt: String,
}

/// 导入结果：台词和场景两个文档
#[derive(Debug, Default)]
pub struct Documents {
    pub lines: Vec<ScriptLine>,
    pub scenes: Vec<SceneDescriptor>,
}

/// 表头列名到列号；缺失的列和过短的行都按空字符串处理
struct Columns {
    index: HashMap<String, usize>,
}

impl Columns {
    fn new(headers: &StringRecord) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_string(), i))
            .collect();
        Self { index }
    }

    fn get(&self, record: &StringRecord, name: &str) -> String {
        self.index
            .get(name)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
            .to_string()
    }

    fn row(&self, record: &StringRecord) -> ScenarioRow {
        ScenarioRow {
            scene: self.get(record, "scene"),
            character: self.get(record, "character"),
            text: self.get(record, "text"),
            subtitle: self.get(record, "subtitle"),
            duration: self.get(record, "duration"),
            image_file: self.get(record, "image_file"),
            image_prompt: self.get(record, "image_prompt"),
        }
    }
}

pub fn parse_rows(text: &str) -> Result<Vec<ScenarioRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = Columns::new(reader.headers()?);

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(columns.row(&record?));
    }
    Ok(rows)
}

/// 取开头最长的数字前缀，"2.5s" 视为 2.5
fn parse_duration(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let ends: Vec<usize> = raw.char_indices().map(|(i, c)| i + c.len_utf8()).collect();

    ends.into_iter()
        .rev()
        .find_map(|end| raw[..end].parse::<f64>().ok())
        .filter(|secs| secs.is_finite())
}

async fn file_exists(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

pub struct ScenarioImporter {
    config: Config,
}

impl ScenarioImporter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 读取 CSV 并写出 script.yaml / scenes.yaml
    pub async fn run(&self) -> Result<Documents> {
        let csv_path = &self.config.scenario_csv;
        info!("Importing scenario from: {}", csv_path.display());

        if !file_exists(csv_path).await {
            return Err(PipelineError::InputNotFound(csv_path.clone()));
        }

        let bytes = tokio::fs::read(csv_path).await?;
        let decoded = decode_scenario(&bytes);
        info!(
            "Detected encoding: {}, decoded as: {}",
            decoded.detected.name(),
            decoded.encoding.name()
        );

        let rows = parse_rows(&decoded.text)?;
        info!("Parsed {} rows", rows.len());

        let documents = self.convert(&rows).await?;

        write_yaml(&self.config.script_yaml, &documents.lines).await?;
        write_yaml(&self.config.scenes_yaml, &documents.scenes).await?;

        info!(
            "Wrote {} lines to {}",
            documents.lines.len(),
            self.config.script_yaml.display()
        );
        info!(
            "Wrote {} scenes to {}",
            documents.scenes.len(),
            self.config.scenes_yaml.display()
        );
        info!("Next: run `scenario-pipeline voices` to generate voice files");

        Ok(documents)
    }

    /// 按场景名分组，首次出现的场景分配递增 id
    pub async fn convert(&self, rows: &[ScenarioRow]) -> Result<Documents> {
        let mut documents = Documents::default();
        let mut scene_ids: HashMap<String, u32> = HashMap::new();

        for (index, row) in rows.iter().enumerate() {
            let scene_name = if row.scene.is_empty() {
                format!("scene_{}", index)
            } else {
                row.scene.clone()
            };

            let scene_id = match scene_ids.get(&scene_name) {
                Some(&id) => id,
                None => {
                    let id = documents.scenes.len() as u32 + 1;
                    scene_ids.insert(scene_name.clone(), id);

                    let mut scene = SceneDescriptor::new(id, scene_name.clone());
                    if !row.image_file.is_empty() {
                        if let Some(relative) = self.import_image(row, &scene_name).await? {
                            scene = scene.with_image(relative);
                        }
                    }
                    documents.scenes.push(scene);
                    id
                }
            };

            if row.text.is_empty() || row.character.is_empty() {
                continue;
            }

            let display_text = if row.subtitle.is_empty() {
                row.text.clone()
            } else {
                row.subtitle.clone()
            };

            documents.lines.push(ScriptLine {
                id: index as u32 + 1,
                character: row.character.clone(),
                text: row.text.clone(),
                display_text: Some(display_text),
                scene: scene_id,
                pause_after: self.config.default_pause_after,
                duration: parse_duration(&row.duration),
            });
        }

        Ok(documents)
    }

    /// 把 import_images 下的图片复制到 public 目录，返回相对路径；图片不存在时返回 None
    async fn import_image(&self, row: &ScenarioRow, scene_name: &str) -> Result<Option<String>> {
        let src = self.config.import_dir.join(&row.image_file);
        if !file_exists(&src).await {
            if row.image_prompt.is_empty() {
                warn!("Image not found: {} (Scene: {})", row.image_file, scene_name);
            } else {
                warn!(
                    "Image not found: {} (Scene: {}), prompt: {}",
                    row.image_file, scene_name, row.image_prompt
                );
            }
            return Ok(None);
        }

        tokio::fs::create_dir_all(&self.config.public_images_dir).await?;
        tokio::fs::copy(&src, self.config.public_images_dir.join(&row.image_file)).await?;
        info!("Imported image: {}", row.image_file);

        Ok(Some(format!("{}/{}", IMPORTED_IMAGE_PREFIX, row.image_file)))
    }
}
