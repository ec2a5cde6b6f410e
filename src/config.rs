use std::path::{Path, PathBuf};

pub const VOICEVOX_HOST: &str = "http://localhost:50021";
pub const FPS: u32 = 30;
/// 帧数换算时乘上的播放速率，语义由渲染端决定
pub const PLAYBACK_RATE: f64 = 1.2;
/// 每句台词后的默认停顿（帧）
pub const DEFAULT_PAUSE_AFTER: u32 = 10;

/// 导入图片在 public/images 下的相对目录
pub const IMPORTED_IMAGE_PREFIX: &str = "imported";

/// 一次运行使用的全部路径和常量
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub scenario_csv: PathBuf,
    pub script_yaml: PathBuf,
    pub scenes_yaml: PathBuf,
    pub import_dir: PathBuf,
    pub public_images_dir: PathBuf,
    pub voices_dir: PathBuf,
    pub durations_path: PathBuf,
    pub voicevox_host: String,
    pub fps: u32,
    pub playback_rate: f64,
    pub default_pause_after: u32,
}

impl Config {
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let config_dir = root.join("config");
        let voices_dir = root.join("public").join("voices");

        Self {
            scenario_csv: config_dir.join("scenario.csv"),
            script_yaml: config_dir.join("script.yaml"),
            scenes_yaml: config_dir.join("scenes.yaml"),
            import_dir: root.join("import_images"),
            public_images_dir: root
                .join("public")
                .join("images")
                .join(IMPORTED_IMAGE_PREFIX),
            durations_path: voices_dir.join("durations.json"),
            voices_dir,
            voicevox_host: VOICEVOX_HOST.to_string(),
            fps: FPS,
            playback_rate: PLAYBACK_RATE,
            default_pause_after: DEFAULT_PAUSE_AFTER,
            root,
        }
    }
}
