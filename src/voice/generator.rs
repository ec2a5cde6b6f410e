use crate::api::VoicevoxClient;
use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::scene::load_script;
use crate::voice::duration::{frames_for, wav_duration_secs};
use crate::voice::job::VoiceJob;
use crate::voice::speakers::SpeakerTable;
use std::collections::BTreeMap;
use tracing::{error, info};

/// 一段生成成功的语音
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceClip {
    pub id: u32,
    pub file: String,
    pub seconds: f64,
    pub frames: u32,
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    pub clips: Vec<VoiceClip>,
    /// 角色没有对应 speaker 而跳过的文件
    pub skipped: Vec<String>,
    /// 请求或写入失败的文件
    pub failed: Vec<String>,
    /// 文件名 → 帧数，写入 durations.json
    pub durations: BTreeMap<String, u32>,
}

pub struct VoiceGenerator {
    config: Config,
    client: VoicevoxClient,
    speakers: SpeakerTable,
}

impl VoiceGenerator {
    pub fn new(config: Config, speakers: SpeakerTable) -> Result<Self> {
        let client = VoicevoxClient::new(config.voicevox_host.clone())?;
        Ok(Self {
            config,
            client,
            speakers,
        })
    }

    /// 逐句合成语音并输出帧数映射
    pub async fn run(&self) -> Result<GenerationReport> {
        self.preflight().await?;

        tokio::fs::create_dir_all(&self.config.voices_dir).await?;

        info!(
            "Reading script from: {}",
            self.config.script_yaml.display()
        );
        let lines = load_script(&self.config.script_yaml).await?;
        info!("Processing {} lines...", lines.len());

        let mut report = GenerationReport::default();

        for line in &lines {
            let job = VoiceJob::plan(line.id, &line.character, &line.text, &self.speakers);

            let Some(speaker_id) = job.speaker_id else {
                error!("Unknown character: {}", job.character);
                report.skipped.push(job.output_file);
                continue;
            };

            match self.generate(&job, speaker_id).await {
                Ok(clip) => {
                    report.durations.insert(clip.file.clone(), clip.frames);
                    report.clips.push(clip);
                }
                Err(e) => {
                    error!("Error generating {}: {}", job.output_file, e);
                    report.failed.push(job.output_file);
                }
            }
        }

        self.write_durations(&report.durations).await?;
        print_annotations(&report.clips);

        Ok(report)
    }

    async fn preflight(&self) -> Result<()> {
        match self.client.version().await {
            Ok(version) => {
                info!("VOICEVOX version: {}", version);
                Ok(())
            }
            Err(e) => Err(PipelineError::ServiceUnavailable(format!(
                "cannot reach VOICEVOX at {} ({}). Please start VOICEVOX first",
                self.client.host(),
                e
            ))),
        }
    }

    async fn generate(&self, job: &VoiceJob, speaker_id: u32) -> Result<VoiceClip> {
        let preview: String = job.text.chars().take(30).collect();
        info!("Generating: {} - \"{}...\"", job.output_file, preview);

        let query = self.client.audio_query(&job.text, speaker_id).await?;
        let audio = self.client.synthesis(&query, speaker_id).await?;

        let output_path = self.config.voices_dir.join(&job.output_file);
        tokio::fs::write(&output_path, audio).await?;

        let wav_path = output_path.clone();
        let measured = tokio::task::spawn_blocking(move || wav_duration_secs(&wav_path)).await;
        let seconds = match measured {
            Ok(Ok(seconds)) => seconds,
            Ok(Err(e)) => {
                error!("Failed to get duration for {}: {}", output_path.display(), e);
                0.0
            }
            Err(e) => {
                error!("Duration check for {} panicked: {}", output_path.display(), e);
                0.0
            }
        };
        let frames = frames_for(seconds, self.config.fps, self.config.playback_rate);
        info!("  -> {:.2}s, {} frames", seconds, frames);

        Ok(VoiceClip {
            id: job.id,
            file: job.output_file.clone(),
            seconds,
            frames,
        })
    }

    async fn write_durations(&self, durations: &BTreeMap<String, u32>) -> Result<()> {
        let path = &self.config.durations_path;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, serde_json::to_string_pretty(durations)?).await?;
        info!("Duration data saved to: {}", path.display());
        Ok(())
    }
}

/// 输出可直接粘贴到静态台本表的帧数注释
fn print_annotations(clips: &[VoiceClip]) {
    println!("\n=== script table durations ===");
    for clip in clips {
        println!("{}", annotation(clip));
    }
}

fn annotation(clip: &VoiceClip) -> String {
    format!(
        "ID {}: durationInFrames: {}, // {:.2}s",
        clip.id, clip.frames, clip.seconds
    )
}
