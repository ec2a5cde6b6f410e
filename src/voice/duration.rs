use crate::error::Result;
use hound::WavReader;
use std::path::Path;

/// 读取 WAV 头，返回时长（秒）
pub fn wav_duration_secs(path: &Path) -> Result<f64> {
    let reader = WavReader::open(path)?;
    let sample_rate = reader.spec().sample_rate;
    if sample_rate == 0 {
        return Ok(0.0);
    }
    Ok(reader.duration() as f64 / sample_rate as f64)
}

/// 时长换算为视频帧数，向上取整
pub fn frames_for(seconds: f64, fps: u32, playback_rate: f64) -> u32 {
    (seconds * fps as f64 * playback_rate).ceil().max(0.0) as u32
}
