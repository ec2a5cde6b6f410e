use crate::error::{PipelineError, Result};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::info;

/// VOICEVOX 引擎的 HTTP 客户端
#[derive(Debug, Clone)]
pub struct VoicevoxClient {
    host: String,
    client: Client,
}

impl VoicevoxClient {
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        let host = host.into().trim_end_matches('/').to_string();

        Ok(Self { host, client })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// 查询引擎版本，用于启动前检查
    pub async fn version(&self) -> Result<String> {
        let response = self
            .client
            .get(format!("{}/version", self.host))
            .send()
            .await?;
        let response = ensure_success(response, "version").await?;

        let version = response.text().await?;
        Ok(version.trim().trim_matches('"').to_string())
    }

    /// 获取合成用的音频查询
    pub async fn audio_query(&self, text: &str, speaker_id: u32) -> Result<Value> {
        let speaker = speaker_id.to_string();
        let response = self
            .client
            .post(format!("{}/audio_query", self.host))
            .query(&[("speaker", speaker.as_str()), ("text", text)])
            .send()
            .await?;
        let response = ensure_success(response, "audio_query").await?;

        Ok(response.json().await?)
    }

    /// 根据音频查询合成 WAV
    pub async fn synthesis(&self, query: &Value, speaker_id: u32) -> Result<Vec<u8>> {
        let response = self
            .client
            .post(format!("{}/synthesis", self.host))
            .query(&[("speaker", speaker_id)])
            .json(query)
            .send()
            .await?;
        let response = ensure_success(response, "synthesis").await?;

        let audio = response.bytes().await?;
        info!("Synthesized {} bytes for speaker {}", audio.len(), speaker_id);
        Ok(audio.to_vec())
    }
}

async fn ensure_success(response: Response, endpoint: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    Err(PipelineError::ApiError(format!(
        "{} failed (HTTP {}): {}",
        endpoint, status, error_text
    )))
}
