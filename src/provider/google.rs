//! Client for the Google Translate speech endpoint.
//!
//! Each text chunk is sent as one `batchexecute` RPC. The reply carries the
//! MP3 bytes base64-encoded inside a doubly JSON-encoded envelope; chunk
//! audio is concatenated in order and written once at the end.

use super::{write_audio, SpeechRequest, Synthesizer};
use crate::config::{Speed, SynthesisConfig};
use crate::text::{self, MAX_CHUNK_CHARS};
use anyhow::{anyhow, bail, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, info};
use serde_json::{json, Value};
use std::path::Path;
use std::time::Instant;

/// RPC identifier of the speech method.
const RPC_ID: &str = "jQ1olc";

const BATCH_EXECUTE_PATH: &str = "/_/TranslateWebserverUi/data/batchexecute";

const REFERER: &str = "http://translate.google.com/";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";

/// Blocking speech client bound to one provider host.
#[derive(Debug)]
pub struct GoogleTts {
    agent: ureq::Agent,
    base_url: String,
    tld: String,
}

impl GoogleTts {
    /// Build a client for `https://translate.google.<tld>`.
    pub fn new(config: &SynthesisConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build();
        Self {
            agent,
            base_url: format!("https://translate.google.{}", config.tld),
            tld: config.tld.clone(),
        }
    }

    /// Point the client at a different host, e.g. a local stub server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}{BATCH_EXECUTE_PATH}", self.base_url)
    }

    /// Fetch the audio for a single chunk of at most [`MAX_CHUNK_CHARS`].
    fn fetch_chunk(&self, chunk: &str, request: &SpeechRequest<'_>) -> Result<Vec<u8>> {
        let url = self.endpoint();
        let payload = rpc_payload(chunk, request.language.code(), request.speed);

        let response = match self
            .agent
            .post(&url)
            .set("Referer", REFERER)
            .send_form(&[("f.req", payload.as_str())])
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => {
                bail!("{}", failure_cause(code, &self.tld))
            }
            Err(ureq::Error::Transport(transport)) => {
                bail!("Failed to connect to {url}: {transport}")
            }
        };

        let body = response
            .into_string()
            .map_err(|e| anyhow!("Failed to read response: {e}"))?;
        extract_audio(&body, request.language.code())
    }
}

impl Synthesizer for GoogleTts {
    fn synthesize(&self, request: &SpeechRequest<'_>, output: &Path) -> Result<()> {
        let started = Instant::now();
        let prepared = text::prepare(request.text);
        let chunks = text::split_chunks(&prepared, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            bail!("No text to speak");
        }

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            debug!(
                "requesting chunk {}/{} ({} chars) from {}",
                idx + 1,
                chunks.len(),
                chunk.chars().count(),
                self.base_url
            );
            let chunk_started = Instant::now();
            let chunk_audio = self.fetch_chunk(chunk, request)?;
            debug!(
                "chunk {} returned {} bytes in {:?}",
                idx + 1,
                chunk_audio.len(),
                chunk_started.elapsed()
            );
            audio.extend(chunk_audio);
        }

        write_audio(output, &audio)?;
        info!(
            "wrote {} bytes of audio from {} chunks to {} in {:?}",
            audio.len(),
            chunks.len(),
            output.display(),
            started.elapsed()
        );
        Ok(())
    }
}

/// Build the `f.req` form value for one chunk.
///
/// The inner parameter list is itself JSON-encoded into a string, as the
/// endpoint expects.
fn rpc_payload(chunk: &str, language: &str, speed: Speed) -> String {
    let speed = match speed {
        Speed::Normal => Value::Null,
        Speed::Slow => Value::Bool(true),
    };
    let parameter = json!([chunk, language, speed, "null"]).to_string();
    json!([[[RPC_ID, parameter, null, "generic"]]]).to_string()
}

/// Pull the MP3 bytes out of a `batchexecute` reply.
fn extract_audio(body: &str, language: &str) -> Result<Vec<u8>> {
    let encoded = body
        .lines()
        .filter(|line| line.contains(RPC_ID))
        .filter_map(|line| serde_json::from_str::<Value>(line).ok())
        .find_map(|envelope| audio_payload(&envelope));

    let Some(encoded) = encoded else {
        bail!("No audio stream in response. Unsupported language '{language}'");
    };
    STANDARD
        .decode(encoded)
        .map_err(|e| anyhow!("Malformed audio stream in response: {e}"))
}

/// Find the `["wrb.fr", RPC_ID, "[\"<base64>\"]", ...]` entry of an envelope.
fn audio_payload(envelope: &Value) -> Option<String> {
    envelope.as_array()?.iter().find_map(|entry| {
        let entry = entry.as_array()?;
        if entry.first()?.as_str()? != "wrb.fr" || entry.get(1)?.as_str()? != RPC_ID {
            return None;
        }
        let inner: Value = serde_json::from_str(entry.get(2)?.as_str()?).ok()?;
        inner.get(0)?.as_str().map(str::to_owned)
    })
}

/// Explain an HTTP failure status in provider terms.
fn failure_cause(status: u16, tld: &str) -> String {
    match status {
        403 => "Bad token or upstream API changes".to_string(),
        404 if tld != "com" => format!("Unsupported tld '{tld}'"),
        500..=599 => "Upstream API error. Try again later.".to_string(),
        other => format!("HTTP {other} from speech endpoint"),
    }
}
