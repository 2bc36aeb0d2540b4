use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::core::config::OcrConfig;

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("Failed to start OCR engine '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("OCR engine I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("OCR engine exited with {status}: {stderr}")]
    EngineFailed { status: String, stderr: String },
}

/// Turns a raster image into plain text
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: &[u8]) -> Result<String, RecognitionError>;
}

/// Runs the `tesseract` CLI as a child process, image on stdin, text on stdout.
///
/// The child is killed if the returned future is dropped, so callers can bound
/// recognition with `tokio::time::timeout`.
pub struct TesseractRecognizer {
    binary: String,
    language: String,
}

impl TesseractRecognizer {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            binary: config.tesseract_path.clone(),
            language: config.language.clone(),
        }
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    async fn recognize(&self, image: &[u8]) -> Result<String, RecognitionError> {
        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", &self.language])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RecognitionError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| std::io::Error::other("tesseract stdin unavailable"))?;

        let write_input = async move {
            stdin.write_all(image).await?;
            stdin.shutdown().await
        };

        // Feed stdin while draining stdout so large outputs cannot deadlock the pipe
        let (written, output) = tokio::join!(write_input, child.wait_with_output());
        let output = output?;

        if !output.status.success() {
            return Err(RecognitionError::EngineFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written?;

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::debug!(bytes = image.len(), chars = text.len(), "Tesseract finished");

        Ok(text)
    }
}
