//! The synthesis collaborator boundary.
//!
//! [`Synthesizer`] is the only seam between the CLI pipeline and the network.
//! [`GoogleTts`] is the production implementation; tests substitute their own.

pub mod google;

pub use google::GoogleTts;

use crate::config::{Language, Speed};
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Text plus the voice settings it should be spoken with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechRequest<'a> {
    /// UTF-8 text to speak.
    pub text: &'a str,
    /// Spoken language.
    pub language: &'a Language,
    /// Speaking rate.
    pub speed: Speed,
}

/// Something that can turn text into an audio file.
pub trait Synthesizer {
    /// Speak `request` into a playable audio file at `output`.
    ///
    /// On error no file should be left at `output`.
    fn synthesize(&self, request: &SpeechRequest<'_>, output: &Path) -> Result<()>;
}

impl<S: Synthesizer + ?Sized> Synthesizer for &S {
    fn synthesize(&self, request: &SpeechRequest<'_>, output: &Path) -> Result<()> {
        (**self).synthesize(request, output)
    }
}

/// Write `data` to `output` through a sibling `.part` file.
///
/// The part file is renamed into place only once it is fully written and
/// synced, and removed again on failure.
pub fn write_audio(output: &Path, data: &[u8]) -> Result<()> {
    let part = part_path(output)?;
    let result = (|| -> Result<()> {
        let mut file = fs::File::create(&part)?;
        file.write_all(data)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&part, output)?;
        Ok(())
    })();
    if result.is_err() {
        let _ = fs::remove_file(&part);
    }
    result.map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", output.display()))
}

fn part_path(output: &Path) -> Result<PathBuf> {
    let Some(name) = output.file_name() else {
        anyhow::bail!("Output path has no file name: {}", output.display());
    };
    let mut part_name = name.to_os_string();
    part_name.push(".part");
    Ok(output.with_file_name(part_name))
}
