//! Synthesis settings: language, speaking rate, provider host and timeout.
//!
//! There is no configuration file. Values come from command-line options and
//! fall back to the defaults below (Vietnamese, normal speed, `.com` host).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Language spoken when no `--lang` option is given.
pub const DEFAULT_LANGUAGE: &str = "vi";

/// Top-level domain of the provider host when no `--tld` option is given.
pub const DEFAULT_TLD: &str = "com";

/// Per-request timeout when no `--timeout` option is given.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Language codes accepted by the provider.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "af", "am", "ar", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "es", "et",
    "eu", "fi", "fr", "fr-CA", "gl", "gu", "ha", "hi", "hr", "hu", "id", "is", "it", "iw", "ja",
    "jw", "km", "kn", "ko", "la", "lt", "lv", "ml", "mr", "ms", "my", "ne", "nl", "no", "pa",
    "pl", "pt", "pt-PT", "ro", "ru", "si", "sk", "sq", "sr", "su", "sv", "sw", "ta", "te", "th",
    "tl", "tr", "uk", "ur", "vi", "yue", "zh", "zh-CN", "zh-TW",
];

/// A language code the provider can speak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language(String);

impl Language {
    /// The code as sent to the provider.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Every accepted language code.
    pub fn supported() -> &'static [&'static str] {
        SUPPORTED_LANGUAGES
    }
}

impl Default for Language {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Match a code against the supported list.
    ///
    /// The primary subtag is compared case-insensitively and the region
    /// subtag is normalized to upper case, so `ZH-cn` resolves to `zh-CN`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let normalized = match trimmed.split_once('-') {
            Some((primary, region)) => {
                format!("{}-{}", primary.to_lowercase(), region.to_uppercase())
            }
            None => trimmed.to_lowercase(),
        };
        SUPPORTED_LANGUAGES
            .iter()
            .find(|code| **code == normalized)
            .map(|code| Self((*code).to_string()))
            .ok_or_else(|| format!("Language not supported: {raw}"))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Speaking rate requested from the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Speed {
    /// Regular speaking rate.
    #[default]
    Normal,
    /// Slowed-down speech.
    Slow,
}

impl Speed {
    /// Map the `--slow` switch onto a speed.
    pub fn from_slow_flag(slow: bool) -> Self {
        if slow {
            Self::Slow
        } else {
            Self::Normal
        }
    }
}

/// Everything needed to build a synthesis collaborator and its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Spoken language.
    pub language: Language,
    /// Speaking rate.
    pub speed: Speed,
    /// Top-level domain of the provider host (`com`, `com.vn`, ...).
    pub tld: String,
    /// Timeout applied to each HTTP request.
    pub timeout: Duration,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            speed: Speed::Normal,
            tld: DEFAULT_TLD.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
