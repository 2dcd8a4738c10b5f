//! Turning command-line arguments into the text to speak.
//!
//! Both binaries share this resolver. They differ only in the
//! [`InputEncoding`] they pass as default: `vitts` takes the text literally,
//! `vitts-b64` expects standard base64 of the UTF-8 bytes.

use crate::config::{Language, Speed, SynthesisConfig, DEFAULT_LANGUAGE, DEFAULT_TLD};
use crate::error::{DecodeError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// How the positional text argument is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEncoding {
    /// The argument is the text itself.
    Plain,
    /// The argument is base64 (standard alphabet, padded) of UTF-8 text.
    Base64,
}

/// Command-line options shared by both binaries.
#[derive(Debug, Parser)]
#[command(version, about = "Speak text into an MP3 file", long_about = None)]
struct Cli {
    /// Text to speak, or its base64 form for the encoded variant.
    #[arg(allow_hyphen_values = true)]
    text: String,
    /// Where to write the audio file.
    output: PathBuf,
    /// Treat TEXT as base64-encoded UTF-8.
    #[arg(long)]
    base64: bool,
    /// Language code of the spoken text.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    lang: Language,
    /// Ask for slowed-down speech.
    #[arg(long)]
    slow: bool,
    /// Top-level domain of the provider host, e.g. `com` or `com.vn`.
    #[arg(long, default_value = DEFAULT_TLD)]
    tld: String,
    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = crate::config::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
    /// Log each provider request with its timing.
    #[arg(long, short)]
    verbose: bool,
}

/// A parsed, not yet decoded, command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Literal text or its encoded form, as given.
    pub raw_argument: String,
    /// Destination of the audio file. Not validated.
    pub output_path: PathBuf,
    /// Encoding of `raw_argument`.
    pub encoding: InputEncoding,
    /// Provider settings.
    pub config: SynthesisConfig,
    /// Whether `--verbose` was given.
    pub verbose: bool,
}

/// Parse a full argument vector, program name included.
///
/// With exactly two arguments after the program name both are positionals,
/// even when the text looks like an option. Exactly two positional arguments
/// are required. Anything else, including
/// unknown options, yields [`Error::Argument`](crate::Error::Argument) whose
/// message carries a usage line. `--help` and `--version` come back the same
/// way; the caller can tell them apart with [`clap::Error::use_stderr`].
pub fn parse_arguments<I, T>(args: I, default_encoding: InputEncoding) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() == 3 {
        args.insert(1, OsString::from("--"));
    }
    let cli = Cli::try_parse_from(args)?;
    let encoding = if cli.base64 {
        InputEncoding::Base64
    } else {
        default_encoding
    };
    Ok(Invocation {
        raw_argument: cli.text,
        output_path: cli.output,
        encoding,
        config: SynthesisConfig {
            language: cli.lang,
            speed: Speed::from_slow_flag(cli.slow),
            tld: cli.tld,
            timeout: Duration::from_secs(cli.timeout),
        },
        verbose: cli.verbose,
    })
}

/// Recover the text to speak from an invocation.
///
/// Plain input is returned byte for byte. Base64 input is decoded and must
/// be valid UTF-8.
pub fn resolve_text(invocation: &Invocation) -> Result<String, DecodeError> {
    match invocation.encoding {
        InputEncoding::Plain => Ok(invocation.raw_argument.clone()),
        InputEncoding::Base64 => decode_base64_text(&invocation.raw_argument),
    }
}

fn decode_base64_text(encoded: &str) -> Result<String, DecodeError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    Ok(String::from_utf8(bytes)?)
}
