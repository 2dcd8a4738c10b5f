//! # vitts - speak text into an MP3 file
//!
//! A small pipeline around the Google Translate speech endpoint, packaged as
//! two binaries:
//!
//! - `vitts "<text>" <output_file_path>` takes the text literally.
//! - `vitts-b64 <encoded_text> <output_file_path>` takes standard base64 of
//!   the UTF-8 text, for callers that cannot pass arbitrary characters through
//!   a shell safely.
//!
//! Both run [`cli::run`]: parse the arguments ([`input::parse_arguments`]),
//! recover the text ([`input::resolve_text`]) and hand it to a
//! [`Synthesizer`]. Speech defaults to Vietnamese at normal speed.
//!
//! ## Library use
//!
//! ```no_run
//! use vitts::{GoogleTts, Language, Speed, SpeechRequest, SynthesisConfig, Synthesizer};
//!
//! let config = SynthesisConfig::default();
//! let tts = GoogleTts::new(&config);
//! let language = Language::default();
//! let request = SpeechRequest {
//!     text: "Xin chào",
//!     language: &language,
//!     speed: Speed::Normal,
//! };
//! tts.synthesize(&request, std::path::Path::new("xin_chao.mp3")).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod provider;
pub mod text;

pub use config::{Language, Speed, SynthesisConfig};
pub use error::{DecodeError, Error};
pub use input::{parse_arguments, resolve_text, InputEncoding, Invocation};
pub use provider::{GoogleTts, SpeechRequest, Synthesizer};
