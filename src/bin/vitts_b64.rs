//! `vitts-b64`: speak base64-encoded UTF-8 text into an audio file.
//!
//! Usage: `vitts-b64 <encoded_text> <output_file_path>`

use std::process::ExitCode;
use vitts::InputEncoding;

fn main() -> ExitCode {
    vitts::cli::main(InputEncoding::Base64)
}
