//! `vitts`: speak literal text into an audio file.
//!
//! Usage: `vitts "<text>" <output_file_path>`

use std::process::ExitCode;
use vitts::InputEncoding;

fn main() -> ExitCode {
    vitts::cli::main(InputEncoding::Plain)
}
