//! The shared entry point behind `vitts` and `vitts-b64`.
//!
//! The pipeline is linear: parse arguments, resolve the text, hand it to a
//! [`Synthesizer`]. Every failure ends the run with exit status 1, including
//! a confirmation or help text that cannot be written to stdout. Failed
//! writes to stderr are ignored since there is nowhere left to report them.

use crate::config::SynthesisConfig;
use crate::error::{Error, Result};
use crate::input::{parse_arguments, resolve_text, InputEncoding, Invocation};
use crate::provider::{GoogleTts, SpeechRequest, Synthesizer};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

/// Exit status of a successful run.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status shared by every failure kind.
pub const EXIT_FAILURE: u8 = 1;

/// Run a binary against the real process environment and the live provider.
pub fn main(default_encoding: InputEncoding) -> ExitCode {
    let code = run(
        std::env::args_os(),
        default_encoding,
        GoogleTts::new,
        &mut io::stdout(),
        &mut io::stderr(),
    );
    ExitCode::from(code)
}

/// Run the full pipeline and return the process exit status.
///
/// `connect` builds the synthesizer once the options are known; it is not
/// called when parsing or decoding fails.
pub fn run<I, T, S, F, O, E>(
    args: I,
    default_encoding: InputEncoding,
    connect: F,
    stdout: &mut O,
    stderr: &mut E,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: Synthesizer,
    F: FnOnce(&SynthesisConfig) -> S,
    O: Write,
    E: Write,
{
    let invocation = match parse_arguments(args, default_encoding) {
        Ok(invocation) => invocation,
        Err(Error::Argument(err)) if !err.use_stderr() => {
            return match write!(stdout, "{}", err.render()) {
                Ok(()) => EXIT_SUCCESS,
                Err(_) => EXIT_FAILURE,
            };
        }
        Err(err) => {
            let _ = write!(stderr, "{err}");
            return EXIT_FAILURE;
        }
    };
    init_logging(invocation.verbose);

    match execute(&invocation, connect) {
        Ok(()) => {
            let confirmed = writeln!(
                stdout,
                "Successfully created audio file at {}",
                invocation.output_path.display()
            )
            .and_then(|()| stdout.flush());
            match confirmed {
                Ok(()) => EXIT_SUCCESS,
                Err(err) => {
                    let _ = writeln!(stderr, "Error writing confirmation: {err}");
                    EXIT_FAILURE
                }
            }
        }
        Err(Error::Decode(err)) => {
            let _ = writeln!(stderr, "Error decoding input: {err}");
            EXIT_FAILURE
        }
        Err(err) => {
            let _ = writeln!(stderr, "Error generating audio: {err}");
            EXIT_FAILURE
        }
    }
}

fn execute<S, F>(invocation: &Invocation, connect: F) -> Result<()>
where
    S: Synthesizer,
    F: FnOnce(&SynthesisConfig) -> S,
{
    let text = resolve_text(invocation)?;
    let synthesizer = connect(&invocation.config);
    let request = SpeechRequest {
        text: &text,
        language: &invocation.config.language,
        speed: invocation.config.speed,
    };
    synthesizer
        .synthesize(&request, &invocation.output_path)
        .map_err(Error::Synthesis)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,vitts=debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
