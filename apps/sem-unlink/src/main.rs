//! Remove a named POSIX semaphore
//!
//! `sem_unlink /name` drops the name from the semaphore namespace. There is
//! no retry; unlinking a name that is already gone is reported as an error.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Unlink the single name in `args`, return the exit status
///
/// Failing writes to `err` are ignored, there is nowhere left to report them.
fn run(program: &str, args: &[OsString], out: &mut impl Write, err: &mut impl Write) -> u8 {
    let [name] = args else {
        let _ = writeln!(err, "Usage: {} /name", program);
        return EXIT_FAILURE;
    };

    if let Err(e) = systools_semaphore::unlink(name) {
        let _ = writeln!(err, "{}", e);
        return EXIT_FAILURE;
    }

    if let Err(e) = writeln!(out, "Unlinked semaphore {}", name.to_string_lossy()).and_then(|_| out.flush()) {
        let _ = writeln!(err, "{}: failed to write to stdout: {}", program, e);
        return EXIT_FAILURE;
    }

    tracing::debug!("Unlinked {:?}", name);
    EXIT_SUCCESS
}

fn main() -> ExitCode {
    systools_logging::init();

    let mut args = env::args_os();
    let program = args
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sem_unlink".to_string());
    let args: Vec<OsString> = args.collect();

    let status = run(&program, &args, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(status)
}
