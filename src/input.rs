//! Purpose: Acquire the argument file Ansible names on the command line.
//! Exports: `try_read_input`, `read_input`, `MISSING_ARGUMENT_MSG`, `READ_FAILURE_MSG`.
//! Role: `try_read_input` is the testable decision; `read_input` reports failures
//! through the response envelope and exits.
//! Invariants: Exactly one positional argument; anything else is `MissingArgument`.
//! Invariants: The file is read whole and its handle is closed before returning.
use crate::error::{Error, ErrorKind, Result};
use crate::response::Response;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

pub const MISSING_ARGUMENT_MSG: &str = "No argument file provided";
pub const READ_FAILURE_MSG: &str = "Could not read configuration file";

/// Read the argument file named by `args` (program name first, as in `std::env::args_os`).
pub fn try_read_input<I, S>(args: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<OsString> = args
        .into_iter()
        .map(|arg| arg.as_ref().to_os_string())
        .collect();
    let [_, path] = args.as_slice() else {
        return Err(Error::new(ErrorKind::MissingArgument).with_message(MISSING_ARGUMENT_MSG));
    };

    let path = Path::new(path);
    tracing::debug!(path = %path.display(), "reading argument file");
    fs::read(path).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message(READ_FAILURE_MSG)
            .with_path(path)
            .with_source(err)
    })
}

/// Like [`try_read_input`], but a failure is emitted as the module result and
/// the process exits with status 1.
pub fn read_input<I, S>(args: I) -> Vec<u8>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    match try_read_input(args) {
        Ok(input) => input,
        Err(err) => Response::new().fail(&err),
    }
}
