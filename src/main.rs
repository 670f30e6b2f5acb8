//! Purpose: `ansible-echo`, a minimal Ansible module built on libansible.
//! Role: Binary crate root; reads the argument file, decodes `msg`/`state`/`fail`, emits one envelope.
//! Invariants: Exactly one JSON line on stdout per run; diagnostics go to stderr.
//! Invariants: Process exit code comes from the emitted envelope (0 ok, 1 failed).
//! Invariants: Module arguments are echoed unless `_ansible_no_log` is set.
use std::io::{self, Write};

use libansible::args::{ModuleArgs, args_from_value, echo_value, parse_value};
use libansible::codec::{Bool, State, StringList};
use libansible::input::try_read_input;
use libansible::logging;
use libansible::response::{Diff, Exit, Response, exit_json, fail_json};
use serde::Deserialize;
use serde_json::Value;

const FAIL_REQUESTED_MSG: &str = "failure requested by module arguments";
const NOTHING_TO_ECHO_MSG: &str = "nothing to echo";

#[derive(Debug, Deserialize)]
struct EchoParams {
    #[serde(default)]
    msg: StringList,
    #[serde(default = "default_state")]
    state: State,
    #[serde(default)]
    fail: Bool,
}

fn default_state() -> State {
    State::Present
}

fn main() {
    let input = match try_read_input(std::env::args_os()) {
        Ok(input) => input,
        Err(err) => {
            logging::init(0);
            tracing::warn!(error = %err, "could not read argument file");
            Response::new().fail(&err)
        }
    };
    let exit = {
        let mut stdout = io::stdout().lock();
        run(&input, &mut stdout)
    };
    exit.terminate()
}

/// Parse the argument file once; the raw object is kept for the echo.
fn decode(input: &[u8]) -> libansible::Result<(ModuleArgs<EchoParams>, Value)> {
    let raw = parse_value(input)?;
    let args = args_from_value(&raw)?;
    Ok((args, raw))
}

fn run<W: Write>(input: &[u8], out: &mut W) -> Exit {
    let (args, raw) = match decode(input) {
        Ok(decoded) => decoded,
        Err(err) => {
            logging::init(0);
            tracing::warn!(error = %err, "could not decode module arguments");
            return fail_json(Response::new(), &err, out);
        }
    };
    logging::init(args.ansible.verbosity);
    tracing::info!(
        state = %args.params.state,
        lines = args.params.msg.len(),
        check_mode = args.ansible.check_mode,
        "echo module invoked"
    );

    let mut response = Response::new();
    if args.ansible.echo_allowed() {
        match echo_value(&raw) {
            Ok(echo) => response.invocation.module_args = Some(echo),
            Err(err) => tracing::warn!(error = %err, "module arguments not echoed"),
        }
    }

    if args.params.fail.is_true() {
        return fail_json(response, FAIL_REQUESTED_MSG, out);
    }

    match args.params.state {
        State::Absent => exit_json(response.with_msg(NOTHING_TO_ECHO_MSG), out),
        State::Present => {
            let text = args.params.msg.join("\n");
            let mut response = response
                .with_changed(!args.ansible.check_mode)
                .with_stdout(text.clone());
            if args.ansible.diff {
                response = response.with_diff(Diff::new("", text));
            }
            exit_json(response, out)
        }
    }
}
