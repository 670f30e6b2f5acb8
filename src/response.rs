//! Purpose: The JSON response envelope Ansible reads from a module's stdout.
//! Exports: `Response`, `Invocation`, `Diff`, `Rendered`, `Exit`, `render`, `exit_json`, `fail_json`.
//! Role: Pure rendering and writing live here; `Exit::terminate` is the only process exit.
//! Invariants: Each emission writes exactly one JSON line; failure text always lands in `msg`.
//! Invariants: Exit code is 0 iff the written envelope has `failed: false`, otherwise 1.
//! Invariants: Serialization errors are absorbed into a fixed fallback envelope, never panics.
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt::Display;
use std::io::{self, Write};

/// `msg` of the envelope written when the real one cannot be serialized.
pub const INVALID_RESPONSE_MSG: &str = "Invalid response object";

/// Before/after text shown by `ansible-playbook --diff`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Diff {
    pub before: String,
    pub after: String,
}

impl Diff {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }
}

/// Echo of the arguments the module was invoked with.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Invocation<A = Value> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_args: Option<A>,
}

impl<A> Default for Invocation<A> {
    fn default() -> Self {
        Self { module_args: None }
    }
}

/// Module result as Ansible expects it on stdout.
///
/// `A` is the type echoed under `invocation.module_args`. It defaults to
/// [`serde_json::Value`], but any `Serialize` type works, including the
/// module's own parameter struct.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Response<A = Value> {
    pub changed: bool,
    pub failed: bool,
    pub msg: String,
    pub stdout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
    pub invocation: Invocation<A>,
    pub diff: Diff,
}

impl<A> Default for Response<A> {
    fn default() -> Self {
        Self {
            changed: false,
            failed: false,
            msg: String::new(),
            stdout: String::new(),
            stderr: String::new(),
            invocation: Invocation::default(),
            diff: Diff::default(),
        }
    }
}

impl Response<Value> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A> Response<A> {
    pub fn with_changed(mut self, changed: bool) -> Self {
        self.changed = changed;
        self
    }

    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    pub fn with_diff(mut self, diff: Diff) -> Self {
        self.diff = diff;
        self
    }

    pub fn with_module_args<B>(self, module_args: B) -> Response<B> {
        Response {
            changed: self.changed,
            failed: self.failed,
            msg: self.msg,
            stdout: self.stdout,
            stderr: self.stderr,
            invocation: Invocation {
                module_args: Some(module_args),
            },
            diff: self.diff,
        }
    }
}

impl<A: Serialize> Response<A> {
    /// Emit as a success on stdout and exit 0.
    pub fn exit(self) -> ! {
        let exit = {
            let mut stdout = io::stdout().lock();
            exit_json(self, &mut stdout)
        };
        exit.terminate()
    }

    /// Emit as a failure carrying `err` on stdout and exit 1.
    pub fn fail<E: Display + ?Sized>(self, err: &E) -> ! {
        let exit = {
            let mut stdout = io::stdout().lock();
            fail_json(self, err, &mut stdout)
        };
        exit.terminate()
    }
}

/// One serialized envelope and the `failed` flag it carries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rendered {
    pub line: String,
    pub failed: bool,
}

pub fn render<A: Serialize>(response: &Response<A>) -> Rendered {
    match serde_json::to_string(response) {
        Ok(line) => Rendered {
            line,
            failed: response.failed,
        },
        Err(err) => {
            tracing::warn!(error = %err, "response could not be serialized; emitting fallback");
            Rendered {
                line: fallback_json().to_string(),
                failed: true,
            }
        }
    }
}

fn fallback_json() -> Value {
    json!({
        "changed": false,
        "failed": true,
        "msg": INVALID_RESPONSE_MSG,
    })
}

/// Process exit status decided by an emission.
#[must_use = "an Exit does nothing until `terminate` is called"]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Exit {
    code: i32,
}

impl Exit {
    pub const SUCCESS: Exit = Exit { code: 0 };
    pub const FAILURE: Exit = Exit { code: 1 };

    fn from_failed(failed: bool) -> Self {
        if failed { Self::FAILURE } else { Self::SUCCESS }
    }

    pub fn code(self) -> i32 {
        self.code
    }

    pub fn is_success(self) -> bool {
        self.code == 0
    }

    pub fn terminate(self) -> ! {
        std::process::exit(self.code)
    }
}

/// Write `response` as a success; `failed` is forced to false.
pub fn exit_json<A, W>(mut response: Response<A>, writer: &mut W) -> Exit
where
    A: Serialize,
    W: Write + ?Sized,
{
    response.failed = false;
    emit(&response, writer)
}

/// Write `response` as a failure; `msg` becomes the display text of `err`.
pub fn fail_json<A, E, W>(mut response: Response<A>, err: &E, writer: &mut W) -> Exit
where
    A: Serialize,
    E: Display + ?Sized,
    W: Write + ?Sized,
{
    response.msg = err.to_string();
    response.failed = true;
    emit(&response, writer)
}

fn emit<A, W>(response: &Response<A>, writer: &mut W) -> Exit
where
    A: Serialize,
    W: Write + ?Sized,
{
    let rendered = render(response);
    tracing::debug!(
        changed = response.changed,
        failed = rendered.failed,
        "emitting response"
    );
    if let Err(err) = writeln!(writer, "{}", rendered.line).and_then(|()| writer.flush()) {
        tracing::error!(error = %err, "failed to write response");
    }
    Exit::from_failed(rendered.failed)
}
