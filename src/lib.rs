//! Purpose: Building blocks for Ansible modules written in Rust.
//! Exports: `codec` (loose argument types), `args` (argument file model), `response`
//! (result envelope and exit), `input` (argument file acquisition), `logging`, `playbook`, `error`.
//! Role: A module reads its input, decodes arguments, then emits exactly one response.
//! Invariants: Only `response::Exit::terminate` and the wrappers built on it end the process.
//! Invariants: stdout carries the response envelope and nothing else.
//!
//! A module is a short `main`:
//!
//! ```no_run
//! use libansible::args::{ModuleArgs, echo_args, parse_args};
//! use libansible::codec::State;
//! use libansible::input::read_input;
//! use libansible::response::Response;
//!
//! #[derive(serde::Deserialize)]
//! struct Params {
//!     state: State,
//! }
//!
//! let input = read_input(std::env::args_os());
//! let args: ModuleArgs<Params> = match parse_args(&input) {
//!     Ok(args) => args,
//!     Err(err) => Response::new().fail(&err),
//! };
//! let echo = echo_args(&input).unwrap_or_default();
//! Response::new()
//!     .with_changed(args.params.state.is_present())
//!     .with_module_args(echo)
//!     .exit()
//! ```
pub mod args;
pub mod codec;
pub mod error;
pub mod input;
pub mod logging;
pub mod playbook;
pub mod response;

pub use error::{Error, ErrorKind, Result};
