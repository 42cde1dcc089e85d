//! Core engine for the reckon interactive calculator.
//!
//! The calculator is a registry-based dispatch system. Operations implement
//! the [`Command`] trait and are listed in a static factory table. At startup
//! the [`CommandRegistry`] instantiates each factory once, keys it by its
//! lowercase name and rejects collisions. A [`Session`] then reads input
//! lines, resolves the first token against the registry and prints whatever
//! the command returns.
//!
//! # Example
//!
//! ```rust
//! use reckon_core::{CommandRegistry, Outcome, Session};
//!
//! let registry = CommandRegistry::builtin().unwrap();
//! let mut session = Session::new(&registry);
//! assert_eq!(session.dispatch("add 5 3"), Outcome::Print("5 + 3 = 8".into()));
//! ```

pub mod app;
pub mod command;
pub mod commands;
pub mod error;
pub mod registry;
pub mod repl;

pub use app::App;
pub use command::{Command, CommandFactory};
pub use error::{CommandError, RegistryError};
pub use registry::CommandRegistry;
pub use repl::{Outcome, Session, SessionState};
