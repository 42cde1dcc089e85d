//! Platform abstraction layer for reckon.
//!
//! The calculator core never touches the process environment directly. It
//! goes through the [`env::Environment`] trait so that tests (and any future
//! embedding) can supply their own key-value lookup.

pub mod env;

pub use env::{Environment, NativeEnvironment, deployment_environment};
