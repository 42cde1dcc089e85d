//! Built-in calculator commands.
//!
//! Every command compiled into the binary is listed in [`BUILTIN_COMMANDS`].
//! Adding a command means implementing [`Command`] and appending its factory
//! to that table; the registry picks it up at startup.

mod arithmetic;
mod menu;

pub use arithmetic::{AddCommand, DivideCommand, MultiplyCommand, SubtractCommand};
pub use menu::MenuCommand;

use crate::command::{Command, CommandFactory};

/// Factories for every built-in command, in registration order.
pub const BUILTIN_COMMANDS: &[CommandFactory] = &[
    boxed::<AddCommand>,
    boxed::<SubtractCommand>,
    boxed::<MultiplyCommand>,
    boxed::<DivideCommand>,
    boxed::<MenuCommand>,
];

/// Generic factory: default-construct `C` behind a trait object.
pub fn boxed<C>() -> Box<dyn Command>
where
    C: Command + Default + 'static,
{
    Box::new(C::default())
}
