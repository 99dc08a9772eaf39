//! Named command factories.
//!
//! A command keeps progress state between `initialize` and `end`, so handing the same
//! instance to the scheduler twice corrupts it. A [`CommandSlot`] never stores the
//! command it yields: every [`access`](CommandSlot::access) runs the factory again.
//!
//! ```ignore
//! impl Intake {
//!     pub fn intake_in(&self, dashboard: &CommandTable) -> CommandRef {
//!         let roller = self.roller.clone();
//!         command_slot!(intake_in, move || run!({ roller.spin(1.0) }))
//!             .access(dashboard)
//!     }
//! }
//! ```

use log::debug;

use super::Command;
use crate::{dashboard::CommandSink, CommandRef};

/// A named binding to a function that builds a fresh command on every access.
pub struct CommandSlot<F> {
    name: &'static str,
    factory: F,
}

impl<F> CommandSlot<F> {
    pub const fn new(name: &'static str, factory: F) -> Self {
        Self { name, factory }
    }

    /// The identifier the slot was declared with.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Builds a new command, names it after this slot unless the factory named it, and
    /// publishes it to `sink`.
    pub fn access<C>(&self, sink: &dyn CommandSink) -> CommandRef
    where
        F: Fn() -> C,
        C: Command + 'static,
    {
        self.finish((self.factory)(), sink)
    }

    /// Like [`access`](Self::access), for factories that can fail.
    ///
    /// A factory error is returned as is and nothing is published.
    pub fn try_access<C, E>(&self, sink: &dyn CommandSink) -> Result<CommandRef, E>
    where
        F: Fn() -> Result<C, E>,
        C: Command + 'static,
    {
        let command = (self.factory)()?;
        Ok(self.finish(command, sink))
    }

    fn finish<C: Command + 'static>(&self, mut command: C, sink: &dyn CommandSink) -> CommandRef {
        if command.name() == command.type_name() {
            command.set_name(self.name.into());
        }
        debug!("built command `{}` from slot `{}`", command.name(), self.name);

        let command = CommandRef::from(command);
        sink.publish(&command.name(), command.clone());
        command
    }
}

/// Declares a [`CommandSlot`] named after the identifier it is given.
#[macro_export]
macro_rules! command_slot {
    ($name:ident, $factory:expr $(,)?) => {
        $crate::command::slot::CommandSlot::new(::core::stringify!($name), $factory)
    };
}
