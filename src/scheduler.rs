use crate::{CommandRef, Result};

/// The command scheduler provided by the host runtime.
///
/// Decides when scheduled commands run, resolves requirement conflicts and retires
/// finished commands. This crate only hands commands to it.
pub trait Scheduler {
    /// Schedule a command to run.
    fn schedule(&mut self, command: CommandRef) -> Result;
    fn cancel(&mut self, command: &CommandRef) -> Result;
    fn is_scheduled(&self, command: &CommandRef) -> bool;
    /// Run one scheduler iteration. Called once per robot loop.
    fn run(&mut self) -> Result;
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule(&mut self, command: CommandRef) -> Result {
        (**self).schedule(command)
    }

    fn cancel(&mut self, command: &CommandRef) -> Result {
        (**self).cancel(command)
    }

    fn is_scheduled(&self, command: &CommandRef) -> bool {
        (**self).is_scheduled(command)
    }

    fn run(&mut self) -> Result {
        (**self).run()
    }
}
