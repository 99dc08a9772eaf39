//! Publishing constructed commands for display.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::cell::RefCell;

use hashbrown::HashMap;
use log::{debug, trace, warn};
use snafu::{ResultExt, Snafu};

use crate::{scheduler::Scheduler, CommandRef};

/// Somewhere constructed commands are registered under their names.
pub trait CommandSink {
    /// Registers `command` under `name`, replacing whatever was registered there before.
    fn publish(&self, name: &str, command: CommandRef);
}

#[derive(Debug, Snafu)]
pub enum DashboardError {
    #[snafu(display("No command named `{name}` has been published."))]
    UnknownCommand { name: String },
    #[snafu(display("Failed to change the state of `{name}`: {source}"))]
    Toggle {
        name: String,
        source: crate::BoxedError,
    },
}

/// One row of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: String,
    pub running: bool,
}

/// In-memory table of published commands, keyed by name.
#[derive(Default)]
pub struct CommandTable {
    commands: RefCell<HashMap<String, CommandRef>>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<CommandRef> {
        self.commands.borrow().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.borrow().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }

    /// Published names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names = self.commands.borrow().keys().cloned().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub fn remove(&self, name: &str) -> Option<CommandRef> {
        self.commands.borrow_mut().remove(name)
    }

    pub fn clear(&self) {
        self.commands.borrow_mut().clear();
    }

    /// Every published command with whether `scheduler` is currently running it, sorted by name.
    pub fn entries(&self, scheduler: &dyn Scheduler) -> Vec<CommandEntry> {
        let mut entries = self
            .commands
            .borrow()
            .iter()
            .map(|(name, command)| CommandEntry {
                name: name.clone(),
                running: scheduler.is_scheduled(command),
            })
            .collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Starts or stops the command published under `name`, the way a dashboard toggle would.
    pub fn set_running(
        &self,
        name: &str,
        running: bool,
        scheduler: &mut dyn Scheduler,
    ) -> Result<(), DashboardError> {
        let Some(command) = self.get(name) else {
            warn!("dashboard toggled unknown command `{name}`");
            return UnknownCommandSnafu { name }.fail();
        };

        let result = match (running, scheduler.is_scheduled(&command)) {
            (true, false) => scheduler.schedule(command),
            (false, true) => scheduler.cancel(&command),
            _ => Ok(()),
        };
        result.context(ToggleSnafu { name })
    }
}

impl CommandSink for CommandTable {
    fn publish(&self, name: &str, command: CommandRef) {
        debug!("publishing command `{name}`");
        if self
            .commands
            .borrow_mut()
            .insert(name.to_string(), command)
            .is_some()
        {
            trace!("replaced previous command `{name}`");
        }
    }
}
