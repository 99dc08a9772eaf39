#![no_std]

extern crate alloc;

use alloc::{boxed::Box, rc::Rc};
use core::{cell::RefCell, hash::Hash, ops::Deref};

use command::Command;
use subsystem::Subsystem;

pub mod command;
pub mod dashboard;
pub mod robot;
pub mod scheduler;
pub mod subsystem;
pub mod units;

pub use command::slot::CommandSlot;
pub use dashboard::{CommandSink, CommandTable};
pub use scheduler::Scheduler;

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec;
}

/// Error type returned by command and robot callbacks.
pub type BoxedError = Box<dyn core::error::Error>;

/// Result of a command or robot callback.
pub type Result<T = (), E = BoxedError> = core::result::Result<T, E>;

#[derive(Clone)]
pub struct SubsystemRef(pub Rc<RefCell<dyn Subsystem>>);

impl PartialEq for SubsystemRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for SubsystemRef {}

impl Hash for SubsystemRef {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).cast::<()>().hash(state);
    }
}

impl From<Rc<RefCell<dyn Subsystem>>> for SubsystemRef {
    fn from(subsystem: Rc<RefCell<dyn Subsystem>>) -> Self {
        Self(subsystem)
    }
}

impl<T: Subsystem + 'static> From<T> for SubsystemRef {
    fn from(subsystem: T) -> Self {
        Self(Rc::new(RefCell::new(subsystem)))
    }
}

impl Deref for SubsystemRef {
    type Target = Rc<RefCell<dyn Subsystem>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Shared handle to a constructed command.
///
/// Two handles are equal only if they point at the same command instance.
#[derive(Clone)]
pub struct CommandRef(Rc<RefCell<dyn Command>>);

impl CommandRef {
    /// The command's current display name.
    pub fn name(&self) -> alloc::string::String {
        self.0.borrow().name().into()
    }
}

impl PartialEq for CommandRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for CommandRef {}

impl Hash for CommandRef {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).cast::<()>().hash(state);
    }
}

impl core::fmt::Debug for CommandRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CommandRef").field(&self.name()).finish()
    }
}

impl From<Rc<RefCell<dyn Command>>> for CommandRef {
    fn from(command: Rc<RefCell<dyn Command>>) -> Self {
        Self(command)
    }
}

impl<T: Command + 'static> From<T> for CommandRef {
    fn from(command: T) -> Self {
        Self(Rc::new(RefCell::new(command)))
    }
}

impl Deref for CommandRef {
    type Target = Rc<RefCell<dyn Command>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
