use alloc::{borrow::Cow, boxed::Box, string::String, vec::Vec};

use crate::{Result, SubsystemRef};

pub mod slot;

/// An action the robot can perform. Runs when scheduled, until it is interrupted or it finishes.
pub trait Command {
    fn get_requirements(&self) -> &[SubsystemRef];

    /// The name shown on the dashboard.
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);

    /// The name a command carries when nobody customized it.
    fn type_name(&self) -> &'static str {
        short_type_name::<Self>()
    }

    /// The initial subroutine of a command. Called once when the command is initially scheduled.
    fn initialize(&mut self) -> Result {
        Ok(())
    }
    fn execute(&mut self) -> Result {
        Ok(())
    }
    #[allow(unused_variables)]
    fn end(&mut self, interrupted: bool) -> Result {
        Ok(())
    }

    fn is_finished(&self) -> Result<bool> {
        Ok(false)
    }

    fn runs_when_disabled(&self) -> bool {
        false
    }

    fn get_interruption_behavior(&self) -> InterruptionBehavior {
        InterruptionBehavior::default()
    }
}

/// Lets a factory choose between command types at runtime. The boxed command keeps the
/// inner command's [`type_name`](Command::type_name).
impl<C: Command + ?Sized> Command for Box<C> {
    fn get_requirements(&self) -> &[SubsystemRef] {
        (**self).get_requirements()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn set_name(&mut self, name: String) {
        (**self).set_name(name);
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn initialize(&mut self) -> Result {
        (**self).initialize()
    }

    fn execute(&mut self) -> Result {
        (**self).execute()
    }

    fn end(&mut self, interrupted: bool) -> Result {
        (**self).end(interrupted)
    }

    fn is_finished(&self) -> Result<bool> {
        (**self).is_finished()
    }

    fn runs_when_disabled(&self) -> bool {
        (**self).runs_when_disabled()
    }

    fn get_interruption_behavior(&self) -> InterruptionBehavior {
        (**self).get_interruption_behavior()
    }
}

/// Unqualified name of `T` with any generic arguments removed.
///
/// `robot_command::command::FunctionalCommand` becomes `FunctionalCommand`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = core::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterruptionBehavior {
    #[default]
    CancelSelf,
    CancelIncoming,
}

pub struct FunctionalCommand {
    name: Cow<'static, str>,
    on_init: Box<dyn FnMut() -> Result>,
    on_execute: Box<dyn FnMut() -> Result>,
    on_end: Box<dyn FnMut(bool) -> Result>,
    is_finished: Box<dyn Fn() -> Result<bool>>,
    requirements: Vec<SubsystemRef>,
}

impl FunctionalCommand {
    pub fn new(
        on_init: impl FnMut() -> Result + 'static,
        on_execute: impl FnMut() -> Result + 'static,
        on_end: impl FnMut(bool) -> Result + 'static,
        is_finished: impl Fn() -> Result<bool> + 'static,
        requirements: Vec<SubsystemRef>,
    ) -> Self {
        Self {
            name: Cow::Borrowed(short_type_name::<Self>()),
            on_init: Box::new(on_init),
            on_execute: Box::new(on_execute),
            on_end: Box::new(on_end),
            is_finished: Box::new(is_finished),
            requirements,
        }
    }

    /// Gives the command a custom display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }
}

impl Command for FunctionalCommand {
    fn get_requirements(&self) -> &[SubsystemRef] {
        &self.requirements
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = Cow::Owned(name);
    }

    fn initialize(&mut self) -> Result {
        (self.on_init)()
    }

    fn execute(&mut self) -> Result {
        (self.on_execute)()
    }

    fn end(&mut self, interrupted: bool) -> Result {
        (self.on_end)(interrupted)
    }

    fn is_finished(&self) -> Result<bool> {
        (self.is_finished)()
    }
}

#[macro_export]
macro_rules! run_once {
    ($on_init:block) => {
        $crate::command::FunctionalCommand::new(move || $on_init, || Ok(()), |_| Ok(()), || Ok(true), $crate::__private::vec![])
    };
    ($on_init:block, $($requirement:expr),+ $(,)?) => {
        $crate::command::FunctionalCommand::new(move || $on_init, || Ok(()), |_| Ok(()), || Ok(true), $crate::__private::vec![$($requirement),+])
    };
}

#[macro_export]
macro_rules! run {
    ($on_execute:block) => {
        $crate::command::FunctionalCommand::new(
            || Ok(()),
            move || $on_execute,
            |_| Ok(()),
            || Ok(false),
            $crate::__private::vec![],
        )
    };
    ($on_execute:block, $($requirement:expr),+ $(,)?) => {
        $crate::command::FunctionalCommand::new(
            || Ok(()),
            move || $on_execute,
            |_| Ok(()),
            || Ok(false),
            $crate::__private::vec![$($requirement),+],
        )
    };
}

#[macro_export]
macro_rules! start_end {
    ($start:block, $end:block) => {
        $crate::command::FunctionalCommand::new(move || $start, || Ok(()), move |_| $end, || Ok(false), $crate::__private::vec![])
    };
    ($start:block, $end:block, $($requirement:expr),+ $(,)?) => {
        $crate::command::FunctionalCommand::new(
            move || $start,
            || Ok(()),
            move |_| $end,
            || Ok(false),
            $crate::__private::vec![$($requirement),+],
        )
    };
}

#[macro_export]
macro_rules! run_end {
    ($execute:block, $end:block) => {
        $crate::command::FunctionalCommand::new(|| Ok(()), move || $execute, move |_| $end, || Ok(false), $crate::__private::vec![])
    };
    ($execute:block, $end:block, $($requirement:expr),+ $(,)?) => {
        $crate::command::FunctionalCommand::new(|| Ok(()), move || $execute, move |_| $end, || Ok(false), $crate::__private::vec![$($requirement),+],)
    };
}
