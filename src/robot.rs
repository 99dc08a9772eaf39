use core::time::Duration;

use log::info;
use snafu::{ResultExt, Snafu};

use crate::{scheduler::Scheduler, BoxedError, CommandRef, Result};

/// Returns true if the code is running on a real robot and not in simulation.
pub const fn is_real() -> bool {
    cfg!(target_os = "vexos")
}

/// Returns true if the code is running in simulation and not on a real robot.
pub const fn is_sim() -> bool {
    !is_real()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompetitionMode {
    Disabled,
    Autonomous,
    /// Driver control, also called teleop.
    Opcontrol,
}

/// Where the robot loop learns which competition mode it is in.
pub trait ModeSource {
    fn mode(&self) -> CompetitionMode;
}

impl<F: Fn() -> CompetitionMode> ModeSource for F {
    fn mode(&self) -> CompetitionMode {
        self()
    }
}

pub trait ScheduledRobot {
    fn periodic(&mut self) -> Result {
        Ok(())
    }
    fn sim_periodic(&mut self) -> Result {
        Ok(())
    }
    fn disabled_init(&mut self) -> Result {
        Ok(())
    }
    fn disabled_periodic(&mut self) -> Result {
        Ok(())
    }
    fn autonomous_init(&mut self) -> Result {
        Ok(())
    }
    fn autonomous_periodic(&mut self) -> Result {
        Ok(())
    }
    fn opcontrol_init(&mut self) -> Result {
        Ok(())
    }
    fn opcontrol_periodic(&mut self) -> Result {
        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum RobotError {
    #[snafu(display("Entering {mode:?} failed: {source}"))]
    ModeInit {
        mode: CompetitionMode,
        source: BoxedError,
    },
    #[snafu(display("{mode:?} periodic failed: {source}"))]
    ModePeriodic {
        mode: CompetitionMode,
        source: BoxedError,
    },
    #[snafu(display("Robot periodic failed: {source}"))]
    RobotPeriodic { source: BoxedError },
    #[snafu(display("Simulation periodic failed: {source}"))]
    SimPeriodic { source: BoxedError },
}

pub const ITERATION_PERIOD: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Time between the starts of two loop iterations.
    pub period: Duration,
    /// Whether `sim_periodic` runs each iteration.
    pub simulate: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            period: ITERATION_PERIOD,
            simulate: is_sim(),
        }
    }
}

/// Dispatches competition mode changes to a [`ScheduledRobot`].
pub struct RobotLoop<R, M> {
    robot: R,
    modes: M,
    config: LoopConfig,
    previous_mode: Option<CompetitionMode>,
}

impl<R: ScheduledRobot, M: ModeSource> RobotLoop<R, M> {
    pub fn new(robot: R, modes: M) -> Self {
        Self::with_config(robot, modes, LoopConfig::default())
    }

    pub fn with_config(robot: R, modes: M, config: LoopConfig) -> Self {
        Self {
            robot,
            modes,
            config,
            previous_mode: None,
        }
    }

    pub const fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub const fn robot(&self) -> &R {
        &self.robot
    }

    pub fn robot_mut(&mut self) -> &mut R {
        &mut self.robot
    }

    /// Runs a single loop iteration.
    ///
    /// The mode's `_init` callback runs first whenever the mode differs from the previous
    /// iteration, then the mode's `_periodic`, then `periodic` and `sim_periodic`.
    pub fn step(&mut self) -> core::result::Result<(), RobotError> {
        let mode = self.modes.mode();
        // A failed init is retried on the next iteration.
        if self.previous_mode != Some(mode) {
            info!("entering {mode:?} (was {:?})", self.previous_mode);
            match mode {
                CompetitionMode::Disabled => self.robot.disabled_init(),
                CompetitionMode::Autonomous => self.robot.autonomous_init(),
                CompetitionMode::Opcontrol => self.robot.opcontrol_init(),
            }
            .context(ModeInitSnafu { mode })?;
            self.previous_mode = Some(mode);
        }

        match mode {
            CompetitionMode::Disabled => self.robot.disabled_periodic(),
            CompetitionMode::Autonomous => self.robot.autonomous_periodic(),
            CompetitionMode::Opcontrol => self.robot.opcontrol_periodic(),
        }
        .context(ModePeriodicSnafu { mode })?;

        self.robot.periodic().context(RobotPeriodicSnafu)?;
        if self.config.simulate {
            self.robot.sim_periodic().context(SimPeriodicSnafu)?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> R {
        self.robot
    }
}

/// Runs `robot` against the PROS competition state forever.
#[cfg(target_os = "vexos")]
pub fn start_robot(robot: impl ScheduledRobot) -> core::result::Result<(), RobotError> {
    use pros::core::task::Interval;
    use pros::devices::competition;

    let modes = || match competition::mode() {
        competition::CompetitionMode::Disabled => CompetitionMode::Disabled,
        competition::CompetitionMode::Autonomous => CompetitionMode::Autonomous,
        competition::CompetitionMode::Opcontrol => CompetitionMode::Opcontrol,
    };
    let mut robot_loop = RobotLoop::new(robot, modes);
    let mut interval = Interval::start();

    loop {
        robot_loop.step()?;
        interval.delay(robot_loop.config().period);
    }
}

/// A robot whose behavior lives in commands run by a [`Scheduler`].
///
/// Ticks the scheduler every loop, schedules the autonomous command when autonomous
/// starts and cancels it when driver control starts.
pub struct CommandRobot<S> {
    scheduler: S,
    autonomous_command: Option<CommandRef>,
}

impl<S: Scheduler> CommandRobot<S> {
    pub const fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            autonomous_command: None,
        }
    }

    pub fn set_autonomous_command(&mut self, command: impl Into<Option<CommandRef>>) {
        self.autonomous_command = command.into();
    }

    pub const fn autonomous_command(&self) -> Option<&CommandRef> {
        self.autonomous_command.as_ref()
    }

    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<S: Scheduler> ScheduledRobot for CommandRobot<S> {
    fn periodic(&mut self) -> Result {
        self.scheduler.run()
    }

    fn autonomous_init(&mut self) -> Result {
        if let Some(command) = &self.autonomous_command {
            self.scheduler.schedule(command.clone())?;
        }
        Ok(())
    }

    fn opcontrol_init(&mut self) -> Result {
        if let Some(command) = &self.autonomous_command {
            self.scheduler.cancel(command)?;
        }
        Ok(())
    }
}
