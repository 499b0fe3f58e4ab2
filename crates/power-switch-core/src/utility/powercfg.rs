//! `powercfg.exe` invocation.

use crate::{PowerUtility, UtilityOutput};

use std::{io, process::Command};

use tracing::{debug, instrument};

/// Default program name, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "powercfg.exe";

const LIST_ARG: &str = "-L";
const SET_ACTIVE_ARG: &str = "-SETACTIVE";

/// Keeps a console window from flashing up when the tray app runs the utility.
#[cfg(target_os = "windows")]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Runs the Windows power-configuration utility.
#[derive(Debug, Clone)]
pub struct Powercfg {
    program: String,
}

impl Powercfg {
    /// Create a runner for the given program path or name.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self) -> Command {
        #[allow(unused_mut)]
        let mut command = Command::new(&self.program);

        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        command
    }

    fn run(&self, mut command: Command) -> io::Result<UtilityOutput> {
        let output = command.output()?;

        let result = UtilityOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(
            program = %self.program,
            exit_code = ?result.exit_code,
            stdout_len = result.stdout.len(),
            "Power utility finished"
        );

        Ok(result)
    }
}

impl Default for Powercfg {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl PowerUtility for Powercfg {
    fn program(&self) -> &str {
        &self.program
    }

    #[instrument(skip(self))]
    fn list_plans(&self) -> io::Result<UtilityOutput> {
        let mut command = self.command();
        command.arg(LIST_ARG);
        self.run(command)
    }

    #[instrument(skip(self))]
    fn set_active(&self, plan_id: &str) -> io::Result<UtilityOutput> {
        let mut command = self.command();
        command.args([SET_ACTIVE_ARG, plan_id]);
        self.run(command)
    }
}
