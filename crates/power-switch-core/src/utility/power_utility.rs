use std::io;

/// Captured result of one utility invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtilityOutput {
    /// Whether the process exited successfully.
    pub success: bool,
    /// Exit code, if the process exited normally.
    pub exit_code: Option<i32>,
    /// Decoded standard output.
    pub stdout: String,
    /// Decoded standard error.
    pub stderr: String,
}

/// Seam over the external power-configuration utility.
///
/// Implementations return `Err` only when the process could not be launched.
/// Exit status is reported through [`UtilityOutput`] and interpreted by the
/// caller.
pub trait PowerUtility {
    /// Program name used in error messages.
    fn program(&self) -> &str;

    /// Run the utility's "list plans" command and capture its output.
    fn list_plans(&self) -> io::Result<UtilityOutput>;

    /// Run the utility's "set active plan" command for `plan_id`.
    fn set_active(&self, plan_id: &str) -> io::Result<UtilityOutput>;
}
