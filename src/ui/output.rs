//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including the command line behind each check.
    Verbose,
    /// Show check status lines and the summary.
    #[default]
    Normal,
    /// Show the summary and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-check status lines.
    pub fn shows_checks(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows the command line behind each check.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
