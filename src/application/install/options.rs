//! Install options

/// What a run does with each deployable directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Archive, push, extract and install packages
    #[default]
    Deploy,
    /// Remove the directory's deployed copy from the device
    Clean,
}

impl RunMode {
    /// Mode selected by the `--clean` flag
    pub fn from_clean_flag(clean: bool) -> Self {
        if clean {
            RunMode::Clean
        } else {
            RunMode::Deploy
        }
    }
}
