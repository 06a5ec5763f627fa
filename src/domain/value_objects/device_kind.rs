//! Device kind value object - which transport a run talks to the device over.

/// Kind of test device a run targets.
///
/// - `Android`: reached through the ADB bridge, supports package installs
/// - `Mic`: generic device reachable over SSH
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Android,
    Mic,
}

impl DeviceKind {
    /// All supported kinds, in the order they are offered as suggestions
    pub const ALL: [DeviceKind; 2] = [DeviceKind::Android, DeviceKind::Mic];

    /// Tag as it appears in `DEVICE_TYPE`
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::Android => "android",
            DeviceKind::Mic => "mic",
        }
    }

    /// Parse a `DEVICE_TYPE` tag. Tags are matched exactly.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Tags of every supported kind
    pub fn tags() -> [&'static str; 2] {
        Self::ALL.map(|kind| kind.as_str())
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
