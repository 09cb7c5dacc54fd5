use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system family the launcher is deciding for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::MacOs, Platform::Linux, Platform::Windows];

    /// Platform of the running build.
    ///
    /// Unix flavors other than macOS are treated as Linux.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(windows) {
            Self::Windows
        } else {
            Self::Linux
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "macos" | "mac" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            "windows" | "win" => Ok(Self::Windows),
            other => Err(format!("unknown platform `{other}`")),
        }
    }
}

/// Build profile crossed with distribution channel.
///
/// Store variants are sandboxed store distributions (Mac App Store,
/// Microsoft Store) selected with the `store` cargo feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildVariant {
    Debug,
    Release,
    StoreDebug,
    StoreRelease,
}

impl BuildVariant {
    pub const ALL: [BuildVariant; 4] = [
        BuildVariant::Debug,
        BuildVariant::Release,
        BuildVariant::StoreDebug,
        BuildVariant::StoreRelease,
    ];

    pub fn current() -> Self {
        match (cfg!(feature = "store"), cfg!(debug_assertions)) {
            (false, true) => Self::Debug,
            (false, false) => Self::Release,
            (true, true) => Self::StoreDebug,
            (true, false) => Self::StoreRelease,
        }
    }

    pub fn is_debug(self) -> bool {
        matches!(self, Self::Debug | Self::StoreDebug)
    }

    pub fn is_store(self) -> bool {
        matches!(self, Self::StoreDebug | Self::StoreRelease)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
            Self::StoreDebug => "store_debug",
            Self::StoreRelease => "store_release",
        }
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildVariant {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().replace('-', "_").as_str() {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            "store_debug" => Ok(Self::StoreDebug),
            "store_release" => Ok(Self::StoreRelease),
            other => Err(format!("unknown build variant `{other}`")),
        }
    }
}
