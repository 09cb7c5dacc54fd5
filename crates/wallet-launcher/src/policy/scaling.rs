use crate::model::Platform;
use serde::{Deserialize, Serialize};

/// Display-scaling attributes applied before the UI toolkit starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingPolicy {
    /// Toolkit-level high-DPI scaling. Only macOS Retina support works reliably.
    pub high_dpi_scaling: bool,
    /// Application-defined interface scaling.
    pub custom_scaling: bool,
}

impl ScalingPolicy {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            high_dpi_scaling: platform == Platform::MacOs,
            custom_scaling: false,
        }
    }
}
