//! Robot description resolution and loading
//!
//! Maps a hand variant to its URDF file under the rh6_ctrl package share
//! directory and reads the file as UTF-8 text. The content is treated as
//! opaque; it is handed to robot_state_publisher unmodified.

use crate::error::{LaunchError, Result};
use std::fs;
use std::path::Path;

/// Package whose share directory carries the RH6 description files
pub const DESCRIPTION_PACKAGE: &str = "rh6_ctrl";

/// Known hand variants, sorted; also the `hand_variant` argument choices
pub const HAND_VARIANT_CHOICES: &[&str] = &["ruihand6y", "ruihand6z"];

/// Closed mapping of hand variant to URDF path under the package share
const VARIANT_URDFS: &[(&str, &str)] = &[
    ("ruihand6y", "urdf/ruihand6y.urdf"),
    ("ruihand6z", "urdf/ruihand6z.urdf"),
];

/// Look up the share-relative URDF path for a hand variant
///
/// Unknown variants (including the empty string) are a configuration error
/// naming the valid choices.
pub fn variant_relative_path(variant: &str) -> Result<&'static Path> {
    VARIANT_URDFS
        .iter()
        .find(|(name, _)| *name == variant)
        .map(|(_, relative)| Path::new(*relative))
        .ok_or_else(|| LaunchError::UnknownVariant {
            variant: variant.to_string(),
            choices: HAND_VARIANT_CHOICES
                .iter()
                .map(|choice| choice.to_string())
                .collect(),
        })
}

/// Load a robot description file as UTF-8 text, returned unmodified
pub fn load_description(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(LaunchError::DescriptionNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}
