//! Package share directory lookup
//!
//! Locates the installed `share/<package>` directory the way the ament index
//! lays it out: workspace overlays on `AMENT_PREFIX_PATH` take precedence,
//! then the sourced distro under `/opt/ros`, then a fallback list of common
//! distro roots.

use crate::error::{LaunchError, Result};
use std::path::{Path, PathBuf};

/// Common ROS 2 distributions probed when no environment hints are set
const FALLBACK_DISTROS: &[&str] = &["jazzy", "iron", "humble", "galactic", "foxy"];

/// Find a package's share directory among the given install prefixes
///
/// Returns the first `<prefix>/share/<package>` that exists as a directory,
/// in prefix order.
pub fn share_dir_in_prefixes<'a, I>(prefixes: I, package: &str) -> Option<PathBuf>
where
    I: IntoIterator<Item = &'a Path>,
{
    for prefix in prefixes {
        let share_path = prefix.join("share").join(package);
        if share_path.is_dir() {
            return Some(share_path);
        }
    }
    None
}

/// Find a ROS 2 package share directory
pub fn find_package_share(package: &str) -> Result<PathBuf> {
    let mut prefixes: Vec<PathBuf> = Vec::new();

    if let Ok(prefix_path) = std::env::var("AMENT_PREFIX_PATH") {
        prefixes.extend(
            prefix_path
                .split(':')
                .filter(|prefix| !prefix.is_empty())
                .map(PathBuf::from),
        );
    }

    if let Ok(distro) = std::env::var("ROS_DISTRO") {
        prefixes.push(PathBuf::from(format!("/opt/ros/{}", distro)));
    }

    for distro in FALLBACK_DISTROS {
        prefixes.push(PathBuf::from(format!("/opt/ros/{}", distro)));
    }

    share_dir_in_prefixes(prefixes.iter().map(PathBuf::as_path), package)
        .ok_or_else(|| LaunchError::PackageNotFound(package.to_string()))
}
