//! rh6_view_launch library
//!
//! Resolves the launch plan for viewing an RH6 hand model: declares the
//! launch arguments, locates and loads the URDF for the selected hand
//! variant, and assembles the node records a host runtime starts.

pub mod ament;
pub mod condition;
pub mod context;
pub mod description;
pub mod error;
pub mod options;
pub mod record;

use context::LaunchContext;
use error::Result;
use record::{ArgumentRecord, LaunchPlan};
use std::collections::HashMap;
use std::path::PathBuf;

/// Resolve the URDF viewing launch plan from caller-supplied arguments
///
/// Arguments use the declared names (see [`options::DECLARED_ARGUMENTS`]);
/// anything the caller leaves unset falls back to its declared default.
pub fn generate_launch_plan(cli_args: HashMap<String, String>) -> Result<LaunchPlan> {
    for key in cli_args.keys() {
        if !options::is_declared(key) {
            log::warn!("Launch argument '{}' is not declared by this plan", key);
        }
    }

    let mut context = LaunchContext::new(cli_args);
    options::apply_defaults(&mut context);

    let model_path = resolve_description_path(&context)?;
    log::info!("Loading robot description from {}", model_path.display());
    let robot_description = description::load_description(&model_path)?;

    let use_sim_time = condition::sim_time_enabled(
        context
            .get_configuration(options::USE_SIM_TIME)
            .map(String::as_str)
            .unwrap_or(""),
    );

    let rviz_config = context
        .get_configuration(options::RVIZ_CONFIG)
        .map(String::as_str)
        .unwrap_or("");
    let rviz_config = (!rviz_config.is_empty()).then_some(rviz_config);

    let node = record::assemble_view_nodes(&robot_description, use_sim_time, rviz_config);

    let arguments = options::DECLARED_ARGUMENTS
        .iter()
        .map(ArgumentRecord::from)
        .collect();

    Ok(LaunchPlan {
        arguments,
        node,
        variables: context.into_configurations().into_iter().collect(),
    })
}

/// Resolve which description file to load
///
/// An explicit `urdf_file` wins and is used verbatim; otherwise the hand
/// variant selects a file under the rh6_ctrl share directory. The variant is
/// validated before the share lookup, so an unknown variant reports the same
/// error whether or not the package is installed.
fn resolve_description_path(context: &LaunchContext) -> Result<PathBuf> {
    let explicit = context
        .get_configuration(options::URDF_FILE)
        .map(String::as_str)
        .unwrap_or("");
    if !explicit.is_empty() {
        log::debug!("Using explicit URDF path: {}", explicit);
        return Ok(PathBuf::from(explicit));
    }

    let variant = context
        .get_configuration(options::HAND_VARIANT)
        .map(String::as_str)
        .unwrap_or("");
    let relative = description::variant_relative_path(variant)?;
    let share = ament::find_package_share(description::DESCRIPTION_PACKAGE)?;
    Ok(share.join(relative))
}
