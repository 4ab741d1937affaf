//! Launch argument declarations for the URDF viewing plan

use crate::context::LaunchContext;
use crate::description::HAND_VARIANT_CHOICES;

/// Configuration key selecting the hand hardware variant
pub const HAND_VARIANT: &str = "hand_variant";
/// Configuration key overriding variant-based URDF resolution
pub const URDF_FILE: &str = "urdf_file";
/// Configuration key pointing at an RViz display configuration
pub const RVIZ_CONFIG: &str = "rviz_config";
/// Configuration key enabling simulation time on the started nodes
pub const USE_SIM_TIME: &str = "use_sim_time";

/// A launch argument declaration
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchArgument {
    pub name: &'static str,
    pub default: &'static str,
    pub description: &'static str,
    pub choices: Option<&'static [&'static str]>,
}

/// The arguments this plan declares, in declaration order
pub const DECLARED_ARGUMENTS: &[LaunchArgument] = &[
    LaunchArgument {
        name: HAND_VARIANT,
        default: "ruihand6y",
        description: "Hand hardware variant to visualize",
        choices: Some(HAND_VARIANT_CHOICES),
    },
    LaunchArgument {
        name: URDF_FILE,
        default: "",
        description: "Explicit URDF path; empty resolves by hand_variant",
        choices: None,
    },
    LaunchArgument {
        name: RVIZ_CONFIG,
        default: "",
        description: "RViz display configuration file; empty starts RViz with its defaults",
        choices: None,
    },
    LaunchArgument {
        name: USE_SIM_TIME,
        default: "false",
        description: "Drive published transforms from simulation time",
        choices: None,
    },
];

/// Apply declared defaults to the context
///
/// Priority: value already in context (CLI) wins, otherwise the default.
pub fn apply_defaults(context: &mut LaunchContext) {
    for argument in DECLARED_ARGUMENTS {
        if context.get_configuration(argument.name).is_some() {
            continue; // Don't override CLI args
        }
        context.set_configuration(argument.name.to_string(), argument.default.to_string());
    }
}

/// Whether the name is one of the declared arguments
pub fn is_declared(name: &str) -> bool {
    DECLARED_ARGUMENTS
        .iter()
        .any(|argument| argument.name == name)
}
