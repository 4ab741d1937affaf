//! Launch context for a single plan resolution
//!
//! Holds the configuration values for one invocation. Each resolution gets
//! its own isolated context, so caller-supplied arguments never leak between
//! runs.

use std::collections::HashMap;

/// Context for resolving a single launch plan
///
/// Created from the caller's launch arguments; declared defaults are filled
/// in afterwards for any argument the caller left unset (see
/// [`crate::options::apply_defaults`]).
///
/// # Example
///
/// ```
/// use rh6_view_launch::context::LaunchContext;
/// use std::collections::HashMap;
///
/// let mut context = LaunchContext::new(HashMap::new());
/// context.set_configuration("hand_variant".to_string(), "ruihand6z".to_string());
/// assert_eq!(
///     context.get_configuration("hand_variant"),
///     Some(&"ruihand6z".to_string())
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LaunchContext {
    /// Launch configuration variables (arguments)
    launch_configurations: HashMap<String, String>,
}

impl LaunchContext {
    /// Create new context with launch arguments
    pub fn new(args: HashMap<String, String>) -> Self {
        Self {
            launch_configurations: args,
        }
    }

    /// Get a launch configuration value by name
    pub fn get_configuration(&self, name: &str) -> Option<&String> {
        self.launch_configurations.get(name)
    }

    /// Set a launch configuration value
    pub fn set_configuration(&mut self, name: String, value: String) {
        self.launch_configurations.insert(name, value);
    }

    /// Get all launch configurations
    pub fn configurations(&self) -> &HashMap<String, String> {
        &self.launch_configurations
    }

    /// Consume the context, returning the configuration map
    pub fn into_configurations(self) -> HashMap<String, String> {
        self.launch_configurations
    }
}

impl Default for LaunchContext {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}
