//! Launch plan data structures

use crate::options::LaunchArgument;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root structure for the emitted launch plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchPlan {
    pub arguments: Vec<ArgumentRecord>,
    pub node: Vec<NodeRecord>,
    pub variables: BTreeMap<String, String>,
}

impl LaunchPlan {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Node record structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub package: String,
    pub executable: String,
    pub name: String,
    pub params: Vec<(String, String)>,
    pub args: Vec<String>,
    pub output: Output,
}

/// Where the host runtime routes a node's console output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    /// Runtime log files only
    #[default]
    Log,
    /// Mirrored to the launching terminal
    Screen,
}

/// Declared argument metadata carried in the emitted plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentRecord {
    pub name: String,
    pub default: String,
    pub description: String,
    pub choices: Option<Vec<String>>,
}

impl From<&LaunchArgument> for ArgumentRecord {
    fn from(argument: &LaunchArgument) -> Self {
        Self {
            name: argument.name.to_string(),
            default: argument.default.to_string(),
            description: argument.description.to_string(),
            choices: argument
                .choices
                .map(|choices| choices.iter().map(|choice| choice.to_string()).collect()),
        }
    }
}
