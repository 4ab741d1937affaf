//! Node record assembly for the URDF viewing plan

use crate::record::types::{NodeRecord, Output};

/// Assemble the viewer's node records in start order
///
/// The set is fixed: the GUI joint-state publisher, robot_state_publisher
/// carrying the description, then RViz. Arguments only vary the parameters,
/// never the count or order.
pub fn assemble_view_nodes(
    robot_description: &str,
    use_sim_time: bool,
    rviz_config: Option<&str>,
) -> Vec<NodeRecord> {
    vec![
        joint_state_publisher_gui(),
        robot_state_publisher(robot_description, use_sim_time),
        rviz(rviz_config),
    ]
}

/// GUI sliders publishing joint states for the viewed model
fn joint_state_publisher_gui() -> NodeRecord {
    NodeRecord {
        package: "joint_state_publisher_gui".to_string(),
        executable: "joint_state_publisher_gui".to_string(),
        name: "joint_state_publisher_gui".to_string(),
        params: Vec::new(),
        args: Vec::new(),
        output: Output::Log,
    }
}

/// robot_state_publisher with the description content as a parameter
fn robot_state_publisher(robot_description: &str, use_sim_time: bool) -> NodeRecord {
    NodeRecord {
        package: "robot_state_publisher".to_string(),
        executable: "robot_state_publisher".to_string(),
        name: "robot_state_publisher".to_string(),
        params: vec![
            (
                "robot_description".to_string(),
                robot_description.to_string(),
            ),
            ("use_sim_time".to_string(), use_sim_time.to_string()),
        ],
        args: Vec::new(),
        output: Output::Screen,
    }
}

/// RViz, optionally pointed at a display configuration with `-d`
fn rviz(rviz_config: Option<&str>) -> NodeRecord {
    let args = match rviz_config {
        Some(config) => vec!["-d".to_string(), config.to_string()],
        None => Vec::new(),
    };

    NodeRecord {
        package: "rviz2".to_string(),
        executable: "rviz2".to_string(),
        name: "rviz2".to_string(),
        params: Vec::new(),
        args,
        output: Output::Screen,
    }
}
