// Variant-to-URDF resolution against an installed share layout

use rh6_view_launch::error::LaunchError;
use rh6_view_launch::generate_launch_plan;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// The package-lookup steps below share AMENT_PREFIX_PATH, so they run in a
// fixed order inside one test instead of racing as separate tests.
#[test]
fn test_variant_resolution_against_share_layout() {
    // Without the package installed, a valid variant fails the share lookup
    let err = generate_launch_plan(HashMap::new()).unwrap_err();
    assert!(
        matches!(err, LaunchError::PackageNotFound(_)),
        "Expected PackageNotFound, got: {}",
        err
    );
    assert!(err.to_string().contains("rh6_ctrl"));

    // Install the package share layout into a temporary prefix
    let prefix = tempfile::tempdir().unwrap();
    let urdf_dir = prefix.path().join("share").join("rh6_ctrl").join("urdf");
    fs::create_dir_all(&urdf_dir).unwrap();
    fs::write(urdf_dir.join("ruihand6y.urdf"), "<robot name=\"y\"/>").unwrap();
    fs::write(urdf_dir.join("ruihand6z.urdf"), "<robot name=\"z\"/>").unwrap();

    std::env::set_var("AMENT_PREFIX_PATH", prefix.path());

    // Default variant resolves ruihand6y.urdf
    let plan = generate_launch_plan(HashMap::new()).unwrap();
    assert_eq!(plan.node[1].params[0].1, "<robot name=\"y\"/>");
    assert_eq!(plan.variables.get("hand_variant").unwrap(), "ruihand6y");

    // Explicit variant resolves its own file
    let plan = generate_launch_plan(args(&[("hand_variant", "ruihand6z")])).unwrap();
    assert_eq!(plan.node[1].params[0].1, "<robot name=\"z\"/>");

    // Variant present in the mapping but missing on disk names the full path
    fs::remove_file(urdf_dir.join("ruihand6z.urdf")).unwrap();
    let err = generate_launch_plan(args(&[("hand_variant", "ruihand6z")])).unwrap_err();
    assert!(matches!(err, LaunchError::DescriptionNotFound { .. }));
    assert!(err.to_string().contains("ruihand6z.urdf"));

    std::env::remove_var("AMENT_PREFIX_PATH");
}

#[test]
fn test_unknown_variant_reported_before_package_lookup() {
    // Fails the same way whether or not rh6_ctrl is installed
    let err = generate_launch_plan(args(&[("hand_variant", "ruihand9q")])).unwrap_err();
    assert!(matches!(err, LaunchError::UnknownVariant { .. }));
    assert_eq!(
        err.to_string(),
        "Unknown hand variant 'ruihand9q'. Valid choices: ruihand6y, ruihand6z"
    );
}

#[test]
fn test_explicit_urdf_needs_no_package() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"<robot name=\"override\"/>").unwrap();
    file.flush().unwrap();

    let plan =
        generate_launch_plan(args(&[("urdf_file", file.path().to_str().unwrap())])).unwrap();
    assert_eq!(plan.node[1].params[0].1, "<robot name=\"override\"/>");
}

#[test]
fn test_explicit_urdf_used_verbatim() {
    // Relative paths are not resolved against the share directory
    let err = generate_launch_plan(args(&[("urdf_file", "urdf/ruihand6y.urdf")])).unwrap_err();
    assert!(matches!(err, LaunchError::DescriptionNotFound { .. }));
    assert!(err.to_string().contains("urdf/ruihand6y.urdf"));
}
