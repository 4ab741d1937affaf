//! Boolean interpretation of the use_sim_time argument

/// Determine whether a `use_sim_time` value enables simulation time
///
/// Only a case-insensitive match of "true" enables it. Everything else,
/// including "1", "yes", and the empty string, leaves it disabled. No
/// whitespace trimming is applied.
pub fn sim_time_enabled(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
