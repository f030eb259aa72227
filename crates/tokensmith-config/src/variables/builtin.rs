//! Built-in light and dark variable sets.

use super::types::VariableSet;

/// Built-in variable set names.
pub const BUILT_IN_VARIABLE_SETS: &[&str] = &["light", "dark"];

/// `(variable, light, dark)`.
const BASE_VALUES: &[(&str, &str, &str)] = &[
    ("background", "1 0 0", "0.145 0 0"),
    ("foreground", "0.145 0 0", "0.985 0 0"),
    ("card", "1 0 0", "0.205 0 0"),
    ("card-foreground", "0.145 0 0", "0.985 0 0"),
    ("popover", "1 0 0", "0.205 0 0"),
    ("popover-foreground", "0.145 0 0", "0.985 0 0"),
    ("primary", "0.205 0 0", "0.922 0 0"),
    ("primary-foreground", "0.985 0 0", "0.205 0 0"),
    ("secondary", "0.97 0 0", "0.269 0 0"),
    ("secondary-foreground", "0.205 0 0", "0.985 0 0"),
    ("muted", "0.97 0 0", "0.269 0 0"),
    ("muted-foreground", "0.556 0 0", "0.708 0 0"),
    ("accent", "0.97 0 0", "0.269 0 0"),
    ("accent-foreground", "0.205 0 0", "0.985 0 0"),
    ("destructive", "0.577 0.245 27.325", "0.704 0.191 22.216"),
    ("destructive-foreground", "0.985 0 0", "0.985 0 0"),
    ("success", "0.627 0.194 149.214", "0.696 0.17 162.48"),
    ("success-foreground", "0.985 0 0", "0.145 0 0"),
    ("warning", "0.769 0.188 70.08", "0.828 0.189 84.429"),
    ("warning-foreground", "0.205 0 0", "0.205 0 0"),
    ("border", "0.922 0 0", "0.275 0 0"),
    ("input", "0.922 0 0", "0.325 0 0"),
    ("ring", "0.708 0 0", "0.556 0 0"),
    ("chart-1", "0.646 0.222 41.116", "0.488 0.243 264.376"),
    ("chart-2", "0.6 0.118 184.704", "0.696 0.17 162.48"),
    ("chart-3", "0.398 0.07 227.392", "0.769 0.188 70.08"),
    ("chart-4", "0.828 0.189 84.429", "0.627 0.265 303.9"),
    ("chart-5", "0.769 0.188 70.08", "0.645 0.246 16.439"),
    ("sidebar", "0.985 0 0", "0.205 0 0"),
    ("sidebar-foreground", "0.145 0 0", "0.985 0 0"),
    ("sidebar-primary", "0.205 0 0", "0.488 0.243 264.376"),
    ("sidebar-primary-foreground", "0.985 0 0", "0.985 0 0"),
    ("sidebar-accent", "0.97 0 0", "0.269 0 0"),
    ("sidebar-accent-foreground", "0.205 0 0", "0.985 0 0"),
    ("sidebar-border", "0.922 0 0", "0.275 0 0"),
    ("sidebar-ring", "0.708 0 0", "0.556 0 0"),
    ("radius", "0.625rem", "0.625rem"),
];

/// Look up a built-in variable set by name.
pub fn builtin_variable_set(name: &str) -> Option<VariableSet> {
    let pick: fn(&(&str, &str, &str)) -> (String, String) = match name {
        "light" => |(k, light, _)| (k.to_string(), light.to_string()),
        "dark" => |(k, _, dark)| (k.to_string(), dark.to_string()),
        _ => return None,
    };
    Some(VariableSet::new(name, BASE_VALUES.iter().map(pick)))
}
