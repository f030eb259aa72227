use super::*;
use tokensmith_config::TokensmithConfig;

fn table() -> TokenTable {
    TokenTable::from_config(&TokensmithConfig::default()).unwrap()
}

struct RingPlugin;

impl UtilityPlugin for RingPlugin {
    fn name(&self) -> &str {
        "ring"
    }

    fn register_utilities(&self, table: &TokenTable) -> Vec<ClassRule> {
        table
            .color("ring")
            .map(|_| vec![ClassRule::new(".focus-ring").declare("outline-width", "2px")])
            .unwrap_or_default()
    }
}

#[test]
fn from_names_loads_builtins_in_order() {
    let registry = PluginRegistry::from_names(&["animate", "typography"]).unwrap();
    assert_eq!(registry.names(), vec!["animate", "typography"]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn from_names_accepts_default_plugin_list() {
    let config = TokensmithConfig::default();
    let registry = PluginRegistry::from_names(&config.plugins).unwrap();
    assert_eq!(registry.names(), BUILT_IN_PLUGINS);
}

#[test]
fn unknown_plugin_name_is_config_error() {
    let err = PluginRegistry::from_names(&["forms"]).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    assert!(err.to_string().contains("unknown plugin 'forms'"));
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = PluginRegistry::from_names(&["animate"]).unwrap();
    let err = registry.register(Box::new(AnimatePlugin)).unwrap_err();
    assert!(err.to_string().contains("already registered"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn animate_markers_only_name_defined_keyframes() {
    let table = table();
    let rules = AnimatePlugin.register_utilities(&table);
    let named: Vec<&str> = rules
        .iter()
        .flat_map(|r| &r.declarations)
        .filter(|(property, _)| property == "animation-name")
        .map(|(_, value)| value.as_str())
        .collect();
    assert_eq!(named, vec!["fade-in", "fade-in"]);
    assert!(named.iter().all(|name| table.keyframes(name).is_some()));

    let mut config = TokensmithConfig::default();
    config.theme.extend.keyframes.remove("fade-in");
    let bare = TokenTable::from_config(&config).unwrap();
    let rules = AnimatePlugin.register_utilities(&bare);
    assert_eq!(rules.len(), 2);
    assert!(rules
        .iter()
        .flat_map(|r| &r.declarations)
        .all(|(property, _)| property != "animation-name"));
}

#[test]
fn custom_plugin_sees_the_table() {
    let mut registry = PluginRegistry::new();
    assert!(registry.is_empty());
    registry.register(Box::new(RingPlugin)).unwrap();

    let rules = registry.collect_rules(&table());
    assert!(rules.iter().any(|r| r.selector == ".focus-ring"));
}

#[test]
fn core_rules_cover_container_and_animations() {
    let rules = core_rules(&table());
    let selectors: Vec<_> = rules.iter().map(|r| r.selector.as_str()).collect();
    assert_eq!(
        selectors,
        vec![
            ".container",
            ".container",
            ".animate-accordion-down",
            ".animate-accordion-up",
            ".animate-fade-in",
        ]
    );
    assert_eq!(rules[1].at_rule.as_deref(), Some("@media (min-width: 1400px)"));
    assert!(rules[0]
        .declarations
        .contains(&("padding-left".to_string(), "2rem".to_string())));
}

#[test]
fn core_rules_skip_dangling_animations() {
    let mut config = TokensmithConfig::default();
    config
        .theme
        .extend
        .animation
        .insert("wiggle".into(), "wiggle 1s".into());
    let table = TokenTable::from_config(&config).unwrap();
    assert!(!core_rules(&table)
        .iter()
        .any(|r| r.selector == ".animate-wiggle"));
}

#[test]
fn screens_sorted_by_width() {
    let mut config = TokensmithConfig::default();
    config
        .theme
        .container
        .screens
        .insert("md".into(), "768px".into());
    config
        .theme
        .container
        .screens
        .insert("lg".into(), "64rem".into());
    let table = TokenTable::from_config(&config).unwrap();
    let widths: Vec<_> = core_rules(&table)
        .into_iter()
        .filter_map(|r| r.at_rule)
        .collect();
    assert_eq!(
        widths,
        vec![
            "@media (min-width: 768px)",
            "@media (min-width: 64rem)",
            "@media (min-width: 1400px)",
        ]
    );
}

#[test]
fn stylesheet_joins_core_and_plugin_rules() {
    let registry = PluginRegistry::from_names(&["container-queries"]).unwrap();
    let css = registry.to_css(&table());
    assert!(css.starts_with(".container {"));
    assert!(css.contains(".\\@container {\n  container-type: inline-size;\n}"));
}
