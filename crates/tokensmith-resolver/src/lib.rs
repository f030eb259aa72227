//! Design-token resolution.
//!
//! Builds an immutable [`TokenTable`] from a validated config and resolves
//! tokens against an explicit [`VariableSet`](tokensmith_config::VariableSet)
//! snapshot. Also hosts the content scope and the plugin interface.
//!
//! ```rust,no_run
//! use tokensmith_config::{load_config, variables::variable_set_for};
//! use tokensmith_resolver::TokenResolver;
//!
//! let config = load_config().expect("failed to load config");
//! let resolver = TokenResolver::from_config(&config).expect("bad token table");
//! let dark = variable_set_for(&config, "dark").expect("no dark variables");
//! let color = resolver.resolve(&dark, "primary", Some("DEFAULT"), None);
//! ```

pub mod content;
pub mod expr;
pub mod keyframes;
pub mod plugins;
pub mod resolver;
pub mod table;

pub use content::ContentScope;
pub use expr::{AlphaMode, ColorExpr, DimensionExpr};
pub use keyframes::{KeyframeStop, Keyframes};
pub use plugins::{core_rules, ClassRule, PluginRegistry, UtilityPlugin};
pub use resolver::{AnimationBinding, ResolvedTheme, TokenResolver};
pub use table::{Token, TokenTable};
