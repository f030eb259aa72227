//! Subcommand implementations.

use crate::cli::{Args, Command};
use std::path::{Path, PathBuf};
use tokensmith_common::{AlphaValue, ConfigError, Result, TokensmithError};
use tokensmith_config::variables::{available_modes, load_variable_set, variable_set_for};
use tokensmith_config::{toml_loader, ReloadManager, Reloaded, TokensmithConfig, VariableSet};
use tokensmith_resolver::{ContentScope, PluginRegistry, TokenResolver};
use tracing::{info, warn};

pub async fn run(args: Args) -> Result<()> {
    match &args.command {
        Command::Init { path, full, force } => init(path, *full, *force),
        Command::Watch => watch(&args).await,
        Command::Check => check(&load_config(&args)?),
        Command::Resolve { token, key, alpha } => {
            let session = Session::load(&args)?;
            let alpha = alpha.map(AlphaValue::new).transpose()?;
            let color = session
                .resolver
                .resolve(&session.vars, token, key.as_deref(), alpha)?;
            println!("{color}");
            Ok(())
        }
        Command::Utility { class } => {
            let session = Session::load(&args)?;
            println!("{}", session.resolver.resolve_class(&session.vars, class)?);
            Ok(())
        }
        Command::Derived { scale } => {
            let session = Session::load(&args)?;
            println!("{}", session.resolver.resolve_derived(&session.vars, scale)?);
            Ok(())
        }
        Command::Animation { name, css } => {
            let session = Session::load(&args)?;
            let binding = session.resolver.resolve_animation(name)?;
            if *css {
                println!("{}", binding.to_css());
            } else {
                println!("{}", binding.css_value());
            }
            Ok(())
        }
        Command::Match { paths } => match_paths(&load_config(&args)?, paths),
        Command::Dump { css } => dump(&Session::load(&args)?, *css),
    }
}

/// Config, active variable snapshot and the resolver built from them.
struct Session {
    config: TokensmithConfig,
    vars: VariableSet,
    resolver: TokenResolver,
}

impl Session {
    fn load(args: &Args) -> Result<Self> {
        Self::build(args, &load_config(args)?)
    }

    fn build(args: &Args, config: &TokensmithConfig) -> Result<Self> {
        let vars = active_variables(args, config)?;
        let resolver = TokenResolver::from_config(config)?;
        Ok(Self {
            config: config.clone(),
            vars,
            resolver,
        })
    }
}

fn load_config(args: &Args) -> Result<TokensmithConfig> {
    let config = match &args.config {
        Some(path) => {
            info!("using config override: {}", path.display());
            tokensmith_config::load_config_from(path)?
        }
        None => tokensmith_config::load_config()?,
    };
    Ok(config)
}

fn active_variables(args: &Args, config: &TokensmithConfig) -> Result<VariableSet> {
    let vars = match (&args.variables, &args.mode) {
        (Some(file), _) => load_variable_set(config, file)?,
        (None, Some(mode)) => variable_set_for(config, mode)?,
        (None, None) => variable_set_for(config, &config.resolution.default_mode)?,
    };
    info!(mode = vars.name(), variables = vars.len(), "active variable set");
    Ok(vars)
}

fn match_paths(config: &TokensmithConfig, paths: &[PathBuf]) -> Result<()> {
    let scope = ContentScope::from_config(config)?;
    for path in paths {
        let hits = scope.matching_patterns(path);
        if hits.is_empty() {
            println!("{}: not in content scope", path.display());
        } else {
            println!("{}: {}", path.display(), hits.join(", "));
        }
    }
    Ok(())
}

fn dump(session: &Session, css: bool) -> Result<()> {
    let resolver = &session.resolver;
    let theme = resolver.resolve_all(&session.vars);
    for e in &theme.errors {
        warn!("{e}");
    }

    if !css {
        let json = serde_json::to_string_pretty(&theme)
            .map_err(|e| TokensmithError::Other(format!("failed to serialize theme: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    let registry = PluginRegistry::from_names(&session.config.plugins)?;
    println!("{}", theme.to_css());
    for (name, _) in resolver.table().animations() {
        if let Ok(binding) = resolver.resolve_animation(name) {
            println!("{}", binding.keyframes.to_css());
        }
    }
    println!("{}", registry.to_css(resolver.table()));
    Ok(())
}

/// Build every derived structure and resolve every mode, reporting all
/// problems before failing.
fn check(config: &TokensmithConfig) -> Result<()> {
    let resolver = TokenResolver::from_config(config)?;
    let registry = PluginRegistry::from_names(&config.plugins)?;
    let scope = ContentScope::from_config(config)?;

    let mut problems = 0;
    for mode in available_modes(config) {
        let vars = match variable_set_for(config, &mode) {
            Ok(vars) => vars,
            Err(e) => {
                println!("{mode}: {e}");
                problems += 1;
                continue;
            }
        };
        let theme = resolver.resolve_all(&vars);
        for e in &theme.errors {
            println!("{mode}: {e}");
        }
        problems += theme.errors.len();
        println!(
            "{mode}: {} colors, {} scales, {} animations",
            theme.colors.len(),
            theme.border_radius.len(),
            theme.animation.len()
        );
    }

    println!(
        "plugins: {}; content globs: {}",
        registry.names().join(", "),
        scope.patterns().len()
    );

    if problems > 0 {
        return Err(TokensmithError::Other(format!("{problems} problem(s) found")));
    }
    println!("ok");
    Ok(())
}

fn init(path: &Path, full: bool, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(TokensmithError::Other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if full {
        tokensmith_config::save_config_to_path(&TokensmithConfig::default(), path)?;
    } else {
        toml_loader::create_default_config(path)?;
    }
    println!("wrote {}", path.display());
    Ok(())
}

async fn watch(args: &Args) -> Result<()> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => toml_loader::default_config_path()?,
    };
    if !config_path.exists() {
        return Err(ConfigError::FileNotFound(config_path).into());
    }

    let session_args = args.clone();
    let mut rx = ReloadManager::new(config_path.clone(), move |config: &TokensmithConfig| {
        Session::build(&session_args, config)
    })
    .watch_also(args.variables.iter().cloned())
    .start()?;

    report_reload(&rx.borrow_and_update().clone());
    info!("watching {} (ctrl-c to stop)", config_path.display());

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    warn!("config watcher stopped");
                    return Ok(());
                }
                let state = rx.borrow_and_update().clone();
                report_reload(&state);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("stopping watch");
                return Ok(());
            }
        }
    }
}

/// Print a one-line summary of a newly published session.
fn report_reload(state: &Reloaded<Session>) {
    let session = &state.built;
    let theme = session.resolver.resolve_all(&session.vars);
    for e in &theme.errors {
        warn!("{e}");
    }
    println!(
        "[{} #{}] {} colors, {} scales, {} error(s)",
        theme.mode,
        state.generation,
        theme.colors.len(),
        theme.border_radius.len(),
        theme.errors.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::BTreeMap;

    #[test]
    fn check_passes_on_defaults() {
        check(&TokensmithConfig::default()).unwrap();
    }

    #[test]
    fn check_reports_unresolvable_modes() {
        let mut config = TokensmithConfig::default();
        config
            .variables
            .entry("dark".into())
            .or_default()
            .insert("primary".into(), "not a color".into());
        let err = check(&config).unwrap_err();
        assert!(err.to_string().contains("1 problem(s)"));
    }

    #[test]
    fn init_writes_template_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokensmith.toml");

        init(&path, false, false).unwrap();
        let config = tokensmith_config::load_config_from(&path).unwrap();
        assert_eq!(config.plugins.len(), 3);

        assert!(init(&path, false, false).is_err());
        init(&path, true, true).unwrap();
        assert!(tokensmith_config::load_config_from(&path).is_ok());
    }

    #[test]
    fn match_paths_reports_scope_hits() {
        let mut config = TokensmithConfig::default();
        config.content = vec!["src/**/*.tsx".into(), "./src/**/*.{ts,tsx}".into()];
        let paths = vec![PathBuf::from("src/app.tsx"), PathBuf::from("README.md")];
        match_paths(&config, &paths).unwrap();

        let scope = ContentScope::from_config(&config).unwrap();
        assert_eq!(
            scope.matching_patterns(Path::new("src/app.tsx")),
            vec!["src/**/*.tsx", "src/**/*.{ts,tsx}"]
        );
        assert!(scope.matching_patterns(Path::new("README.md")).is_empty());
    }

    #[test]
    fn session_build_rejects_single_stop_keyframes() {
        let args = Args::try_parse_from(["tokensmith", "check"]).unwrap();
        let stop = BTreeMap::from([("opacity".to_string(), "0".to_string())]);
        let mut config = TokensmithConfig::default();
        config
            .theme
            .extend
            .keyframes
            .insert("blink".into(), BTreeMap::from([("50%".to_string(), stop)]));
        let err = Session::build(&args, &config).err().unwrap();
        assert!(err.to_string().contains("keyframes.blink"));
    }
}
