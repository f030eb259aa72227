use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tokensmith: resolve design tokens against light, dark or custom variable sets.
#[derive(Parser, Debug, Clone)]
#[command(name = "tokensmith", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Variable set to resolve against (light, dark, or a configured mode).
    #[arg(short, long, global = true)]
    pub mode: Option<String>,

    /// Variable set YAML file; takes precedence over --mode.
    #[arg(long, global = true)]
    pub variables: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve a color token, e.g. `resolve primary --key DEFAULT --alpha 0.5`.
    Resolve {
        token: String,
        /// Sub-key of a composite token.
        #[arg(short, long)]
        key: Option<String>,
        /// Opacity in (0, 1].
        #[arg(short, long)]
        alpha: Option<f64>,
    },
    /// Resolve a utility color name with an optional opacity modifier (`primary/50`).
    Utility { class: String },
    /// Evaluate a derived scale entry (`lg`, `md`, `sm`).
    Derived { scale: String },
    /// Show an animation and its keyframes.
    Animation {
        name: String,
        /// Print the @keyframes block and utility rule.
        #[arg(long)]
        css: bool,
    },
    /// Report whether paths fall inside the content scope.
    Match {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Validate the config and resolve every token in every mode.
    Check,
    /// Resolve the whole theme as JSON.
    Dump {
        /// Emit CSS (custom properties, keyframes and utility rules) instead.
        #[arg(long)]
        css: bool,
    },
    /// Write a starter config.
    Init {
        path: PathBuf,
        /// Spell out every setting instead of the commented template.
        #[arg(long)]
        full: bool,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Re-resolve the theme whenever the config or variable file changes.
    Watch,
}

pub fn parse() -> Args {
    Args::parse()
}
