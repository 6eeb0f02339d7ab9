//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls the engine to execute the command
//! 3. Formats and displays output
//!
//! Handlers do NOT talk to the Remote Control API directly; all asset
//! operations flow through the engine's [`crate::host::AssetHost`] trait.
//!
//! # Async Commands
//!
//! Commands that reach the editor (apply, undo, watch, classes) are async
//! because they involve network I/O. Each one creates a tokio runtime and
//! uses `block_on` so the dispatch path stays sync.

mod apply;
mod classes;
mod completion;
mod conventions;
mod undo;
mod watch;

// Re-export command functions for testing and direct invocation
pub use apply::apply;
pub use classes::classes;
pub use completion::completion;
pub use conventions::conventions;
pub use undo::undo;
pub use watch::watch;

use anyhow::{anyhow, Context as _, Result};

use crate::cli::args::Command;
use crate::core::config::Config;
use crate::core::conventions::{NamingConventions, ParseWarning};
use crate::core::paths::{discover_project_root, ProjectPaths};
use crate::core::types::{AssetRef, PackagePath};
use crate::engine::Context;
use crate::host::remote::RemoteHost;
use crate::host::AssetHost;
use crate::ui::output::{self, Verbosity};

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Apply {
            paths,
            all,
            dry_run,
        } => apply(ctx, &paths, all.as_deref(), dry_run),
        Command::Undo {
            paths,
            all,
            dry_run,
        } => undo(ctx, &paths, all.as_deref(), dry_run),
        Command::Watch { root, interval } => watch(ctx, &root, interval),
        Command::Conventions => conventions(ctx),
        Command::Classes { paths, all } => classes(ctx, &paths, all.as_deref()),
        Command::Completion { shell } => completion(shell),
    }
}

/// Everything a project-scoped command needs, loaded once.
pub(crate) struct Session {
    pub paths: ProjectPaths,
    pub config: Config,
    pub conventions: NamingConventions,
    pub conventions_warnings: Vec<ParseWarning>,
    pub host: RemoteHost,
    pub verbosity: Verbosity,
    /// CLI interactive state gated by the config default.
    pub interactive: bool,
}

/// Locate the project, load config and conventions, and connect a host.
///
/// A missing or unreadable conventions file is a warning, not an error;
/// the session carries an empty table and every lookup misses.
pub(crate) fn open_session(ctx: &Context) -> Result<Session> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);

    let start = match &ctx.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let root = discover_project_root(&start).ok_or_else(|| {
        anyhow!(
            "No Unreal project found at or above {} (looked for a .uproject file). \
             Use --project to point at one.",
            start.display()
        )
    })?;
    let paths = ProjectPaths::new(root);

    let loaded = Config::load(Some(paths.root.as_path()))?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }
    let config = loaded.config;
    if let Some(path) = config.global_path() {
        output::debug(format!("global config: {}", path.display()), verbosity);
    }
    if let Some(path) = config.project_path() {
        output::debug(format!("project config: {}", path.display()), verbosity);
    }

    let conventions_path = config.conventions_path(&paths);
    let (conventions, conventions_warnings) = match NamingConventions::load(&conventions_path) {
        Ok(result) => (result.conventions, result.warnings),
        Err(e) => {
            output::warn(
                format!("{}; no prefixes will be applied", e),
                verbosity,
            );
            (NamingConventions::empty(), Vec::new())
        }
    };
    output::debug(
        format!(
            "loaded {} convention(s) from {}",
            conventions.len(),
            conventions_path.display()
        ),
        verbosity,
    );

    let host_url = ctx
        .host_url
        .clone()
        .unwrap_or_else(|| config.host_url());
    output::debug(format!("using host {}", host_url), verbosity);
    let host = RemoteHost::new(host_url);

    let interactive = ctx.interactive && config.interactive();

    Ok(Session {
        paths,
        config,
        conventions,
        conventions_warnings,
        host,
        verbosity,
        interactive,
    })
}

/// Resolve the assets a batch command targets.
///
/// Either explicit object paths or everything under `--all <root>`.
/// Explicit paths the editor does not know are warned about and dropped.
pub(crate) async fn resolve_assets(
    session: &Session,
    paths: &[String],
    all: Option<&str>,
) -> Result<Vec<AssetRef>> {
    if let Some(root) = all {
        let root = PackagePath::new(root)
            .map_err(|e| anyhow!("Invalid content root: {}", e))?;
        let assets = session
            .host
            .list_assets(&root)
            .await
            .context("Failed to list assets")?;
        return Ok(assets);
    }

    let mut assets = Vec::with_capacity(paths.len());
    for path in paths {
        match session
            .host
            .get_asset(path)
            .await
            .with_context(|| format!("Failed to look up {}", path))?
        {
            Some(asset) => assets.push(asset),
            None => output::warn(format!("asset not found: {}", path), session.verbosity),
        }
    }
    Ok(assets)
}
