//! apply command - Prefix assets per the project's naming conventions

use anyhow::{anyhow, Result};

use crate::cli::commands::{open_session, resolve_assets};
use crate::engine::{Context, Prefixer};
use crate::ui::{output, prompts};

/// Apply naming-convention prefixes to the named assets, or to every
/// asset under `--all <root>`.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `paths` - Explicit object paths to prefix
/// * `all` - Content root to prefix instead of explicit paths
/// * `dry_run` - Report what would change without renaming
pub fn apply(ctx: &Context, paths: &[String], all: Option<&str>, dry_run: bool) -> Result<()> {
    let session = open_session(ctx)?;
    let skip_classes = session.config.skip_classes()?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let assets = resolve_assets(&session, paths, all).await?;
        if assets.is_empty() {
            output::print("nothing to do", session.verbosity);
            return Ok(());
        }

        if session.interactive && !dry_run && all.is_some() {
            let go = prompts::confirm(
                &format!("Apply prefixes to {} asset(s)?", assets.len()),
                true,
                session.interactive,
            )?;
            if !go {
                output::print("aborted", session.verbosity);
                return Ok(());
            }
        }

        let prefixer =
            Prefixer::new(&session.conventions, skip_classes, &session.host).dry_run(dry_run);
        let report = prefixer.apply(&assets).await;
        output::print_report(&report, dry_run, session.verbosity);

        if report.has_failures() {
            return Err(anyhow!("{} rename(s) failed", report.failed.len()));
        }
        Ok(())
    })
}
