//! undo command - Strip naming-convention prefixes from assets

use anyhow::{anyhow, Result};

use crate::cli::commands::{open_session, resolve_assets};
use crate::engine::{Context, Prefixer};
use crate::ui::{output, prompts};

/// Remove naming-convention prefixes from the named assets, or from
/// every asset under `--all <root>`.
///
/// Only the exact prefix mapped to the asset's class is stripped;
/// assets that do not carry it are skipped.
pub fn undo(ctx: &Context, paths: &[String], all: Option<&str>, dry_run: bool) -> Result<()> {
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
                &format!("Strip prefixes from {} asset(s)?", assets.len()),
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
        let report = prefixer.undo(&assets).await;
        output::print_report(&report, dry_run, session.verbosity);

        if report.has_failures() {
            return Err(anyhow!("{} rename(s) failed", report.failed.len()));
        }
        Ok(())
    })
}
