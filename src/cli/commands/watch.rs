//! watch command - Prefix assets as they appear under a content root

use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::cli::commands::open_session;
use crate::core::types::PackagePath;
use crate::engine::{watch::poll_once, watch::WatchState, Context, EventOutcome, Prefixer};
use crate::ui::output;

/// Poll the editor for new assets under `root` and prefix each one as
/// it appears. Runs until interrupted.
///
/// The first poll seeds the known-asset set without renaming anything,
/// so assets that already exist when the watch starts are untouched.
pub fn watch(ctx: &Context, root: &str, interval: u64) -> Result<()> {
    let session = open_session(ctx)?;
    let skip_classes = session.config.skip_classes()?;
    let root = PackagePath::new(root).map_err(|e| anyhow!("Invalid content root: {}", e))?;

    let rt = tokio::runtime::Runtime::new()?;
    let run: Result<()> = rt.block_on(async {
        let prefixer = Prefixer::new(&session.conventions, skip_classes, &session.host);
        let mut state = WatchState::new();
        let interval = Duration::from_secs(interval.max(1));

        output::print(
            format!("watching {} (poll every {:?}, Ctrl-C to stop)", root, interval),
            session.verbosity,
        );

        loop {
            match poll_once(&session.host, &root, &mut state).await {
                Ok(added) => {
                    for asset in &added {
                        output::debug(format!("asset added: {}", asset), session.verbosity);
                        match prefixer.on_asset_added(asset).await {
                            EventOutcome::Renamed(record) => {
                                // Remember the post-rename path so the next
                                // poll does not report our own rename as a
                                // new asset.
                                state.note(record.new_path());
                                output::print(
                                    output::format_rename(&record, false),
                                    session.verbosity,
                                );
                            }
                            EventOutcome::Skipped(reason) => {
                                output::debug(
                                    format!("skipped {}: {}", asset.object_path(), reason),
                                    session.verbosity,
                                );
                            }
                            EventOutcome::Failed(e) => {
                                output::error(format!("{}: {}", asset.object_path(), e));
                            }
                        }
                    }
                }
                Err(e) => {
                    // The editor may be restarting; keep polling.
                    output::warn(format!("poll failed: {}", e), session.verbosity);
                }
            }
            tokio::time::sleep(interval).await;
        }
    });
    run
}
