//! classes command - Show the class the editor reports for each asset

use anyhow::Result;

use crate::cli::commands::{open_session, resolve_assets};
use crate::engine::Context;
use crate::ui::output;

/// Print each asset's object path, class, and the prefix its class
/// maps to (if any).
pub fn classes(ctx: &Context, paths: &[String], all: Option<&str>) -> Result<()> {
    let session = open_session(ctx)?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let assets = resolve_assets(&session, paths, all).await?;
        if assets.is_empty() {
            output::print("nothing to do", session.verbosity);
            return Ok(());
        }

        for asset in &assets {
            let mapped = match session.conventions.prefix_for(&asset.class) {
                Some(prefix) => format!("prefix {}", prefix),
                None => "no convention".to_string(),
            };
            output::print(
                format!("{}  {}  ({})", asset.object_path(), asset.class, mapped),
                session.verbosity,
            );
        }
        Ok(())
    })
}
