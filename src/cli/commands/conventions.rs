//! conventions command - Show the class-to-prefix table

use anyhow::Result;

use crate::cli::commands::open_session;
use crate::engine::Context;
use crate::ui::output;

/// Print the naming conventions loaded for the current project, plus
/// any lines the loader skipped.
pub fn conventions(ctx: &Context) -> Result<()> {
    let session = open_session(ctx)?;

    let path = session.config.conventions_path(&session.paths);
    output::print(format!("conventions from {}", path.display()), session.verbosity);

    if session.conventions.is_empty() {
        output::print("(no conventions loaded)", session.verbosity);
    } else {
        let width = session
            .conventions
            .entries()
            .iter()
            .map(|(class, _)| class.len())
            .max()
            .unwrap_or(0);
        for (class, prefix) in session.conventions.entries() {
            output::print(
                format!("  {:width$}  {}", class, prefix, width = width),
                session.verbosity,
            );
        }
    }

    for warning in &session.conventions_warnings {
        output::warn(
            format!("line {}: {}", warning.line, warning.message),
            session.verbosity,
        );
    }

    Ok(())
}
