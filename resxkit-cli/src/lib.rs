//! Subcommands of the `resxkit` binary, exposed for testing.

pub mod classify;
pub mod config;
pub mod debug;
pub mod edit;
pub mod export;
pub mod validation;
pub mod view;

pub use config::CliConfig;
pub use resxkit::{FileId, Session};

/// Loads every input into one session, in argument order.
///
/// Stops at the first file that cannot be read or parsed, naming it in the
/// error.
pub fn load_inputs(config: &CliConfig, inputs: &[String]) -> Result<(Session, Vec<FileId>), String> {
    let mut session = Session::with_options(config.session_options());
    let mut ids = Vec::with_capacity(inputs.len());
    for input in inputs {
        let id = session
            .load_path(input)
            .map_err(|e| format!("Failed to read {}: {}", input, e))?;
        ids.push(id);
    }
    Ok((session, ids))
}
