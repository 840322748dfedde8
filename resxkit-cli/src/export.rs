use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::{
    config::CliConfig,
    load_inputs,
    validation::{ValidationContext, validate_context},
};

/// Run the export command: re-serialize every input into `output_dir`.
///
/// Files keep the name they were loaded under. Inputs that would land on
/// the same output name are rejected before anything is written. Returns
/// the written paths.
pub fn run_export_command(
    config: &CliConfig,
    inputs: Vec<String>,
    output_dir: String,
) -> Result<Vec<String>, String> {
    let vctx = ValidationContext::new()
        .with_input_files(&inputs)
        .with_output_dir(output_dir.clone());
    validate_context(&vctx)?;

    let (session, ids) = load_inputs(config, &inputs)?;

    let mut exports = Vec::with_capacity(ids.len());
    let mut sources: HashMap<String, &str> = HashMap::new();
    for (id, input) in ids.into_iter().zip(&inputs) {
        let export = session.export(id).map_err(|e| e.to_string())?;
        if let Some(previous) = sources.insert(export.file_name.clone(), input.as_str()) {
            return Err(format!(
                "{} and {} would both be exported as {}",
                previous, input, export.file_name
            ));
        }
        exports.push(export);
    }

    let mut written = Vec::with_capacity(exports.len());
    for export in exports {
        let path = Path::new(&output_dir).join(&export.file_name);
        std::fs::write(&path, &export.content)
            .map_err(|e| format!("Error writing {}: {}", path.display(), e))?;
        debug!(path = %path.display(), "exported file");
        written.push(path.display().to_string());
    }

    println!("✅ Exported {} file(s) to {}", written.len(), output_dir);
    Ok(written)
}
