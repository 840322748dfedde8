use std::fs::File;
use std::io::Write;

use resxkit::{FileRecord, SessionReport};
use serde::Serialize;

use crate::{
    config::CliConfig,
    load_inputs,
    validation::{ValidationContext, validate_context},
};

/// Everything `debug` dumps: the session summary plus the parsed records.
#[derive(Debug, Serialize)]
pub struct DebugDump<'a> {
    pub report: SessionReport,
    pub files: &'a [FileRecord],
}

/// Run the debug command: load files and output the session state as JSON.
pub fn run_debug_command(
    config: &CliConfig,
    inputs: Vec<String>,
    output: Option<String>,
) -> Result<(), String> {
    let mut vctx = ValidationContext::new().with_input_files(&inputs);
    if let Some(o) = &output {
        vctx = vctx.with_output_file(o.clone());
    }
    validate_context(&vctx)?;

    let (session, _) = load_inputs(config, &inputs)?;
    let dump = DebugDump {
        report: session.report(),
        files: session.files(),
    };
    let json = serde_json::to_string_pretty(&dump)
        .map_err(|e| format!("Error serializing to JSON: {}", e))?;

    match output {
        Some(output_path) => {
            File::create(&output_path)
                .and_then(|mut f| f.write_all(json.as_bytes()))
                .map_err(|e| format!("Error writing to {}: {}", output_path, e))?;
            eprintln!("✅ Debug output written to: {}", output_path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
