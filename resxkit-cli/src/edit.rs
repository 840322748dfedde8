use crate::{
    config::CliConfig,
    load_inputs,
    validation::{ValidationContext, validate_context},
};

/// A single change to apply to one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOperation {
    /// Insert a new entry at the top of the file.
    Add { value: String, comment: String },
    /// Change an existing entry; `None` keeps its current comment.
    Set {
        value: String,
        comment: Option<String>,
    },
    Remove,
}

/// Run the edit command: apply one change and write the file back.
///
/// Writes in place unless `output` is given.
pub fn run_edit_command(
    config: &CliConfig,
    input: String,
    name: String,
    operation: EditOperation,
    output: Option<String>,
) -> Result<(), String> {
    let mut vctx = ValidationContext::new()
        .with_input_file(input.clone())
        .with_entry_name(name.clone());
    if let Some(o) = &output {
        vctx = vctx.with_output_file(o.clone());
    }
    validate_context(&vctx)?;

    let (mut session, ids) = load_inputs(config, std::slice::from_ref(&input))?;
    let id = ids[0];
    let file_name = session
        .file(id)
        .map(|f| f.display_file_name.clone())
        .unwrap_or_else(|| input.clone());

    match operation {
        EditOperation::Add { value, comment } => {
            session
                .add_entry(id, &name, &value, &comment)
                .map_err(|e| e.to_string())?;
            println!("✅ Added '{}' to {}", name, file_name);
        }
        EditOperation::Set { value, comment } => {
            let comment = match comment {
                Some(c) => c,
                None => session
                    .file(id)
                    .and_then(|f| f.find_entry(&name))
                    .map(|e| e.comment.clone())
                    .unwrap_or_default(),
            };
            session
                .edit_entry(id, &name, &value, &comment)
                .map_err(|e| e.to_string())?;
            println!("✅ Updated '{}' in {}", name, file_name);
        }
        EditOperation::Remove => {
            session.delete_entry(id, &name).map_err(|e| e.to_string())?;
            println!("✅ Removed '{}' from {}", name, file_name);
        }
    }

    let export = session.export(id).map_err(|e| e.to_string())?;
    let target = output.as_ref().unwrap_or(&input);
    std::fs::write(target, export.content)
        .map_err(|e| format!("Error writing {}: {}", target, e))?;
    session.mark_saved(id).map_err(|e| e.to_string())?;

    if let Some(out) = &output {
        println!("📄 Wrote changes to {}", out);
    } else {
        println!("📄 Updated {} in place", input);
    }
    Ok(())
}
