use resxkit::{classify, language_display_name};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClassifiedName {
    pub file_name: String,
    pub base_name: String,
    pub locale_tag: String,
    pub display_name: String,
}

pub fn classify_names(names: &[String]) -> Vec<ClassifiedName> {
    names
        .iter()
        .map(|name| {
            let c = classify(name);
            let display_name = if c.is_default() {
                "Default".to_string()
            } else {
                language_display_name(&c.locale_tag)
            };
            ClassifiedName {
                file_name: name.clone(),
                base_name: c.base_name,
                locale_tag: c.locale_tag,
                display_name,
            }
        })
        .collect()
}

/// Run the classify command: show how file names split into base and locale.
pub fn run_classify_command(names: Vec<String>, json: bool) -> Result<(), String> {
    let classified = classify_names(&names);

    if json {
        let out = serde_json::to_string_pretty(&classified)
            .map_err(|e| format!("Error serializing to JSON: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    for c in &classified {
        println!(
            "{} → {} / {} ({})",
            c.file_name, c.base_name, c.locale_tag, c.display_name
        );
    }
    Ok(())
}
