use crate::cli::{args::ConfigAction, global::GlobalArgs};
use decipher::DecipherConfig;

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    config: &DecipherConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { json } => handle_show(json, config),
        ConfigAction::Paths => handle_paths(),
    }
}

fn handle_show(json: bool, config: &DecipherConfig) -> Result<(), Box<dyn std::error::Error>> {
    let settings = &config.settings;

    if json {
        let output = serde_json::json!({
            "default_rails": settings.rails(),
            "default_key": settings.default_key,
            "output_dir": settings.output_dir(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("default_rails: {}", settings.rails());
    println!(
        "default_key:   {}",
        settings.default_key.as_deref().unwrap_or("(none)")
    );
    println!("output_dir:    {}", settings.output_dir().display());
    Ok(())
}

fn handle_paths() -> Result<(), Box<dyn std::error::Error>> {
    println!("(built-in defaults)");
    for path in DecipherConfig::search_paths() {
        let status = if path.exists() { "found" } else { "missing" };
        println!("{} [{}]", path.display(), status);
    }
    Ok(())
}
