use crate::cli::{args::ListArgs, global::GlobalArgs};
use decipher::AlgorithmId;
use serde::Serialize;

#[derive(Serialize)]
struct AlgorithmEntry {
    name: &'static str,
    label: &'static str,
    involution: bool,
    parameter: Option<&'static str>,
    description: &'static str,
}

impl From<AlgorithmId> for AlgorithmEntry {
    fn from(id: AlgorithmId) -> Self {
        AlgorithmEntry {
            name: id.as_str(),
            label: id.label(),
            involution: id.is_involution(),
            parameter: id.parameter(),
            description: id.description(),
        }
    }
}

pub fn handle(args: ListArgs, _global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<AlgorithmEntry> = AlgorithmId::ALL.into_iter().map(Into::into).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Available algorithms:\n");
    for entry in &entries {
        let modes = if entry.involution {
            "self-inverse"
        } else {
            "encode/decode"
        };
        let param = entry
            .parameter
            .map(|p| format!("--{}", p))
            .unwrap_or_default();
        println!(
            "  {:<10} {:<13} {:<8} {}",
            entry.name, modes, param, entry.description
        );
    }
    Ok(())
}
