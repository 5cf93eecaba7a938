use crate::cli::{args::TransformArgs, global::GlobalArgs};
use decipher::{AlgorithmId, CodecRequest, DecipherConfig, Mode, parse_rails};
use std::path::PathBuf;

/// Standard layers plus `--config`, if given.
pub fn load_config(global: &GlobalArgs) -> Result<DecipherConfig, Box<dyn std::error::Error>> {
    let config = DecipherConfig::load_with_overrides()?;
    match &global.config {
        Some(path) => config.with_file(path),
        None => Ok(config),
    }
}

/// Builds the engine request, filling omitted parameters from settings.
///
/// A `--rails` value that does not parse as a number is treated the same as
/// an absent one.
pub fn build_request(
    mode: Mode,
    args: &TransformArgs,
    input: String,
    config: &DecipherConfig,
) -> CodecRequest {
    let settings = &config.settings;

    let rails = args
        .rails
        .as_deref()
        .and_then(parse_rails)
        .unwrap_or(settings.rails() as i64);

    let mut request = CodecRequest::new(&args.algorithm, input)
        .with_mode(mode)
        .with_rails(rails);

    if let Some(key) = args.key.as_ref().or(settings.default_key.as_ref()) {
        request = request.with_key(key.clone());
    }
    request
}

/// `decipher-<algorithm>-<mode>.txt` under the configured output directory.
pub fn save_path(algorithm: AlgorithmId, mode: Mode, config: &DecipherConfig) -> PathBuf {
    config
        .settings
        .output_dir()
        .join(format!("decipher-{}-{}.txt", algorithm.as_str(), mode.as_str()))
}
