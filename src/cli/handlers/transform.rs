use crate::cli::{
    args::TransformArgs,
    config::{build_request, save_path},
    global::GlobalArgs,
    input::{read_input, write_output},
};
use decipher::{AlgorithmId, DecipherConfig, Mode};
use tracing::debug;

pub fn handle(
    mode: Mode,
    args: TransformArgs,
    global: &GlobalArgs,
    config: &DecipherConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(&args, global)?;
    let request = build_request(mode, &args, input, config);

    debug!(
        algorithm = %request.algorithm,
        mode = %mode,
        input_len = request.input.len(),
        rails = ?request.rails,
        has_key = request.key.is_some(),
        "transforming"
    );

    // Nothing is written anywhere unless the whole transform succeeded
    let output = decipher::transform(&request)?;

    if args.save {
        let algorithm: AlgorithmId = request.algorithm.parse()?;
        let path = save_path(algorithm, mode, config);
        write_output(&output, Some(&path))?;
        if !global.quiet {
            eprintln!("Saved to {}", path.display());
        }
    } else {
        write_output(&output, args.output.as_deref())?;
    }

    Ok(())
}
