use alloy::dyn_abi::{DynSolType, DynSolValue, JsonAbiExt, Specifier};
use alloy::json_abi::{Function, JsonAbi};
use anyhow::{Result, anyhow};
use std::path::Path;
use tracing::debug;

/// Load a contract ABI from disk.
///
/// Accepts either a bare ABI array or a compiler artifact that keeps the
/// ABI under an `abi` key (Hardhat/Foundry output).
pub fn load_abi(path: &Path) -> Result<JsonAbi> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read ABI file {}: {}", path.display(), e))?;
    let abi = parse_abi(&raw)?;
    debug!(
        "Loaded ABI from {} ({} functions)",
        path.display(),
        abi.functions().count()
    );
    Ok(abi)
}

pub fn parse_abi(raw: &str) -> Result<JsonAbi> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let abi_value = match value {
        serde_json::Value::Object(mut artifact) => artifact
            .remove("abi")
            .ok_or_else(|| anyhow!("ABI artifact has no 'abi' field"))?,
        other => other,
    };
    Ok(serde_json::from_value(abi_value)?)
}

/// Pick the overload of `name` whose arity matches `arg_count`.
pub fn find_function<'a>(abi: &'a JsonAbi, name: &str, arg_count: usize) -> Result<&'a Function> {
    let overloads = abi
        .function(name)
        .ok_or_else(|| anyhow!("Function '{}' not found in ABI", name))?;
    overloads
        .iter()
        .find(|f| f.inputs.len() == arg_count)
        .ok_or_else(|| {
            anyhow!(
                "Function '{}' does not take {} argument(s)",
                name,
                arg_count
            )
        })
}

/// ABI-encode calldata for `name(args...)`, coercing each string argument
/// to the declared input type.
pub fn encode_call(abi: &JsonAbi, name: &str, args: &[String]) -> Result<Vec<u8>> {
    let function = find_function(abi, name, args.len())?;

    let mut values: Vec<DynSolValue> = Vec::with_capacity(args.len());
    for (param, arg) in function.inputs.iter().zip(args) {
        let ty: DynSolType = param.resolve()?;
        let value = ty
            .coerce_str(arg)
            .map_err(|e| anyhow!("Argument '{}' is not a valid {}: {}", arg, param.ty, e))?;
        values.push(value);
    }

    let calldata = function.abi_encode_input(&values)?;
    debug!(
        "Encoded {}: selector=0x{}, {} bytes",
        function.signature(),
        hex::encode(function.selector()),
        calldata.len()
    );
    Ok(calldata)
}
