use alloy::signers::local::PrivateKeySigner;
use anyhow::{Result, anyhow};
use tracing::debug;

/// Parse a hex-encoded secp256k1 private key, with or without `0x`.
pub fn signer_from_hex(raw: &str) -> Result<PrivateKeySigner> {
    let key = raw.trim();
    let key = key.strip_prefix("0x").unwrap_or(key);
    let bytes = hex::decode(key).map_err(|e| anyhow!("PRIVATE_KEY is not valid hex: {}", e))?;
    if bytes.len() != 32 {
        return Err(anyhow!(
            "PRIVATE_KEY must be 32 bytes, got {}",
            bytes.len()
        ));
    }
    let signer = PrivateKeySigner::from_slice(&bytes)
        .map_err(|e| anyhow!("PRIVATE_KEY rejected: {}", e))?;
    debug!("Loaded signer for address {}", signer.address());
    Ok(signer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const KEY_ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";

    #[test]
    fn test_known_key_address() {
        let signer = signer_from_hex(KEY_ONE).unwrap();
        assert_eq!(
            signer.address(),
            address!("7E5F4552091A69125d5DfCb7b8C2659029395Bdf")
        );
    }

    #[test]
    fn test_prefix_is_optional() {
        let a = signer_from_hex(KEY_ONE).unwrap();
        let b = signer_from_hex(&format!("0x{}", KEY_ONE)).unwrap();
        assert_eq!(a.address(), b.address());
    }

    #[test]
    fn test_bad_keys() {
        assert!(signer_from_hex("0x1234").is_err());
        assert!(signer_from_hex("zz").is_err());
        assert!(signer_from_hex(&"00".repeat(32)).is_err());
    }
}
