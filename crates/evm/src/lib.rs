// Module declarations
pub mod abi;
pub mod signer;
pub mod submitter;

// Re-export commonly used types
pub use abi::{encode_call, load_abi, parse_abi};
pub use signer::signer_from_hex;
pub use submitter::EvmSubmitter;
