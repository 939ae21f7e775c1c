//! Stream ciphers.
//!
//! Currently provides the Salsa20 family. Keystream generation is
//! deterministic in `(key, nonce)`; reusing that pair for two messages
//! leaks their XOR and must be prevented by the caller.

pub mod salsa20;

pub use salsa20::core::{hsalsa20, salsa20_block};
pub use salsa20::{stream, stream_xor, stream_xor_in_place, stream_xor_skip32};

#[cfg(feature = "xsalsa20")]
pub use salsa20::{xsalsa20_stream, xsalsa20_stream_xor, xsalsa20_stream_xor_skip32};
