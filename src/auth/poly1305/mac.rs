use zeroize::Zeroize;

use super::field::Accumulator;

/// Size of a Poly1305 one-time key in bytes.
pub const KEY_LEN: usize = 32;

/// Size of a Poly1305 tag in bytes.
pub const TAG_LEN: usize = 16;

const CHUNK_LEN: usize = 16;

/// Incremental Poly1305 state.
///
/// The one-time key must never be used for a second message. A fresh
/// instance is needed per message; [`finalize`](Self::finalize) consumes
/// the state.
///
/// All secret state (`r`, `s`, the accumulator and any buffered partial
/// chunk) is wiped when the value is dropped.
pub struct Poly1305 {
    /// Clamped polynomial key.
    r: Accumulator,

    /// Running accumulator `h`.
    h: Accumulator,

    /// Final additive key, zero-extended.
    s: Accumulator,

    /// Bytes not yet forming a complete chunk.
    buffer: [u8; CHUNK_LEN],
    buffered: usize,
}

impl Poly1305 {
    /// Creates a new instance from a 32-byte one-time key.
    ///
    /// `key[0..16]` is clamped into `r`; `key[16..32]` is `s`.
    pub fn new(key: &[u8; KEY_LEN]) -> Self {
        let mut r = [0u8; 16];
        r.copy_from_slice(&key[..16]);
        let mut s = [0u8; 16];
        s.copy_from_slice(&key[16..]);

        let state = Poly1305 {
            r: Accumulator::clamped(&r),
            h: Accumulator::ZERO,
            s: Accumulator::from_bytes(&s),
            buffer: [0u8; CHUNK_LEN],
            buffered: 0,
        };

        r.zeroize();
        s.zeroize();
        state
    }

    /// Absorbs one chunk of at most 16 bytes:
    ///
    /// ```text
    /// h = (h + chunk || 0x01) * r  mod 2^130 - 5
    /// ```
    fn absorb(&mut self, chunk: &[u8]) {
        let mut c = Accumulator::from_chunk(chunk);
        self.h.add(&c);
        self.h.mul_mod(&self.r);
        c.zeroize();
    }

    /// Feeds message bytes.
    ///
    /// Splitting a message across several calls gives the same tag as
    /// passing it at once; only the last chunk of the whole message is
    /// padded as a short chunk.
    pub fn update(&mut self, mut data: &[u8]) {
        if self.buffered > 0 {
            let take = (CHUNK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < CHUNK_LEN {
                return;
            }

            let chunk = self.buffer;
            self.absorb(&chunk);
            self.buffered = 0;
        }

        let mut chunks = data.chunks_exact(CHUNK_LEN);
        for chunk in &mut chunks {
            self.absorb(chunk);
        }

        let rest = chunks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Completes the computation and returns the tag.
    ///
    /// Absorbs any buffered bytes, reduces `h` fully modulo 2^130 - 5 and
    /// adds `s`. The result is truncated to 128 bits.
    pub fn finalize(mut self) -> [u8; TAG_LEN] {
        if self.buffered > 0 {
            let chunk = self.buffer;
            let len = self.buffered;
            self.absorb(&chunk[..len]);
            self.buffered = 0;
        }

        self.h.freeze();
        let s = self.s;
        self.h.add(&s);
        self.h.to_bytes()
    }
}

impl Drop for Poly1305 {
    fn drop(&mut self) {
        self.r.zeroize();
        self.h.zeroize();
        self.s.zeroize();
        self.buffer.zeroize();
    }
}
