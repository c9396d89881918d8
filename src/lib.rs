//! Xoodyak: the Xoodoo permutation and the Cyclist mode of operation, wired into a
//! fixed-output cryptographic hash and an authenticated-encryption-with-associated-data
//! (AEAD) scheme.
//!
//! The crate is organized into the four layers the Xoodyak/Cyclist family itself is built
//! from, leaf to root:
//!
//! - [`xoodoo`] — the 384-bit, 12-round Xoodoo permutation.
//! - `cyclist` — the generic Cyclist core: phase tracking and the `up`/`down`/`absorb_any`/
//!   `squeeze_any`/`crypt` primitives, parameterized over any [`Permutation`]. Crate-internal:
//!   the suite's public API signatures fix the key, nonce, digest and tag lengths rather than
//!   exposing a generic streaming construction kit.
//! - [`xoodyak`] — the facade: Xoodyak's specific rates and domain-separation colors, and the
//!   public `hash`/`encrypt`/`decrypt` functions (plus their allocation-free `_mut` counterparts,
//!   which are available without the `std` feature).
#![cfg_attr(not(feature = "std"), no_std)]

pub(crate) mod cyclist;
pub mod xoodoo;
pub mod xoodyak;

#[cfg(all(test, feature = "std"))]
mod proptest_hash_transcript;

#[cfg(feature = "std")]
pub use xoodyak::{decrypt, encrypt};
pub use xoodyak::{decrypt_mut, encrypt_mut, hash};

/// A permutation bijectively maps a fixed-width block to another block of the same width.
///
/// Implementors store their state as `[u8; WIDTH]` (exposed via [`AsRef`]/[`AsMut`]) so that
/// [`cyclist::CyclistCore`] can XOR bytes into and read bytes out of it without knowing the
/// permutation's internal lane layout; only [`Permutation::permute`] needs to understand that
/// the bytes are really `WIDTH / 4` little-endian 32-bit lanes (or `WIDTH / 8` 64-bit lanes,
/// for other permutation families).
pub trait Permutation<const WIDTH: usize>:
    Default + Clone + AsRef<[u8; WIDTH]> + AsMut<[u8; WIDTH]> + zeroize::Zeroize
{
    /// Permutes `self` in place.
    fn permute(&mut self);
}
