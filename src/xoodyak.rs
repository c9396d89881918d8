//! Xoodyak: the suite's rates, domain-separation colors, and the public `hash`/`encrypt`/
//! `decrypt` facade built on top of [`crate::cyclist`] and [`crate::xoodoo::Xoodoo`].
//!
//! | Parameter | Value | Use |
//! |---|---|---|
//! | `R_HASH` | 16 | Absorb/squeeze rate in Hash mode |
//! | `R_KIN` | 44 | Absorb rate in Keyed mode |
//! | `R_KOUT` | 24 | Squeeze (and crypt) rate in Keyed mode |
//! | `ABSORB_KEY_COLOR` | `0x02` | First `down` of `absorb_key` |
//!
//! The Hash-mode absorb color (`0x01`) and Keyed-mode absorb color (`0x03`), the crypt color
//! (`0x80`), and the squeeze color (`0x40`) are baked into [`crate::cyclist::CyclistCore`]'s
//! `absorb`/`squeeze_mut`/`crypt` methods directly, since every Cyclist instantiation in this
//! crate uses them identically — see the comment on `CyclistCore::down` for how the Hash/Keyed
//! absorb color is selected by a single generic call site.

use subtle::ConstantTimeEq;

use crate::cyclist::{CyclistHash, CyclistKeyed};
use crate::xoodoo::Xoodoo;

/// Xoodoo's width in bytes: 12 lanes of 32 bits.
pub(crate) const WIDTH: usize = 384 / 8;

/// Hash mode's absorb/squeeze rate: `b - 2*128` bits of digest security.
pub(crate) const R_HASH: usize = (384 - 256) / 8;

/// Keyed mode's absorb rate: `b - W` where `W` is 32 bits.
const R_KIN: usize = (384 - 32) / 8;

/// Keyed mode's squeeze (and crypt) rate: `b - c` where `c` is 192 bits.
const R_KOUT: usize = (384 - 192) / 8;

/// The authentication tag length, in bytes.
pub const TAG_LEN: usize = 16;

/// The digest length, in bytes.
pub const DIGEST_LEN: usize = 32;

/// The fixed key length, in bytes.
pub const KEY_LEN: usize = 16;

/// The fixed nonce length, in bytes.
pub const NONCE_LEN: usize = 16;

/// The first `down`'s domain separator in `absorb_key`.
const ABSORB_KEY_COLOR: u8 = 0x02;

/// Xoodyak in Hash mode.
pub(crate) type XoodyakHash = CyclistHash<Xoodoo, WIDTH, R_HASH>;

/// Xoodyak in Keyed mode.
type XoodyakKeyed = CyclistKeyed<Xoodoo, WIDTH, R_KIN, R_KOUT, TAG_LEN>;

/// Starts a new keyed session by absorbing the `key || nonce || len(nonce)` framing buffer, as
/// Xoodyak's Keyed-mode initialization specifies (§4.4, `absorb_key`). Because `R_KIN` (44) is
/// at least the 33-byte framing buffer, this is always a single `down` block.
fn new_keyed(key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN]) -> XoodyakKeyed {
    let mut frame = [0u8; KEY_LEN + NONCE_LEN + 1];
    frame[..KEY_LEN].copy_from_slice(key);
    frame[KEY_LEN..KEY_LEN + NONCE_LEN].copy_from_slice(nonce);
    frame[KEY_LEN + NONCE_LEN] = NONCE_LEN as u8;
    XoodyakKeyed::new(&frame, ABSORB_KEY_COLOR)
}

/// Hashes `msg`, returning a 32-byte digest.
///
/// `hash(m) == hash(m)` always; digests of distinct messages differ with overwhelming
/// probability.
pub fn hash(msg: &[u8]) -> [u8; DIGEST_LEN] {
    let mut h = XoodyakHash::default();
    h.absorb(msg);
    let mut digest = [0u8; DIGEST_LEN];
    h.squeeze_mut(&mut digest);
    digest
}

/// Encrypts `in_out` in place under `key` and `nonce`, authenticating `ad`, and returns the
/// 16-byte tag. `in_out` holds plaintext on entry and ciphertext (the same length) on exit.
///
/// This is the allocation-free AEAD entry point; it is available without the `std` feature. The
/// `Vec`-returning [`encrypt`] is a convenience wrapper around it.
pub fn encrypt_mut(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ad: &[u8],
    in_out: &mut [u8],
) -> [u8; TAG_LEN] {
    let mut x = new_keyed(key, nonce);
    x.absorb(ad);
    x.encrypt_mut(in_out);
    let mut tag = [0u8; TAG_LEN];
    x.squeeze_mut(&mut tag);
    tag
}

/// Decrypts `in_out` in place under `key` and `nonce`, verifying `ad` and `tag` in constant
/// time. `in_out` holds ciphertext on entry and plaintext (the same length) on exit.
///
/// Returns `true` on successful authentication. On failure, returns `false` and `in_out` is
/// zeroed before return — the plaintext is never left visible unverified.
///
/// This is the allocation-free AEAD entry point; it is available without the `std` feature. The
/// `Vec`-returning [`decrypt`] is a convenience wrapper around it.
pub fn decrypt_mut(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    tag: &[u8; TAG_LEN],
    ad: &[u8],
    in_out: &mut [u8],
) -> bool {
    let mut x = new_keyed(key, nonce);
    x.absorb(ad);
    x.decrypt_mut(in_out);

    let mut tag_p = [0u8; TAG_LEN];
    x.squeeze_mut(&mut tag_p);

    let ok: bool = tag.ct_eq(&tag_p).into();
    if !ok {
        for byte in in_out.iter_mut() {
            *byte = 0;
        }
    }
    ok
}

/// Encrypts `pt` under `key` and `nonce`, authenticating `ad`, and returns `(ciphertext, tag)`.
/// `ciphertext.len() == pt.len()` always.
#[cfg(feature = "std")]
pub fn encrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ad: &[u8],
    pt: &[u8],
) -> (Vec<u8>, [u8; TAG_LEN]) {
    let mut ct = pt.to_vec();
    let tag = encrypt_mut(key, nonce, ad, &mut ct);
    (ct, tag)
}

/// Decrypts `ct` under `key` and `nonce`, verifying `ad` and `tag` in constant time.
///
/// On success, returns `(plaintext, true)`. On authentication failure, returns `(zeros, false)`
/// — the plaintext buffer is never returned unverified.
#[cfg(feature = "std")]
pub fn decrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    tag: &[u8; TAG_LEN],
    ad: &[u8],
    ct: &[u8],
) -> (Vec<u8>, bool) {
    let mut pt = ct.to_vec();
    let ok = decrypt_mut(key, nonce, tag, ad, &mut pt);
    (pt, ok)
}
