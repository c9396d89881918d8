//! The generic Cyclist core: phase tracking, the `up`/`down` block primitives, and the
//! multi-block `absorb_any`/`squeeze_any`/`absorb_key`/`crypt` operations built on top of them.
//!
//! This module is parameterized over any [`Permutation`] of a given byte width so that the
//! absorb/squeeze rhythm, phase bookkeeping, and domain-separation plumbing are written once;
//! [`crate::xoodyak`] wires it to [`crate::xoodoo::Xoodoo`] with the rates and colors the
//! Xoodyak suite specifies.

use core::marker::PhantomData;

use zeroize::ZeroizeOnDrop;

use crate::Permutation;

/// The core implementation of the Cyclist mode. Parameterized with the permutation algorithm,
/// the permutation width, whether the mode is keyed, and the absorb/squeeze rates.
///
/// `KEYED` is `cyclist`'s Mode (§3 of the suite's specification): `false` selects Hash mode,
/// `true` selects Keyed mode. Folding it into a const generic rather than a runtime enum lets
/// `up`/`down` compile away the keyed-color XOR entirely in Hash-mode instantiations, per the
/// "compile-time specialization" design note.
#[derive(Clone, Debug, ZeroizeOnDrop)]
pub(crate) struct CyclistCore<
    P,
    const WIDTH: usize,
    const KEYED: bool,
    const ABSORB_RATE: usize,
    const SQUEEZE_RATE: usize,
> where
    P: Permutation<WIDTH>,
{
    state: P,
    up: bool,
    #[zeroize(skip)]
    _permutation: PhantomData<P>,
}

impl<P, const WIDTH: usize, const KEYED: bool, const ABSORB_RATE: usize, const SQUEEZE_RATE: usize>
    CyclistCore<P, WIDTH, KEYED, ABSORB_RATE, SQUEEZE_RATE>
where
    P: Permutation<WIDTH>,
{
    /// Returns a new Cyclist session: state zeroed, phase = Up.
    pub(crate) fn new() -> Self {
        debug_assert!(ABSORB_RATE.max(SQUEEZE_RATE) + 2 <= WIDTH);
        CyclistCore { state: P::default(), up: true, _permutation: PhantomData }
    }

    #[inline(always)]
    fn add_byte(&mut self, byte: u8, offset: usize) {
        self.state.as_mut()[offset] ^= byte;
    }

    #[inline(always)]
    fn add_bytes(&mut self, bytes: &[u8]) {
        for (st_byte, byte) in self.state.as_mut().iter_mut().zip(bytes) {
            *st_byte ^= byte;
        }
    }

    #[inline(always)]
    fn extract_bytes(&mut self, out: &mut [u8]) {
        out.copy_from_slice(&self.state.as_ref()[..out.len()]);
    }

    /// `up(out, cu)`: in Keyed mode, XOR `cu` into the top byte of the last lane before
    /// permuting (Hash mode never injects a color here); permute; emit `out.len()` bytes.
    #[inline(always)]
    fn up(&mut self, out: Option<&mut [u8]>, cu: u8) {
        debug_assert!(out.as_ref().map(|x| x.len()).unwrap_or(0) <= SQUEEZE_RATE);
        self.up = true;
        if KEYED {
            self.add_byte(cu, WIDTH - 1);
        }
        self.state.permute();
        if let Some(out) = out {
            self.extract_bytes(out);
        }
    }

    /// `down(bin, cd)`: XOR `bin` into the front of the state, pad with a single `0x01` byte
    /// just past the input, then XOR the color into the top byte of the last lane.
    #[inline(always)]
    fn down(&mut self, bin: Option<&[u8]>, cd: u8) {
        debug_assert!(bin.as_ref().map(|x| x.len()).unwrap_or(0) <= ABSORB_RATE);
        self.up = false;
        if let Some(bin) = bin {
            self.add_bytes(bin);
            self.add_byte(0x01, bin.len());
        } else {
            self.add_byte(0x01, 0);
        }
        if KEYED {
            self.add_byte(cd, WIDTH - 1);
        } else {
            // Hash mode only ever uses the low bit of the absorb color (Absorb_Color_Hash=0x01
            // out of the generic Absorb_Color_Keyed=0x03), so a single `absorb` call site can
            // serve both modes.
            self.add_byte(cd & 0x01, WIDTH - 1);
        }
    }

    /// `absorb_any`: flips phase to Up first if needed, then alternates `down`/`up` across
    /// `rate`-sized chunks of `bin`, with `color` on the first `down` only.
    #[inline]
    pub(crate) fn absorb_any(&mut self, bin: &[u8], rate: usize, color: u8) {
        let mut chunks_it = bin.chunks(rate);
        if !self.up {
            self.up(None, 0x00);
        }
        self.down(chunks_it.next(), color);
        for chunk in chunks_it {
            self.up(None, 0x00);
            self.down(Some(chunk), 0x00);
        }
    }

    /// `squeeze_any`: alternates `up`/`down` across `SQUEEZE_RATE`-sized chunks of `out`, with
    /// `color` on the first `up` only.
    #[inline]
    pub(crate) fn squeeze_any(&mut self, out: &mut [u8], color: u8) {
        let mut chunks_it = out.chunks_mut(SQUEEZE_RATE);
        self.up(chunks_it.next(), color);
        for chunk in chunks_it {
            self.down(None, 0x00);
            self.up(Some(chunk), 0x00);
        }
    }

    /// Absorbs `bin` using the suite's default absorb color (masked down to Hash mode's color
    /// when `KEYED` is false).
    #[inline(always)]
    pub(crate) fn absorb(&mut self, bin: &[u8]) {
        self.absorb_any(bin, ABSORB_RATE, 0x03);
    }

    /// Fills `out` with squeezed output bytes using the suite's squeeze color.
    #[inline(always)]
    pub(crate) fn squeeze_mut(&mut self, out: &mut [u8]) {
        self.squeeze_any(out, 0x40);
    }

    /// The keyed duplex crypt step: processes `in_out` in `SQUEEZE_RATE`-sized chunks, each
    /// `up` producing keystream that is XORed into the chunk in place, each subsequent `down`
    /// re-absorbing the chunk's plaintext value (the input for encryption, the just-recovered
    /// output for decryption — the state always absorbs plaintext, never ciphertext).
    #[inline]
    pub(crate) fn crypt(&mut self, in_out: &mut [u8], decrypt: bool) {
        debug_assert!(KEYED);
        let mut keystream = [0u8; SQUEEZE_RATE];
        let mut cu = 0x80;
        for chunk in in_out.chunks_mut(SQUEEZE_RATE) {
            self.up(Some(&mut keystream[..chunk.len()]), cu);
            cu = 0x00;
            if decrypt {
                for (byte, ks) in chunk.iter_mut().zip(&keystream) {
                    *byte ^= ks;
                }
                self.down(Some(chunk), 0x00);
            } else {
                self.down(Some(chunk), 0x00);
                for (byte, ks) in chunk.iter_mut().zip(&keystream) {
                    *byte ^= ks;
                }
            }
        }
    }
}

/// A Cyclist object in Hash mode. Parameterized with the permutation, its width, and the hash
/// rate (absorb and squeeze use the same rate in Hash mode).
#[derive(Clone, Debug)]
pub struct CyclistHash<P, const WIDTH: usize, const HASH_RATE: usize>
where
    P: Permutation<WIDTH>,
{
    core: CyclistCore<P, WIDTH, false, HASH_RATE, HASH_RATE>,
}

impl<P, const WIDTH: usize, const HASH_RATE: usize> Default for CyclistHash<P, WIDTH, HASH_RATE>
where
    P: Permutation<WIDTH>,
{
    fn default() -> Self {
        CyclistHash { core: CyclistCore::new() }
    }
}

impl<P, const WIDTH: usize, const HASH_RATE: usize> CyclistHash<P, WIDTH, HASH_RATE>
where
    P: Permutation<WIDTH>,
{
    /// Absorbs the given slice.
    pub fn absorb(&mut self, bin: &[u8]) {
        self.core.absorb(bin);
    }

    /// Fills the given mutable slice with squeezed data.
    pub fn squeeze_mut(&mut self, out: &mut [u8]) {
        self.core.squeeze_mut(out);
    }

    /// Returns `n` bytes of squeezed data.
    #[cfg(feature = "std")]
    pub fn squeeze(&mut self, n: usize) -> Vec<u8> {
        let mut b = vec![0u8; n];
        self.squeeze_mut(&mut b);
        b
    }
}

/// A Cyclist object in Keyed mode. Parameterized with the permutation, its width, the absorb
/// rate, the squeeze rate, and the authentication tag length.
///
/// Construction (`absorb_key`) and the crypt rhythm follow the generic Cyclist operations in
/// [`CyclistCore`]; the exact key/nonce framing absorbed at construction time is Xoodyak's own
/// (see [`crate::xoodyak`]), not a generic Strobe-style key/key-id/counter scheme, since that
/// generality has no use in this suite.
#[derive(Clone, Debug)]
pub struct CyclistKeyed<
    P,
    const WIDTH: usize,
    const ABSORB_RATE: usize,
    const SQUEEZE_RATE: usize,
    const TAG_LEN: usize,
> where
    P: Permutation<WIDTH>,
{
    core: CyclistCore<P, WIDTH, true, ABSORB_RATE, SQUEEZE_RATE>,
}

impl<P, const WIDTH: usize, const ABSORB_RATE: usize, const SQUEEZE_RATE: usize, const TAG_LEN: usize>
    CyclistKeyed<P, WIDTH, ABSORB_RATE, SQUEEZE_RATE, TAG_LEN>
where
    P: Permutation<WIDTH>,
{
    /// Creates a new keyed session and absorbs the given key-framing buffer (already built by
    /// the caller, e.g. Xoodyak's `key || nonce || len(nonce)`) with the given absorb color.
    pub(crate) fn new(key_frame: &[u8], color: u8) -> Self {
        let mut core = CyclistCore::<P, WIDTH, true, ABSORB_RATE, SQUEEZE_RATE>::new();
        core.absorb_any(key_frame, ABSORB_RATE, color);
        CyclistKeyed { core }
    }

    /// Absorbs the given slice (e.g. associated data).
    pub fn absorb(&mut self, bin: &[u8]) {
        self.core.absorb(bin);
    }

    /// Fills the given mutable slice with squeezed data (e.g. a tag).
    pub fn squeeze_mut(&mut self, out: &mut [u8]) {
        self.core.squeeze_mut(out);
    }

    /// Encrypts `in_out` in place: duplexes plaintext in, ciphertext out.
    pub fn encrypt_mut(&mut self, in_out: &mut [u8]) {
        self.core.crypt(in_out, false);
    }

    /// Decrypts `in_out` in place: duplexes ciphertext in, plaintext out.
    pub fn decrypt_mut(&mut self, in_out: &mut [u8]) {
        self.core.crypt(in_out, true);
    }
}
