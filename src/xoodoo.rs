//! The Xoodoo permutation: a 12-round bijection over a 384-bit (12-lane, 32-bit) state.
//!
//! Each round applies, in order, θ (column mixing), ρ_west (lane rotation), ι (round-constant
//! injection), χ (non-linear layer), and ρ_east (lane rotation). The implementation below keeps
//! the 12 lanes in registers for the duration of a round rather than indexing a `[u32; 12]`
//! array, which lets the compiler schedule the independent planes without aliasing concerns;
//! the algebra is unchanged from the four-step description in the permutation's specification.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::Zeroize;

use crate::Permutation;

/// The Xoodoo\[12\] permutation state: 12 lanes of 32 bits, addressed as 48 little-endian bytes.
#[derive(Clone, Debug)]
#[repr(align(4))]
pub struct Xoodoo([u8; 48]);

impl Default for Xoodoo {
    fn default() -> Self {
        Xoodoo([0u8; 48])
    }
}

impl AsRef<[u8; 48]> for Xoodoo {
    fn as_ref(&self) -> &[u8; 48] {
        &self.0
    }
}

impl AsMut<[u8; 48]> for Xoodoo {
    fn as_mut(&mut self) -> &mut [u8; 48] {
        &mut self.0
    }
}

impl Zeroize for Xoodoo {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Round constants, one per round, XORed into lane 0 by ι.
const ROUND_KEYS: [u32; 12] = [
    0x00000058, 0x00000038, 0x000003C0, 0x000000D0, 0x00000120, 0x00000014, 0x00000060,
    0x0000002C, 0x00000380, 0x000000F0, 0x000001A0, 0x00000012,
];

impl Permutation<48> for Xoodoo {
    #[inline(always)]
    fn permute(&mut self) {
        let mut lanes = [0u32; 12];
        LittleEndian::read_u32_into(&self.0, &mut lanes);

        let mut st00 = lanes[0];
        let mut st01 = lanes[1];
        let mut st02 = lanes[2];
        let mut st03 = lanes[3];
        let mut st04 = lanes[4];
        let mut st05 = lanes[5];
        let mut st06 = lanes[6];
        let mut st07 = lanes[7];
        let mut st08 = lanes[8];
        let mut st09 = lanes[9];
        let mut st10 = lanes[10];
        let mut st11 = lanes[11];

        for &round_key in &ROUND_KEYS {
            // θ: column parity and its doubly-rotated mix.
            let p0 = st00 ^ st04 ^ st08;
            let p1 = st01 ^ st05 ^ st09;
            let p2 = st02 ^ st06 ^ st10;
            let p3 = st03 ^ st07 ^ st11;

            let e0 = p3.rotate_left(5) ^ p3.rotate_left(14);
            let e1 = p0.rotate_left(5) ^ p0.rotate_left(14);
            let e2 = p1.rotate_left(5) ^ p1.rotate_left(14);
            let e3 = p2.rotate_left(5) ^ p2.rotate_left(14);

            // θ mix (+ ι on lane 0), with ρ_west folded into the χ inputs.
            let tmp0 = e0 ^ st00 ^ round_key;
            let tmp1 = e1 ^ st01;
            let tmp2 = e2 ^ st02;
            let tmp3 = e3 ^ st03;
            let tmp4 = e3 ^ st07;
            let tmp5 = e0 ^ st04;
            let tmp6 = e1 ^ st05;
            let tmp7 = e2 ^ st06;
            let tmp8 = (e0 ^ st08).rotate_left(11);
            let tmp9 = (e1 ^ st09).rotate_left(11);
            let tmp10 = (e2 ^ st10).rotate_left(11);
            let tmp11 = (e3 ^ st11).rotate_left(11);

            // χ, plane 0.
            st00 = (!tmp4 & tmp8) ^ tmp0;
            st01 = (!tmp5 & tmp9) ^ tmp1;
            st02 = (!tmp6 & tmp10) ^ tmp2;
            st03 = (!tmp7 & tmp11) ^ tmp3;

            // χ, plane 1, with ρ_east's bit rotation (v=1).
            st04 = ((!tmp8 & tmp0) ^ tmp4).rotate_left(1);
            st05 = ((!tmp9 & tmp1) ^ tmp5).rotate_left(1);
            st06 = ((!tmp10 & tmp2) ^ tmp6).rotate_left(1);
            st07 = ((!tmp11 & tmp3) ^ tmp7).rotate_left(1);

            // χ, plane 2, with ρ_east's position swap (t=2) and bit rotation (v=8).
            st08 = ((!tmp2 & tmp6) ^ tmp10).rotate_left(8);
            st09 = ((!tmp3 & tmp7) ^ tmp11).rotate_left(8);
            st10 = ((!tmp0 & tmp4) ^ tmp8).rotate_left(8);
            st11 = ((!tmp1 & tmp5) ^ tmp9).rotate_left(8);
        }

        lanes[0] = st00;
        lanes[1] = st01;
        lanes[2] = st02;
        lanes[3] = st03;
        lanes[4] = st04;
        lanes[5] = st05;
        lanes[6] = st06;
        lanes[7] = st07;
        lanes[8] = st08;
        lanes[9] = st09;
        lanes[10] = st10;
        lanes[11] = st11;

        LittleEndian::write_u32_into(&lanes, &mut self.0);
    }
}
