//! MD4 message digest, per the RSA Data Security, Inc. MD4 Message-Digest
//! Algorithm (RFC 1320): https://tools.ietf.org/html/rfc1320
//!
//! MD4 is thoroughly broken as a cryptographic hash; it survives here only
//! because the NT hash is defined as MD4 over the UTF-16LE password.
use byteorder::{ByteOrder, LittleEndian};

/// Streaming MD4 state: running chain value, byte count, partial block.
pub struct Md4 {
    state: [u32; 4],
    count: u64,
    buffer: [u8; 64],
}

/// Word schedule per round: round 1 walks the block in order, round 2
/// column-major, round 3 follows the fixed RFC permutation.
const K1: [usize; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
const K2: [usize; 16] = [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15];
const K3: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];

/// Register updated per step within a round: A, D, C, B.
const TARGET: [usize; 4] = [0, 3, 2, 1];

/// Left-rotation amounts, cycled every four steps within a round.
const S1: [u32; 4] = [3, 7, 11, 19];
const S2: [u32; 4] = [3, 5, 9, 13];
const S3: [u32; 4] = [3, 9, 11, 15];

const ROUND2_CONST: u32 = 0x5a827999;
const ROUND3_CONST: u32 = 0x6ed9eba1;

static PADDING: &[u8; 64] = &[
    0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0,
];

#[inline]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// One 16-step round. Steps hit the registers in `TARGET` rotation;
/// the nonlinear function takes the other three in chain order.
fn round(
    regs: &mut [u32; 4],
    x: &[u32; 16],
    order: &[usize; 16],
    shifts: &[u32; 4],
    k: u32,
    func: fn(u32, u32, u32) -> u32,
) {
    for i in 0..16 {
        let t = TARGET[i % 4];
        let sum = regs[t]
            .wrapping_add(func(regs[(t + 1) % 4], regs[(t + 2) % 4], regs[(t + 3) % 4]))
            .wrapping_add(x[order[i]])
            .wrapping_add(k);
        regs[t] = sum.rotate_left(shifts[i % 4]);
    }
}

impl Md4 {
    /// begins a MD4 operation
    pub fn new() -> Md4 {
        Md4 {
            count: 0,
            // magic initialization constants
            state: [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476],
            buffer: [0u8; 64],
        }
    }

    /// One-shot digest of a complete message.
    #[inline]
    pub fn digest(bytes: &[u8]) -> [u8; 16] {
        let mut md4 = Md4::new();
        md4.update(bytes);
        md4.finish()
    }

    pub fn update(&mut self, input: &[u8]) {
        // bytes already buffered mod 64
        let index = (self.count % 64) as usize;
        self.count = self.count.wrapping_add(input.len() as u64);

        let part_len = 64 - index;

        // transform as many full blocks as possible
        let mut i = 0;
        if input.len() >= part_len {
            self.buffer[index..].copy_from_slice(&input[..part_len]);
            let block = self.buffer;
            self.transform(&block);
            i = part_len;

            while i + 64 <= input.len() {
                let mut block = [0u8; 64];
                block.copy_from_slice(&input[i..i + 64]);
                self.transform(&block);
                i += 64;
            }
        }

        // buffer the remaining input
        let rest = input.len() - i;
        let index = (self.count % 64) as usize - rest;
        self.buffer[index..index + rest].copy_from_slice(&input[i..]);
    }

    fn transform(&mut self, block: &[u8; 64]) {
        let mut x = [0u32; 16];
        LittleEndian::read_u32_into(block, &mut x);

        let mut regs = self.state;
        round(&mut regs, &x, &K1, &S1, 0, f);
        round(&mut regs, &x, &K2, &S2, ROUND2_CONST, g);
        round(&mut regs, &x, &K3, &S3, ROUND3_CONST, h);

        for (s, r) in self.state.iter_mut().zip(regs.iter()) {
            *s = s.wrapping_add(*r);
        }
    }

    pub fn finish(mut self) -> [u8; 16] {
        // save number of bits (mod 2^64) before padding
        let mut bits = [0u8; 8];
        LittleEndian::write_u64(&mut bits, self.count.wrapping_mul(8));

        // pad out to 56 mod 64, then append the length
        let index = (self.count % 64) as usize;
        let pad_len = if index < 56 { 56 - index } else { 120 - index };
        self.update(&PADDING[..pad_len]);
        self.update(&bits);

        let mut digest = [0u8; 16];
        LittleEndian::write_u32_into(&self.state, &mut digest);
        digest
    }
}

impl Default for Md4 {
    fn default() -> Md4 {
        Md4::new()
    }
}
