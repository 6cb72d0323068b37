//! Read-modify-add-write of per-channel memory windows

use weft_core::{MemLayout, StreamReader, Word};
use wide::u32x8;

/// Accumulate aligned per-channel word streams into memory.
///
/// `param_in` carries per channel the pair `(mem_blocks, base_idx)` produced
/// by the aligner. Every channel's window `mem[base_idx .. base_idx + mem_blocks]`
/// is snapshotted before any write happens, then for each window word one
/// incoming word is consumed, added lane-wise against the snapshot and
/// written back at the same index. Lane adds are native fixed-width wrapping
/// integer adds; no saturation. Channel windows must not overlap (caller
/// contract, unchecked).
pub fn accumulate_mem(
    param_in: &StreamReader<u32>,
    word_in: &StreamReader<Word>,
    layout: &MemLayout,
    mem: &mut [Word],
) {
    let nchan = layout.channels as usize;
    let mut mem_blocks = vec![0usize; nchan];
    let mut base_idx = vec![0usize; nchan];
    for i in 0..nchan {
        mem_blocks[i] = param_in.read() as usize;
        base_idx[i] = param_in.read() as usize;
        assert!(
            base_idx[i] + mem_blocks[i] <= mem.len(),
            "channel window exceeds the memory buffer"
        );
    }

    // read phase: every window is captured before the first write, so a
    // channel never observes its own mutated contents within the pass
    let mut store: Vec<Word> = Vec::with_capacity(mem_blocks.iter().sum());
    for i in 0..nchan {
        for j in 0..mem_blocks[i] {
            store.push(mem[base_idx[i] + j].clone());
        }
    }

    let mut base = 0usize;
    for i in 0..nchan {
        for j in 0..mem_blocks[i] {
            let incoming = word_in.read();
            assert_eq!(incoming.width(), layout.mem_bits, "input word width off layout");
            mem[base_idx[i] + j] = add_lanes(&incoming, &store[base + j], layout.data_bits);
        }
        base += mem_blocks[i];
    }
}

/// Lane-wise wrapping add of two equal-width words.
#[must_use]
pub fn add_lanes(a: &Word, b: &Word, lane_bits: u32) -> Word {
    assert_eq!(a.width(), b.width(), "words must be equal width");
    if lane_bits == 32 {
        return add_lanes_u32(a, b);
    }
    let n = a.width() / lane_bits;
    let mut out = Word::zero(a.width());
    for i in 0..n {
        let sum = a.lane(lane_bits, i).wrapping_add(b.lane(lane_bits, i));
        // set_bits truncates to the lane width, giving native wraparound
        out.set_lane(lane_bits, i, sum);
    }
    out
}

#[allow(clippy::cast_possible_truncation)]
fn add_lanes_u32(a: &Word, b: &Word) -> Word {
    let la = a.to_lanes(32);
    let lb = b.to_lanes(32);
    let mut out = vec![0u64; la.len()];
    let mut i = 0usize;
    let limit8 = la.len() & !7;
    while i < limit8 {
        let va = u32x8::from([
            la[i] as u32,
            la[i + 1] as u32,
            la[i + 2] as u32,
            la[i + 3] as u32,
            la[i + 4] as u32,
            la[i + 5] as u32,
            la[i + 6] as u32,
            la[i + 7] as u32,
        ]);
        let vb = u32x8::from([
            lb[i] as u32,
            lb[i + 1] as u32,
            lb[i + 2] as u32,
            lb[i + 3] as u32,
            lb[i + 4] as u32,
            lb[i + 5] as u32,
            lb[i + 6] as u32,
            lb[i + 7] as u32,
        ]);
        let sum = (va + vb).to_array();
        for k in 0..8 {
            out[i + k] = u64::from(sum[k]);
        }
        i += 8;
    }
    while i < la.len() {
        out[i] = u64::from((la[i] as u32).wrapping_add(lb[i] as u32));
        i += 1;
    }
    Word::from_lanes(32, &out)
}
