//! Per-channel parameter consumption and republication
//
// Parameter streams are bare u32 scalars, position-encoded: consumers must
// know the wire shape, and channel i's parameters are fully consumed before
// channel i+1's. Every block count is republished scaled to lane-group
// counts so downstream stages never see the scaling factor.

use crate::repack::words_to_lane_groups;
use weft_core::{MemLayout, StreamReader, StreamWriter, Word};

#[inline]
fn scale_blocks(blocks: u32, groups_per_word: u32) -> u32 {
    blocks
        .checked_mul(groups_per_word)
        .expect("scaled block count overflows the 32-bit param wire")
}

/// Consume the "nnz/column" wire shape: one block count per channel.
///
/// Republishes each count scaled to lane groups, then decomposes the grand
/// total of memory words from `word_in` into `group_out`.
pub fn read_nnz_col(
    param_in: &StreamReader<u32>,
    word_in: &StreamReader<Word>,
    layout: &MemLayout,
    param_out: &StreamWriter<u32>,
    group_out: &StreamWriter<Word>,
) {
    let groups = layout.groups_per_word();
    let mut total_blocks = 0usize;
    for _ in 0..layout.channels {
        let blocks = param_in.read();
        total_blocks += blocks as usize;
        param_out.write(scale_blocks(blocks, groups));
    }
    words_to_lane_groups(word_in, total_blocks, layout, group_out);
}

/// Consume the "vector" wire shape: one global block count, then per channel
/// the triple (block count, minimum index, maximum index).
///
/// Block counts are republished scaled to lane groups; index bounds pass
/// through untouched. The global count of memory words is then decomposed
/// from `word_in` into `group_out`.
pub fn read_col_vec(
    param_in: &StreamReader<u32>,
    word_in: &StreamReader<Word>,
    layout: &MemLayout,
    param_out: &StreamWriter<u32>,
    group_out: &StreamWriter<Word>,
) {
    let groups = layout.groups_per_word();
    let vec_blocks = param_in.read();
    param_out.write(scale_blocks(vec_blocks, groups));
    for _ in 0..layout.channels {
        let blocks = param_in.read();
        param_out.write(scale_blocks(blocks, groups));
        let min_idx = param_in.read();
        param_out.write(min_idx);
        let max_idx = param_in.read();
        param_out.write(max_idx);
    }
    words_to_lane_groups(word_in, vec_blocks as usize, layout, group_out);
}
