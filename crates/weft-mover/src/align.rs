//! Barrel-shift realignment of lane-group streams to word boundaries

use weft_core::{MemLayout, StreamReader, StreamWriter, Word};

/// Realign per-channel lane-group streams to memory-word boundaries.
///
/// For each of `layout.channels` channels, `param_in` carries the pair
/// `(dat_blocks, row_min_idx)`: the number of input lane groups and the
/// absolute lane index where the channel's data begins in memory. The
/// channel's lanes start at `row_min_idx % lanes_per_word` inside its first
/// output word; output words always begin at lane 0, so the stream is
/// barrel-shifted by that offset with carry across word boundaries, the
/// leading lanes zero-filled, and the final word completed with zero lanes.
///
/// Before any data word is emitted, `param_out` receives per channel the
/// pair `(mem_blocks, row_min_mem_idx)` with
/// `mem_blocks = ceil((start_offset + dat_blocks * par_entries) / lanes_per_word)`.
/// Exactly `mem_blocks` words are then emitted per channel; the shift loop
/// runs over a precomputed output-group count so the two can never diverge.
pub fn shift_lane_groups(
    param_in: &StreamReader<u32>,
    group_in: &StreamReader<Word>,
    layout: &MemLayout,
    param_out: &StreamWriter<u32>,
    word_out: &StreamWriter<Word>,
) {
    let par = layout.par_entries as usize;
    let lanes_per_word = layout.lanes_per_word() as usize;
    let groups_per_word = layout.groups_per_word() as usize;
    let nchan = layout.channels as usize;

    let mut dat_blocks = vec![0usize; nchan];
    let mut row_min_idx = vec![0usize; nchan];
    for i in 0..nchan {
        dat_blocks[i] = param_in.read() as usize;
        row_min_idx[i] = param_in.read() as usize;
    }

    let mut mem_blocks = vec![0usize; nchan];
    for (i, blocks) in mem_blocks.iter_mut().enumerate() {
        let start = row_min_idx[i] % lanes_per_word;
        *blocks = (start + dat_blocks[i] * par).div_ceil(lanes_per_word);
    }
    for i in 0..nchan {
        let blocks =
            u32::try_from(mem_blocks[i]).expect("mem block count overflows the param wire");
        let base = u32::try_from(row_min_idx[i] / lanes_per_word)
            .expect("word index overflows the param wire");
        param_out.write(blocks);
        param_out.write(base);
    }

    for i in 0..nchan {
        let start = row_min_idx[i] % lanes_per_word;
        let group_offset = start / par;
        let lane_shift = start % par;
        // leading zero groups of the first word are never produced by the
        // shift engine; they stay at their zero initialization
        let out_groups = mem_blocks[i] * groups_per_word - group_offset;

        let mut carry = vec![0u64; par];
        let mut out_lanes = vec![0u64; lanes_per_word];
        let mut slot = group_offset;
        for k in 0..out_groups {
            let next: Vec<u64> = if k < dat_blocks[i] {
                let group = group_in.read();
                assert_eq!(group.width(), layout.group_bits(), "lane group width off layout");
                group.to_lanes(layout.data_bits)
            } else {
                vec![0u64; par]
            };
            for j in 0..par {
                out_lanes[slot * par + j] = if j < lane_shift {
                    carry[j + par - lane_shift]
                } else {
                    next[j - lane_shift]
                };
            }
            carry.copy_from_slice(&next);
            slot += 1;
            if slot == groups_per_word {
                word_out.write(Word::from_lanes(layout.data_bits, &out_lanes));
                out_lanes.fill(0);
                slot = 0;
            }
        }
        debug_assert_eq!(slot, 0, "channel must end on a word boundary");
    }
}
