//! Repacking between memory words and lane-group streams

use weft_core::{MemLayout, StreamReader, StreamWriter, Word};

/// Decompose `blocks` memory words into lane groups, least-significant
/// group first. Emits exactly `blocks * groups_per_word` group words.
pub fn words_to_lane_groups(
    inp: &StreamReader<Word>,
    blocks: usize,
    layout: &MemLayout,
    out: &StreamWriter<Word>,
) {
    let g = layout.group_bits();
    let n = layout.groups_per_word();
    for _ in 0..blocks {
        let w = inp.read();
        assert_eq!(w.width(), layout.mem_bits, "input word width off layout");
        for j in 0..n {
            out.write(w.range(j * g, (j + 1) * g));
        }
    }
}

/// Exact inverse of [`words_to_lane_groups`]: collect `groups_per_word`
/// lane groups per word, writing each at its bit position. Consumes exactly
/// `blocks * groups_per_word` group words.
pub fn lane_groups_to_words(
    inp: &StreamReader<Word>,
    blocks: usize,
    layout: &MemLayout,
    out: &StreamWriter<Word>,
) {
    let g = layout.group_bits();
    let n = layout.groups_per_word();
    for _ in 0..blocks {
        let mut w = Word::zero(layout.mem_bits);
        for j in 0..n {
            let group = inp.read();
            assert_eq!(group.width(), g, "lane group width off layout");
            w.set_range(j * g, &group);
        }
        out.write(w);
    }
}

/// Drain one word per destination slot, in index order.
pub fn store_mem_blocks(inp: &StreamReader<Word>, dst: &mut [Word]) {
    for slot in dst {
        *slot = inp.read();
    }
}
