//! Stateless bitfield transforms on single memory words, and the loaders
//! that apply them to whole buffers.

use weft_core::{MemLayout, StreamReader, StreamWriter, Word};

/// Split a word into its low half `[0, W/2)` and high half `[W/2, W)`.
#[must_use]
pub fn split_halves(w: &Word) -> (Word, Word) {
    assert!(w.width() % 2 == 0, "word width must be even to split halves");
    let half = w.width() / 2;
    (w.range(0, half), w.range(half, w.width()))
}

/// Exact inverse of [`split_halves`].
#[must_use]
pub fn compose_halves(low: &Word, high: &Word) -> Word {
    assert_eq!(low.width(), high.width(), "halves must be equal width");
    let mut out = Word::zero(low.width() * 2);
    out.set_range(0, low);
    out.set_range(low.width(), high);
    out
}

/// Decompose a word into lanes, least-significant lane first.
#[must_use]
pub fn split_lanes(w: &Word, lane_bits: u32) -> Vec<u64> {
    w.to_lanes(lane_bits)
}

/// Exact inverse of [`split_lanes`].
#[must_use]
pub fn compose_lanes(lane_bits: u32, lanes: &[u64]) -> Word {
    Word::from_lanes(lane_bits, lanes)
}

/// Split each packed nnz+index word into its value bus and row-index bus.
/// The high half of the word carries the values, the low half the indices.
pub fn load_nnz_idx(
    words: &[Word],
    layout: &MemLayout,
    nnz_out: &StreamWriter<Word>,
    idx_out: &StreamWriter<Word>,
) {
    assert_eq!(
        layout.half_bits(),
        layout.data_bits * layout.par_entries,
        "value bus must fill half a memory word"
    );
    assert_eq!(
        layout.half_bits(),
        layout.index_bits * layout.par_entries,
        "index bus must fill half a memory word"
    );
    for w in words {
        let (idx, nnz) = split_halves(w);
        nnz_out.write(nnz);
        idx_out.write(idx);
    }
}

/// Stream a buffer window word by word in index order.
pub fn load_mem_blocks(words: &[Word], out: &StreamWriter<Word>) {
    for w in words {
        out.write(w.clone());
    }
}

/// Stream a column-value window followed by its column-pointer window on
/// one conduit, values first.
pub fn load_col_val_ptr_blocks(vals: &[Word], ptrs: &[Word], out: &StreamWriter<Word>) {
    assert_eq!(
        vals.len(),
        ptrs.len(),
        "value and pointer windows must cover the same block count"
    );
    for w in vals {
        out.write(w.clone());
    }
    for w in ptrs {
        out.write(w.clone());
    }
}

/// Fuse buffered column-value and column-pointer words for transfer.
///
/// Reads `mem_blocks` value words then `mem_blocks` pointer words from `inp`
/// (the order [`load_col_val_ptr_blocks`] produces), then for each of the
/// first `num_trans` pairs emits exactly two words: the first combines both
/// low halves (value low, pointer high), the second both high halves.
pub fn buffer_trans_cols(
    mem_blocks: usize,
    num_trans: usize,
    inp: &StreamReader<Word>,
    out: &StreamWriter<Word>,
) {
    assert!(
        num_trans <= mem_blocks,
        "cannot transfer more column pairs than were buffered"
    );
    let mut val_buf = Vec::with_capacity(mem_blocks);
    for _ in 0..mem_blocks {
        val_buf.push(inp.read());
    }
    let mut ptr_buf = Vec::with_capacity(mem_blocks);
    for _ in 0..mem_blocks {
        ptr_buf.push(inp.read());
    }

    for (val, ptr) in val_buf.iter().zip(ptr_buf.iter()).take(num_trans) {
        let (val_lo, val_hi) = split_halves(val);
        let (ptr_lo, ptr_hi) = split_halves(ptr);
        out.write(compose_halves(&val_lo, &ptr_lo));
        out.write(compose_halves(&val_hi, &ptr_hi));
    }
}

/// Unfuse transferred column words back into value and pointer streams.
///
/// Consumer counterpart of [`buffer_trans_cols`]: for each of `blocks` fused
/// words, lane group `j` of the low half goes to `val_out` and lane group `j`
/// of the high half to `ptr_out`, pairs in ascending bit position. The half
/// assignment is the reverse of [`load_nnz_idx`]: here the low half carries
/// the values.
pub fn unfuse_col_val_ptr(
    inp: &StreamReader<Word>,
    blocks: usize,
    layout: &MemLayout,
    val_out: &StreamWriter<Word>,
    ptr_out: &StreamWriter<Word>,
) {
    assert_eq!(
        layout.data_bits, layout.index_bits,
        "value and pointer buses must be equal width"
    );
    let half = layout.half_bits();
    let bus = layout.group_bits();
    assert!(half % bus == 0, "data bus must divide half a memory word");
    let groups = half / bus;
    for _ in 0..blocks {
        let w = inp.read();
        assert_eq!(w.width(), layout.mem_bits, "input word width off layout");
        for j in 0..groups {
            val_out.write(w.range(j * bus, (j + 1) * bus));
            ptr_out.write(w.range(half + j * bus, half + (j + 1) * bus));
        }
    }
}
