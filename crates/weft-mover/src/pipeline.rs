//! Stage wiring for the row-result merge path
//
// Stages block only at stream boundaries, so the aligner runs on its own
// scoped thread and may work ahead of the writer on unbounded conduits.

use std::thread;

use crate::align::shift_lane_groups;
use crate::writer::accumulate_mem;
use weft_core::{stream, MemLayout, StreamReader, Word};

/// Per-channel shift parameters for the row merge pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ChannelSpan {
    /// Lane groups of partial results the channel contributes.
    pub dat_blocks: u32,
    /// Absolute lane index where the channel's window begins in memory.
    pub row_min_idx: u32,
}

/// Realign per-channel lane-group streams and accumulate them into `mem`.
///
/// Wires [`shift_lane_groups`] into [`accumulate_mem`]: the aligner derives
/// each channel's word count and base index from `spans` and publishes them
/// to the writer alongside the boundary-aligned words.
pub fn run_row_accumulate(
    layout: &MemLayout,
    spans: &[ChannelSpan],
    group_in: &StreamReader<Word>,
    mem: &mut [Word],
) {
    assert_eq!(
        spans.len(),
        layout.channels as usize,
        "one span per channel required"
    );

    let (param_tx, param_rx) = stream::<u32>();
    for s in spans {
        param_tx.write(s.dat_blocks);
        param_tx.write(s.row_min_idx);
    }
    drop(param_tx);

    let (aligned_param_tx, aligned_param_rx) = stream::<u32>();
    let (word_tx, word_rx) = stream::<Word>();
    thread::scope(|scope| {
        scope.spawn(|| {
            shift_lane_groups(&param_rx, group_in, layout, &aligned_param_tx, &word_tx);
        });
        // the writer runs on the caller's thread, which owns the buffer
        accumulate_mem(&aligned_param_rx, &word_rx, layout, mem);
    });
}
