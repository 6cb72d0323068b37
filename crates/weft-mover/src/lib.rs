//! Memory-movement kernels for the Weft CSC pipeline (pure Rust)
//!
//! Converts between wide memory words in flat buffers and ordered lanes of
//! fixed-width values, realigns lane streams to arbitrary starting offsets,
//! and merges partial results back into memory lane-wise.

pub mod align;
pub mod codec;
pub mod params;
pub mod pipeline;
pub mod repack;
pub mod writer;

pub use align::shift_lane_groups;
pub use codec::{
    buffer_trans_cols, compose_halves, compose_lanes, load_col_val_ptr_blocks, load_mem_blocks,
    load_nnz_idx, split_halves, split_lanes, unfuse_col_val_ptr,
};
pub use params::{read_col_vec, read_nnz_col};
pub use pipeline::{run_row_accumulate, ChannelSpan};
pub use repack::{lane_groups_to_words, store_mem_blocks, words_to_lane_groups};
pub use writer::{accumulate_mem, add_lanes};
