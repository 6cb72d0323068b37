use weft_core::{stream, MemLayout, Word};
use weft_mover::{
    buffer_trans_cols, compose_halves, load_col_val_ptr_blocks, load_mem_blocks, load_nnz_idx,
    split_halves, unfuse_col_val_ptr,
};

#[test]
fn halves_split_compose_roundtrip() {
    let lanes: Vec<u64> = (0..8).map(|i| 0x1000_0000 + i).collect();
    let w = Word::from_lanes(64, &lanes);
    let (lo, hi) = split_halves(&w);
    assert_eq!(lo.width(), 256);
    assert_eq!(lo.to_lanes(64), &lanes[..4]);
    assert_eq!(hi.to_lanes(64), &lanes[4..]);
    assert_eq!(compose_halves(&lo, &hi), w);
}

#[test]
fn nnz_idx_split_puts_values_in_high_half() {
    // 512-bit word: low half carries 8 row indices, high half 8 values
    let layout = MemLayout::new(512, 32, 32, 8, 1).unwrap();
    let idx_lanes: Vec<u64> = (0..8).map(|i| 100 + i).collect();
    let val_lanes: Vec<u64> = (0..8).map(|i| 0xAB00 + i).collect();
    let word = compose_halves(
        &Word::from_lanes(32, &idx_lanes),
        &Word::from_lanes(32, &val_lanes),
    );

    let (nnz_tx, nnz_rx) = stream();
    let (idx_tx, idx_rx) = stream();
    load_nnz_idx(&[word], &layout, &nnz_tx, &idx_tx);

    assert_eq!(nnz_rx.read().to_lanes(32), val_lanes);
    assert_eq!(idx_rx.read().to_lanes(32), idx_lanes);
}

#[test]
fn mem_blocks_stream_in_index_order() {
    let words: Vec<Word> = (1..=4u64).map(|v| Word::from_lanes(64, &[v, v + 10])).collect();
    let (tx, rx) = stream();
    load_mem_blocks(&words, &tx);
    for w in &words {
        assert_eq!(&rx.read(), w);
    }
}

#[test]
fn col_val_then_ptr_on_one_stream() {
    let vals: Vec<Word> = (0..3u64).map(|v| Word::from_lanes(64, &[v])).collect();
    let ptrs: Vec<Word> = (10..13u64).map(|v| Word::from_lanes(64, &[v])).collect();
    let (tx, rx) = stream();
    load_col_val_ptr_blocks(&vals, &ptrs, &tx);
    for w in vals.iter().chain(ptrs.iter()) {
        assert_eq!(&rx.read(), w);
    }
}

#[test]
fn buffer_trans_cols_fuses_matching_halves() {
    // 64-bit words, 32-bit halves: out0 = both low halves, out1 = both highs
    let val = Word::from_lanes(32, &[0xAAAA_1111, 0xBBBB_2222]);
    let ptr = Word::from_lanes(32, &[0xCCCC_3333, 0xDDDD_4444]);

    let (in_tx, in_rx) = stream();
    load_col_val_ptr_blocks(&[val], &[ptr], &in_tx);

    let (out_tx, out_rx) = stream();
    buffer_trans_cols(1, 1, &in_rx, &out_tx);

    assert_eq!(out_rx.read().to_lanes(32), vec![0xAAAA_1111, 0xCCCC_3333]);
    assert_eq!(out_rx.read().to_lanes(32), vec![0xBBBB_2222, 0xDDDD_4444]);
}

#[test]
fn unfuse_restores_fused_column_streams() {
    // 64-bit words, 8-bit lanes, one group per half
    let layout = MemLayout::new(64, 8, 8, 4, 1).unwrap();
    let val = Word::from_lanes(32, &[0xAAAA_1111, 0xBBBB_2222]);
    let ptr = Word::from_lanes(32, &[0xCCCC_3333, 0xDDDD_4444]);

    let (in_tx, in_rx) = stream();
    load_col_val_ptr_blocks(&[val.clone()], &[ptr.clone()], &in_tx);
    let (fused_tx, fused_rx) = stream();
    buffer_trans_cols(1, 1, &in_rx, &fused_tx);

    let (val_tx, val_rx) = stream();
    let (ptr_tx, ptr_rx) = stream();
    unfuse_col_val_ptr(&fused_rx, 2, &layout, &val_tx, &ptr_tx);

    // the two fused words give back both halves of each source word in order
    assert_eq!(compose_halves(&val_rx.read(), &val_rx.read()), val);
    assert_eq!(compose_halves(&ptr_rx.read(), &ptr_rx.read()), ptr);
}

#[test]
fn unfuse_slices_group_pairs_in_ascending_order() {
    // 512-bit words: half = 256 bits, two 128-bit groups per half
    let layout = MemLayout::new(512, 32, 32, 4, 1).unwrap();
    let lanes: Vec<u64> = (0..16).collect();
    let (tx, rx) = stream();
    tx.write(Word::from_lanes(32, &lanes));

    let (val_tx, val_rx) = stream();
    let (ptr_tx, ptr_rx) = stream();
    unfuse_col_val_ptr(&rx, 1, &layout, &val_tx, &ptr_tx);

    // low half groups to values, high half groups to pointers
    assert_eq!(val_rx.read().to_lanes(32), vec![0, 1, 2, 3]);
    assert_eq!(val_rx.read().to_lanes(32), vec![4, 5, 6, 7]);
    assert_eq!(ptr_rx.read().to_lanes(32), vec![8, 9, 10, 11]);
    assert_eq!(ptr_rx.read().to_lanes(32), vec![12, 13, 14, 15]);
}

#[test]
fn buffer_trans_cols_emits_two_words_per_pair() {
    let vals: Vec<Word> = (0..4u64).map(|v| Word::from_lanes(32, &[v, v + 100])).collect();
    let ptrs: Vec<Word> = (0..4u64).map(|v| Word::from_lanes(32, &[v + 200, v + 300])).collect();
    let (in_tx, in_rx) = stream();
    load_col_val_ptr_blocks(&vals, &ptrs, &in_tx);

    let (out_tx, out_rx) = stream();
    // only the first 3 buffered pairs are transferred
    buffer_trans_cols(4, 3, &in_rx, &out_tx);
    for v in 0..3u64 {
        assert_eq!(out_rx.read().to_lanes(32), vec![v, v + 200]);
        assert_eq!(out_rx.read().to_lanes(32), vec![v + 100, v + 300]);
    }
}
