//! Property tests for mip chain planning arithmetic.

use ddstex::{
    generate_chain, level_count, mipmap_byte_size, volume_mipmap_byte_size, Compression,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn aggregate_equals_sum_of_levels(
        w in 1u32..512,
        h in 1u32..512,
        bpp in 1u32..=4,
    ) {
        let n = level_count(w, h);
        let total = mipmap_byte_size(w, h, bpp, 0, n, Compression::None);
        let sum: usize = (0..n)
            .map(|i| mipmap_byte_size(w, h, bpp, i, 1, Compression::None))
            .sum();
        prop_assert_eq!(total, sum);
    }

    #[test]
    fn last_level_is_one_by_one(w in 1u32..4096, h in 1u32..4096) {
        let n = level_count(w, h);
        prop_assert_eq!((w >> (n - 1)).max(1), 1);
        prop_assert_eq!((h >> (n - 1)).max(1), 1);
        // The chain stops exactly when both axes reach 1
        if n > 1 {
            prop_assert!((w >> (n - 2)).max(1) > 1 || (h >> (n - 2)).max(1) > 1);
        }
    }

    #[test]
    fn generated_chain_matches_planned_size(w in 1u32..64, h in 1u32..64) {
        let bpp = 3usize;
        let src = vec![128u8; (w * h) as usize * bpp];
        let n = level_count(w, h);
        let chain = generate_chain(&src, w, h, bpp, n);
        prop_assert_eq!(
            chain.len(),
            mipmap_byte_size(w, h, bpp as u32, 0, n, Compression::None)
        );
    }

    #[test]
    fn compressed_levels_round_up_to_whole_blocks(w in 1u32..256, h in 1u32..256) {
        let blocks = ((w as usize + 3) / 4) * ((h as usize + 3) / 4);
        prop_assert_eq!(mipmap_byte_size(w, h, 0, 0, 1, Compression::Bc1), blocks * 8);
        prop_assert_eq!(mipmap_byte_size(w, h, 0, 0, 1, Compression::Bc3), blocks * 16);
    }

    #[test]
    fn volume_aggregate_equals_sum_of_levels(
        w in 1u32..64,
        h in 1u32..64,
        d in 1u32..16,
    ) {
        let n = level_count(w, h);
        let total = volume_mipmap_byte_size(w, h, d, 4, 0, n, Compression::None);
        let sum: usize = (0..n)
            .map(|i| volume_mipmap_byte_size(w, h, d, 4, i, 1, Compression::None))
            .sum();
        prop_assert_eq!(total, sum);
    }

    #[test]
    fn box_filter_stays_within_value_range(w in 1u32..16, h in 1u32..16) {
        // A chain over a two-valued source never leaves the [lo, hi] range
        let bpp = 1usize;
        let src: Vec<u8> = (0..(w * h) as usize)
            .map(|i| if i % 2 == 0 { 40 } else { 200 })
            .collect();
        let n = level_count(w, h);
        let chain = generate_chain(&src, w, h, bpp, n);
        prop_assert!(chain.iter().all(|&v| (40..=200).contains(&v)));
    }
}
