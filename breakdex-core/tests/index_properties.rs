//! Property tests for break index ordering and lookup

use breakdex_core::{BreakIndex, BreakPoint, RuleTag};
use proptest::prelude::*;

fn arb_index() -> impl Strategy<Value = BreakIndex> {
    prop::collection::vec((0usize..64, 0u32..0x100), 0..40).prop_map(|raw| {
        let mut points: Vec<BreakPoint> = raw
            .into_iter()
            .map(|(offset, bits)| BreakPoint::new(offset, RuleTag::from_bits(bits)))
            .collect();
        points.sort();
        let mut builder = BreakIndex::builder();
        for p in points {
            builder.push(p.offset, p.rule).unwrap();
        }
        builder.finish()
    })
}

proptest! {
    #[test]
    fn prop_offsets_never_decrease(index in arb_index()) {
        prop_assert_eq!(index.first().unwrap().offset, 0);
        for pair in index.as_slice().windows(2) {
            prop_assert!(pair[0].offset <= pair[1].offset);
        }
    }

    #[test]
    fn prop_ceil_matches_linear_scan(index in arb_index(), x in 0usize..70) {
        let expected = index.iter().find(|p| p.offset >= x).map(|p| p.offset);
        prop_assert_eq!(index.ceil(x).map(|p| p.offset), expected);
    }

    #[test]
    fn prop_floor_matches_linear_scan(index in arb_index(), x in 0usize..70) {
        let expected = index.iter().rposition(|p| p.offset <= x);
        prop_assert_eq!(index.position_floor(x), expected);
    }

    #[test]
    fn prop_search_key_equals_any_rule(offset in 0usize..1000, bits in any::<u32>()) {
        let real = BreakPoint::new(offset, RuleTag::from_bits(bits));
        prop_assert_eq!(BreakPoint::at(offset), real);
        prop_assert_eq!(BreakPoint::at(offset).cmp(&real), std::cmp::Ordering::Equal);
    }

    #[test]
    fn prop_segments_tile_the_range(index in arb_index()) {
        let mut cursor = 0;
        for segment in index.segments() {
            prop_assert_eq!(segment.range.start, cursor);
            cursor = segment.range.end;
        }
        prop_assert_eq!(cursor, index.end_offset());
    }
}
