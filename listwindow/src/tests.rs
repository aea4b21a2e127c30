use crate::*;

use alloc::vec::Vec;
use std::format;

use proptest::prelude::*;

fn range(s: f64, h: f64, c: f64, overscan: usize, n: usize) -> VisibleRange {
    compute_range(s, h, c, overscan, n).unwrap()
}

fn bounds(r: VisibleRange) -> Option<(usize, usize)> {
    Some((r.start_index()?, r.end_index()?))
}

#[test]
fn mid_list_window() {
    let r = range(500.0, 50.0, 300.0, 2, 1000);
    assert_eq!(bounds(r), Some((8, 18)));
    assert_eq!(r.len(), 11);

    let rows: Vec<usize> = (0..1000).collect();
    let config = WindowConfig::new(50.0).unwrap().with_overscan(2);
    let window = config.materialize(&rows, r);
    let got: Vec<(usize, f64)> = window
        .iter()
        .map(|d| (d.index, d.top_offset))
        .collect();
    let want: Vec<(usize, f64)> = (8..=18).map(|i| (i, i as f64 * 50.0)).collect();
    assert_eq!(got, want);
    assert_eq!(window.total_extent, 50_000.0);
}

#[test]
fn short_list_clamps_both_ends() {
    let r = range(0.0, 50.0, 1000.0, 5, 3);
    assert_eq!(bounds(r), Some((0, 2)));

    let config = WindowConfig::new(50.0).unwrap();
    assert_eq!(config.total_extent(3), 150.0);
}

#[test]
fn default_overscan_is_five() {
    let config = WindowConfig::new(10.0).unwrap();
    assert_eq!(config.overscan(), DEFAULT_OVERSCAN);
    assert_eq!(DEFAULT_OVERSCAN, 5);

    let r = config.range(ViewportState::new(100.0, 50.0), 1000);
    assert_eq!(bounds(r), Some((5, 20)));
}

#[test]
fn empty_collection_is_empty_everywhere() {
    for s in [0.0, 123.0, 1.0e9] {
        let r = range(s, 20.0, 400.0, 5, 0);
        assert!(r.is_empty());
        assert_eq!(r, VisibleRange::EMPTY);
        assert_eq!(r.start_index(), None);
        assert_eq!(r.end_index(), None);
    }

    let rows: [u8; 0] = [];
    let config = WindowConfig::new(20.0).unwrap();
    let window = config.materialize(&rows, VisibleRange::EMPTY);
    assert!(window.is_empty());
    assert_eq!(window.total_extent, 0.0);
}

#[test]
fn rejects_non_positive_item_height() {
    for h in [0.0, -0.0, -10.0, f64::NAN, f64::INFINITY] {
        let err = compute_range(0.0, h, 100.0, 5, 10).unwrap_err();
        assert!(matches!(err, Error::InvalidItemHeight(_)));
        assert!(WindowConfig::new(h).is_err());
    }
}

#[test]
fn error_messages_name_the_value() {
    let err = WindowConfig::new(-2.0).unwrap_err();
    assert_eq!(
        format!("{err}"),
        "item height must be a positive finite number, got -2"
    );
    let err = check_container_height(-1.5).unwrap_err();
    assert_eq!(err, Error::InvalidContainerHeight(-1.5));
    assert_eq!(check_container_height(0.0), Ok(0.0));
}

#[test]
fn scrolled_past_the_end_stays_well_formed() {
    let r = range(10_000.0, 10.0, 50.0, 2, 10);
    assert_eq!(bounds(r), Some((9, 9)));
}

#[test]
fn zero_height_container_still_yields_a_range() {
    let r = range(100.0, 10.0, 0.0, 0, 100);
    assert_eq!(bounds(r), Some((10, 10)));
}

#[test]
fn bad_observations_read_as_zero() {
    let r = range(-250.0, 10.0, 30.0, 1, 100);
    assert_eq!(bounds(r), Some((0, 4)));
    let r = range(f64::NAN, 10.0, f64::NAN, 0, 100);
    assert_eq!(bounds(r), Some((0, 0)));
}

#[test]
fn fractional_offsets_round_outward() {
    let r = range(25.0, 10.0, 30.0, 0, 100);
    assert_eq!(bounds(r), Some((2, 6)));
}

#[test]
fn materialize_skips_indexes_missing_after_shrink() {
    let config = WindowConfig::new(10.0).unwrap().with_overscan(0);
    let r = config.range(ViewportState::new(0.0, 100.0), 20);
    assert_eq!(bounds(r), Some((0, 10)));

    let shrunk = [1, 2, 3, 4, 5];
    let window = config.materialize(&shrunk, r);
    let indexes: Vec<usize> = window.iter().map(|d| d.index).collect();
    assert_eq!(indexes, [0, 1, 2, 3, 4]);
    assert_eq!(*window.descriptors[4].item, 5);
    assert_eq!(window.total_extent, 50.0);
}

#[test]
fn collect_descriptors_reuses_buffer() {
    let rows: Vec<char> = "abcdefghij".chars().collect();
    let config = WindowConfig::new(4.0).unwrap().with_overscan(0);
    let mut out = Vec::new();

    let total = collect_descriptors(&config, &rows, VisibleRange::from_inclusive(2, 4), &mut out);
    assert_eq!(total, 40.0);
    assert_eq!(out.len(), 3);
    assert_eq!(*out[0].item, 'c');

    collect_descriptors(&config, &rows, VisibleRange::from_inclusive(8, 9), &mut out);
    let items: Vec<char> = out.iter().map(|d| *d.item).collect();
    assert_eq!(items, ['i', 'j']);
    assert_eq!(out[1].top_offset, 36.0);
}

#[test]
fn for_each_descriptor_visits_in_order() {
    let rows = [10u8, 20, 30, 40];
    let config = WindowConfig::new(3.0).unwrap();
    let mut seen = Vec::new();
    config.for_each_descriptor(&rows, VisibleRange::from_inclusive(1, 3), |d| {
        seen.push((d.index, *d.item, d.top_offset));
    });
    assert_eq!(seen, [(1, 20, 3.0), (2, 30, 6.0), (3, 40, 9.0)]);
}

#[test]
fn visible_range_accessors() {
    let r = VisibleRange::from_inclusive(3, 7);
    assert_eq!(r.len(), 5);
    assert!(r.contains(3));
    assert!(r.contains(7));
    assert!(!r.contains(8));
    assert_eq!(r.indices(), 3..8);
    assert_eq!(format!("{r:?}"), "VisibleRange[3..=7]");

    let single = VisibleRange::from_inclusive(4, 4);
    assert_eq!(bounds(single), Some((4, 4)));

    let inverted = VisibleRange::from_inclusive(5, 2);
    assert!(inverted.is_empty());
    assert_eq!(format!("{inverted:?}"), "VisibleRange[empty]");
    assert_eq!(VisibleRange::default(), VisibleRange::EMPTY);
}

#[test]
fn offset_lookups() {
    let config = WindowConfig::new(10.0).unwrap();
    assert_eq!(config.top_offset(7), 70.0);
    assert_eq!(config.index_at_offset(0.0, 100), Some(0));
    assert_eq!(config.index_at_offset(9.99, 100), Some(0));
    assert_eq!(config.index_at_offset(10.0, 100), Some(1));
    assert_eq!(config.index_at_offset(-5.0, 100), Some(0));
    assert_eq!(config.index_at_offset(1000.0, 100), None);
    assert_eq!(config.index_at_offset(0.0, 0), None);

    assert_eq!(config.max_scroll_offset(50.0, 100), 950.0);
    assert_eq!(config.max_scroll_offset(5000.0, 100), 0.0);
}

#[test]
fn scroll_offset_for_index_alignments() {
    let config = WindowConfig::new(10.0).unwrap();
    let viewport = ViewportState::new(200.0, 50.0);
    let at = |index, align| config.scroll_offset_for_index(index, align, viewport, 100);

    assert_eq!(at(50, Align::Start), 500.0);
    assert_eq!(at(50, Align::End), 460.0);
    assert_eq!(at(50, Align::Center), 480.0);

    // Already fully visible: no movement.
    assert_eq!(at(22, Align::Auto), 200.0);
    // Above the viewport: align to start.
    assert_eq!(at(5, Align::Auto), 50.0);
    // Below the viewport: align to end.
    assert_eq!(at(30, Align::Auto), 260.0);

    // Clamped to the scrollable range.
    assert_eq!(at(99, Align::Start), 950.0);
    assert_eq!(at(500, Align::Start), 950.0);
    assert_eq!(at(0, Align::End), 0.0);

    assert_eq!(config.scroll_offset_for_index(3, Align::Start, viewport, 0), 0.0);
}

#[test]
fn descriptors_compare_by_value() {
    let rows = [1, 2];
    let config = WindowConfig::new(1.5).unwrap();
    let a = config.materialize(&rows, VisibleRange::from_inclusive(0, 1));
    let b = config.materialize(&rows, VisibleRange::from_inclusive(0, 1));
    assert_eq!(a, b);
    let c = config.materialize(&rows, VisibleRange::from_inclusive(1, 1));
    assert_ne!(a, c);
}

#[test]
fn ulp_boundary_keeps_the_item_that_still_touches() {
    let (s, h, c) = (170.73000000000002, 2.4390000000000005, 1.3);
    // Item 69 ends past the offset even though `s / h` floors to 70.
    assert!(70.0 * h > s);
    let r = range(s, h, c, 0, 1000);
    assert!(r.contains(69), "{r:?}");

    let rows: Vec<usize> = (0..1000).collect();
    let config = WindowConfig::new(h).unwrap().with_overscan(0);
    let window = config.materialize(&rows, r);
    assert!(window.iter().any(|d| d.index == 69));
}

#[test]
fn viewport_sanitizing() {
    let v = ViewportState::new(-3.0, f64::INFINITY).sanitized();
    assert_eq!(v, ViewportState::new(0.0, 0.0));
    let v = ViewportState::new(12.5, 40.0);
    assert_eq!(v.sanitized(), v);
    assert_eq!(v.scroll_end(), 52.5);
    assert_eq!(non_negative(f64::NAN), 0.0);
    assert_eq!(non_negative(7.0), 7.0);
}

#[test]
fn stale_range_far_past_the_collection_yields_nothing() {
    let rows = [1, 2, 3, 4, 5];
    let config = WindowConfig::new(10.0).unwrap();
    let window = config.materialize(&rows, VisibleRange::from_inclusive(1_000, 1_010));
    assert!(window.is_empty());
    assert_eq!(window.total_extent, 50.0);

    let window = config.materialize(&rows, VisibleRange::from_inclusive(3, usize::MAX - 1));
    let indexes: Vec<usize> = window.iter().map(|d| d.index).collect();
    assert_eq!(indexes, [3, 4]);
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_rejects_invalid_item_height() {
    let err = serde_json::from_str::<WindowConfig>(r#"{"item_height":-50.0,"overscan":2}"#)
        .unwrap_err();
    assert!(err.to_string().contains("item height"), "{err}");
    assert!(serde_json::from_str::<WindowConfig>(r#"{"item_height":0.0}"#).is_err());

    let config: WindowConfig = serde_json::from_str(r#"{"item_height":24.0}"#).unwrap();
    assert_eq!(config, WindowConfig::new(24.0).unwrap());

    let saved = WindowConfig::new(50.0).unwrap().with_overscan(2);
    let json = serde_json::to_string(&saved).unwrap();
    assert_eq!(serde_json::from_str::<WindowConfig>(&json).unwrap(), saved);
}

prop_compose! {
    fn geometry()(
        h in 1u32..200,
        s in 0u32..1_000_000,
        c in 0u32..5_000,
        n in 0usize..20_000,
    ) -> (f64, f64, f64, usize) {
        (h as f64, s as f64, c as f64, n)
    }
}

prop_compose! {
    fn fractional_geometry()(
        h in 0.1f64..50.0,
        s in 0.0f64..50_000.0,
        c in 0.0f64..2_000.0,
        n in 1usize..20_000,
    ) -> (f64, f64, f64, usize) {
        (h, s, c, n)
    }
}

proptest! {
    #[test]
    fn covers_every_intersecting_item(
        (h, s, c, n) in geometry(),
        overscan in 0usize..12,
    ) {
        let r = range(s, h, c, overscan, n);
        if n == 0 {
            prop_assert!(r.is_empty());
        } else {
            let (start, end) = bounds(r).unwrap();
            prop_assert!(start <= end);
            prop_assert!(end < n);

            let first = ((s / h) as usize).saturating_sub(1);
            let last = (((s + c) / h) as usize).saturating_add(1).min(n - 1);
            for i in first..=last {
                let top = i as f64 * h;
                let bottom = top + h;
                if top < s + c && bottom > s {
                    prop_assert!(r.contains(i), "item {} missing from {:?}", i, r);
                }
            }
        }
    }

    #[test]
    fn start_is_zero_at_the_top(
        (h, _s, c, n) in geometry(),
        overscan in 0usize..50,
    ) {
        prop_assume!(n > 0);
        let r = range(0.0, h, c, overscan, n);
        prop_assert_eq!(r.start_index(), Some(0));
    }

    #[test]
    fn end_clamps_at_the_bottom(
        (h, _s, c, n) in geometry(),
        extra in 0u32..10_000,
        overscan in 0usize..50,
    ) {
        prop_assume!(n > 0);
        let total = n as f64 * h;
        let s = (total - c).max(0.0) + extra as f64;
        let r = range(s, h, c, overscan, n);
        prop_assert_eq!(r.end_index(), Some(n - 1));
    }

    #[test]
    fn more_overscan_only_widens_by_at_most_k(
        (h, s, c, n) in geometry(),
        overscan in 0usize..20,
        k in 0usize..20,
    ) {
        let narrow = range(s, h, c, overscan, n);
        let wide = range(s, h, c, overscan + k, n);
        prop_assert!(wide.len() >= narrow.len());
        if let (Some((s0, e0)), Some((s1, e1))) = (bounds(narrow), bounds(wide)) {
            prop_assert!(s0.abs_diff(s1) <= k);
            prop_assert!(e0.abs_diff(e1) <= k);
        } else {
            prop_assert!(narrow.is_empty() && wide.is_empty());
        }
    }

    #[test]
    fn materialize_is_deterministic(
        (h, s, c, n) in geometry(),
        overscan in 0usize..12,
    ) {
        let rows: Vec<usize> = (0..n.min(2_000)).collect();
        let config = WindowConfig::new(h).unwrap().with_overscan(overscan);
        let r = config.range(ViewportState::new(s, c), rows.len());
        let a = config.materialize(&rows, r);
        let b = config.materialize(&rows, r);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.total_extent, rows.len() as f64 * h);
        for pair in a.descriptors.windows(2) {
            prop_assert_eq!(pair[0].index + 1, pair[1].index);
        }
        for d in &a.descriptors {
            prop_assert_eq!(d.top_offset, d.index as f64 * h);
        }
    }

    #[test]
    fn covers_every_intersecting_item_at_fractional_offsets(
        (h, s, c, n) in fractional_geometry(),
        overscan in 0usize..3,
    ) {
        let r = range(s, h, c, overscan, n);
        let first = ((s / h) as usize).saturating_sub(2);
        let last = (((s + c) / h) as usize).saturating_add(2).min(n - 1);
        for i in first..=last {
            let top = i as f64 * h;
            let bottom = (i + 1) as f64 * h;
            if top < s + c && bottom > s {
                prop_assert!(r.contains(i), "item {} missing from {:?}", i, r);
            }
        }
    }
}
