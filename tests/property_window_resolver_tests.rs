use proptest::prelude::*;
use series_window::api::{WindowResolver, WindowResolverConfig, resolve_visible_windows};
use series_window::core::{DataPoint, WindowSample, resolve_visible_window};

/// Points with non-decreasing x and roughly 25% gaps.
fn gapped_points() -> impl Strategy<Value = Vec<DataPoint>> {
    proptest::collection::vec((0.0f64..3.0, 0u8..4), 0..400).prop_map(|steps| {
        let mut x = 0.0;
        steps
            .into_iter()
            .map(|(step, roll)| {
                x += step;
                if roll == 0 {
                    DataPoint::UNDEFINED
                } else {
                    DataPoint::new(x, f64::from(roll))
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn cached_hint_never_changes_results(
        points in gapped_points(),
        pans in proptest::collection::vec((-20.0f64..1_300.0, 0.0f64..200.0), 1..24),
        threshold in 1usize..32
    ) {
        let config = WindowResolverConfig::default().with_linear_search_threshold(threshold);
        let mut resolver = WindowResolver::new(config).expect("resolver");

        for (min, span) in pans {
            let max = min + span;
            let stateful = resolver.resolve(&points, min, max).expect("resolve");
            let stateless = resolve_visible_window(&points, DataPoint::window_key, min, max, 0);
            prop_assert_eq!(stateful, stateless, "range {}..{}", min, max);
        }
    }

    #[test]
    fn forward_pans_keep_hint_monotonic(
        points in gapped_points(),
        mut mins in proptest::collection::vec(-20.0f64..1_300.0, 1..24)
    ) {
        mins.sort_by(f64::total_cmp);
        let mut resolver = WindowResolver::new(WindowResolverConfig::default()).expect("resolver");

        let mut previous_hint = 0;
        for min in mins {
            resolver.resolve(&points, min, min + 25.0).expect("resolve");
            prop_assert!(resolver.start_hint() >= previous_hint);
            previous_hint = resolver.start_hint();
        }
    }

    #[test]
    fn batch_output_matches_independent_resolution(
        series in proptest::collection::vec(gapped_points(), 0..6),
        min in -20.0f64..1_300.0,
        span in 0.0f64..200.0
    ) {
        let slices: Vec<&[DataPoint]> = series.iter().map(Vec::as_slice).collect();
        let windows =
            resolve_visible_windows(&slices, min, min + span, WindowResolverConfig::default())
                .expect("batch");

        prop_assert_eq!(windows.len(), slices.len());
        for (&samples, window) in slices.iter().zip(windows) {
            prop_assert_eq!(
                window,
                resolve_visible_window(samples, DataPoint::window_key, min, min + span, 0)
            );
        }
    }
}
