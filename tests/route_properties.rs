//! Property tests for enumeration, distances and selection.

use std::collections::HashSet;

use proptest::prelude::*;

use bestway_planner::distance::{annotate, DistanceMetric, Haversine, Planar};
use bestway_planner::permutations::{factorial, PermutationEnumerator};
use bestway_planner::selector::select_best;
use bestway_planner::{compute_best_route, Location, PlannerOptions, RouteParts};

fn coord() -> impl Strategy<Value = (f64, f64)> {
    (-100.0..100.0f64, -100.0..100.0f64)
}

prop_compose! {
    fn trip(max_stops: usize)(
        start in coord(),
        end in coord(),
        stops in prop::collection::vec(coord(), 0..=max_stops)
    ) -> Vec<Location> {
        let mut locations = vec![Location::start("start", start.0, start.1)];
        for (i, (x, y)) in stops.into_iter().enumerate() {
            locations.push(Location::stop(format!("s{}", i), x, y));
        }
        locations.push(Location::end("end", end.0, end.1));
        locations
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn enumerates_every_ordering_once(locations in trip(5)) {
        let parts = RouteParts::build(&locations).unwrap();
        let k = parts.stops.len();
        let routes: Vec<_> = PermutationEnumerator::new(&parts, 5).unwrap().collect();

        prop_assert_eq!(Some(routes.len()), factorial(k));

        let mut distinct = HashSet::new();
        for route in &routes {
            prop_assert_eq!(route.len(), k + 2);
            prop_assert_eq!(route.start().name(), "start");
            prop_assert_eq!(route.end().name(), "end");
            let stops: Vec<_> = route.stops().iter().map(|s| s.name().to_string()).collect();
            let unique: HashSet<_> = stops.iter().cloned().collect();
            prop_assert_eq!(unique.len(), k);
            distinct.insert(stops);
        }
        prop_assert_eq!(distinct.len(), routes.len());
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self(a in coord(), b in coord()) {
        let a = Location::stop("a", a.0, a.1);
        let b = Location::stop("b", b.0, b.1);
        prop_assert_eq!(Planar.distance(&a, &b), Planar.distance(&b, &a));
        prop_assert_eq!(Planar.distance(&a, &a), 0.0);
        prop_assert!(Planar.distance(&a, &b) >= 0.0);

        // Keep latitudes within the poles for the great-circle metric.
        let a = Location::stop("a", a.longitude(), a.latitude() * 0.8);
        let b = Location::stop("b", b.longitude(), b.latitude() * 0.8);
        let haversine = Haversine::default();
        prop_assert!((haversine.distance(&a, &b) - haversine.distance(&b, &a)).abs() < 1e-9);
        prop_assert!(haversine.distance(&a, &a).abs() < 1e-9);
    }

    #[test]
    fn total_is_sum_of_legs(locations in trip(5)) {
        let parts = RouteParts::build(&locations).unwrap();
        for route in PermutationEnumerator::new(&parts, 5).unwrap() {
            let annotated = annotate(route, &Planar);
            prop_assert_eq!(annotated.legs().len(), annotated.route().len() - 1);
            let sum: f64 = annotated.legs().iter().sum();
            prop_assert_eq!(annotated.total(), sum);
            prop_assert!(annotated.total() >= 0.0);
        }
    }

    #[test]
    fn best_is_minimal_and_first_among_equals(locations in trip(4)) {
        let parts = RouteParts::build(&locations).unwrap();
        let candidates: Vec<_> = PermutationEnumerator::new(&parts, 5)
            .unwrap()
            .map(|route| annotate(route, &Planar))
            .collect();

        let best = select_best(candidates.clone()).unwrap();
        for candidate in &candidates {
            prop_assert!(best.total() <= candidate.total());
        }
        let first_min = candidates
            .iter()
            .position(|candidate| candidate.total() == best.total())
            .unwrap();
        prop_assert_eq!(&candidates[first_min], &best);

        let again = select_best(candidates).unwrap();
        prop_assert_eq!(again, best);
    }

    #[test]
    fn parallel_matches_sequential(locations in trip(5)) {
        let sequential = compute_best_route(&locations, PlannerOptions::default()).unwrap();
        let parallel = compute_best_route(
            &locations,
            PlannerOptions { parallel: true, ..PlannerOptions::default() },
        )
        .unwrap();
        prop_assert_eq!(sequential, parallel);
    }
}
