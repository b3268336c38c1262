#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use uldpack::construct::{construct_solution, generate_candidates};
    use uldpack::entities::{Container, Instance, Item};
    use uldpack::eval::{FitnessBreakdown, evaluate_fitness, is_stable};
    use uldpack::geometry::overlaps;
    use uldpack::geometry::primitives::{Cuboid, Dims, Point};
    use uldpack::io::ext_repr::ExtInstance;
    use uldpack::util::assertions;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    /// Random instance with small containers, so the lattice stays tiny
    fn random_instance(rng: &mut impl Rng, n_containers: usize, n_items: usize) -> Instance {
        let containers = (0..n_containers)
            .map(|i| {
                Container::new(
                    format!("U{i}"),
                    rng.random_range(4..8),
                    rng.random_range(4..8),
                    rng.random_range(4..8),
                    rng.random_range(20..60),
                )
            })
            .collect_vec();
        let items = (0..n_items)
            .map(|i| {
                Item::new(
                    format!("P-{i}"),
                    rng.random_range(1..5),
                    rng.random_range(1..5),
                    rng.random_range(1..5),
                    rng.random_range(1..15),
                    rng.random_bool(0.3),
                    rng.random_bool(0.5).then(|| rng.random_range(50..200)),
                )
            })
            .collect_vec();
        Instance::new(containers, items).unwrap()
    }

    #[test]
    fn overlap_is_symmetric_and_excludes_touching() {
        let a = Cuboid::new(0, 0, 0, 10, 10, 10);
        let b = Cuboid::new(5, 5, 5, 15, 15, 15);
        let c = Cuboid::new(0, 10, 0, 10, 20, 10);
        assert!(overlaps(&a, &b) && overlaps(&b, &a));
        assert!(!overlaps(&a, &c) && !overlaps(&c, &a));
        assert!(overlaps(&a, &a));
    }

    #[test]
    fn scan_order_is_x_then_y_then_z() {
        let mut container = Container::new("U1", 10, 10, 10, 1000);
        let mut items = (0..3)
            .map(|i| Item::new(format!("P-{i}"), 5, 5, 5, 1, false, None))
            .collect_vec();

        for item in items.iter_mut() {
            assert!(container.try_place(item));
        }
        assert_eq!(items[0].position(), Some([0, 0, 0, 5, 5, 5]));
        // z varies fastest: stacked on top of the first item
        assert_eq!(items[1].position(), Some([0, 0, 5, 5, 5, 10]));
        // then y
        assert_eq!(items[2].position(), Some([0, 5, 0, 5, 10, 5]));
        assert_eq!(items[2].container_id(), Some("U1"));
    }

    #[test]
    fn search_is_deterministic() {
        let mut container = Container::new("U1", 12, 9, 7, 1000);
        let mut first = Item::new("A", 4, 3, 2, 1, false, None);
        assert!(container.try_place(&mut first));

        let probe = Dims::new(3, 3, 3);
        let positions = (0..5).map(|_| container.find_position(probe)).collect_vec();
        assert!(positions.iter().all_equal());
        assert_eq!(positions[0], assertions::lattice_first_fit(&container, probe));
    }

    #[test]
    fn item_as_large_as_container_only_fits_empty_container() {
        let mut container = Container::new("U1", 8, 6, 4, 1000);
        let mut full = Item::new("FULL", 8, 6, 4, 1, false, None);
        assert!(container.try_place(&mut full));
        assert_eq!(full.position(), Some([0, 0, 0, 8, 6, 4]));

        let mut container = Container::new("U2", 8, 6, 4, 1000);
        let mut small = Item::new("SMALL", 1, 1, 1, 1, false, None);
        let mut full = Item::new("FULL", 8, 6, 4, 1, false, None);
        assert!(container.try_place(&mut small));
        assert!(!container.try_place(&mut full));
        assert!(!full.is_placed());
    }

    #[test]
    fn rejection_leaves_item_and_container_untouched() {
        let mut container = Container::new("U1", 10, 10, 10, 50);
        let mut a = Item::new("A", 5, 5, 5, 40, false, None);
        let mut heavy = Item::new("HEAVY", 1, 1, 1, 11, false, None);
        let mut too_long = Item::new("LONG", 11, 1, 1, 1, false, None);
        assert!(container.try_place(&mut a));

        assert!(!container.can_accept(&heavy));
        assert!(!container.try_place(&mut heavy));
        assert!(!container.can_accept(&too_long));
        assert!(!container.try_place(&mut too_long));

        assert!(!heavy.is_placed() && heavy.position().is_none());
        assert!(!too_long.is_placed() && too_long.container_id().is_none());
        assert_eq!(container.total_weight(), 40);
        assert_eq!(container.placed_items().len(), 1);
    }

    #[test]
    #[should_panic(expected = "does not fit inside container")]
    fn unchecked_placement_far_outside_container_panics() {
        let mut container = Container::new("U1", 10, 10, 10, 100);
        let mut item = Item::new("A", 5, 5, 5, 1, false, None);
        container.place_item_at(&mut item, Point(u32::MAX - 2, 0, 0));
    }

    #[test]
    #[should_panic(expected = "does not fit inside container")]
    fn unchecked_placement_sticking_out_panics() {
        let mut container = Container::new("U1", 10, 10, 10, 100);
        let mut item = Item::new("A", 5, 5, 5, 1, false, None);
        container.place_item_at(&mut item, Point(0, 6, 0));
    }

    #[test]
    fn unchecked_placement_against_far_wall() {
        let mut container = Container::new("U1", 10, 10, 10, 100);
        let mut item = Item::new("A", 5, 5, 5, 1, false, None);
        container.place_item_at(&mut item, Point(5, 5, 5));
        assert_eq!(item.position(), Some([5, 5, 5, 10, 10, 10]));
        assert!(assertions::container_encloses_items(&container));
    }

    #[test]
    fn weight_capacity_is_inclusive() {
        let mut container = Container::new("U1", 10, 10, 10, 50);
        let mut a = Item::new("A", 5, 5, 5, 30, false, None);
        let mut b = Item::new("B", 5, 5, 5, 20, false, None);
        assert!(container.try_place(&mut a));
        assert!(container.try_place(&mut b));
        assert_eq!(container.total_weight(), 50);
    }

    #[test]
    fn placed_item_is_not_placed_twice() {
        let mut u1 = Container::new("U1", 10, 10, 10, 100);
        let mut u2 = Container::new("U2", 10, 10, 10, 100);
        let mut item = Item::new("A", 5, 5, 5, 10, true, None);
        assert!(u1.try_place(&mut item));
        assert!(!u2.try_place(&mut item));
        assert!(u2.is_empty());
        assert_eq!(item.container_id(), Some("U1"));
    }

    #[test_case(10, false; "heavier item above lighter one")]
    #[test_case(3, true; "lighter item above heavier one")]
    #[test_case(5, true; "equal weights")]
    fn stability(upper_weight: u32, expected: bool) {
        let mut container = Container::new("U1", 10, 10, 20, 1000);
        let mut lower = Item::new("A", 10, 10, 10, 5, false, None);
        let mut upper = Item::new("B", 10, 10, 10, upper_weight, false, None);
        assert!(container.try_place(&mut lower));
        assert!(container.try_place(&mut upper));
        assert_eq!(upper.position(), Some([0, 0, 10, 10, 10, 20]));

        assert_eq!(is_stable(&upper, &container), expected);
        assert!(is_stable(&lower, &container));
    }

    #[test]
    fn unplaced_item_is_stable() {
        let container = Container::new("U1", 10, 10, 10, 100);
        let item = Item::new("A", 1, 1, 1, 1, false, None);
        assert!(is_stable(&item, &container));
    }

    #[test]
    fn fitness_example() {
        let mut u1 = Container::new("U1", 100, 100, 100, 100);
        let mut u2 = Container::new("U2", 100, 100, 100, 100);
        let mut p1 = Item::new("P-1", 10, 10, 10, 60, true, None);
        let mut p2 = Item::new("P-2", 10, 10, 10, 50, false, Some(80));
        let mut p3 = Item::new("P-3", 10, 10, 10, 5, true, None);
        let p4 = Item::new("P-4", 10, 10, 10, 5, false, Some(100));

        assert!(u1.try_place(&mut p1));
        // bypass the capacity check
        assert!(!u1.try_place(&mut p2));
        u1.place_item_at(&mut p2, Point(10, 0, 0));
        assert!(u2.try_place(&mut p3));

        let containers = vec![u1, u2];
        let items = vec![p1, p2, p3, p4];

        let breakdown = FitnessBreakdown::new(&containers, &items);
        assert_eq!(
            breakdown,
            FitnessBreakdown {
                excess_weight: 10,
                n_unstable: 0,
                n_unplaced_economy: 1,
                n_priority_containers: 2,
            }
        );
        assert_eq!(evaluate_fitness(&containers, &items), -10150);
        // pure: a second evaluation gives the same score
        assert_eq!(evaluate_fitness(&containers, &items), -10150);
    }

    #[test]
    fn fitness_of_empty_assignment() {
        let containers = vec![Container::new("U1", 10, 10, 10, 100)];
        let items = vec![
            Item::new("P-1", 1, 1, 1, 1, false, Some(10)),
            Item::new("P-2", 1, 1, 1, 1, false, None),
            Item::new("P-3", 1, 1, 1, 1, true, None),
        ];
        assert_eq!(evaluate_fitness(&containers, &items), -100);
        assert_eq!(evaluate_fitness(&[], &[]), 0);
    }

    #[test]
    fn unstable_items_are_counted_per_container() {
        let mut container = Container::new("U1", 10, 10, 30, 1000);
        let mut items = vec![
            Item::new("A", 10, 10, 10, 1, false, None),
            Item::new("B", 10, 10, 10, 2, false, None),
            Item::new("C", 10, 10, 10, 3, false, None),
        ];
        for item in items.iter_mut() {
            assert!(container.try_place(item));
        }
        // B rests above A, C above both
        let breakdown = FitnessBreakdown::new(std::slice::from_ref(&container), &items);
        assert_eq!(breakdown.n_unstable, 2);
        assert_eq!(evaluate_fitness(&[container], &items), -10);
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(2; "seed 2")]
    #[test_case(3; "seed 3")]
    fn search_matches_lattice_scan(seed: u64) {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut container = Container::new("U1", 7, 6, 5, u32::MAX);
        for i in 0..40 {
            let dims = Dims::new(
                rng.random_range(1..5),
                rng.random_range(1..5),
                rng.random_range(1..5),
            );
            let expected = assertions::lattice_first_fit(&container, dims);
            assert_eq!(container.find_position(dims), expected);

            let mut item = Item::new(format!("P-{i}"), dims.length, dims.width, dims.height, 1, false, None);
            assert_eq!(container.try_place(&mut item), expected.is_some());
        }
        assert!(assertions::container_has_no_overlaps(&container));
        assert!(assertions::container_encloses_items(&container));
    }

    #[test_case(0; "seed 0")]
    #[test_case(7; "seed 7")]
    #[test_case(42; "seed 42")]
    fn candidates_respect_invariants(seed: u64) {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(seed);
        let instance = random_instance(&mut rng, 3, 30);

        let candidates = generate_candidates(&instance.containers, &instance.items, 10, &mut rng);
        assert_eq!(candidates.len(), 10);

        for solution in &candidates {
            assert!(assertions::solution_is_consistent(solution));
            assert_eq!(solution.items.len(), instance.items.len());
            // item order is the one of the instance
            assert!(
                solution
                    .items
                    .iter()
                    .zip(instance.items.iter())
                    .all(|(a, b)| a.id == b.id)
            );
            for container in &solution.containers {
                assert!(assertions::container_has_no_overlaps(container));
                assert!(container.total_weight() <= container.weight_capacity as u64);
            }
            assert_eq!(solution.fitness(), solution.fitness());
        }

        // templates are not modified
        assert!(instance.containers.iter().all(|c| c.is_empty()));
        assert!(instance.items.iter().all(|i| !i.is_placed()));
    }

    #[test]
    fn construction_is_reproducible_for_a_fixed_seed() {
        let mut rng = SmallRng::seed_from_u64(3);
        let instance = random_instance(&mut rng, 2, 25);

        let build = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let sol = construct_solution(&instance.containers, &instance.items, &mut rng);
            sol.items.iter().map(|i| i.position()).collect_vec()
        };
        assert_eq!(build(11), build(11));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_generation_is_reproducible() {
        use uldpack::construct::par_generate_candidates;

        let mut rng = SmallRng::seed_from_u64(5);
        let instance = random_instance(&mut rng, 3, 25);

        let scores = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            par_generate_candidates(&instance.containers, &instance.items, 16, &mut rng)
                .iter()
                .map(|s| (s.fitness(), s.n_placed()))
                .collect_vec()
        };
        let a = scores(9);
        assert_eq!(a.len(), 16);
        assert_eq!(a, scores(9));
    }

    #[test]
    fn first_container_is_filled_first() {
        let containers = vec![
            Container::new("U1", 10, 10, 10, 1000),
            Container::new("U2", 10, 10, 10, 1000),
        ];
        let items = (0..4)
            .map(|i| Item::new(format!("P-{i}"), 5, 5, 5, 1, false, None))
            .collect_vec();
        let mut rng = SmallRng::seed_from_u64(0);
        let solution = construct_solution(&containers, &items, &mut rng);

        assert_eq!(solution.n_placed(), 4);
        assert!(solution.items.iter().all(|i| i.container_id() == Some("U1")));
        assert!(solution.container("U2").unwrap().is_empty());
        assert_eq!(solution.density(), 0.5);
    }

    #[test]
    fn import_and_export() {
        let json = r#"{
            "name": "small",
            "containers": [
                {"id": "U1", "length": 10, "width": 10, "height": 10, "weight_capacity": 100}
            ],
            "items": [
                {"id": "P-1", "length": 10, "width": 10, "height": 10, "weight": 20, "delay_cost": 100},
                {"id": "P-2", "length": 5, "width": 5, "height": 5, "weight": 10, "priority": true}
            ]
        }"#;
        let ext_instance: ExtInstance = serde_json::from_str(json).unwrap();
        let instance = uldpack::io::import(&ext_instance).unwrap();
        assert_eq!(instance.n_priority_items(), 1);
        assert_eq!(instance.item("P-1").unwrap().delay_cost, Some(100));

        let mut rng = SmallRng::seed_from_u64(0);
        let solution = construct_solution(&instance.containers, &instance.items, &mut rng);
        let ext_solution = uldpack::io::export(
            &solution,
            &Default::default(),
            solution.time_stamp,
        );

        assert_eq!(ext_solution.placed_count, 1);
        assert_eq!(ext_solution.placements.len(), 2);
        assert_eq!(ext_solution.score, solution.fitness());
        let unplaced = ext_solution
            .placements
            .iter()
            .find(|p| p.container_id.is_none())
            .unwrap();
        assert!(unplaced.position.is_none());
    }

    #[test_case(r#"{"id": "P-1", "length": 0, "width": 1, "height": 1, "weight": 1}"#; "zero length")]
    #[test_case(r#"{"id": "P-1", "length": 1, "width": 1, "height": 0, "weight": 1}"#; "zero height")]
    fn import_rejects_degenerate_items(item_json: &str) {
        let ext_item = serde_json::from_str(item_json).unwrap();
        assert!(uldpack::io::import_item(&ext_item).is_err());
    }

    #[test]
    fn instance_rejects_duplicate_ids() {
        let items = vec![
            Item::new("P-1", 1, 1, 1, 1, false, None),
            Item::new("P-1", 2, 2, 2, 1, false, None),
        ];
        assert!(Instance::new(vec![], items).is_err());

        let containers = vec![
            Container::new("U1", 1, 1, 1, 1),
            Container::new("U1", 1, 1, 1, 1),
        ];
        assert!(Instance::new(containers, vec![]).is_err());
    }
}
