//! Structural properties checked on every toy lattice of torsion classes.

use std::collections::BTreeSet;
use tors_lattice::toy;
use tors_lattice::{ElementId, Interval, TorsLattice};

fn torsion_lattices() -> Vec<(String, TorsLattice)> {
    ["pentagon", "hexagon", "boolean_3", "tamari_4", "weak_order_4"]
        .iter()
        .map(|&name| {
            let data = toy::get_lattice(name)
                .unwrap_or_else(|| panic!("unknown toy lattice {name}"));
            let lattice = TorsLattice::from_data(&data)
                .unwrap_or_else(|e| panic!("{name} is not a lattice of torsion classes: {e}"));
            (name.to_string(), lattice)
        })
        .collect()
}

fn elements(t: &TorsLattice) -> Vec<ElementId> {
    t.lattice().element_ids().collect()
}

#[test]
fn family_sizes() {
    let sizes: Vec<(String, usize, usize, usize)> = torsion_lattices()
        .into_iter()
        .map(|(name, t)| (name, t.len(), t.all_bricks().len(), t.simples().len()))
        .collect();
    assert_eq!(
        sizes,
        vec![
            ("pentagon".to_string(), 5, 3, 2),
            ("hexagon".to_string(), 6, 4, 2),
            ("boolean_3".to_string(), 8, 3, 3),
            ("tamari_4".to_string(), 14, 6, 3),
            ("weak_order_4".to_string(), 24, 11, 3),
        ]
    );
}

#[test]
fn kappa_is_the_largest_element_avoiding_the_brick() {
    for (name, t) in torsion_lattices() {
        let l = t.lattice();
        for &j in t.all_bricks() {
            let lower = l.lower_covers(j)[0];
            let k = t.kappa(j).unwrap().unwrap_or_else(|| panic!("{name}: kappa undefined"));
            assert!(l.is_lequal(lower, k) && !l.is_lequal(j, k), "{name}");
            for x in elements(&t) {
                if l.is_lequal(lower, x) && !l.is_lequal(j, x) {
                    assert!(l.is_lequal(x, k), "{name}");
                }
            }
        }
    }
}

#[test]
fn extended_kappa_is_a_bijection() {
    for (name, t) in torsion_lattices() {
        let images: BTreeSet<ElementId> = elements(&t)
            .into_iter()
            .map(|x| t.extended_kappa_unchecked(x).unwrap())
            .collect();
        assert_eq!(images.len(), t.len(), "{name}");
        assert_eq!(t.extended_kappa(t.zero()).unwrap(), Some(t.whole()), "{name}");
        assert_eq!(t.extended_kappa(t.whole()).unwrap(), Some(t.zero()), "{name}");
    }
}

#[test]
fn every_cover_has_one_label() {
    for (name, t) in torsion_lattices() {
        let mut seen = BTreeSet::new();
        for (lower, upper) in t.lattice().cover_relations() {
            let brick = t.label((lower, upper)).unwrap();
            assert_eq!(t.label((lower, upper)).unwrap(), brick, "{name}");
            assert_eq!(t.bricks((lower, upper)).unwrap(), BTreeSet::from([brick]), "{name}");
            seen.insert(brick);
        }
        assert_eq!(&seen, t.all_bricks(), "{name}");
    }
}

#[test]
fn hearts_are_torsion_meets_torsion_free() {
    for (name, t) in torsion_lattices() {
        for &itv in t.all_itvs() {
            let expected: BTreeSet<ElementId> = t
                .bricks_in_tors_unchecked(itv.upper)
                .intersection(&t.bricks_in_torf_unchecked(itv.lower))
                .copied()
                .collect();
            assert_eq!(t.bricks(itv).unwrap(), expected, "{name}");
            assert!(t.interval_lequal(itv, itv).unwrap(), "{name}");
            if itv.lower == itv.upper {
                assert!(expected.is_empty(), "{name}");
            }
        }
    }
}

#[test]
fn wide_intervals_are_ice_and_ike() {
    for (name, t) in torsion_lattices() {
        for &itv in t.all_itvs() {
            if t.is_wide_interval_unchecked(itv) {
                assert!(t.is_ice_interval_unchecked(itv), "{name}: {itv:?}");
                assert!(t.is_ike_interval_unchecked(itv), "{name}: {itv:?}");
            }
        }
    }
}

#[test]
fn plus_gives_the_largest_wide_interval() {
    for (name, t) in torsion_lattices() {
        for u in elements(&t) {
            let plus = t.plus(u).unwrap();
            assert!(t.is_wide_interval_unchecked(Interval::new(u, plus)), "{name}");
            for &itv in t.all_itvs().iter().filter(|itv| itv.lower == u) {
                if t.is_wide_interval_unchecked(itv) {
                    assert!(t.lattice().is_lequal(itv.upper, plus), "{name}");
                }
            }
        }
    }
}

#[test]
fn derived_lattices_exist() {
    for (name, t) in torsion_lattices() {
        let wide = t.wide_lattice().unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(wide.len(), t.len(), "{name}");
        for u in elements(&t) {
            assert!(t.wide_lequal(u, u).unwrap(), "{name}");
        }

        let ice = t.ice_lattice().unwrap_or_else(|e| panic!("{name}: {e}"));
        let ike = t.ike_lattice().unwrap_or_else(|e| panic!("{name}: {e}"));
        let hearts = t.heart_poset().unwrap();
        assert!(ice.len() <= hearts.len(), "{name}");
        assert!(ike.len() <= hearts.len(), "{name}");
        assert!(ice.len() >= t.len() && ike.len() >= t.len(), "{name}");
    }
}

#[test]
fn pairs_have_one_summand_per_simple() {
    for (name, t) in torsion_lattices() {
        let rank = t.simples().len();
        for x in elements(&t) {
            assert_eq!(t.tau_rigid_pair_summand_unchecked(x).len(), rank, "{name}");
        }
        assert_eq!(t.number_of_projs(t.whole()).unwrap(), rank, "{name}");
        assert!(t.is_sincere(t.whole()).unwrap(), "{name}");
        assert!(!t.is_sincere(t.zero()).unwrap(), "{name}");

        let complex = t.s_tau_tilt_complex();
        assert_eq!(complex.facets().len(), t.len(), "{name}");
        assert!(complex.is_pure(), "{name}");
        assert_eq!(complex.dimension(), Some(rank - 1), "{name}");
    }
}

#[test]
fn boolean_lattices_are_all_wide() {
    let t = TorsLattice::from_data(&toy::boolean(3)).unwrap();
    assert!(t.all_itvs().iter().all(|&itv| t.is_wide_interval_unchecked(itv)));
    assert_eq!(t.heart_poset().unwrap().len(), 8);
    assert_eq!(t.positive_tau_tilt_complex().facets().len(), 1);
}

#[test]
fn linear_a3_counts() {
    let t = TorsLattice::from_data(&toy::tamari(4)).unwrap();
    assert_eq!(t.ice_lattice().unwrap().len(), 22);
    assert_eq!(t.ike_lattice().unwrap().len(), 22);
    assert_eq!(t.heart_poset().unwrap().len(), 33);
    // Tilting modules of the path algebra.
    assert_eq!(t.positive_tau_tilt_complex().facets().len(), 5);
    assert_eq!(t.s_tau_tilt_complex().vertices().len(), 9);
}
