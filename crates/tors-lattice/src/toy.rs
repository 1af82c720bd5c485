//! Toy lattices for conformance testing.
//!
//! Each builder returns a [`LatticeData`] so tests exercise the same loading
//! path as description files.
//!
//! ## Lattices
//!
//! - **chain(n)**: the n-element chain. Semidistributive for every n, but
//!   a lattice of torsion classes only for n <= 2 (its join-irreducibles
//!   outnumber the atoms otherwise).
//! - **pentagon**: torsion classes of the path algebra of `1 -> 2`
//!   (`0 < S1 < P1 < mod`, `0 < S2 < mod`).
//! - **hexagon**: torsion classes of the preprojective algebra of type A2,
//!   i.e. the weak order of S3.
//! - **weak_order(n)**: the weak order on permutations of `1..=n`, compared
//!   by inversion sets.
//! - **tamari(n)**: the Tamari lattice on bracket vectors of length n under
//!   componentwise order; torsion classes of the linear A(n-1) path algebra.
//! - **boolean(n)**: subsets of `{1..n}`; torsion classes of a product of n
//!   copies of the base field.
//! - **m3**: the diamond with three atoms. A lattice, but not
//!   semidistributive.
//! - **not_a_lattice**: two minimal and two maximal elements, all comparable
//!   across.

use std::collections::BTreeSet;
use tors_order::LatticeData;

/// Get a toy lattice by name (matching fixture "name" fields).
pub fn get_lattice(name: &str) -> Option<LatticeData> {
    match name {
        "pentagon" => Some(pentagon()),
        "hexagon" => Some(hexagon()),
        "m3" => Some(m3()),
        "not_a_lattice" => Some(not_a_lattice()),
        _ => {
            let (family, size) = name.rsplit_once('_')?;
            let size: usize = size.parse().ok()?;
            match family {
                "chain" => Some(chain(size)),
                "weak_order" => Some(weak_order(size)),
                "tamari" => Some(tamari(size)),
                "boolean" => Some(boolean(size)),
                _ => None,
            }
        }
    }
}

fn described(
    name: impl Into<String>,
    elements: Vec<String>,
    relations: Vec<(String, String)>,
) -> LatticeData {
    LatticeData {
        name: Some(name.into()),
        elements,
        relations,
    }
}

fn strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

fn pairs(relations: &[(&str, &str)]) -> Vec<(String, String)> {
    relations
        .iter()
        .map(|(lo, hi)| (lo.to_string(), hi.to_string()))
        .collect()
}

/// Description listing every comparable pair of `items`.
fn by_order<T>(
    name: String,
    items: &[T],
    label: impl Fn(&T) -> String,
    leq: impl Fn(&T, &T) -> bool,
) -> LatticeData {
    let elements: Vec<String> = items.iter().map(&label).collect();
    let relations = items
        .iter()
        .flat_map(|a| items.iter().map(move |b| (a, b)))
        .filter(|&(a, b)| leq(a, b))
        .map(|(a, b)| (label(a), label(b)))
        .collect();
    described(name, elements, relations)
}

pub fn chain(n: usize) -> LatticeData {
    let elements: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
    let relations = elements
        .windows(2)
        .map(|w| (w[0].clone(), w[1].clone()))
        .collect();
    described(format!("chain_{n}"), elements, relations)
}

pub fn pentagon() -> LatticeData {
    described(
        "pentagon",
        strings(&["0", "S1", "P1", "S2", "mod"]),
        pairs(&[
            ("0", "S1"),
            ("S1", "P1"),
            ("P1", "mod"),
            ("0", "S2"),
            ("S2", "mod"),
        ]),
    )
}

pub fn hexagon() -> LatticeData {
    described(
        "hexagon",
        strings(&["0", "a", "ab", "b", "ba", "1"]),
        pairs(&[
            ("0", "a"),
            ("a", "ab"),
            ("ab", "1"),
            ("0", "b"),
            ("b", "ba"),
            ("ba", "1"),
        ]),
    )
}

pub fn m3() -> LatticeData {
    described(
        "m3",
        strings(&["0", "a", "b", "c", "1"]),
        pairs(&[
            ("0", "a"),
            ("0", "b"),
            ("0", "c"),
            ("a", "1"),
            ("b", "1"),
            ("c", "1"),
        ]),
    )
}

pub fn not_a_lattice() -> LatticeData {
    described(
        "not_a_lattice",
        strings(&["a", "b", "c", "d"]),
        pairs(&[("a", "c"), ("a", "d"), ("b", "c"), ("b", "d")]),
    )
}

pub fn boolean(n: usize) -> LatticeData {
    let subsets: Vec<BTreeSet<usize>> = (0u32..(1 << n))
        .map(|mask| (1..=n).filter(|i| mask & (1 << (i - 1)) != 0).collect())
        .collect();
    by_order(
        format!("boolean_{n}"),
        &subsets,
        |set| {
            let items: Vec<String> = set.iter().map(usize::to_string).collect();
            format!("{{{}}}", items.join(","))
        },
        |a, b| a.is_subset(b),
    )
}

pub fn weak_order(n: usize) -> LatticeData {
    let perms = permutations(n);
    by_order(
        format!("weak_order_{n}"),
        &perms,
        |w| w.iter().map(usize::to_string).collect(),
        |u, v| inversions(u).is_subset(&inversions(v)),
    )
}

pub fn tamari(n: usize) -> LatticeData {
    let vectors = bracket_vectors(n);
    by_order(
        format!("tamari_{n}"),
        &vectors,
        |r| {
            let items: Vec<String> = r.iter().map(usize::to_string).collect();
            format!("({})", items.join(","))
        },
        |a, b| a.iter().zip(b).all(|(x, y)| x <= y),
    )
}

/// Permutations of `1..=n` in lexicographic order.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, n: usize, out: &mut Vec<Vec<usize>>) {
        if prefix.len() == n {
            out.push(prefix.clone());
            return;
        }
        for v in 1..=n {
            if !prefix.contains(&v) {
                prefix.push(v);
                extend(prefix, n, out);
                prefix.pop();
            }
        }
    }
    let mut out = Vec::new();
    extend(&mut Vec::new(), n, &mut out);
    out
}

/// Value pairs `(small, large)` appearing out of order in `w`.
fn inversions(w: &[usize]) -> BTreeSet<(usize, usize)> {
    let mut set = BTreeSet::new();
    for i in 0..w.len() {
        for j in (i + 1)..w.len() {
            if w[i] > w[j] {
                set.insert((w[j], w[i]));
            }
        }
    }
    set
}

/// Huang-Tamari bracket vectors: `i <= r_i <= n` and `r_j <= r_i` whenever
/// `i <= j <= r_i` (1-based).
fn bracket_vectors(n: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, n: usize, out: &mut Vec<Vec<usize>>) {
        let i = prefix.len() + 1;
        if i > n {
            let valid = (1..=n)
                .all(|a| (a..=prefix[a - 1]).all(|b| prefix[b - 1] <= prefix[a - 1]));
            if valid {
                out.push(prefix.clone());
            }
            return;
        }
        for r in i..=n {
            prefix.push(r);
            extend(prefix, n, out);
            prefix.pop();
        }
    }
    let mut out = Vec::new();
    extend(&mut Vec::new(), n, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_sizes() {
        assert_eq!(chain(4).elements.len(), 4);
        assert_eq!(boolean(3).elements.len(), 8);
        assert_eq!(weak_order(3).elements.len(), 6);
        assert_eq!(weak_order(4).elements.len(), 24);
        assert_eq!(tamari(3).elements.len(), 5);
        assert_eq!(tamari(4).elements.len(), 14);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(get_lattice("chain_4"), Some(chain(4)));
        assert_eq!(get_lattice("tamari_4"), Some(tamari(4)));
        assert_eq!(get_lattice("pentagon"), Some(pentagon()));
        assert!(get_lattice("chain_x").is_none());
        assert!(get_lattice("torus").is_none());
    }

    #[test]
    fn labels_are_distinct() {
        for data in [boolean(3), weak_order(4), tamari(4)] {
            let distinct: BTreeSet<&String> = data.elements.iter().collect();
            assert_eq!(distinct.len(), data.elements.len());
        }
    }

    #[test]
    fn long_chains_have_more_bricks_than_simples() {
        let two = crate::TorsLattice::from_data(&chain(2)).unwrap();
        assert_eq!(two.all_bricks().len(), two.simples().len());
        for n in 3..=5 {
            let t = crate::TorsLattice::from_data(&chain(n)).unwrap();
            assert_eq!(t.all_bricks().len(), n - 1);
            assert_eq!(t.simples().len(), 1);
        }
    }
}
