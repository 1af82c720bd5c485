use crate::cli::DerivedKind;
use crate::support::{brick_set_label, exit_with, load_lattice_or_exit, print_json, yes_no};
use serde::Serialize;
use tors_lattice::{FiniteLattice, FinitePoset, TorsError, TorsLattice};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DerivedReport {
    kind: &'static str,
    is_lattice: bool,
    elements: Vec<String>,
    covers: Vec<(String, String)>,
}

fn describe<T>(
    kind: DerivedKind,
    is_lattice: bool,
    poset: &FinitePoset<T>,
    label: impl Fn(&T) -> String,
) -> DerivedReport
where
    T: Ord + Clone + std::fmt::Debug,
{
    DerivedReport {
        kind: kind.as_str(),
        is_lattice,
        elements: poset.elements().iter().map(&label).collect(),
        covers: poset
            .cover_relations()
            .into_iter()
            .map(|(lo, hi)| (label(poset.label(lo)), label(poset.label(hi))))
            .collect(),
    }
}

fn build(t: &TorsLattice, kind: DerivedKind) -> Result<DerivedReport, TorsError> {
    let bricks = |set: &_| brick_set_label(t, set);
    Ok(match kind {
        DerivedKind::Wide => {
            let wide = t.wide_lattice()?;
            describe(kind, true, wide.poset(), |&x| t.name(x).to_string())
        }
        DerivedKind::Ice => describe(kind, true, t.ice_lattice()?.poset(), bricks),
        DerivedKind::Ike => describe(kind, true, t.ike_lattice()?.poset(), bricks),
        DerivedKind::Heart => {
            let hearts = t.heart_poset()?;
            let is_lattice = FiniteLattice::from_poset(hearts.clone()).is_ok();
            describe(kind, is_lattice, &hearts, bricks)
        }
    })
}

pub fn run(lattice: String, kind: DerivedKind, json_output: bool) {
    let t = load_lattice_or_exit(&lattice);
    let report = build(&t, kind).unwrap_or_else(|e| exit_with(e));

    if json_output {
        print_json(&report);
    } else {
        println!("tors derived {} ({} elements)", report.kind, report.elements.len());
        println!("  Lattice: {}", yes_no(report.is_lattice));
        for element in &report.elements {
            println!("  - {element}");
        }
        println!("  Covers:");
        for (lower, upper) in &report.covers {
            println!("    {lower} -> {upper}");
        }
    }
}
