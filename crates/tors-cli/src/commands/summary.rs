use crate::support::{load_lattice_or_exit, print_json};
use serde::Serialize;
use tors_lattice::{Interval, TorsLattice};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport {
    path: String,
    description: String,
    elements: usize,
    covers: usize,
    intervals: usize,
    bricks: Vec<String>,
    simples: Vec<String>,
    wide_intervals: usize,
    ice_intervals: usize,
    ike_intervals: usize,
    sincere: Vec<String>,
}

fn count_intervals(t: &TorsLattice, keep: impl Fn(Interval) -> bool) -> usize {
    t.all_itvs().iter().filter(|&&itv| keep(itv)).count()
}

fn report(path: String, t: &TorsLattice) -> SummaryReport {
    SummaryReport {
        path,
        description: t.to_string(),
        elements: t.len(),
        covers: t.lattice().cover_relations().len(),
        intervals: t.all_itvs().len(),
        bricks: t.brick_labels(t.all_bricks()),
        simples: t.brick_labels(t.simples()),
        wide_intervals: count_intervals(t, |itv| t.is_wide_interval_unchecked(itv)),
        ice_intervals: count_intervals(t, |itv| t.is_ice_interval_unchecked(itv)),
        ike_intervals: count_intervals(t, |itv| t.is_ike_interval_unchecked(itv)),
        sincere: t
            .lattice()
            .element_ids()
            .filter(|&x| t.is_sincere_unchecked(x))
            .map(|x| t.name(x).to_string())
            .collect(),
    }
}

pub fn run(lattice: String, json_output: bool) {
    let t = load_lattice_or_exit(&lattice);
    let report = report(lattice, &t);

    if json_output {
        print_json(&report);
    } else {
        println!("tors summary");
        println!("  Source: {}", report.path);
        println!("  {}", report.description);
        println!("  Covering relations: {}", report.covers);
        println!("  Bricks ({}): {}", report.bricks.len(), report.bricks.join(", "));
        println!("  Simples ({}): {}", report.simples.len(), report.simples.join(", "));
        println!(
            "  Intervals: {} (wide {}, ICE {}, IKE {})",
            report.intervals, report.wide_intervals, report.ice_intervals, report.ike_intervals
        );
        println!("  Sincere: {}", report.sincere.join(", "));
    }
}
