use crate::support::{
    brick_set_label, element_or_exit, exit_with, load_lattice_or_exit, print_json, yes_no,
};
use serde::Serialize;
use tors_lattice::Interval;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HeartReport {
    lower: String,
    upper: String,
    bricks: Vec<String>,
    wide: bool,
    ice: bool,
    ike: bool,
    /// Simple objects of the heart, when it is wide.
    wide_simples: Option<Vec<String>>,
    number_of_projs: usize,
}

pub fn run(lattice: String, lower: String, upper: String, json_output: bool) {
    let t = load_lattice_or_exit(&lattice);
    let itv = Interval::new(element_or_exit(&t, &lower), element_or_exit(&t, &upper));
    let bricks = t.bricks(itv).unwrap_or_else(|e| exit_with(e));
    let wide = t.is_wide_interval_unchecked(itv);

    let report = HeartReport {
        lower,
        upper,
        bricks: t.brick_labels(&bricks),
        wide,
        ice: t.is_ice_interval_unchecked(itv),
        ike: t.is_ike_interval_unchecked(itv),
        wide_simples: wide
            .then(|| t.wide_simples(itv).ok())
            .flatten()
            .map(|simples| t.brick_labels(&simples)),
        number_of_projs: t.number_of_projs_unchecked(itv),
    };

    if json_output {
        print_json(&report);
    } else {
        println!("tors heart [{}, {}]", report.lower, report.upper);
        println!("  Bricks: {}", brick_set_label(&t, &bricks));
        println!("  Wide: {}", yes_no(report.wide));
        println!("  ICE-closed: {}", yes_no(report.ice));
        println!("  IKE-closed: {}", yes_no(report.ike));
        if let Some(simples) = &report.wide_simples {
            println!("  Simples: {}", simples.join(", "));
        }
        println!("  Projectives not in lower: {}", report.number_of_projs);
    }
}
