use crate::support::{load_lattice_or_exit, print_json};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct KappaEntry {
    element: String,
    kappa: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct KappaReport {
    bricks: Vec<KappaEntry>,
    extended: Vec<KappaEntry>,
}

pub fn run(lattice: String, json_output: bool) {
    let t = load_lattice_or_exit(&lattice);
    let entry = |x, kappa: Option<_>| KappaEntry {
        element: t.name(x).to_string(),
        kappa: kappa.map(|k| t.name(k).to_string()),
    };

    let report = KappaReport {
        bricks: t
            .all_bricks()
            .iter()
            .map(|&j| entry(j, t.kappa_unchecked(j)))
            .collect(),
        extended: t
            .lattice()
            .element_ids()
            .map(|x| entry(x, t.extended_kappa_unchecked(x)))
            .collect(),
    };

    if json_output {
        print_json(&report);
    } else {
        println!("tors kappa");
        for KappaEntry { element, kappa } in &report.extended {
            let marker = if report.bricks.iter().any(|b| &b.element == element) {
                " (brick)"
            } else {
                ""
            };
            println!(
                "  kappa({element}) = {}{marker}",
                kappa.as_deref().unwrap_or("undefined")
            );
        }
    }
}
