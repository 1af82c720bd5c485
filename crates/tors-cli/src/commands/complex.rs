use crate::support::{load_lattice_or_exit, print_json};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComplexReport {
    positive: bool,
    facets: Vec<Vec<String>>,
    vertices: usize,
    dimension: Option<usize>,
    pure: bool,
    f_vector: Vec<usize>,
}

pub fn run(lattice: String, positive: bool, json_output: bool) {
    let t = load_lattice_or_exit(&lattice);
    let complex = if positive {
        t.positive_tau_tilt_complex()
    } else {
        t.s_tau_tilt_complex()
    };

    let report = ComplexReport {
        positive,
        facets: complex
            .facets()
            .iter()
            .map(|facet| facet.iter().map(|&pair| t.pair_label(pair)).collect())
            .collect(),
        vertices: complex.vertices().len(),
        dimension: complex.dimension(),
        pure: complex.is_pure(),
        f_vector: complex.f_vector(),
    };

    if json_output {
        print_json(&report);
    } else {
        let kind = if positive { "tau-tilting" } else { "support tau-tilting" };
        println!("tors complex ({kind})");
        println!("  Facets: {}", report.facets.len());
        println!("  Vertices: {}", report.vertices);
        match report.dimension {
            Some(dimension) => println!("  Dimension: {dimension}"),
            None => println!("  Dimension: empty"),
        }
        println!("  f-vector: {:?}", report.f_vector);
        for facet in &report.facets {
            println!("  - {}", facet.join(" "));
        }
    }
}
