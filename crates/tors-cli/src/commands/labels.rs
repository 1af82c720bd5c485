use crate::support::{load_lattice_or_exit, print_json};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CoverLabel {
    lower: String,
    upper: String,
    brick: String,
}

pub fn run(lattice: String, json_output: bool) {
    let t = load_lattice_or_exit(&lattice);
    let labels: Vec<CoverLabel> = t
        .cover_labels()
        .into_iter()
        .map(|(itv, brick)| CoverLabel {
            lower: t.name(itv.lower).to_string(),
            upper: t.name(itv.upper).to_string(),
            brick: t.name(brick).to_string(),
        })
        .collect();

    if json_output {
        print_json(&labels);
    } else {
        println!("tors labels ({} covering relations)", labels.len());
        for CoverLabel { lower, upper, brick } in &labels {
            println!("  {lower} -> {upper}: {brick}");
        }
    }
}
