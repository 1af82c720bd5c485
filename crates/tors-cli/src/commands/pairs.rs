use crate::support::{load_lattice_or_exit, print_json};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PairEntry {
    element: String,
    summands: Vec<String>,
    projectives: Vec<String>,
    sincere: bool,
}

pub fn run(lattice: String, json_output: bool) {
    let t = load_lattice_or_exit(&lattice);
    let pairs: Vec<PairEntry> = t
        .lattice()
        .element_ids()
        .map(|x| PairEntry {
            element: t.name(x).to_string(),
            summands: t
                .tau_rigid_pair_summand_unchecked(x)
                .into_iter()
                .map(|pair| t.pair_label(pair))
                .collect(),
            projectives: t.brick_labels(&t.projectives_unchecked(x)),
            sincere: t.is_sincere_unchecked(x),
        })
        .collect();

    if json_output {
        print_json(&pairs);
    } else {
        println!("tors pairs");
        for entry in &pairs {
            let sincere = if entry.sincere { " (sincere)" } else { "" };
            println!("  {}: {}{sincere}", entry.element, entry.summands.join(" "));
        }
    }
}
