use serde::Serialize;
use std::fmt::Display;
use tors_lattice::{BrickSet, ElementId, TorsLattice};

pub fn exit_with(message: impl Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

pub fn load_lattice_or_exit(path: &str) -> TorsLattice {
    let lattice = TorsLattice::load(path)
        .unwrap_or_else(|e| exit_with(format_args!("failed to load {path}: {e}")));
    tracing::debug!(path, elements = lattice.len(), "loaded lattice");
    lattice
}

pub fn element_or_exit(lattice: &TorsLattice, label: &str) -> ElementId {
    lattice.element(label).unwrap_or_else(|e| exit_with(e))
}

pub fn print_json<T: Serialize>(payload: &T) {
    match serde_json::to_string_pretty(payload) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => exit_with(format_args!("json serialization: {e}")),
    }
}

/// `{a, b}` rendering of a brick-set.
pub fn brick_set_label(lattice: &TorsLattice, set: &BrickSet) -> String {
    format!("{{{}}}", lattice.brick_labels(set).join(", "))
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
