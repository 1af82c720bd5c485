use serde_json::{Value, json};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture(name: &str) -> String {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../tors-lattice/tests/fixtures");
    let json = dir.join(name).join("lattice.json");
    let path = if json.exists() {
        json
    } else {
        dir.join(name).join("lattice.toml")
    };
    path.display().to_string()
}

fn run_tors<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_tors");
    Command::new(bin)
        .args(args)
        .output()
        .expect("tors command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "expected valid JSON stdout, got error: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn summary_json_reports_bricks() {
    let output = run_tors(["summary", fixture("a2").as_str(), "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["elements"], 5);
    assert_eq!(payload["bricks"], json!(["S1", "P1", "S2"]));
    assert_eq!(payload["simples"], json!(["S1", "S2"]));
    assert_eq!(payload["wideIntervals"], 11);
    assert_eq!(payload["iceIntervals"], 12);
    assert_eq!(payload["ikeIntervals"], 12);
    assert_eq!(payload["sincere"], json!(["P1", "mod"]));
    assert_eq!(
        payload["description"],
        "Lattice of torsion classes of some tau-tilting finite algebra having 5 torsion classes"
    );
}

#[test]
fn summary_text_reads_toml() {
    let output = run_tors(["summary", fixture("square").as_str()]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("having 4 torsion classes"));
    assert!(stdout.contains("Bricks (2): S1, S2"));
}

#[test]
fn kappa_json() {
    let output = run_tors(["kappa", fixture("a2").as_str(), "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(
        payload["bricks"],
        json!([
            { "element": "S1", "kappa": "S2" },
            { "element": "P1", "kappa": "S1" },
            { "element": "S2", "kappa": "P1" },
        ])
    );
    assert_eq!(payload["extended"][0], json!({ "element": "0", "kappa": "mod" }));
    assert_eq!(payload["extended"][4], json!({ "element": "mod", "kappa": "0" }));
}

#[test]
fn labels_json() {
    let output = run_tors(["labels", fixture("preprojective_a2").as_str(), "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    let labels = payload.as_array().expect("labels should be an array");
    assert_eq!(labels.len(), 6);
    assert_eq!(labels[3], json!({ "lower": "ab", "upper": "1", "brick": "b" }));
}

#[test]
fn heart_json() {
    let output = run_tors(["heart", fixture("a2").as_str(), "0", "mod", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["bricks"], json!(["S1", "P1", "S2"]));
    assert_eq!(payload["wide"], true);
    assert_eq!(payload["wideSimples"], json!(["S1", "S2"]));
    assert_eq!(payload["numberOfProjs"], 2);

    let output = run_tors(["heart", fixture("a2").as_str(), "S1", "mod", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["wide"], false);
    assert_eq!(payload["ice"], false);
    assert_eq!(payload["ike"], true);
    assert_eq!(payload["wideSimples"], Value::Null);
}

#[test]
fn heart_rejects_non_interval() {
    let output = run_tors(["heart", fixture("a2").as_str(), "P1", "S2"]);
    assert_failure(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: not an interval: P1 is not below S2"));
}

#[test]
fn heart_rejects_unknown_label() {
    let output = run_tors(["heart", fixture("a2").as_str(), "0", "X"]);
    assert_failure(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("not an element"));
}

#[test]
fn derived_lattices_json() {
    let output = run_tors(["derived", fixture("a2").as_str(), "wide", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["kind"], "wide");
    assert_eq!(payload["elements"].as_array().map(Vec::len), Some(5));
    assert_eq!(payload["covers"].as_array().map(Vec::len), Some(6));

    let output = run_tors(["derived", fixture("a2").as_str(), "ice", "--json"]);
    assert_success(&output);
    assert_eq!(parse_json_stdout(&output)["elements"].as_array().map(Vec::len), Some(6));

    let output = run_tors(["derived", fixture("a2").as_str(), "heart", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["elements"].as_array().map(Vec::len), Some(7));
    assert_eq!(payload["isLattice"], true);
}

#[test]
fn derived_wide_fails_on_chain() {
    let output = run_tors(["derived", fixture("chain4").as_str(), "wide"]);
    assert_failure(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a lattice"));
}

#[test]
fn pairs_json() {
    let output = run_tors(["pairs", fixture("a2").as_str(), "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(
        payload[2],
        json!({
            "element": "P1",
            "summands": ["(S1, 0)", "(P1, 0)"],
            "projectives": ["S1", "P1"],
            "sincere": true,
        })
    );
}

#[test]
fn complex_json() {
    let output = run_tors(["complex", fixture("a2").as_str(), "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["vertices"], 5);
    assert_eq!(payload["dimension"], 1);
    assert_eq!(payload["fVector"], json!([1, 5, 5]));

    let output = run_tors(["complex", fixture("a2").as_str(), "--positive", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["positive"], true);
    assert_eq!(payload["facets"], json!([["(S1, 0)", "(P1, 0)"], ["(P1, 0)", "(S2, 0)"]]));
}

#[test]
fn rejects_non_semidistributive_lattice() {
    let output = run_tors(["summary", fixture("m3").as_str()]);
    assert_failure(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a semidistributive lattice"));
}

#[test]
fn rejects_missing_file() {
    let output = run_tors(["summary", "does/not/exist.json"]);
    assert_failure(&output);
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: failed to load"));
}
