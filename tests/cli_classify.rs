use std::process::Command;

#[test]
fn test_classify_prints_one_line_per_year() {
    let bin = env!("CARGO_BIN_EXE_leapwitness");

    let output = Command::new(bin)
        .args(["classify", "1600", "1700", "1945", "2004"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "1600: leap\n1700: common\n1945: common\n2004: leap\n"
    );
}

#[test]
fn test_classify_json_emits_ndjson_events() {
    let bin = env!("CARGO_BIN_EXE_leapwitness");

    let output = Command::new(bin)
        .args(["--json", "classify", "1900", "2000"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[1]["year"], 1900);
    assert_eq!(events[1]["leap"], false);
    assert_eq!(events[2]["year"], 2000);
    assert_eq!(events[2]["leap"], true);
    assert_eq!(events[3]["event"], "complete");
    assert_eq!(events[3]["success"], true);
}

#[test]
fn test_classify_rejects_non_numeric_year() {
    let bin = env!("CARGO_BIN_EXE_leapwitness");

    let output = Command::new(bin)
        .args(["classify", "nineteen-hundred"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
