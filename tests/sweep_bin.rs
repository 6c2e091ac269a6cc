use std::process::Command;

#[test]
fn sweep_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_salvo"))
        .args(["sweep", "--seed", "7", "--json"])
        .env("SALVO_LOG", "off")
        .output()
        .expect("failed to run salvo binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["ships_remaining"], 0);
    assert_eq!(v["hits"], 17);
    assert!(v["shots"].as_u64().unwrap() <= 100);
}
