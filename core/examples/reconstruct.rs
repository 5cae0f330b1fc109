use shamir_core::{SecretReconstructor, ShareRecord};

const RECORD: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    "3": { "base": "10", "value": "12" },
    "6": { "base": "4", "value": "213" }
}"#;

fn main() {
    let record = ShareRecord::from_json(RECORD).expect("record should parse");
    let engine = SecretReconstructor::from_record(&record)
        .expect("every share should decode");

    for point in engine.selected_points().expect("enough points") {
        println!("using share x = {}, y = {}", point.x(), point.y());
    }

    let secret = engine
        .reconstruct_secret()
        .expect("reconstruction should succeed");
    println!("secret = {secret}");
}
