//! Example: calling the BoxAssist methods the way a host would.
//!
//! Run with:
//! `cargo run --example calculate`

use box_assist::facade::{BoxAssist, Value};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let weights = [3u32, 34, 4, 12, 5, 2];
    let bytes: Vec<u8> = weights.iter().flat_map(|w| w.to_le_bytes()).collect();

    let ba = BoxAssist::new();

    match ba.call_by_name("Test", &[Value::Bytes(bytes.clone())]) {
        Ok(out) => println!("decoded weights: {out:?}"),
        Err(err) => eprintln!("Test failed: {}", err.localized()),
    }

    for sum in [9, 30, 60, 100] {
        match ba.call_by_name("Вычислить", &[Value::Bytes(bytes.clone()), Value::Int(sum)]) {
            Ok(Value::Str(indices)) => {
                let picked: Vec<u32> = indices
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .filter_map(|s| s.parse::<usize>().ok())
                    .map(|i| weights[i])
                    .collect();
                println!("sum={sum}: indices [{indices}] -> weights {picked:?}");
            }
            Ok(other) => println!("sum={sum}: unexpected {other:?}"),
            Err(err) => eprintln!("sum={sum}: {}", err.localized()),
        }
    }

    let err = ba
        .call_by_name("Calculate", &[Value::Int(1), Value::Int(2)])
        .unwrap_err();
    println!("bad arguments: {err} ({:?})", err.kind());
}
