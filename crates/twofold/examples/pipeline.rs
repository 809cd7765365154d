//! Pricing pipeline over a small inventory map.
//!
//! Run:
//! - cargo run -p twofold --example pipeline

use std::{collections::HashMap, panic::panic_any};

use twofold::{catching, pairs, Either};

#[derive(Debug, PartialEq)]
struct OutOfStock(&'static str);

fn unit_price(item: &str) -> u32 {
    match item {
        "bolt" => 2,
        "nut" => 1,
        "gear" => 25,
        _ => panic_any(OutOfStock("unknown item")),
    }
}

fn main() {
    let order = HashMap::from([("bolt", 40_u32), ("gear", 3), ("widget", 1)]);
    let catcher = catching::<OutOfStock>();

    let mut lines: Vec<(&str, Either<OutOfStock, u32>)> = order
        .into_iter()
        .map(pairs::entries(|item, quantity| {
            let priced = catcher.either(move || unit_price(item) * quantity);
            (item, priced)
        }))
        .collect();
    lines.sort_by(pairs::by_key(|a: &&str, b: &&str| a.cmp(b)));

    for (item, outcome) in lines {
        let report = outcome.fold(
            |missing| format!("{:10} unavailable ({})", item, missing.0),
            |total| format!("{:10} {:>4} credits", item, total),
        );
        println!("{}", report);
    }
}
