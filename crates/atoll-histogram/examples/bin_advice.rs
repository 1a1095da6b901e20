//! Compare the four bin heuristics on a bimodal sample
//!
//! Run with `RUST_LOG=debug` to see each recommendation as it is computed.

use atoll_histogram::{advise, BinAdvisor, BinRule, Histogram};
use tracing_subscriber::EnvFilter;

fn main() -> atoll_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Two clusters around 10 and 30
    let sample: Vec<f64> = (0..200)
        .map(|i| {
            let jitter = ((i * 37) % 17) as f64 / 4.0;
            if i % 2 == 0 {
                8.0 + jitter
            } else {
                28.0 + jitter
            }
        })
        .collect();

    for rule in [
        BinRule::Sturges,
        BinRule::Scott,
        BinRule::SquareRoot,
        BinRule::FreedmanDiaconis,
    ] {
        let advice = advise(&sample, rule)?;
        println!(
            "{:<18} k = {:>7.3}  h = {:>7.3}",
            BinAdvisor::<f64>::name(&rule),
            advice.k,
            advice.h
        );
    }

    let advice = advise(&sample, BinRule::FreedmanDiaconis)?;
    let hist = Histogram::from_advice(&sample, &advice)?;
    println!("\n{hist}");

    Ok(())
}
