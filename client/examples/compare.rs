//! Side-by-side comparison: `cargo run --example compare pikachu raichu`

use std::sync::Arc;

use anyhow::Result;
use rotodex_client::{ComparisonEngine, Gateway, SlotId, StatVerdict};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let first = args.next().unwrap_or_else(|| "pikachu".to_string());
    let second = args.next().unwrap_or_else(|| "raichu".to_string());

    let mut engine = ComparisonEngine::new(Arc::new(Gateway::new()));
    engine.load_slot(SlotId::Slot1, &first).await;
    engine.load_slot(SlotId::Slot2, &second).await;

    for slot in [SlotId::Slot1, SlotId::Slot2] {
        if let Some(error) = &engine.slot(slot).error {
            anyhow::bail!("{}: {}", slot.param_name(), error);
        }
    }

    let slot1 = engine.slot(SlotId::Slot1).pokemon.clone().unwrap();
    let slot2 = engine.slot(SlotId::Slot2).pokemon.clone().unwrap();

    println!("{:<16} {:>10} {:>10}", "stat", slot1.name, slot2.name);
    for (index, stat) in slot1.stats.iter().enumerate() {
        let marker = match engine.stat_verdict(index) {
            Some(StatVerdict::Higher) => ">",
            Some(StatVerdict::Lower) => "<",
            _ => "=",
        };
        println!(
            "{:<16} {:>10} {} {:>8}",
            stat.name,
            stat.base,
            marker,
            slot2.stats.get(index).map(|s| s.base).unwrap_or(0)
        );
    }

    println!(
        "{:<16} {:>10}   {:>8}  (difference: {})",
        "total",
        slot1.stat_total(),
        slot2.stat_total(),
        engine.total_difference().unwrap_or(0)
    );
    println!("\nShare: /compare?{}", engine.share_params().to_query_string());

    Ok(())
}
