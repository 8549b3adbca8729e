//! Full detail view for one pokemon: `cargo run --example lookup pikachu`

use anyhow::Result;
use rotodex_client::{Gateway, load_detail};
use rotodex_client::EvolutionTree;

#[tokio::main]
async fn main() -> Result<()> {
    let identifier = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "pikachu".to_string());

    let gateway = Gateway::new();
    let detail = load_detail(&gateway, &identifier).await?;

    println!("#{:04} {}", detail.id, detail.name);
    println!("height: {} dm, weight: {} hg", detail.height, detail.weight);

    if let Some(species) = &detail.species {
        if let Some(genus) = species.genus("en") {
            println!("genus: {}", genus);
        }
        if let Some(text) = species.flavor_text("en") {
            println!("{}", text.replace(['\n', '\u{c}'], " "));
        }
    }

    println!("\nStats:");
    for stat in &detail.stats {
        println!("  {:<16} {:>3}", stat.name, stat.base);
    }

    if let Some(chain) = &detail.evolution {
        println!("\nEvolution line:");
        print_chain(chain, 0);
    }

    Ok(())
}

fn print_chain(node: &EvolutionTree, indent: usize) {
    println!("{}#{:04} {}", "  ".repeat(indent), node.species_id, node.species_name);
    for edge in &node.evolves_to {
        if let Some(trigger) = &edge.trigger {
            let condition = match (trigger.min_level, &trigger.item) {
                (Some(level), _) => format!("level {}", level),
                (None, Some(item)) => format!("use {}", item),
                (None, None) => trigger.kind.clone().unwrap_or_default(),
            };
            println!("{}  └─ {}", "  ".repeat(indent), condition);
        }
        print_chain(&edge.node, indent + 1);
    }
}
