//! Browse one page of the catalog: `cargo run --example browse [page] [type]`

use std::sync::Arc;

use anyhow::Result;
use rotodex_client::{Aggregator, CollectionQuery, Gateway, TypeName};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let mut query = CollectionQuery::default();
    if let Some(page) = args.next() {
        query.set_page(page.parse()?);
    }
    if let Some(type_arg) = args.next() {
        match TypeName::from_name(&type_arg) {
            Some(ty) => query.toggle_type(ty),
            None => anyhow::bail!("Unknown type: {}", type_arg),
        }
    }

    let aggregator = Aggregator::new(Arc::new(Gateway::new()));
    let page = aggregator.load_page(&query).await?;

    println!(
        "Page {} ({} pokemon in the catalog)",
        query.page, page.total_matching
    );
    for pokemon in &page.items {
        let types: Vec<&str> = pokemon.types.iter().map(|t| t.as_str()).collect();
        println!("#{:04} {:<12} [{}]", pokemon.id, pokemon.name, types.join(", "));
    }

    Ok(())
}
