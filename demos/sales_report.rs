//! End-to-end query walkthrough over a small sales dataset.
//!
//! Demonstrates the main operator families:
//! - Filtering and projection: `filter`, `select`, `distinct`
//! - Partitioning: `order_by_descending`, `skip`, `take`
//! - Folds: `sum_by`, `average_by`, `max_by_key`
//! - Set operations: `union`, `except`
//!
//! Run with: `cargo run --example sales_report`

use anyhow::Result;
use quarry::*;

#[derive(Debug, Clone)]
struct Sale {
    region: &'static str,
    product: &'static str,
    units: i32,
    unit_price: f64,
}

fn main() -> Result<()> {
    println!("📈 Sales Report Example\n");

    let sales = vec![
        Sale { region: "north", product: "widget", units: 12, unit_price: 2.50 },
        Sale { region: "south", product: "widget", units: 4, unit_price: 2.50 },
        Sale { region: "north", product: "gadget", units: 7, unit_price: 10.00 },
        Sale { region: "east", product: "widget", units: 0, unit_price: 2.50 },
        Sale { region: "south", product: "gadget", units: 3, unit_price: 10.00 },
        Sale { region: "north", product: "widget", units: 5, unit_price: 2.75 },
    ];

    // Deferred pipeline: nothing runs until a terminal operator pulls.
    let active = (&sales).filter(|s| s.units > 0);

    println!("💰 REVENUE BY REGION\n");
    let by_region = active.group_by(|s| s.region);
    let mut totals: Vec<(&str, f64)> = by_region
        .iter()
        .map(|(region, rows)| (*region, rows.sum_by(|s| f64::from(s.units) * s.unit_price)))
        .collect();
    totals = totals
        .order_by_descending(|(_, total)| OrderedFloat(*total))
        .into_vec();
    for (region, total) in &totals {
        println!("  {region}: ${total:.2}");
    }

    println!("\n🏆 TOP WIDGET SALE\n");
    let top = (&sales)
        .filter(|s| s.product == "widget")
        .max_by_key(|s| s.units)?;
    println!("  {} units in {}", top.units, top.region);

    println!("\n📦 CATALOG\n");
    let north: Vec<&str> = (&sales)
        .filter(|s| s.region == "north")
        .select(|s| s.product)
        .to_list()
        .into_vec();
    let south: Vec<&str> = (&sales)
        .filter(|s| s.region == "south")
        .select(|s| s.product)
        .to_list()
        .into_vec();
    let catalog = north.union(&south);
    println!("  combined: {:?}", catalog.to_list().as_slice());
    println!("  north-only: {:?}", north.except(&south).as_slice());

    println!("\n📐 AVERAGES\n");
    let mean_units = (&sales).filter(|s| s.units > 0).average_by(|s| s.units)?;
    println!("  mean units per active sale: {mean_units:.2}");

    println!("\n✅ Report complete!");
    Ok(())
}
