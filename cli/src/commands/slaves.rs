//! Device listing command

use super::read_json;
use anyhow::Result;
use floorpay_core::models::SlaveResponse;
use std::path::PathBuf;
use tracing::warn;

/// List devices from a device listing record, optionally for one floor
pub async fn slaves_command(file: PathBuf, floor: Option<i32>) -> Result<()> {
    let response: SlaveResponse = read_json(&file).await?;

    let floors = match floor {
        Some(floor) => vec![floor],
        None => response.floors(),
    };

    let mut shown = 0;
    for floor in floors {
        println!("🏢 Floor {}", floor);
        for slave in response.on_floor(floor) {
            println!(
                "   {:<17}  x={:<8} y={}",
                slave.mac_address, slave.position.x, slave.position.y
            );
            shown += 1;
        }
    }
    println!("{} device(s)", shown);

    let duplicates = response.duplicate_mac_addresses();
    if !duplicates.is_empty() {
        warn!(count = duplicates.len(), "Duplicate hardware addresses in device listing");
        println!("⚠️  Duplicate hardware addresses: {}", duplicates.join(", "));
    }

    Ok(())
}
