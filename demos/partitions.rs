use cupi_rs::prelude::*;
use cupi_rs::dump_properties;

/// Create, rename and remove a partition
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let server = from_env()?;
    let partitions = server.partitions();

    let existing = partitions.list(&Clauses::new().sort("name", SortOrder::Ascending)?).await?;
    println!("{} partitions on {}", existing.total, server.server_name);
    for partition in &existing {
        println!("  {}", partition);
    }

    let object_id = partitions.add("cupi-rs demo", Some("Created by the partitions example")).await?;
    println!("\nCreated partition {}", object_id);

    partitions
        .update(&object_id, Some("cupi-rs demo (renamed)"), None)
        .await?;
    let renamed = partitions.get(&object_id).await?;
    println!("After update:\n{}", dump_properties(&renamed, "")?);

    partitions.delete(&object_id).await?;
    println!("Deleted {}", object_id);

    match partitions.get(&object_id).await {
        Err(e) if e.is_not_found() => println!("Partition is gone"),
        Err(e) => println!("Unexpected error: {}", e),
        Ok(_) => println!("Partition still exists"),
    }

    Ok(())
}
