// Import the main modules using prelude for convenience
use cupi_rs::prelude::*;

/// Basic usage: cluster state, a few lookups and error handling
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Basic provisioning interface example");

    // CUPI_SERVER, CUPI_USERNAME and CUPI_PASSWORD
    let server = match from_env() {
        Ok(server) => server,
        Err(e) => {
            println!("Set CUPI_SERVER, CUPI_USERNAME and CUPI_PASSWORD to run this example.");
            println!("Error: {}", e);
            return Ok(());
        }
    };

    // Validation happens before anything is sent
    println!("\nError handling demonstration:");
    match Clauses::new().page(1, 5000) {
        Ok(_) => println!("This should not happen"),
        Err(e) => println!("Expected validation error: {}", e),
    }
    match server.partitions().get("not/an/id").await {
        Ok(_) => println!("This should not happen"),
        Err(e) => println!("Expected validation error: {}", e),
    }

    println!("\nCluster members:");
    match server.cluster().servers().await {
        Ok(members) => {
            for member in members {
                println!("  {}", member);
            }
        }
        Err(e) => println!("  Could not read cluster state: {}", e),
    }

    println!("\nTime zones starting with (GMT-05:00):");
    let clauses = Clauses::new()
        .query("displayname", QueryOp::StartsWith, "(GMT-05:00)")?
        .page(1, 10)?;
    match server.timezones().list(&clauses).await {
        Ok(zones) => {
            for zone in &zones {
                println!("  {}", zone);
            }
        }
        Err(e) => println!("  Lookup failed: {}", e),
    }

    println!("\nSMPP providers:");
    match server.smpp_providers().list(&Clauses::none()).await {
        Ok(providers) if providers.is_empty() => println!("  none configured"),
        Ok(providers) => {
            for provider in &providers {
                println!("  {}", provider);
            }
        }
        Err(e) => match e {
            CupiError::ApiError { status, message, .. } => println!("  Server said {}: {}", status, message),
            other => println!("  Request failed: {}", other),
        },
    }

    Ok(())
}
