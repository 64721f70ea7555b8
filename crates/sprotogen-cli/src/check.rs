//! Check command implementation

use anyhow::{Context, Result};
use sprotogen_core::{FileDescriptor, check_contract, find_collisions, message_id};
use std::path::Path;
use tracing::warn;

/// Run the check command
///
/// Verifies the descriptor contract and lists message identifiers. Identifier
/// collisions are reported, not rejected.
pub fn run(input: &Path, namespace: &str) -> Result<()> {
    let file = FileDescriptor::from_file(input)
        .with_context(|| format!("Failed to load descriptors from {}", input.display()))?;

    check_contract(&file, namespace)?;

    println!(
        "{}: {} message(s), {} enum(s)",
        file.name,
        file.structs.len(),
        file.enums.len()
    );

    let qualified: Vec<String> = file
        .structs
        .iter()
        .map(|s| format!("{namespace}.{}", s.name))
        .collect();

    for message in &file.structs {
        let id = message_id(namespace, &message.name);
        println!("  {id:#010x}  {id:>10}  {namespace}.{}", message.name);
    }

    let collisions = find_collisions(&qualified);
    for collision in &collisions {
        warn!(
            id = collision.id,
            first = %collision.first,
            second = %collision.second,
            "message identifier collision"
        );
    }

    if collisions.is_empty() {
        println!("\n✓ {} satisfies the descriptor contract", file.name);
    } else {
        println!(
            "\n! {} satisfies the descriptor contract with {} identifier collision(s)",
            file.name,
            collisions.len()
        );
    }

    Ok(())
}
