//! Checks every curve in the registry against its generation seed.
//!
//! The four `wrong192v*` entries are corrupted on purpose and must print
//! `failed`.

use tinycurve_dlog::seed_check::{verify, REGISTRY};

fn main() {
    let mut entries: Vec<_> = REGISTRY.iter().collect();
    entries.sort_by_key(|entry| entry.name);

    for entry in entries {
        match verify(&entry.parameters()) {
            Ok(()) => println!("{}: ok", entry.name),
            Err(_) => println!("{}: failed", entry.name),
        }
    }
}
