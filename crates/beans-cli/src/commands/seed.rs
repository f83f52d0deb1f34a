use beans_core::{seed_catalog, Database};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let inserted = seed_catalog(&db)?;
    if inserted == 0 {
        println!("Catalog already seeded ({} challenges).", db.challenge_count()?);
    } else {
        println!("Seeded {inserted} challenges.");
    }
    Ok(())
}
