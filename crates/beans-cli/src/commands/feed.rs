use beans_core::Beans;

pub fn run(limit: usize, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let app = Beans::open()?;

    // The feed shows completed reflections only.
    let items: Vec<_> = app
        .recent_attempts(limit)?
        .into_iter()
        .filter(|item| item.attempt.did_try && item.attempt.feeling.is_some())
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("Nothing here yet. Complete a challenge and it will show up here.");
        return Ok(());
    }

    for item in items {
        let feeling = item
            .attempt
            .feeling
            .map(|f| format!("{} {}", f.emoji(), f.display_name()))
            .unwrap_or_default();
        println!(
            "{} {} {} ({})",
            item.attempt.date.format("%Y-%m-%d"),
            item.challenge.emoji,
            item.challenge.title,
            feeling
        );
        if let Some(note) = &item.attempt.note {
            println!("    \"{note}\"");
        }
    }
    Ok(())
}
