use beans_core::Beans;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let app = Beans::open()?;
    let Some(progress) = app.progress()? else {
        println!("No profile yet. Run `beans-cli onboard` first.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
        return Ok(());
    }

    match progress.display_name.as_deref() {
        Some(name) => println!("Progress for {name}"),
        None => println!("Progress"),
    }
    println!("  current streak: {} day(s)", progress.current_streak);
    println!("  longest streak: {} day(s)", progress.longest_streak);
    println!("  total attempts: {}", progress.total_attempts);
    if let Some(last) = progress.last_attempt_date {
        println!("  last attempt:   {}", last.format("%Y-%m-%d"));
    }
    Ok(())
}
