use beans_core::{Beans, Challenge, CoreError, DailyChallenge};

fn print_challenge(challenge: &Challenge) {
    println!("{} {}", challenge.emoji, challenge.title);
    println!(
        "   {} {} | {} | {}",
        challenge.difficulty.emoji(),
        challenge.difficulty.display_name(),
        challenge.estimated_time,
        challenge.category
    );
    println!("   {}", challenge.description);
    println!("   id: {}", challenge.id);
}

fn print_daily(daily: &DailyChallenge) {
    print_challenge(&daily.challenge);
    if daily.reflected() {
        let feeling = daily.attempt.as_ref().and_then(|a| a.feeling);
        match feeling {
            Some(f) => println!("   done today: {} {}", f.emoji(), f.display_name()),
            None => println!("   done today (maybe tomorrow)"),
        }
        println!("   Come back tomorrow for your next challenge.");
    } else if daily.committed() {
        println!("   accepted; reflect when you're done");
    } else {
        println!("   not accepted yet; `accept` to pin it or `skip` to re-roll");
    }
}

pub fn run_today(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = Beans::open()?;
    match app.today_challenge() {
        Ok(daily) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&daily)?);
            } else {
                print_daily(&daily);
            }
            Ok(())
        }
        // Empty catalog renders as an empty state, not a failure.
        Err(CoreError::EmptyCatalog) => {
            println!("No active challenges yet. Run `beans-cli seed` first.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn run_accept(challenge_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = Beans::open()?;
    let attempt = app.accept_challenge(challenge_id)?;
    if attempt.challenge_id == challenge_id {
        println!("Accepted. This is your challenge for today.");
    } else {
        println!(
            "Today is already pinned to another challenge (id: {}).",
            attempt.challenge_id
        );
    }
    Ok(())
}

pub fn run_skip(challenge_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = Beans::open()?;
    match app.skip_challenge(challenge_id)? {
        Some(challenge) => print_challenge(&challenge),
        None => println!("No other active challenge to show."),
    }
    Ok(())
}
