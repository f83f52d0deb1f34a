use beans_core::{Beans, Feeling};
use clap::Args;

#[derive(Args)]
pub struct ReflectArgs {
    /// Challenge id shown by `today`
    pub challenge_id: String,

    /// How it felt: awkward, neutral, nice, or amazing
    #[arg(long, conflicts_with = "pass")]
    pub feeling: Option<String>,

    /// Didn't try today ("maybe tomorrow")
    #[arg(long)]
    pub pass: bool,

    /// Optional note, up to 120 characters
    #[arg(long)]
    pub note: Option<String>,
}

pub fn run(args: ReflectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let feeling = match args.feeling.as_deref() {
        Some(s) => Some(
            Feeling::parse(s).ok_or_else(|| format!("unknown feeling '{s}' (expected awkward, neutral, nice, or amazing)"))?,
        ),
        None => None,
    };

    let mut app = Beans::open()?;
    let record = app.record_outcome(
        &args.challenge_id,
        !args.pass,
        feeling,
        args.note.as_deref(),
    )?;

    if record.celebrate {
        println!("🎉 You did it!");
    } else if record.attempt.did_try {
        println!("Logged. Showing up counts.");
    } else {
        println!("Logged. Maybe tomorrow.");
    }
    println!(
        "Streak: {} day(s) (longest {}), {} total attempt(s)",
        record.progress.current_streak,
        record.progress.longest_streak,
        record.progress.total_attempts
    );
    Ok(())
}
