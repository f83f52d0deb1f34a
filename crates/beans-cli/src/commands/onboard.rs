use beans_core::Beans;
use clap::Args;

#[derive(Args)]
pub struct OnboardArgs {
    /// Display name for the profile
    #[arg(long, conflicts_with = "anonymous")]
    pub name: Option<String>,

    /// Stay anonymous (the default when no name is given)
    #[arg(long)]
    pub anonymous: bool,
}

pub fn run(args: OnboardArgs) -> Result<(), Box<dyn std::error::Error>> {
    let is_anonymous = args.anonymous || args.name.is_none();

    let mut app = Beans::open()?;
    let progress = app.complete_onboarding(args.name, is_anonymous)?;

    match progress.display_name.as_deref() {
        Some(name) => println!("Welcome, {name}! Run `beans-cli today` to get started."),
        None => println!("Welcome! Run `beans-cli today` to get started."),
    }
    Ok(())
}
