use std::sync::Arc;

use tokio::io::AsyncReadExt;

use neurolearn::adapters::{
    provider_from_config, FileProfileStore, FixedAffectDetector, SimulatedAffectDetector,
};
use neurolearn::application::{
    LoadProfileHandler, PlanSessionHandler, SaveProfileHandler, SimplifyTextCommand,
    SimplifyTextHandler,
};
use neurolearn::config::AppConfig;
use neurolearn::domain::affect::AffectiveState;
use neurolearn::domain::learner::resolve_str;
use neurolearn::domain::presentation::PresentationHints;
use neurolearn::ports::{AffectDetector, ProfileStore};

/// Command-line options. Study text always comes from stdin.
#[derive(Debug, Default)]
struct Options {
    /// Overrides the simulated affect detector.
    affect: Option<AffectiveState>,
    /// Partial profile JSON to merge and persist before running.
    set_profile: Option<String>,
}

impl Options {
    fn from_args(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = Self::default();
        let mut args = args;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--affect" => {
                    let raw = args.next().ok_or("--affect needs a value")?;
                    let state = AffectiveState::parse(&raw)
                        .ok_or_else(|| format!("unknown affective state: {}", raw))?;
                    options.affect = Some(state);
                }
                "--set-profile" => {
                    options.set_profile =
                        Some(args.next().ok_or("--set-profile needs a JSON value")?);
                }
                other => return Err(format!("unrecognized argument: {}", other)),
            }
        }

        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    neurolearn::logging::init_tracing(&config.logging);
    config.validate()?;

    let options = Options::from_args(std::env::args().skip(1))?;

    let store: Arc<dyn ProfileStore> =
        Arc::new(FileProfileStore::new(&config.storage.profile_path));
    let profile = match options.set_profile.as_deref() {
        Some(raw) => {
            let profile = resolve_str(raw);
            SaveProfileHandler::new(store.clone()).handle(&profile).await;
            profile
        }
        None => LoadProfileHandler::new(store).handle().await,
    };

    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;

    let simplifier = SimplifyTextHandler::new(provider_from_config(&config.ai))
        .with_timeout(config.ai.timeout());
    tracing::debug!(remote = simplifier.has_remote(), "simplifier ready");
    let summary = simplifier
        .handle(SimplifyTextCommand::new(text, profile.clone()))
        .await;

    let detector: Arc<dyn AffectDetector> = match options.affect {
        Some(state) => Arc::new(FixedAffectDetector::new(state)),
        None => Arc::new(SimulatedAffectDetector::new()),
    };
    let planned = PlanSessionHandler::new(detector).handle(&profile).await;
    let hints = PresentationHints::for_profile(&profile);

    println!("{}\n", profile.summary());
    match summary.provenance() {
        Some(provenance) => println!("Summary ({:?}):", provenance),
        None => println!("Summary:"),
    }
    println!("{}\n", summary.text());
    println!(
        "Focus session: {} minutes (affect: {})",
        planned.plan.duration_minutes, planned.state
    );
    println!("{}", planned.plan.message);
    println!("\nTheme: {:?} | Audio playback: {}", hints.theme, hints.offer_audio);

    Ok(())
}
