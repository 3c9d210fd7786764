use edgechain::{Chain, ChainResult, Fingerprinted, LinkedChain};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Leg {
    Walk,
    Train,
    Ferry,
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Leg::Walk => "walk",
            Leg::Train => "train",
            Leg::Ferry => "ferry",
        };
        f.write_str(name)
    }
}

fn route() -> ChainResult<LinkedChain<&'static str, Leg>> {
    let mut chain = LinkedChain::new();
    chain.start("Home")?;
    chain.append(Leg::Walk, "Station")?;
    chain.append(Leg::Train, "Harbour")?;
    chain.append(Leg::Ferry, "Island")?;
    Ok(chain)
}

pub fn main() -> ChainResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let route = route()?;
    tracing::info!(stops = route.len(), "route: {}", route);

    // ferries never leave from a train station
    let valid = route.validate(|from, leg, _| {
        !(*leg == Leg::Ferry && from.ends_with("Station"))
    });
    tracing::info!(valid, fingerprint = %route.fingerprint(), "route checked");

    Ok(())
}
