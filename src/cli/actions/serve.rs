use crate::console::{self, GuardConfig};
use anyhow::Result;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub guard: GuardConfig,
}

/// Execute the serve action.
/// # Errors
/// Returns an error if the console server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    info!(
        "Guarding console with cookie {}, login {}, landing {}",
        args.guard.session_cookie(),
        args.guard.login_path(),
        args.guard.landing_path()
    );
    console::serve(args.port, args.guard).await
}
