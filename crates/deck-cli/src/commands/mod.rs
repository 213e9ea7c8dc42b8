pub mod auth;
pub mod locale;
pub mod open;
pub mod project;
pub mod shared;
pub mod task;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => auth::handle(&action, ctx, flags).await,
        Commands::Project { action } => project::handle(&action, ctx, flags).await,
        Commands::Task { action } => task::handle(&action, ctx, flags).await,
        Commands::Locale { action } => locale::handle(&action, ctx, flags),
        Commands::Open { path } => open::handle(&path, ctx, flags).await,
    }
}
