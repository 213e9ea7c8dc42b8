//! Session commands: login, register, logout, status.
//!
//! The login/register flow is: call the API, then `set_auth` on success,
//! then navigate (here: re-attach the token to the client). A server
//! rejection surfaces as an error and leaves the session untouched.

use deck_api::auth::{LoginRequest, RegisterRequest};
use deck_guard::GuardState;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login { email, password } => {
            let resp = ctx
                .api
                .login(&LoginRequest {
                    email: email.clone(),
                    password: password.clone(),
                })
                .await?;
            ctx.session.set_auth(&resp.token, resp.user.clone())?;
            ctx.refresh_api_token();
            if !flags.quiet {
                println!("logged in as {} <{}>", resp.user.name, resp.user.email);
            }
            Ok(())
        }
        AuthCommands::Register {
            name,
            email,
            password,
        } => {
            let resp = ctx
                .api
                .register(&RegisterRequest {
                    name: name.clone(),
                    email: email.clone(),
                    password: password.clone(),
                })
                .await?;
            ctx.session.set_auth(&resp.token, resp.user.clone())?;
            ctx.refresh_api_token();
            if !flags.quiet {
                println!("registered and logged in as {}", resp.user.name);
            }
            Ok(())
        }
        AuthCommands::Logout => {
            ctx.session.logout()?;
            ctx.refresh_api_token();
            if !flags.quiet {
                println!("logged out");
            }
            Ok(())
        }
        AuthCommands::Status => {
            match GuardState::of(&ctx.session) {
                GuardState::Authenticated => {
                    if let Some(user) = ctx.session.user() {
                        println!("logged in as {} <{}>", user.name, user.email);
                    }
                }
                GuardState::Unauthenticated => println!("not logged in"),
                // Context init hydrates before dispatch; kept for completeness.
                GuardState::Hydrating => println!("session still loading"),
            }
            Ok(())
        }
    }
}
