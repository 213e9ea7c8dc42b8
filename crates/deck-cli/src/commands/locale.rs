//! Locale commands: inspection and path switching.

use deck_locale::{Locale, Switch};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LocaleCommands;
use crate::context::AppContext;

pub fn handle(
    action: &LocaleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LocaleCommands::List => {
            let default = ctx.locale()?;
            for locale in deck_locale::SUPPORTED {
                if *locale == default {
                    println!("{locale} (default)");
                } else {
                    println!("{locale}");
                }
            }
            Ok(())
        }
        LocaleCommands::Switch { locale, path } => {
            let locale: Locale = locale.parse()?;
            match deck_locale::switch(path, locale) {
                Switch::Stay => {
                    if !flags.quiet {
                        println!("already on '{locale}'; no navigation");
                    }
                }
                Switch::Navigate(target) => println!("{target}"),
            }
            Ok(())
        }
    }
}
