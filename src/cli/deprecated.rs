//! Deprecated-command classification.
//!
//! `update` was removed from the toolbelt but is intercepted here instead of
//! being registered as a command: a registered command would show up in
//! `--help`, which is exactly the opposite of what we want for a removed
//! name. Classification happens after clap rejects the subcommand, so the
//! dispatch table itself stays free of deprecated entries.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use console::style;

/// The one reserved deprecated command name.
const DEPRECATED: &str = "update";

/// Classify a clap parse error as an invocation of a deprecated command.
///
/// Returns the deprecated name only for an unrecognized-subcommand error
/// whose offending name is reserved, regardless of trailing arguments.
/// Every other parse error is left for clap to report.
pub fn deprecated_command(err: &clap::Error) -> Option<String> {
    if err.kind() != ErrorKind::InvalidSubcommand {
        return None;
    }

    match err.get(ContextKind::InvalidSubcommand) {
        Some(ContextValue::String(name)) if name == DEPRECATED => Some(name.clone()),
        _ => None,
    }
}

/// The fixed migration message for a deprecated command.
pub fn notice(command: &str) -> String {
    format!(
        "{} The \"{}\" command has been removed. Use \"{}\" instead.",
        style("Error:").red().bold(),
        style(command).yellow(),
        style("swift package update").green(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn update_is_classified_as_deprecated() {
        let err = Cli::try_parse_from(["capstan", "update"]).unwrap_err();
        assert_eq!(deprecated_command(&err).as_deref(), Some("update"));
    }

    #[test]
    fn update_with_trailing_arguments_is_still_deprecated() {
        let err = Cli::try_parse_from(["capstan", "update", "--force", "now"]).unwrap_err();
        assert_eq!(deprecated_command(&err).as_deref(), Some("update"));
    }

    #[test]
    fn unknown_command_is_not_deprecated() {
        let err = Cli::try_parse_from(["capstan", "bogus"]).unwrap_err();
        assert!(deprecated_command(&err).is_none());
    }

    #[test]
    fn flag_errors_are_not_deprecated() {
        let err = Cli::try_parse_from(["capstan", "--definitely-not-a-flag"]).unwrap_err();
        assert!(deprecated_command(&err).is_none());
    }

    #[test]
    fn notice_names_the_replacement() {
        let msg = notice("update");
        assert!(msg.contains("has been removed"));
        assert!(msg.contains("swift package update"));
    }
}
