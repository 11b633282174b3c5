use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::fields::Theme;
use crate::state::TodoState;

/// Terminal to-do list.
/// Nothing is saved: the list lives for as long as the program runs.
#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Terminal to-do list with undo, emoji and a tiny autocorrect")]
pub struct Cli {
    /// Initial colour theme.
    #[arg(long, global = true, value_enum, default_value_t = Theme::Light)]
    pub theme: Theme,

    /// Do not correct words while typing.
    #[arg(long, global = true)]
    pub no_autocorrect: bool,

    /// Log level: trace | debug | info | warn | error.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Directory for log files. Defaults to ~/.emoji_todo/logs.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Fresh state configured from the global flags.
    pub fn initial_state(&self) -> TodoState {
        TodoState::new()
            .with_theme(self.theme)
            .with_autocorrect(!self.no_autocorrect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_ui() {
        let cli = Cli::try_parse_from(["todo"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.theme, Theme::Light);
        assert!(cli.initial_state().autocorrect_enabled());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "todo", "replay", "script.json", "--theme", "dark", "--no-autocorrect",
            "--log-level", "warn",
        ])
        .unwrap();
        assert_eq!(cli.theme, Theme::Dark);
        assert_eq!(cli.log_level.as_deref(), Some("warn"));
        let state = cli.initial_state();
        assert_eq!(state.view().theme, Theme::Dark);
        assert!(!state.autocorrect_enabled());
        assert!(matches!(cli.command, Some(Commands::Replay { .. })));
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(Cli::try_parse_from(["todo", "--theme", "neon"]).is_err());
    }

    #[test]
    fn test_autocorrect_requires_text() {
        assert!(Cli::try_parse_from(["todo", "autocorrect"]).is_err());
        let cli = Cli::try_parse_from(["todo", "autocorrect", "tod", "ap"]).unwrap();
        match cli.command {
            Some(Commands::Autocorrect { text }) => assert_eq!(text, vec!["tod", "ap"]),
            _ => panic!("expected autocorrect"),
        }
    }
}
