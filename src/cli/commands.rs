use bloommind::mood::Mood;
use bloommind::settings::SettingToggle;
use clap::{Parser, Subcommand};

/// `BloomMind` - a companion chat that keeps answering when the model can't.
#[derive(Parser, Debug)]
#[command(name = "bloommind")]
#[command(version = "0.1.0")]
#[command(about = "An empathetic companion chat with an offline fallback.", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive conversation (`/mood <tag>`, `/clear`, `/quit`)
    Chat,

    /// Send a single message and print the reply
    Send {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Mood to report alongside the message (amazing, happy, okay, sad, anxious, neutral)
        #[arg(short, long)]
        mood: Option<Mood>,
    },

    /// Record how you feel right now
    Mood {
        /// amazing, happy, okay, sad, anxious or neutral
        mood: Mood,
    },

    /// Show the saved conversation
    History {
        /// Only show the most recent N messages
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Erase the saved conversation
    Clear,

    /// Sign in and start a fresh conversation
    Login {
        /// Name the companion greets you by
        name: String,
    },

    /// Sign out and erase all saved state
    Reset,

    /// Show preferences, or change one
    Settings {
        /// dark_mode, sound_effects, animations or calm_mode
        #[arg(requires = "value")]
        toggle: Option<SettingToggle>,

        /// true or false
        value: Option<bool>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_has_no_flag_conflicts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn send_joins_words_and_parses_mood() {
        let cli = Cli::try_parse_from(["bloommind", "send", "--mood", "Anxious", "big", "day"])
            .unwrap();
        match cli.command {
            Commands::Send { message, mood } => {
                assert_eq!(message.join(" "), "big day");
                assert_eq!(mood, Some(Mood::Anxious));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_mood_is_rejected() {
        assert!(Cli::try_parse_from(["bloommind", "mood", "furious"]).is_err());
    }

    #[test]
    fn settings_toggle_needs_value() {
        assert!(Cli::try_parse_from(["bloommind", "settings", "calm_mode"]).is_err());
        let cli =
            Cli::try_parse_from(["bloommind", "settings", "calm_mode", "true"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Settings {
                toggle: Some(SettingToggle::CalmMode),
                value: Some(true)
            }
        ));
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["bloommind", "history", "-v", "--limit", "5"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::History { limit: Some(5) }));
    }
}
