use clap::{Parser, Subcommand};
use folio::features::terminal::{ClientConfig, Theme};
use std::path::PathBuf;

/// Terminal portfolio client.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Backend base URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, value_name = "N")]
    pub timeout_ms: Option<u64>,

    /// Colour theme
    #[arg(long, value_parser = ["red", "green"])]
    pub theme: Option<String>,

    /// Do not report commands to the analytics endpoint
    #[arg(long)]
    pub no_telemetry: bool,

    /// Configuration file (`shell.*` in the working directory otherwise)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the backend answers on /health
    Health,
    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// Run commands without the interactive prompt and print the transcript
    Run {
        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
        /// Commands, one per argument (quote those with arguments: "theme red")
        #[arg(required = true, value_name = "COMMAND")]
        commands: Vec<String>,
    },
}

impl Cli {
    /// Flags given on the command line win over file and environment values.
    #[must_use]
    pub fn apply(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.api_url {
            config.api_url.clone_from(url);
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        if let Some(theme) = &self.theme {
            config.theme = Theme::from_argument(theme);
        }
        if self.no_telemetry {
            config.telemetry = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_loaded_config() {
        let cli = Cli::try_parse_from([
            "folio",
            "--api-url",
            "http://api.example:8080",
            "--timeout-ms",
            "250",
            "--theme",
            "red",
            "--no-telemetry",
        ])
        .unwrap();
        let config = cli.apply(ClientConfig::default());

        assert_eq!(config.api_url, "http://api.example:8080");
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.theme, Theme::Red);
        assert!(!config.telemetry);
        assert!(cli.command.is_none());
    }

    #[test]
    fn missing_flags_keep_the_loaded_config() {
        let cli = Cli::try_parse_from(["folio", "health"]).unwrap();
        let config = cli.apply(ClientConfig::default());

        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.theme, Theme::Green);
        assert!(config.telemetry);
        assert!(matches!(cli.command, Some(Command::Health)));
    }

    #[test]
    fn run_takes_one_command_per_argument() {
        let cli = Cli::try_parse_from(["folio", "run", "--json", "about", "theme red"]).unwrap();
        let Some(Command::Run { json, commands }) = cli.command else {
            panic!("expected run");
        };

        assert!(json);
        assert_eq!(commands, ["about", "theme red"]);
    }

    #[test]
    fn contact_requires_every_field() {
        assert!(Cli::try_parse_from(["folio", "contact", "--name", "Ada"]).is_err());
        assert!(Cli::try_parse_from(["folio", "run"]).is_err());
        assert!(Cli::try_parse_from(["folio", "--theme", "blue"]).is_err());
    }

    #[test]
    fn zero_timeout_from_the_command_line_fails_validation() {
        let cli = Cli::try_parse_from(["folio", "--timeout-ms", "0", "health"]).unwrap();
        assert!(cli.apply(ClientConfig::default()).validate().is_err());
    }
}
