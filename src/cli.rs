use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spam and phishing verdicts for chat messages.
#[derive(Parser, Debug)]
#[command(name = "message-safety-checker")]
#[command(version)]
#[command(about = "Classifies messages as spam and their links as phishing.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Port to listen on, overrides SERVER_PORT
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to, overrides SERVER_HOST
        #[arg(long)]
        host: Option<String>,
    },

    /// Evaluate one message and print the detailed result as JSON
    Check {
        /// File containing the message; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Classify a single URL with the configured phishing backend
    CheckUrl {
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["message-safety-checker"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_check_and_check_url() {
        let cli = Cli::try_parse_from(["message-safety-checker", "check", "message.txt"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Check { file: Some(ref path) }) if path == &PathBuf::from("message.txt")
        ));

        let cli =
            Cli::try_parse_from(["message-safety-checker", "check-url", "http://bit.ly/x"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::CheckUrl { ref url }) if url == "http://bit.ly/x"));
    }

    #[test]
    fn serve_overrides() {
        let cli =
            Cli::try_parse_from(["message-safety-checker", "serve", "-p", "9000", "--host", "0.0.0.0"])
                .unwrap();
        match cli.command {
            Some(Commands::Serve { port, host }) => {
                assert_eq!(port, Some(9000));
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
