//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// meeting-prep - AI-assisted meeting preparation briefs
#[derive(Parser, Debug)]
#[command(name = "meeting-prep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind to (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Prepare a meeting brief from the terminal
    Prepare(PrepareArgs),

    /// Check credentials and configuration
    Doctor {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Company you are meeting with
    #[arg(short, long)]
    pub company: Option<String>,

    /// What the meeting should achieve
    #[arg(short, long)]
    pub objective: Option<String>,

    /// Who attends, with roles
    #[arg(short, long)]
    pub attendees: Option<String>,

    /// Meeting length in minutes
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Topics to focus on
    #[arg(short, long)]
    pub focus: Option<String>,

    /// Print the HTML rendering instead of Markdown
    #[arg(long)]
    pub html: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
