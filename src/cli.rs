use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::commands::{
    build_gateway, cmd_config_get, cmd_config_set, cmd_config_show, cmd_employees, cmd_posts,
};

#[derive(Parser)]
#[command(name = "postview")]
#[command(about = "Browse employees' posts and their comment threads")]
#[command(version)]
pub struct Cli {
    /// Serve API requests from a JSON fixture file instead of the network
    #[arg(long, global = true, env = "POSTVIEW_FIXTURES")]
    pub fixtures: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the employees offered in the dropdown
    #[command(visible_alias = "ls")]
    Employees {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Select an employee and render their posts
    Posts {
        /// Employee id as typed into the dropdown (invalid values select employee 1)
        #[arg(allow_hyphen_values = true)]
        employee: String,

        /// Show the comments of this post (repeatable)
        #[arg(short, long = "expand", value_name = "POST_ID")]
        expand: Vec<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Render the whole page instead of the posts container (html only)
        #[arg(long)]
        page: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (base_url, request_timeout)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (base_url, request_timeout)
        key: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Readable terminal output
    Text,
    /// Serialized document markup
    Html,
    /// Selection result as JSON
    Json,
}

impl Cli {
    pub async fn run(self) -> crate::error::Result<()> {
        match self.command {
            Commands::Employees { json } => {
                let gateway = build_gateway(self.fixtures.as_deref())?;
                cmd_employees(gateway, json).await
            }

            Commands::Posts {
                employee,
                expand,
                format,
                page,
            } => {
                let gateway = build_gateway(self.fixtures.as_deref())?;
                cmd_posts(gateway, &employee, &expand, format, page).await
            }

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
                ConfigAction::Get { key } => cmd_config_get(&key),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "postview", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_posts_args() {
        let cli = Cli::try_parse_from([
            "postview", "posts", "3", "--expand", "10", "-e", "11", "--format", "html",
        ])
        .unwrap();

        match cli.command {
            Commands::Posts {
                employee,
                expand,
                format,
                page,
            } => {
                assert_eq!(employee, "3");
                assert_eq!(expand, vec![10, 11]);
                assert_eq!(format, OutputFormat::Html);
                assert!(!page);
            }
            _ => panic!("expected posts command"),
        }
    }

    #[test]
    fn test_posts_accepts_invalid_employee_value() {
        let cli = Cli::try_parse_from(["postview", "posts", "abc"]).unwrap();
        assert!(matches!(cli.command, Commands::Posts { ref employee, .. } if employee == "abc"));
    }

    #[test]
    fn test_posts_accepts_negative_employee_value() {
        let cli = Cli::try_parse_from(["postview", "posts", "-3"]).unwrap();
        assert!(matches!(cli.command, Commands::Posts { ref employee, .. } if employee == "-3"));
    }

    #[test]
    fn test_expand_rejects_non_numeric() {
        assert!(Cli::try_parse_from(["postview", "posts", "3", "--expand", "x"]).is_err());
    }

    #[test]
    fn test_global_fixtures_flag() {
        let cli = Cli::try_parse_from(["postview", "employees", "--fixtures", "f.json"]).unwrap();
        assert_eq!(cli.fixtures, Some(PathBuf::from("f.json")));
    }
}
