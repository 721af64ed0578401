//! Command-line interface for Lessondeck.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lessondeck - a learning-content site toolkit.
///
/// Renders lesson markdown to markup, builds a static site from the
/// catalog, and tracks learner progress locally.
#[derive(Parser, Debug)]
#[command(
    name = "deck",
    author = "Lessondeck Contributors",
    version,
    about = "A learning-content site toolkit",
    after_help = "Repository: https://github.com/lessondeck/lessondeck\n\n\
                  Examples:\n  \
                  deck render lesson.md\n  \
                  deck render lesson.md --page -o lesson.html\n  \
                  deck build -o site\n  \
                  deck list\n  \
                  deck complete 0 2\n  \
                  deck quiz 0 --answers 2,3,3,3,1"
)]
pub struct Cli {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(
        short = 'l',
        long = "loglevel",
        default_value = "warn",
        global = true
    )]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one markdown file to markup
    Render {
        /// Markdown source file
        file: PathBuf,

        /// Write output here instead of stdout
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Wrap the rendered fragment in a full page shell
        #[arg(long)]
        page: bool,
    },

    /// Build the static site from the catalog
    Build {
        /// Output directory (defaults to the configured output_dir)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// List modules and lessons with completion markers
    List,

    /// Search the catalog
    Search {
        /// Case-insensitive search text
        query: String,
    },

    /// Mark a lesson complete
    Complete {
        /// Module id as shown by `deck list`
        module: u32,

        /// Lesson number as shown by `deck list` (starts at 1)
        lesson: usize,
    },

    /// Mark a lab complete
    CompleteLab {
        /// Exact lab title
        title: String,
    },

    /// Run a module quiz
    Quiz {
        /// Module id
        module: u32,

        /// Comma-separated option numbers (starting at 1); prompts on
        /// stdin when omitted
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,
    },

    /// Show the progress summary
    Progress,

    /// Show resolved configuration and data paths
    Paths,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_render_default() {
        let cli = Cli::parse_from(["deck", "render", "lesson.md"]);
        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Command::Render { file, output, page } => {
                assert_eq!(file, PathBuf::from("lesson.md"));
                assert!(output.is_none());
                assert!(!page);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parse_render_with_options() {
        let cli = Cli::parse_from(["deck", "render", "lesson.md", "--page", "-o", "out.html"]);
        match cli.command {
            Command::Render { output, page, .. } => {
                assert_eq!(output, Some(PathBuf::from("out.html")));
                assert!(page);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["deck", "list", "-l", "debug"]);
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn test_cli_parse_complete() {
        let cli = Cli::parse_from(["deck", "complete", "3", "2"]);
        match cli.command {
            Command::Complete { module, lesson } => {
                assert_eq!(module, 3);
                assert_eq!(lesson, 2);
            }
            _ => panic!("expected complete command"),
        }
    }

    #[test]
    fn test_cli_parse_quiz_answers() {
        let cli = Cli::parse_from(["deck", "quiz", "0", "--answers", "2,3,1"]);
        match cli.command {
            Command::Quiz { module, answers } => {
                assert_eq!(module, 0);
                assert_eq!(answers, Some(vec![2, 3, 1]));
            }
            _ => panic!("expected quiz command"),
        }
    }

    #[test]
    fn test_cli_parse_inline_config() {
        let cli = Cli::parse_from(["deck", "-c", "[site]\ntheme = \"dark\"", "paths"]);
        assert!(cli.config.unwrap().contains("dark"));
    }
}
