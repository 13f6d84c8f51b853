use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::types::StudentFields;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "students")]
#[command(about = "A CLI for the student records service", version)]
#[command(after_help = "EXAMPLES:
    students list                     Show all students
    students add -n Bo -a 21 -g B -e b@x.com   Add a student
    students delete 3                 Delete student 3
    students --api-url http://10.0.0.2:5000/students list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Students collection URL (overrides STUDENTS_API_URL and config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress informational messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show request logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all students
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    students list
    students list --json"
    )]
    List,
    /// Add a student, then show the refreshed list
    #[command(after_help = "EXAMPLES:
    students add --name Bo --age 21 --grade B --email b@x.com")]
    Add(StudentArgs),
    /// Replace a student's fields, then show the refreshed list
    #[command(after_help = "EXAMPLES:
    students update 3 --name Bo --age 22 --grade A --email b@x.com")]
    Update(UpdateArgs),
    /// Delete a student by id, then show the refreshed list
    #[command(
        alias = "rm",
        after_help = "EXAMPLES:
    students delete 3"
    )]
    Delete {
        /// Student id
        id: i64,
    },
    /// Check that the service is reachable
    #[command(after_help = "EXAMPLES:
    students health")]
    Health,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    students completions bash > ~/.bash_completion.d/students
    students completions zsh > ~/.zfunc/_students
    students completions fish > ~/.config/fish/completions/students.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    students init")]
    Init,
}

/// Student fields, sent to the server exactly as typed.
#[derive(Args, Clone, Debug)]
pub struct StudentArgs {
    /// Full name
    #[arg(long, short)]
    pub name: String,

    /// Age
    #[arg(long, short)]
    pub age: String,

    /// School grade or level
    #[arg(long, short)]
    pub grade: String,

    /// Email address
    #[arg(long, short)]
    pub email: String,
}

impl From<StudentArgs> for StudentFields {
    fn from(args: StudentArgs) -> Self {
        Self {
            name: args.name,
            age: args.age,
            grade: args.grade,
            email: args.email,
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct UpdateArgs {
    /// Student id
    pub id: i64,

    #[command(flatten)]
    pub fields: StudentArgs,
}
