use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use wenote_core::{ReportPeriod, View};

#[derive(Parser, Debug)]
#[command(
    name = "wenote",
    version,
    about,
    long_about = "Terminal client for the WeNote note-taking service"
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output format (pretty, plain, or json)
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Log requests to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Args, Serialize)]
pub struct ConfigArgs {
    /// Profile name
    #[arg(long, short, env = "WENOTE_PROFILE")]
    pub profile: Option<String>,

    /// Base URL of the API, overrides the profile
    #[arg(long, env = "WENOTE_API_URL")]
    pub api_url: Option<String>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Prints out current configuration
    Config,
    /// Generates shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Signs in and stores the session token
    Login(CredentialArgs),
    /// Creates a new account
    Register(CredentialArgs),
    /// Forgets the stored session
    Logout,
    /// Shows the signed-in user
    Whoami,
    /// Notes subcommands
    #[clap(subcommand)]
    Note(NoteCommand),
    /// Trash subcommands
    #[clap(subcommand)]
    Trash(TrashCommand),
    /// Notebook subcommands
    #[clap(subcommand)]
    Notebook(NotebookCommand),
    /// Tag subcommands
    #[clap(subcommand)]
    Tag(TagCommand),
    /// Account profile subcommands
    #[clap(subcommand)]
    Profile(ProfileCommand),
    /// Streaks, daily goal and achievements
    #[clap(subcommand)]
    Streak(StreakCommand),
    /// Writing statistics
    Stats(StatsArgs),
    /// Creates a new note. Alias for 'note new'.
    Down(NoteNewArgs),
}

#[derive(Debug, Args, PartialEq)]
pub struct CredentialArgs {
    pub username: String,
    /// Read from stdin when omitted
    #[arg(long, env = "WENOTE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Plain,
    Json,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum NoteCommand {
    /// Lists notes.
    List(NoteListArgs),
    /// Creates a new note.
    New(NoteNewArgs),
    /// Edit a note.
    Edit(NoteEditArgs),
    /// Moves notes to the trash.
    Delete(NoteIdsArgs),
    /// Restores notes from the trash.
    Restore(NoteIdsArgs),
    /// Stars or unstars a note.
    Star(NoteIdArgs),
    /// Pins or unpins a note.
    Pin(NoteIdArgs),
    /// Replaces the tags of a note.
    Tag(NoteTagArgs),
    /// Moves notes to another notebook.
    Move(NoteMoveArgs),
}

#[derive(Debug, Args, PartialEq, Default)]
pub struct NoteListArgs {
    /// Search term to filter notes
    #[arg(default_value = None)]
    pub term: Option<String>,

    /// active, starred, trash or a notebook id
    #[arg(long, value_parser = parse_view, default_value = "active")]
    pub view: View,

    /// Filter by tag id
    #[arg(long)]
    pub tag: Option<u64>,

    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Debug, Args, PartialEq)]
pub struct NoteNewArgs {
    /// Notebook id (default notebook when omitted)
    #[arg(long, short)]
    pub notebook: Option<u64>,
    #[arg(long, short)]
    pub title: Option<String>,
    /// Note content
    #[arg(trailing_var_arg = true)]
    pub content: Vec<String>,
    /// Open in external editor for interactive editing
    #[arg(long, short, default_value_t = false)]
    pub edit: bool,
}

#[derive(Debug, Args, PartialEq)]
pub struct NoteEditArgs {
    #[arg(value_name = "ID")]
    pub id: u64,
    /// New title; opens the editor when neither title nor content is given
    #[arg(long, short)]
    pub title: Option<String>,
    #[arg(long, short)]
    pub content: Option<String>,
}

#[derive(Debug, Args, PartialEq)]
pub struct NoteIdArgs {
    #[arg(value_name = "ID")]
    pub id: u64,
}

#[derive(Debug, Args, PartialEq)]
pub struct NoteIdsArgs {
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<u64>,
}

#[derive(Debug, Args, PartialEq)]
pub struct NoteTagArgs {
    #[arg(value_name = "ID")]
    pub id: u64,
    /// Tag ids (can be specified multiple times or comma-separated)
    #[arg(long, value_name = "TAGS", value_delimiter = ',')]
    pub tag: Vec<u64>,
}

#[derive(Debug, Args, PartialEq)]
pub struct NoteMoveArgs {
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<u64>,
    /// Target notebook id
    #[arg(long, short)]
    pub notebook: u64,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum TrashCommand {
    /// Lists trashed notes.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Permanently deletes everything in the trash.
    Empty,
    /// Restores trashed notes.
    Restore(NoteIdsArgs),
    /// Permanently deletes trashed notes.
    Purge(NoteIdsArgs),
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum NotebookCommand {
    List,
    New { name: String },
    Rename { id: u64, name: String },
    /// Deletes a notebook; its notes move to the default notebook.
    Delete { id: u64 },
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum TagCommand {
    List,
    New {
        name: String,
        /// Hex colour such as #3B82F6
        #[arg(long)]
        color: Option<String>,
    },
    Edit {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    Delete {
        id: u64,
    },
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum ProfileCommand {
    Show,
    Update(ProfileUpdateArgs),
    /// Changes the account password.
    Password {
        #[arg(long, env = "WENOTE_PASSWORD", hide_env_values = true)]
        current: Option<String>,
        #[arg(long)]
        new: Option<String>,
    },
}

#[derive(Debug, Args, PartialEq)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub nickname: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub avatar_style: Option<String>,
    #[arg(long)]
    pub avatar_color: Option<String>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum StreakCommand {
    /// Current streak and today's goal progress
    Status,
    /// Sets the daily character goal
    Goal { chars: u32 },
    Achievements {
        /// Only show locked achievements
        #[arg(long)]
        locked: bool,
    },
    Report {
        #[arg(value_parser = parse_period, default_value = "week")]
        period: ReportPeriod,
    },
}

#[derive(Debug, Args, PartialEq)]
pub struct StatsArgs {
    /// Days covered by the trend
    #[arg(long, default_value_t = 7)]
    pub days: u32,
    /// Number of top tags
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
}

pub fn parse_view(s: &str) -> anyhow::Result<View> {
    Ok(s.parse()?)
}

pub fn parse_period(s: &str) -> anyhow::Result<ReportPeriod> {
    Ok(s.parse()?)
}
