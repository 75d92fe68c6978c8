use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled text for a terminal
    #[default]
    Term,
    /// The command result as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "lexicon",
    bin_name = "lexicon",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Browse, search and curate a JSON word list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Word list file to load instead of the configured locations
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Term, help_heading = "Options")]
    pub output: OutputMode,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search words (all words when no text is given)
    #[command(alias = "s", display_order = 1)]
    Search(SearchArgs),

    /// Show full entries by id or word
    #[command(alias = "v", display_order = 2)]
    Show {
        /// Entry ids or words
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,
    },

    /// Add a local entry
    #[command(alias = "n", display_order = 10)]
    Add(AddArgs),

    /// Edit an entry; remote entries get a local copy
    #[command(alias = "e", display_order = 11)]
    Edit(EditArgs),

    /// Delete entries
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Entry ids or words
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,
    },

    /// Toggle the favorite flag of an entry
    #[command(display_order = 13)]
    Fav {
        /// Entry id or word
        key: String,
    },

    /// List the initial letters in use
    #[command(display_order = 20)]
    Letters,

    /// List tags with counts and parts of speech
    #[command(display_order = 21)]
    Tags,

    /// Discard every local add, edit and delete
    #[command(display_order = 30)]
    Reset {
        /// Confirm discarding local changes
        #[arg(long)]
        yes: bool,
    },

    /// Export the current word list as JSON
    #[command(display_order = 31)]
    Export {
        /// Target file or directory (default: current directory)
        target: Option<PathBuf>,
    },

    /// Show the resolved configuration
    #[command(display_order = 40)]
    Config,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Text to look for in word, definition and usage
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,

    /// Only entries with this tag (repeatable; any tag matches)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Only entries with this part of speech
    #[arg(short, long)]
    pub pos: Option<String>,

    /// Only favorites
    #[arg(short, long)]
    pub favorites: bool,

    /// Select a letter from the A-Z index (matches it anywhere, like a search)
    #[arg(short, long, conflicts_with = "text")]
    pub letter: Option<char>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Entries per page (default from config)
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// The headword
    pub word: String,

    #[arg(long)]
    pub pos: Option<String>,

    #[arg(short, long)]
    pub definition: Option<String>,

    #[arg(short, long)]
    pub usage: Option<String>,

    #[arg(long)]
    pub etymology: Option<String>,

    /// Tag (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Related word (repeatable)
    #[arg(short, long)]
    pub related: Vec<String>,

    /// Icon: a single character, char:<c>, svg:<markup>, or an icon file name
    #[arg(long)]
    pub icon: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Entry id or word
    pub key: String,

    /// New headword
    #[arg(long)]
    pub word: Option<String>,

    #[arg(long)]
    pub pos: Option<String>,

    #[arg(short, long)]
    pub definition: Option<String>,

    #[arg(short, long)]
    pub usage: Option<String>,

    #[arg(long)]
    pub etymology: Option<String>,

    /// Replace tags (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Option<Vec<String>>,

    /// Replace related words (repeatable)
    #[arg(short, long)]
    pub related: Option<Vec<String>>,

    /// Replace the icon; an empty value removes it
    #[arg(long)]
    pub icon: Option<String>,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
