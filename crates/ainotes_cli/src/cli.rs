//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ainotes")]
#[command(version)]
#[command(about = "On-device note summaries, keywords, titles and sentiment")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// JSON file with analysis options (limits and sentiment thresholds)
    #[arg(short, long, global = true)]
    pub options: Option<PathBuf>,

    /// Directory for rolling log files; logging stays off when omitted
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extractive summary of the input
    Summarize {
        #[command(flatten)]
        input: TextInput,

        /// Maximum sentences to keep
        #[arg(short = 'n', long)]
        max_sentences: Option<usize>,
    },

    /// Most frequent noun and verb keywords
    Keywords {
        #[command(flatten)]
        input: TextInput,

        /// Maximum keywords to return
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Title from the first sentence
    Title {
        #[command(flatten)]
        input: TextInput,
    },

    /// Positive, Negative or Neutral
    Sentiment {
        #[command(flatten)]
        input: TextInput,
    },

    /// Title, summary, keywords and sentiment in one pass
    Analyze {
        #[command(flatten)]
        input: TextInput,
    },

    /// Manage notes in a local store
    Notes {
        /// SQLite store path
        #[arg(long, default_value = "ainotes.sqlite3")]
        db: PathBuf,

        /// Owner of the notes
        #[arg(short, long, default_value = "local")]
        user: String,

        #[command(subcommand)]
        action: NoteAction,
    },
}

#[derive(Subcommand)]
pub enum NoteAction {
    /// Save a typed note; the title is generated when omitted
    Add {
        #[command(flatten)]
        input: TextInput,

        #[arg(short, long)]
        title: Option<String>,

        /// Tag to attach; repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Save a dictated transcript with generated title, summary and tags
    Record {
        #[command(flatten)]
        input: TextInput,

        /// Reference to the recorded audio
        #[arg(long)]
        audio_url: Option<String>,
    },

    /// List notes, most recently updated first
    List,

    /// Case-insensitive search over titles, contents and tags
    Search { query: String },

    /// Recompute summary and tags of one note
    Refresh { id: String },

    /// Delete one note
    Delete { id: String },
}

/// Text given inline, from a file, or on stdin.
#[derive(Args)]
pub struct TextInput {
    /// Inline text; read from stdin when neither this nor --file is given
    pub text: Option<String>,

    /// Read text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}
