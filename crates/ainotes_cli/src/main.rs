//! `ainotes` command-line entry point.
//!
//! # Responsibility
//! - Run note analysis over inline, file or stdin text.
//! - Drive the local note store for quick manual checks.

mod cli;

use ainotes_core::db::open_db;
use ainotes_core::{
    init_logging, AnalysisOptions, Note, NoteId, NoteService, SqliteNoteRepository, TextAnalyzer,
};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::{Cli, Commands, NoteAction, TextInput};
use log::info;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        start_logging(log_dir, cli.verbose)?;
    }

    let options = load_options(cli.options.as_deref())?;
    let analyzer = TextAnalyzer::with_options(options);
    let json = cli.json;

    match cli.command {
        Commands::Summarize {
            input,
            max_sentences,
        } => {
            let text = read_text(&input)?;
            let summary = match max_sentences {
                Some(limit) => analyzer.summarize_with_limit(&text, limit),
                None => analyzer.summarize(&text),
            };
            print_value(json, &summary, || summary.clone())
        }
        Commands::Keywords { input, limit } => {
            let text = read_text(&input)?;
            let keywords = match limit {
                Some(limit) => analyzer.extract_keywords_with_limit(&text, limit),
                None => analyzer.extract_keywords(&text),
            };
            print_value(json, &keywords, || keywords.join("\n"))
        }
        Commands::Title { input } => {
            let title = analyzer.generate_title(&read_text(&input)?);
            print_value(json, &title, || title.clone())
        }
        Commands::Sentiment { input } => {
            let sentiment = analyzer.analyze_sentiment(&read_text(&input)?);
            print_value(json, &sentiment, || {
                format!("{} {}", sentiment.emoji(), sentiment.label())
            })
        }
        Commands::Analyze { input } => {
            let insights = analyzer.analyze(&read_text(&input)?);
            print_value(json, &insights, || {
                format!(
                    "title: {}\nsentiment: {} {}\nkeywords: {}\nsummary: {}",
                    insights.title,
                    insights.sentiment.emoji(),
                    insights.sentiment.label(),
                    insights.keywords.join(", "),
                    insights.summary
                )
            })
        }
        Commands::Notes { db, user, action } => run_notes(&db, &user, action, analyzer, json),
    }
}

fn run_notes(
    db: &Path,
    user: &str,
    action: NoteAction,
    analyzer: TextAnalyzer,
    json: bool,
) -> Result<()> {
    let mut conn =
        open_db(db).with_context(|| format!("failed to open note store `{}`", db.display()))?;
    let repo = SqliteNoteRepository::try_new(&mut conn)?;
    let mut service = NoteService::with_analyzer(repo, analyzer);

    match action {
        NoteAction::Add { input, title, tags } => {
            let mut note = Note::new(read_text(&input)?);
            if let Some(title) = title {
                note.title = title;
            }
            note.tags = tags;
            let saved = service.save_note(user, note)?;
            print_note(json, &saved)
        }
        NoteAction::Record { input, audio_url } => {
            let saved = service.create_recorded_note(user, &read_text(&input)?, audio_url)?;
            print_note(json, &saved)
        }
        NoteAction::List => print_notes(json, &service.list_notes(user)?),
        NoteAction::Search { query } => print_notes(json, &service.search_notes(user, &query)?),
        NoteAction::Refresh { id } => {
            let (saved, _) = service.regenerate_insights(parse_id(&id)?)?;
            print_note(json, &saved)
        }
        NoteAction::Delete { id } => {
            let id = parse_id(&id)?;
            service.delete_note(id)?;
            print_value(json, &id.to_string(), || format!("deleted {id}"))
        }
    }
}

fn start_logging(log_dir: &Path, verbose: bool) -> Result<()> {
    let log_dir = absolute(log_dir)?;
    let level = if verbose { "debug" } else { "info" };
    let log_dir_text = log_dir
        .to_str()
        .ok_or_else(|| anyhow!("log directory `{}` is not UTF-8", log_dir.display()))?;
    init_logging(level, log_dir_text).map_err(|err| anyhow!(err))?;
    info!("event=cli_start module=cli status=ok level={level}");
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(path))
}

fn load_options(path: Option<&Path>) -> Result<AnalysisOptions> {
    let Some(path) = path else {
        return Ok(AnalysisOptions::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options file `{}`", path.display()))?;
    let options: AnalysisOptions = serde_json::from_str(&raw)
        .with_context(|| format!("invalid options file `{}`", path.display()))?;
    Ok(options)
}

fn read_text(input: &TextInput) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

fn parse_id(raw: &str) -> Result<NoteId> {
    NoteId::parse_str(raw.trim()).with_context(|| format!("invalid note id `{raw}`"))
}

fn print_value<T: serde::Serialize + ?Sized>(
    json: bool,
    value: &T,
    plain: impl FnOnce() -> String,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", plain());
    }
    Ok(())
}

fn print_note(json: bool, note: &Note) -> Result<()> {
    print_value(json, note, || note_line(note))
}

fn print_notes(json: bool, notes: &[Note]) -> Result<()> {
    print_value(json, notes, || {
        notes.iter().map(note_line).collect::<Vec<_>>().join("\n")
    })
}

fn note_line(note: &Note) -> String {
    let id = note
        .id
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    let marker = if note.is_recorded { " [voice]" } else { "" };
    let tags = if note.tags.is_empty() {
        String::new()
    } else {
        format!(" #{}", note.tags.join(" #"))
    };
    format!("{id}  {}{marker}{tags}\n    {}", note.title, note.preview())
}
