//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit`
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap derive types in `setup.rs`
//! 2. **Context Setup**: [`initialize`] wires config, store and word list
//! 3. **Dispatch**: One API call per subcommand
//! 4. **Output**: Templates for terminals, JSON with `--output json`
//! 5. **Exit Codes**: Errors and error messages exit with status 1

use super::logging;
use super::render::{
    render_config, render_entries, render_facets, render_letters, render_list, render_messages,
};
use super::setup::{parse_cli, AddArgs, Cli, Commands, EditArgs, OutputMode, SearchArgs};
use anyhow::{bail, Context, Result};
use lexiconapp::api::{CmdMessage, CmdResult, EntryUpdate, LexiconApi, MessageLevel};
use lexiconapp::config::LexiconConfig;
use lexiconapp::icon::IconResolver;
use lexiconapp::init::{initialize, LexiconContext};
use lexiconapp::model::{Entry, Icon};
use lexiconapp::query::QuerySpec;
use lexiconapp::store::StorageBackend;
use std::path::Path;
use tracing::debug;

/// How a command's result is shown on a terminal.
enum View {
    List,
    Entries,
    Messages,
    Facets,
    Letters,
}

pub fn run() -> Result<()> {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let cwd = std::env::current_dir().context("could not read the working directory")?;
    let mut ctx = initialize(&cwd, cli.data.clone());
    report_load(&ctx.messages, cli.verbose);

    let Cli { command, output, .. } = cli;
    let command = command.unwrap_or_else(|| Commands::Search(SearchArgs::default()));
    debug!(?command, "dispatching");

    if let Commands::Config = command {
        return show_config(&ctx, output);
    }

    let (result, view) = dispatch(&mut ctx, command, &cwd)?;
    emit(&result, view, output, &ctx.api.icon_resolver())?;

    if result.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

fn dispatch(
    ctx: &mut LexiconContext,
    command: Commands,
    cwd: &Path,
) -> Result<(CmdResult, View)> {
    let page_size = ctx.config.page_size();
    let api = &mut ctx.api;

    let outcome = match command {
        Commands::Search(args) => (api.search(&query_spec(args, page_size)), View::List),
        Commands::Show { keys } => (api.show(&keys)?, View::Entries),
        Commands::Add(args) => (api.add_entry(entry_from_args(args))?, View::Messages),
        Commands::Edit(args) => {
            let (key, update) = update_from_args(args);
            (api.edit_entry(&key, update)?, View::Messages)
        }
        Commands::Delete { keys } => (api.delete_entries(&keys)?, View::Messages),
        Commands::Fav { key } => (api.toggle_favorite(&key)?, View::Messages),
        Commands::Letters => (api.letters(), View::Letters),
        Commands::Tags => (api.facets(), View::Facets),
        Commands::Reset { yes } => (reset(api, yes)?, View::Messages),
        Commands::Export { target } => {
            let target = target.unwrap_or_else(|| cwd.to_path_buf());
            (api.export(&target)?, View::Messages)
        }
        Commands::Config => (CmdResult::default(), View::Messages),
    };
    Ok(outcome)
}

fn query_spec(args: SearchArgs, page_size: usize) -> QuerySpec {
    let mut spec = QuerySpec::new()
        .with_text(args.text.join(" "))
        .with_tags(&args.tags)
        .favorites_only(args.favorites)
        .page(
            args.page.saturating_sub(1) as usize,
            args.page_size.unwrap_or(page_size).max(1),
        );
    if let Some(pos) = args.pos {
        spec = spec.with_pos(pos);
    }
    if let Some(letter) = args.letter {
        spec = spec.for_letter(letter);
    }
    spec
}

fn entry_from_args(args: AddArgs) -> Entry {
    let mut entry = Entry::new(args.word)
        .with_tags(args.tags)
        .with_related(args.related);
    if let Some(pos) = args.pos {
        entry = entry.with_pos(pos);
    }
    if let Some(definition) = args.definition {
        entry = entry.with_definition(definition);
    }
    if let Some(usage) = args.usage {
        entry = entry.with_usage(usage);
    }
    if let Some(etymology) = args.etymology {
        entry = entry.with_etymology(etymology);
    }
    if let Some(icon) = args.icon {
        entry = entry.with_icon(Icon::parse(&icon));
    }
    entry
}

fn update_from_args(args: EditArgs) -> (String, EntryUpdate) {
    let update = EntryUpdate {
        word: args.word,
        pos: args.pos,
        definition: args.definition,
        usage: args.usage,
        etymology: args.etymology,
        tags: args.tags,
        related: args.related,
        icon: args.icon,
    };
    (args.key, update)
}

fn reset<B: StorageBackend>(api: &mut LexiconApi<B>, yes: bool) -> Result<CmdResult> {
    let pending = api.store().overrides().len();
    if pending > 0 && !yes {
        bail!(
            "this discards {} local change(s); run again with --yes to confirm",
            pending
        );
    }
    Ok(api.reset_local())
}

fn emit(result: &CmdResult, view: View, output: OutputMode, icons: &IconResolver) -> Result<()> {
    if output == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    let body = match view {
        View::List => render_list(&result.listed, result.page.as_ref(), icons),
        View::Entries => render_entries(&result.listed, icons),
        View::Facets => render_facets(&result.tags, &result.parts_of_speech),
        View::Letters => render_letters(&result.letters),
        View::Messages => String::new(),
    };
    print!("{}", body);
    print!("{}", render_messages(&result.messages));
    Ok(())
}

/// Word list problems go to stderr so they never mix with JSON output.
/// The "loaded" notice only shows with `--verbose`.
fn report_load(messages: &[CmdMessage], verbose: bool) {
    let shown: Vec<CmdMessage> = messages
        .iter()
        .filter(|m| verbose || m.level != MessageLevel::Info)
        .cloned()
        .collect();
    eprint!("{}", render_messages(&shown));
}

fn show_config(ctx: &LexiconContext, output: OutputMode) -> Result<()> {
    let values = config_values(&ctx.config, &ctx.api.paths().state_dir)?;
    if output == OutputMode::Json {
        let object: serde_json::Map<String, serde_json::Value> = values.into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&object)?);
    } else {
        print!("{}", render_config(&values));
    }
    Ok(())
}

fn config_values(
    config: &LexiconConfig,
    state_dir: &Path,
) -> Result<Vec<(String, serde_json::Value)>> {
    let mut values = vec![(
        "state_dir".to_string(),
        serde_json::Value::String(state_dir.display().to_string()),
    )];
    match serde_json::to_value(config)? {
        serde_json::Value::Object(fields) => values.extend(fields),
        other => values.push(("config".to_string(), other)),
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn query_spec_maps_search_args() {
        let args = SearchArgs {
            text: vec!["sky".into(), "blue".into()],
            tags: vec!["Color".into()],
            pos: Some("adjective".into()),
            favorites: true,
            letter: None,
            page: 3,
            page_size: None,
        };
        let spec = query_spec(args, 15);
        assert_eq!(spec.text, "sky blue");
        assert!(spec.tags.contains("color"));
        assert_eq!(spec.pos.as_deref(), Some("adjective"));
        assert!(spec.favorites_only);
        assert_eq!(spec.page_index, 2);
        assert_eq!(spec.page_size, 15);
    }

    #[test]
    fn letter_becomes_text() {
        let args = SearchArgs {
            letter: Some('b'),
            page: 1,
            page_size: Some(0),
            ..Default::default()
        };
        let spec = query_spec(args, 20);
        assert_eq!(spec.text, "b");
        assert_eq!(spec.page_size, 1);
    }

    #[test]
    fn add_args_build_entry() {
        let args = AddArgs {
            word: "Zeta".into(),
            pos: Some("noun".into()),
            definition: Some("last".into()),
            usage: None,
            etymology: None,
            tags: vec!["greek".into()],
            related: vec![],
            icon: Some("ζ".into()),
        };
        let entry = entry_from_args(args);
        assert_eq!(entry.pos, "noun");
        assert_eq!(entry.tags, vec!["greek"]);
        assert_eq!(entry.icon, Icon::Glyph('ζ'));
    }

    #[test]
    fn config_values_lead_with_state_dir() {
        let values = config_values(&LexiconConfig::default(), &PathBuf::from("/tmp/lx")).unwrap();
        assert_eq!(values[0].0, "state_dir");
        assert!(values.iter().any(|(k, v)| k == "page_size" && v == 20));
    }
}
