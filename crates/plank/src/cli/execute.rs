//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands, including
//! the interactive session loop.

use anyhow::{bail, Result};
use std::io::Write as _;
use std::str::FromStr;

use super::args::{BoardArgs, CommentArgs, InitArgs, SessionArgs, ShowArgs};
use crate::app::App;
use crate::board::classify_issue;
use crate::domain::ColumnId;
use crate::output::{self, OutputConfig, OutputMode};

/// Load the application context from the current directory.
async fn load_app() -> Result<App> {
    let current_dir = std::env::current_dir()?;
    Ok(App::from_directory(&current_dir).await?)
}

/// Author label recorded on local annotations.
fn local_author() -> String {
    std::env::var("USER").unwrap_or_else(|_| "you".to_string())
}

/// Execute the init command.
pub async fn execute_init(args: &InitArgs, output_mode: OutputMode) -> Result<()> {
    use crate::commands::init;

    let current_dir = std::env::current_dir()?;
    let result = init::init(&current_dir, &args.owner, &args.repo).await?;

    match output_mode {
        OutputMode::Json => {
            output::print_json(&serde_json::json!({
                "plank_dir": result.plank_dir.display().to_string(),
                "config_file": result.config_file.display().to_string(),
                "annotations_file": result.annotations_file.display().to_string(),
                "repo": result.repo_slug,
            }))?;
        }
        OutputMode::Text => {
            if !args.quiet {
                println!("Initialized plank in {}", result.plank_dir.display());
                println!("  Config:      {}", result.config_file.display());
                println!("  Annotations: {}", result.annotations_file.display());
                println!("  Repository:  {}", result.repo_slug);
            }
        }
    }

    Ok(())
}

/// Execute the board command.
pub async fn execute_board(args: &BoardArgs, output_mode: OutputMode) -> Result<()> {
    let mut app = load_app().await?;
    let config = OutputConfig::from_env();

    app.refresh().await;

    if let Some(message) = app.board().last_error() {
        bail!("{message}");
    }
    let Some(columns) = app.board().columns() else {
        bail!("board did not load");
    };

    match (output_mode, args.column) {
        (OutputMode::Json, Some(column)) => {
            output::print_json(columns.get(ColumnId::from(column)))?;
        }
        (OutputMode::Json, None) => output::print_board_json(columns)?,
        (OutputMode::Text, Some(column)) => {
            println!("{}\n", output::color::info(&app.repo().to_string(), &config));
            output::print_column(columns.get(ColumnId::from(column)), &config);
        }
        (OutputMode::Text, None) => {
            println!("{}\n", output::color::info(&app.repo().to_string(), &config));
            output::print_board(columns, &config);
        }
    }

    Ok(())
}

/// Execute the show command.
pub async fn execute_show(args: &ShowArgs, output_mode: OutputMode) -> Result<()> {
    let app = load_app().await?;
    let config = OutputConfig::from_env();

    let issue = app.fetch_issue(args.number).await?;
    let column = classify_issue(&issue);
    let annotations = app.annotations().for_issue(issue.id);

    match output_mode {
        OutputMode::Json => output::print_issue_detail_json(&issue, column, &annotations)?,
        OutputMode::Text => output::print_issue_detail(&issue, column, &annotations, &config),
    }

    Ok(())
}

/// Execute the comment command.
pub async fn execute_comment(args: &CommentArgs, output_mode: OutputMode) -> Result<()> {
    let mut app = load_app().await?;

    // Resolve the human-facing number to the stable issue id annotations
    // are keyed by.
    let issue = app.fetch_issue(args.number).await?;
    let text = args.text.join(" ");
    let author = local_author();

    match app
        .annotations_mut()
        .submit(issue.id, &author, &text)
        .await?
    {
        Some(annotation) => match output_mode {
            OutputMode::Json => output::print_json(&annotation)?,
            OutputMode::Text => {
                println!("Noted on #{}: {}", args.number, annotation.content);
            }
        },
        None => {
            eprintln!("Ignored blank comment; nothing stored.");
        }
    }

    Ok(())
}

/// Execute the interactive session command.
pub async fn execute_session(_args: &SessionArgs) -> Result<()> {
    let mut app = load_app().await?;
    let config = OutputConfig::from_env();

    println!(
        "{} board session (type 'help' for commands)",
        output::color::info(&app.repo().to_string(), &config)
    );
    app.refresh().await;
    render_board_state(&app, &config);

    let stdin = std::io::stdin();
    loop {
        eprint!("plank> ");
        std::io::stderr().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        match run_session_command(&mut app, line.trim(), &config).await {
            SessionOutcome::Continue => {}
            SessionOutcome::Quit => break,
        }
    }

    Ok(())
}

enum SessionOutcome {
    Continue,
    Quit,
}

async fn run_session_command(
    app: &mut App,
    line: &str,
    config: &OutputConfig,
) -> SessionOutcome {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return SessionOutcome::Continue;
    };
    let rest: Vec<&str> = words.collect();

    match command {
        "quit" | "exit" | "q" => return SessionOutcome::Quit,
        "help" | "h" | "?" => print_session_help(),
        "refresh" | "r" => {
            app.refresh().await;
            render_board_state(app, config);
        }
        "board" | "b" => render_board_state(app, config),
        "move" | "m" => session_move(app, &rest, config),
        "show" | "s" => session_show(app, &rest, config),
        "comment" | "c" => session_comment(app, &rest, config).await,
        other => {
            eprintln!("Unknown command '{other}'; type 'help' for commands.");
        }
    }

    SessionOutcome::Continue
}

fn print_session_help() {
    println!("Commands:");
    println!("  board                      render the board");
    println!("  move <number> <column>     move a card (todo | in-progress | done)");
    println!("  show <number>              issue detail with local notes");
    println!("  comment <number> <text>    add a local note");
    println!("  refresh                    refetch and reclassify (discards moves)");
    println!("  quit                       leave the session");
}

/// Render the current board, or the last error alongside whatever board
/// was previously loaded.
fn render_board_state(app: &App, config: &OutputConfig) {
    if let Some(message) = app.board().last_error() {
        output::print_error(message, config);
    }
    if let Some(columns) = app.board().columns() {
        output::print_board(columns, config);
    } else if app.board().last_error().is_none() {
        println!("Board not loaded yet; try 'refresh'.");
    }
}

fn session_move(app: &mut App, args: &[&str], config: &OutputConfig) {
    let [number, column] = args else {
        eprintln!("Usage: move <number> <column>");
        return;
    };
    let Ok(number) = number.parse::<u64>() else {
        eprintln!("'{number}' is not an issue number.");
        return;
    };
    let to = match ColumnId::from_str(column) {
        Ok(to) => to,
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };

    // Resolve the card's current column the way a drop handler would.
    let Some((from, issue)) = app.board().find_by_number(number) else {
        eprintln!("Issue #{number} is not on the board.");
        return;
    };
    let issue_id = issue.id;

    if from == to {
        eprintln!("Issue #{number} is already in {}.", to.title());
        return;
    }

    app.board_mut().move_issue(issue_id, from, to);
    render_board_state(app, config);
}

fn session_show(app: &App, args: &[&str], config: &OutputConfig) {
    let [number] = args else {
        eprintln!("Usage: show <number>");
        return;
    };
    let Ok(number) = number.parse::<u64>() else {
        eprintln!("'{number}' is not an issue number.");
        return;
    };

    let Some((column, issue)) = app.board().find_by_number(number) else {
        eprintln!("Issue #{number} is not on the board.");
        return;
    };

    let annotations = app.annotations().for_issue(issue.id);
    output::print_issue_detail(issue, column, &annotations, config);
}

async fn session_comment(app: &mut App, args: &[&str], config: &OutputConfig) {
    let [number, text @ ..] = args else {
        eprintln!("Usage: comment <number> <text>");
        return;
    };
    let Ok(number) = number.parse::<u64>() else {
        eprintln!("'{number}' is not an issue number.");
        return;
    };

    let Some((_, issue)) = app.board().find_by_number(number) else {
        eprintln!("Issue #{number} is not on the board.");
        return;
    };
    let issue_id = issue.id;
    let text = text.join(" ");
    let author = local_author();

    match app.annotations_mut().submit(issue_id, &author, &text).await {
        Ok(Some(_)) => println!("Noted on #{number}."),
        Ok(None) => eprintln!("Ignored blank comment; nothing stored."),
        Err(err) => output::print_error(&err.to_string(), config),
    }
}
