//! Interactive board shell
//!
//! One [`Session`] lives for the duration of the shell. Line commands map
//! onto the session's callbacks: `up`/`down` vote, `sort` reorders, `add`
//! walks the submission form. Quitting (or EOF) is session teardown and the
//! board resets on the next run.

use std::io::{self, BufRead, Write};

use dealboard_core::{ListingId, ListingSubmission, Session, SortKey, VoteDirection};

use crate::commands::common::format_board_lines;
use crate::error::CliError;

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Sort(SortKey),
    Vote(ListingId, VoteDirection),
    Add,
    Help,
    Quit,
    Nothing,
}

/// Parse one shell input line.
pub fn parse_shell_command(line: &str) -> Result<ShellCommand, CliError> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => Ok(ShellCommand::Nothing),
        Some("list" | "ls") => Ok(ShellCommand::List),
        Some("sort") => {
            let raw = parts.next().ok_or(CliError::MissingSortKey)?;
            Ok(ShellCommand::Sort(raw.parse()?))
        }
        Some("up") => {
            let id = parts.next().ok_or(CliError::MissingListingId("up"))?;
            Ok(ShellCommand::Vote(ListingId::from(id), VoteDirection::Up))
        }
        Some("down") => {
            let id = parts.next().ok_or(CliError::MissingListingId("down"))?;
            Ok(ShellCommand::Vote(ListingId::from(id), VoteDirection::Down))
        }
        Some("add") => Ok(ShellCommand::Add),
        Some("help" | "?") => Ok(ShellCommand::Help),
        Some("quit" | "exit" | "q") => Ok(ShellCommand::Quit),
        Some(other) => Err(CliError::UnknownCommand(other.to_string())),
    }
}

pub fn run_board() -> Result<(), CliError> {
    let mut session = Session::seeded();
    tracing::debug!("board shell started");
    println!(
        "Dealboard: {} deals on the board. Type 'help' for commands.",
        session.listings().len()
    );
    render(&session);

    let stdin = io::stdin();
    loop {
        print!("deals> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_shell_command(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                if let Err(error) = dispatch(&mut session, &command) {
                    eprintln!("Error: {error}");
                }
            }
            Err(error) => eprintln!("Error: {error}"),
        }
    }

    println!("Session ended. The board resets next time.");
    Ok(())
}

fn dispatch(session: &mut Session, command: &ShellCommand) -> Result<(), CliError> {
    match command {
        ShellCommand::List => render(session),
        ShellCommand::Sort(key) => {
            session.set_sort_key(*key);
            render(session);
        }
        ShellCommand::Vote(id, direction) => {
            let tally = session.vote(id, *direction)?;
            println!("{id} now at {} votes", tally.votes);
        }
        ShellCommand::Add => {
            let submission = prompt_submission()?;
            let listing = session.submit_listing(submission)?;
            println!("Property added: {}", listing.id);
        }
        ShellCommand::Help => print_help(),
        ShellCommand::Quit | ShellCommand::Nothing => {}
    }
    Ok(())
}

fn render(session: &Session) {
    println!("Sorted by {}:", session.sort_key());
    for line in format_board_lines(session) {
        println!("{line}");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list             show the board under the current ordering");
    println!("  sort <key>       reorder: votes, price, or recent");
    println!("  up <id>          vote a listing up (again to remove your vote)");
    println!("  down <id>        vote a listing down (again to remove your vote)");
    println!("  add              submit a new listing");
    println!("  quit             end the session");
}

/// Walk the submission form. Required fields are validated by the core when
/// the submission lands, not here; blank answers stay absent.
fn prompt_submission() -> Result<ListingSubmission, CliError> {
    println!("New listing (blank to skip a field; title, price, and location are required):");
    Ok(ListingSubmission {
        title: prompt_field("Title")?,
        price: prompt_field("Price (£)")?,
        location: prompt_field("Location")?,
        bedrooms: prompt_field("Bedrooms")?,
        bathrooms: prompt_field("Bathrooms")?,
        square_footage: prompt_field("Square footage")?,
        image_url: prompt_field("Image URL")?,
        description: prompt_field("Description")?,
    })
}

fn prompt_field(label: &str) -> Result<Option<String>, CliError> {
    print!("  {label}: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer)? == 0 {
        return Ok(None);
    }

    let answer = answer.trim();
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(answer.to_string()))
    }
}
