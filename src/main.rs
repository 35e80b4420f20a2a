mod config;
mod document;
mod editor;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use config::AppConfig;
use editor::EditorSession;

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Headless text editor core with regex search", long_about = None)]
#[command(version)]
struct Cli {
    /// File to open at startup
    file: Option<PathBuf>,

    /// Treat queries as regular expressions
    #[arg(long)]
    regex: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app_config = AppConfig::load_or_create();
    let mut session = EditorSession::new(&app_config);
    if cli.regex {
        session.set_use_regex(true);
    }

    if let Some(path) = &cli.file {
        match session.document_mut().open(path) {
            Ok(()) => println!("opened {}", path.display()),
            Err(err) => eprintln!("error: {:#}", err),
        }
    }

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => {}
            "open" => match session.document_mut().open(rest) {
                Ok(()) => println!("opened {}", rest),
                Err(err) => eprintln!("error: {:#}", err),
            },
            "save" => match session.document().save() {
                Ok(()) => println!("saved"),
                Err(err) => eprintln!("error: {:#}", err),
            },
            "saveas" => match session.document_mut().save_as(rest) {
                Ok(()) => println!("saved {}", rest),
                Err(err) => eprintln!("error: {:#}", err),
            },
            "find" => {
                session.start_search(rest);
                session.wait_for_search();
                match session.pattern_error() {
                    Some(err) => eprintln!("error: {}", err),
                    None => print_current(&session),
                }
            }
            "next" => {
                session.next_match();
                print_current(&session);
            }
            "prev" => {
                session.previous_match();
                print_current(&session);
            }
            "current" => print_current(&session),
            "regex" => match config::parse_bool(rest) {
                Some(on) => session.set_use_regex(on),
                None => println!(
                    "regex mode is {}",
                    if session.use_regex() { "on" } else { "off" }
                ),
            },
            "case" => match config::parse_bool(rest) {
                Some(on) => session.set_case_sensitive(on),
                None => println!(
                    "case sensitivity is {}",
                    if session.case_sensitive() { "on" } else { "off" }
                ),
            },
            "show" => println!("{}", session.document().text()),
            "help" => print_help(),
            "quit" | "q" => break,
            _ => println!("unknown command {:?} (try help)", command),
        }
    }

    Ok(())
}

fn print_current(session: &EditorSession) {
    match (session.position(), session.current_match()) {
        (Some((n, total)), Some(m)) => {
            println!("{} of {}  [{}..{})  {:?}", n, total, m.offset, m.end(), m.text);
        }
        _ => println!("no matches"),
    }
}

fn print_help() {
    println!(
        "commands:\n\
         \x20 open <path>     load a file into the buffer\n\
         \x20 save            write the buffer back to its file\n\
         \x20 saveas <path>   write the buffer to a new file\n\
         \x20 find <query>    search the buffer\n\
         \x20 next / prev     move between matches (wraps around)\n\
         \x20 current         show the focused match\n\
         \x20 regex [on|off]  toggle or show regex mode\n\
         \x20 case [on|off]   toggle or show case sensitivity\n\
         \x20 show            print the buffer\n\
         \x20 quit            exit"
    );
}
