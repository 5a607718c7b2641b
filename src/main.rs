//! jarview - a terminal viewer for Java archive files
//!
//! Lists archive entries as a tree, prints entry contents with syntax
//! highlighting, and searches entry names with cyclic next/previous
//! navigation. Class entries are handed to an external decompiler.

mod archive;
mod config;
mod decompile;
mod display;
mod error;
mod search;
mod syntax;
mod tree;
mod viewer;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use config::Config;
use display::Renderer;
use error::{JarViewError, Result};
use search::{ContentMatch, SearchOutcome};
use tree::NodeId;
use viewer::{EntryContent, Viewer};

#[derive(Default)]
struct Options {
    jar: Option<String>,
    entry: Option<String>,
    search: Option<String>,
    case_sensitive: Option<bool>,
    interactive: bool,
    no_color: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = Options::default();
    let mut positional = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "-V" | "--version" => {
                print_version();
                return Ok(());
            }
            "-i" | "--interactive" => opts.interactive = true,
            "-c" | "--case-sensitive" => opts.case_sensitive = Some(true),
            "--no-color" => opts.no_color = true,
            "-s" | "--search" => {
                let term = iter
                    .next()
                    .ok_or_else(|| JarViewError::Message("--search requires a term".to_string()))?;
                opts.search = Some(term.clone());
            }
            other if other.starts_with('-') => {
                return Err(JarViewError::Message(format!("Unknown option: {}", other)));
            }
            other => positional.push(other.to_string()),
        }
    }
    opts.jar = positional.first().cloned();
    opts.entry = positional.get(1).cloned();

    let mut config = Config::load();
    if opts.no_color {
        config.color = false;
    }
    let case_sensitive = opts.case_sensitive.unwrap_or(config.case_sensitive_search);

    let renderer = Renderer::from_config(&config);
    let mut viewer = Viewer::new(&config);

    if let Some(jar_path) = &opts.jar {
        viewer.open(Path::new(jar_path))?;
    }

    if opts.interactive {
        return interactive(&mut viewer, &renderer, case_sensitive);
    }

    if opts.jar.is_none() {
        print_usage();
        return Err(JarViewError::Message("No archive given".to_string()));
    }

    if let Some(entry) = &opts.entry {
        show_entry(&mut viewer, &renderer, entry)
    } else if let Some(term) = &opts.search {
        list_matches(&mut viewer, term, case_sensitive)
    } else {
        show_tree(&viewer, &renderer)
    }
}

/// Print the entry tree and a file count
fn show_tree(viewer: &Viewer, renderer: &Renderer) -> Result<()> {
    let tree = viewer.tree()?;
    renderer.render_tree(&mut io::stdout(), tree)?;
    if let Some(jar) = viewer.jar() {
        println!("{} files", jar.file_count());
    }
    Ok(())
}

/// Print an entry with syntax highlighting
fn show_entry(viewer: &mut Viewer, renderer: &Renderer, path: &str) -> Result<()> {
    match viewer.entry_content(path) {
        Ok(content) => {
            let spans = viewer.highlight(&content.dispatch_path, &content.text);
            renderer.render_content(&mut io::stdout(), &content.text, &spans)?;
            Ok(())
        }
        Err(err) => {
            print_suggestions(&err);
            Err(err)
        }
    }
}

/// One-shot tree search: print every match's full path
fn list_matches(viewer: &mut Viewer, term: &str, case_sensitive: bool) -> Result<()> {
    match viewer.search_tree(term, case_sensitive)? {
        SearchOutcome::NoOp => println!("Enter a term to search"),
        SearchOutcome::Empty => println!("No matches found for '{}'", term),
        SearchOutcome::Match { count, .. } => {
            let tree = viewer.tree()?;
            if let Some(session) = viewer.tree_search.session() {
                for &node in session.matches() {
                    let path = tree.full_path(node);
                    if path.is_empty() {
                        println!("{}", tree.label(node));
                    } else {
                        println!("{}", path);
                    }
                }
            }
            println!("{} matches for '{}'", count, term);
        }
    }
    Ok(())
}

/// Line-oriented interactive prompt
fn interactive(viewer: &mut Viewer, renderer: &Renderer, mut case_sensitive: bool) -> Result<()> {
    println!("jarview interactive mode; type 'help' for commands");
    let stdin = io::stdin();
    let mut current: Option<EntryContent> = None;

    loop {
        print!("jarview> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let line = line.trim();
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        let outcome: Result<()> = match cmd {
            "" => Ok(()),
            "help" | "?" => {
                print_interactive_help();
                Ok(())
            }
            "quit" | "exit" | "q" => break,
            "open" => {
                if rest.is_empty() {
                    Err(JarViewError::Message("Usage: open <file>".to_string()))
                } else {
                    match viewer.open(Path::new(rest)) {
                        Ok(()) => {
                            current = None;
                            if let Some(jar) = viewer.jar() {
                                println!("Loaded {} ({} files)", jar.name(), jar.file_count());
                            }
                            Ok(())
                        }
                        Err(err) => Err(err),
                    }
                }
            }
            "close" => {
                viewer.close();
                current = None;
                println!("Closed");
                Ok(())
            }
            "tree" => show_tree(viewer, renderer),
            "cat" => match viewer.entry_content(rest) {
                Ok(content) => {
                    let spans = viewer.highlight(&content.dispatch_path, &content.text);
                    renderer.render_content(&mut io::stdout(), &content.text, &spans)?;
                    current = Some(content);
                    Ok(())
                }
                Err(err) => Err(err),
            },
            "case" => {
                case_sensitive = match rest {
                    "on" => true,
                    "off" => false,
                    _ => !case_sensitive,
                };
                println!(
                    "Case-sensitive search {}",
                    if case_sensitive { "on" } else { "off" }
                );
                Ok(())
            }
            "search" => match viewer.search_tree(rest, case_sensitive) {
                Ok(outcome) => report_tree_outcome(viewer, renderer, rest, outcome),
                Err(err) => Err(err),
            },
            "next" | "n" => tree_step(viewer, renderer, true),
            "prev" | "p" => tree_step(viewer, renderer, false),
            "find" => match &current {
                Some(content) => {
                    let outcome = viewer.search_content(&content.text, rest, case_sensitive);
                    report_content_outcome(&content.text, rest, outcome);
                    Ok(())
                }
                None => Err(JarViewError::Message(
                    "No entry open; use 'cat' first".to_string(),
                )),
            },
            "findnext" | "fn" => {
                content_step(viewer, current.as_ref(), true);
                Ok(())
            }
            "findprev" | "fp" => {
                content_step(viewer, current.as_ref(), false);
                Ok(())
            }
            other => Err(JarViewError::Message(format!("Unknown command: {}", other))),
        };

        if let Err(err) = outcome {
            println!("Error: {}", err);
            print_suggestions(&err);
        }
    }
    Ok(())
}

/// Print the alternatives carried by an entry-not-found error
fn print_suggestions(err: &JarViewError) {
    if let JarViewError::EntryNotFound { suggestions, .. } = err {
        if !suggestions.is_empty() {
            eprintln!("Similar entries:");
            for suggestion in suggestions {
                eprintln!("  {}", suggestion);
            }
        }
    }
}

fn report_tree_outcome(
    viewer: &Viewer,
    renderer: &Renderer,
    term: &str,
    outcome: SearchOutcome<NodeId>,
) -> Result<()> {
    match outcome {
        SearchOutcome::NoOp => println!("Enter a term to search"),
        SearchOutcome::Empty => println!("No matches found for '{}'", term),
        SearchOutcome::Match {
            current,
            index,
            count,
        } => {
            let tree = viewer.tree()?;
            renderer.render_match_context(&mut io::stdout(), tree, current, index, count)?;
            println!("{}/{} matches for '{}'", index + 1, count, term);
        }
    }
    Ok(())
}

/// Advance the tree search and show the newly selected match
fn tree_step(viewer: &mut Viewer, renderer: &Renderer, forward: bool) -> Result<()> {
    let stepped = if forward {
        viewer.tree_search.next()
    } else {
        viewer.tree_search.prev()
    };
    match stepped {
        Some(node) => {
            let tree = viewer.tree()?;
            if let Some(session) = viewer.tree_search.session() {
                renderer.render_match_context(
                    &mut io::stdout(),
                    tree,
                    node,
                    session.cursor(),
                    session.count(),
                )?;
            }
            Ok(())
        }
        None => {
            println!("No active search");
            Ok(())
        }
    }
}

fn report_content_outcome(text: &str, term: &str, outcome: SearchOutcome<ContentMatch>) {
    match outcome {
        SearchOutcome::NoOp => println!("Enter a term to search"),
        SearchOutcome::Empty => println!("No matches found for '{}'", term),
        SearchOutcome::Match {
            current,
            index,
            count,
        } => {
            println!("{}/{} matches for '{}'", index + 1, count, term);
            print_match_line(text, current);
        }
    }
}

/// Advance the content search and show the newly selected match
fn content_step(viewer: &mut Viewer, current: Option<&EntryContent>, forward: bool) {
    let stepped = if forward {
        viewer.content_search.next()
    } else {
        viewer.content_search.prev()
    };
    match (stepped, current) {
        (Some(m), Some(content)) => {
            if let Some(session) = viewer.content_search.session() {
                println!(
                    "{}/{} matches for '{}'",
                    session.cursor() + 1,
                    session.count(),
                    session.term()
                );
            }
            print_match_line(&content.text, m);
        }
        _ => println!("No active search"),
    }
}

/// Print the line containing a content match, prefixed with its number
fn print_match_line(text: &str, m: ContentMatch) {
    let mut start = m.start.min(text.len());
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    let line_no = text[..start].matches('\n').count() + 1;
    let line_start = text[..start].rfind('\n').map(|p| p + 1).unwrap_or(0);
    let line_end = text[start..]
        .find('\n')
        .map(|p| start + p)
        .unwrap_or(text.len());
    println!("{}: {}", line_no, &text[line_start..line_end]);
}

fn print_usage() {
    println!(
        "jarview {} - terminal viewer for Java archive files",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: jarview [OPTIONS] [JARFILE [ENTRY]]");
    println!();
    println!("Options:");
    println!("  -h, --help            Show this help message");
    println!("  -V, --version         Show version information");
    println!("  -i, --interactive     Start an interactive prompt");
    println!("  -s, --search TERM     Search entry names in the tree");
    println!("  -c, --case-sensitive  Case-sensitive search");
    println!("      --no-color        Disable colored output");
    println!();
    println!("With only JARFILE, prints the entry tree. With ENTRY as well,");
    println!("prints that entry's contents with syntax highlighting; class");
    println!("entries are run through the configured external decompiler.");
}

fn print_interactive_help() {
    println!("Commands:");
    println!("  open <file>     Open an archive (closes the current one)");
    println!("  close           Close the current archive");
    println!("  tree            Print the entry tree");
    println!("  cat <entry>     Print an entry with highlighting");
    println!("  search <term>   Search entry names; repeat to reuse the match list");
    println!("  next, prev      Cycle through tree matches");
    println!("  find <term>     Search within the last printed entry");
    println!("  findnext, findprev");
    println!("                  Cycle through content matches");
    println!("  case [on|off]   Toggle case-sensitive search");
    println!("  quit            Exit");
}

fn print_version() {
    println!("jarview {}", env!("CARGO_PKG_VERSION"));
}
