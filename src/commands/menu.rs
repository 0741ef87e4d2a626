//! `routegraph menu` command - interactive analysis loop
//!
//! Reads one answer per line. End of input at any prompt leaves the loop
//! without an error, so the menu can be driven from a pipe.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::commands::dispatch::CommandContext;
use crate::commands::{bfs, components, dijkstra};
use routegraph_core::error::Result;
use routegraph_core::graph::{
    connected_components, levels_from_source, shortest_paths, GraphStore, NodeIndex,
};

const RULE: &str = "=========================================";
const THIN_RULE: &str = "-----------------------------------------";

/// Execute the menu command against stdin/stdout
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let store = ctx.load_graph()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(&store, stdin.lock(), stdout.lock())
}

/// What the loop should do after handling a choice
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub fn run_menu<R: BufRead, W: Write>(store: &GraphStore, mut input: R, mut out: W) -> Result<()> {
    loop {
        print_menu(&mut out)?;
        let Some(choice) = read_line(&mut input)? else {
            writeln!(out)?;
            break;
        };
        debug!(choice = choice.trim(), "menu_choice");

        let flow = match choice.trim() {
            "1" => run_dijkstra(store, &mut input, &mut out)?,
            "2" => run_bfs(store, &mut input, &mut out)?,
            "3" => {
                writeln!(out)?;
                components::render_human(store, &connected_components(store)?, &mut out)?;
                pause(&mut input, &mut out)?
            }
            "4" => {
                writeln!(out, "Exiting program. Goodbye!")?;
                Flow::Exit
            }
            _ => {
                writeln!(out, "Invalid choice. Try again.")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            break;
        }
    }

    out.flush()?;
    Ok(())
}

fn print_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "          Graph Analysis Menu")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "1. Run Dijkstra's Shortest Path")?;
    writeln!(out, "2. Run BFS (Breadth-First Search)")?;
    writeln!(out, "3. Find Connected Components")?;
    writeln!(out, "4. Exit")?;
    writeln!(out, "{}", THIN_RULE)?;
    write!(out, "Enter your choice: ")?;
    out.flush()?;
    Ok(())
}

fn run_dijkstra(store: &GraphStore, input: &mut impl BufRead, out: &mut impl Write) -> Result<Flow> {
    let source = match prompt_source(store, "Dijkstra", input, out)? {
        Prompt::Node(source) => source,
        Prompt::Invalid => return Ok(Flow::Continue),
        Prompt::Closed => return Ok(Flow::Exit),
    };
    let paths = shortest_paths(store, source)?;
    writeln!(out)?;
    dijkstra::render_human(store, &paths, out)?;
    pause(input, out)
}

fn run_bfs(store: &GraphStore, input: &mut impl BufRead, out: &mut impl Write) -> Result<Flow> {
    let source = match prompt_source(store, "BFS", input, out)? {
        Prompt::Node(source) => source,
        Prompt::Invalid => return Ok(Flow::Continue),
        Prompt::Closed => return Ok(Flow::Exit),
    };
    let levels = levels_from_source(store, source)?;
    writeln!(out)?;
    bfs::render_human(store, &levels, out)?;
    pause(input, out)
}

enum Prompt {
    Node(NodeIndex),
    Invalid,
    Closed,
}

fn prompt_source(
    store: &GraphStore,
    algorithm: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Prompt> {
    write!(
        out,
        "\nEnter source city ID for {} (0 to {}): ",
        algorithm,
        store.node_count().saturating_sub(1)
    )?;
    out.flush()?;

    let Some(line) = read_line(input)? else {
        writeln!(out)?;
        return Ok(Prompt::Closed);
    };

    match line.trim().parse::<NodeIndex>() {
        Ok(node) if node < store.node_count() => Ok(Prompt::Node(node)),
        _ => {
            writeln!(out, "Invalid city ID.")?;
            Ok(Prompt::Invalid)
        }
    }
}

fn pause(input: &mut impl BufRead, out: &mut impl Write) -> Result<Flow> {
    write!(out, "\nPress Enter to continue...")?;
    out.flush()?;
    match read_line(input)? {
        Some(_) => {
            writeln!(out)?;
            Ok(Flow::Continue)
        }
        None => {
            writeln!(out)?;
            Ok(Flow::Exit)
        }
    }
}

/// Read one line, returning `None` at end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
