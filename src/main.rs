use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use prettytable::{Cell, Row, Table, format::Alignment};
use veritab::{interpreter::evaluator::table::TruthTable, truth_table};

/// veritab generates truth tables for propositional-logic sentences, showing
/// the value of every sub-expression from simplest to most complex.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read sentences from a file, one per line. Blank lines and lines
    /// starting with '#' are skipped.
    #[arg(short, long, value_name = "PATH")]
    file: Option<String>,

    /// Start an interactive session; type 'exit' or 'quit' to leave.
    #[arg(short, long)]
    interactive: bool,

    /// The sentence to tabulate, e.g. "NOT (P OR Q) IMPLIES S".
    sentence: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = args.file {
        let contents = fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            std::process::exit(1);
        });
        run_batch(&contents);
    } else if args.interactive {
        run_repl();
    } else if let Some(sentence) = args.sentence {
        process_sentence(&sentence);
    } else {
        eprintln!("No sentence given. Pass a sentence, or use --file or --interactive.");
        std::process::exit(1);
    }
}

/// Tabulates every sentence in a batch input, one per line.
///
/// Blank lines and lines starting with `#` are skipped. Each remaining line
/// is echoed before its table; a failing line prints its error and the run
/// continues with the next sentence.
fn run_batch(contents: &str) {
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        println!("Processing: {line}");
        process_sentence(line);
    }
}

/// Reads sentences interactively until `exit`, `quit`, or end of input.
///
/// Errors are printed and the loop continues; no sentence can abort the
/// session.
fn run_repl() {
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        process_sentence(line);
    }
}

fn process_sentence(sentence: &str) {
    match truth_table(sentence) {
        Ok(table) => print_table(&table),
        Err(e) => eprintln!("{e}"),
    }
}

/// Renders a truth table as aligned console output.
///
/// The header row holds the column names; each following row prints one
/// assignment as centered `T` (green) and `F` (red) cells.
fn print_table(table: &TruthTable) {
    let mut out = Table::new();

    out.add_row(Row::new(table.columns
                              .iter()
                              .map(|column| Cell::new(&column.to_string()))
                              .collect()));

    let mut t_cell = Cell::new("T").style_spec("Fg");
    let mut f_cell = Cell::new("F").style_spec("Fr");
    t_cell.align(Alignment::CENTER);
    f_cell.align(Alignment::CENTER);

    for row in &table.rows {
        let cells = table.columns
                         .iter()
                         .map(|column| match row.value_of(column) {
                             Some(true) => t_cell.clone(),
                             Some(false) => f_cell.clone(),
                             None => Cell::new("?"),
                         })
                         .collect();
        out.add_row(Row::new(cells));
    }

    out.printstd();
}
