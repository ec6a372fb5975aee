//! Reference command-line front end for the tenkey engine.
//!
//! Acts as the external dispatcher and renderer: maps each whitespace
//! separated input value to a token, feeds it to the engine, and prints the
//! display string after every token.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tenkey::{ExpressionEngine, Token};

#[derive(Debug, Parser)]
#[command(name = "tenkey", about = "Keypad calculator expression engine")]
struct Args {
    /// Tokens to feed the engine (e.g. `tenkey 1 2 + 3 4 =`).
    /// With no tokens, reads them interactively from stdin.
    tokens: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut engine = ExpressionEngine::new();

    if !args.tokens.is_empty() {
        for raw in &args.tokens {
            feed(&mut engine, raw);
        }
        println!("{}", engine.expression());
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "[{}] > ", engine.expression())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line == "q" || line == "quit" {
            break;
        }

        for raw in line.split_whitespace() {
            feed(&mut engine, raw);
        }
        writeln!(stdout, "{}", engine.expression())?;
    }

    Ok(())
}

fn feed(engine: &mut ExpressionEngine, raw: &str) {
    match Token::parse(raw) {
        Some(token) => engine.handle(token),
        None => warn!(value = raw, "ignoring unrecognized input"),
    }
}
