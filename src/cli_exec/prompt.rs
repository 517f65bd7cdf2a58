use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::*;

/// Reads a secret without echo on a TTY, or one line from piped stdin.
pub(super) fn read_secret(prompt: &str) -> Result<String> {
    if !io::stdin().is_terminal() {
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("read password from stdin")?;
        return Ok(line.trim_end_matches(['\r', '\n']).to_string());
    }

    eprint!("{}", prompt);
    io::stderr().flush().ok();
    enable_raw_mode().context("enable raw mode")?;
    let res = read_hidden_line();
    disable_raw_mode().ok();
    eprintln!();
    res
}

fn read_hidden_line() -> Result<String> {
    let mut buf = String::new();
    loop {
        let Event::Key(k) = event::read().context("read key")? else {
            continue;
        };
        if k.kind != KeyEventKind::Press {
            continue;
        }
        match k.code {
            KeyCode::Enter => return Ok(buf),
            KeyCode::Backspace => {
                buf.pop();
            }
            KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                anyhow::bail!("interrupted");
            }
            KeyCode::Char(c) => buf.push(c),
            _ => {}
        }
    }
}
