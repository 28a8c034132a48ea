/// Plain line-oriented front end: one command per line, feedback after each.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::core::engine::{Flow, Session};
use crate::core::game::{Outcome, PuzzleGame, PuzzleRenderer};
use crate::core::rng::GameRng;
use crate::core::terminal::{TerminalColor, TerminalContext};

/// Play until `quit` or end of input.
pub fn run<G, R>(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    rng: &mut GameRng,
    color: bool,
) -> Result<()>
where
    G: PuzzleGame,
    R: PuzzleRenderer<G::State>,
{
    let mut ctx = TerminalContext::new(out, color);
    let mut session = Session::<G>::new(rng);

    ctx.print_colored_line(&format!("== {} ==", G::NAME), TerminalColor::Cyan)?;
    ctx.print_line(session.feedback())?;
    R::render_plain(&mut ctx, session.state())?;
    ctx.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line).context("failed to read command")? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        let before = session.state().clone();
        if session.submit_line(&line) == Flow::Quit {
            break;
        }

        let color = match G::outcome(session.state()) {
            Some(Outcome::Won) => TerminalColor::Green,
            Some(Outcome::Lost) => TerminalColor::Red,
            None => TerminalColor::Yellow,
        };
        ctx.print_colored_line(session.feedback(), color)?;
        // Rejected input only gets feedback; the board is redrawn after real changes
        if *session.state() != before {
            R::render_plain(&mut ctx, session.state())?;
        }
        ctx.flush()?;
    }

    ctx.flush()?;
    Ok(())
}
