use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};

use crate::calculator::{Calculator, Flow};
use crate::session::Session;

/// Drives one session over a line-oriented terminal until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(calculator: &Calculator, mut input: R, out: &mut W) -> Result<()> {
    let mut session = Session::new();
    if calculator.config().banner {
        calculator.show_intro(out)?;
    }
    let mut buf = Vec::new();
    loop {
        write!(out, "{}", calculator.prompt(&session))?;
        out.flush().context("flushing prompt")?;
        buf.clear();
        if input.read_until(b'\n', &mut buf).context("reading input line")? == 0 {
            debug!("end of input");
            // Leave the terminal on a fresh line after the dangling prompt
            writeln!(out)?;
            return Ok(());
        }
        // Undecodable bytes become U+FFFD and the line is then rejected as an invalid value
        let line = String::from_utf8_lossy(&buf);
        if calculator.handle_line(&mut session, &line, out)? == Flow::Exit {
            debug!("exit requested");
            return Ok(());
        }
    }
}
