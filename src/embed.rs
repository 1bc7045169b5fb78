// Line-at-a-time driver for hosts that own the line editor, such as the JS binding.
use anyhow::Result;

use crate::calculator::{Calculator, Flow};
use crate::config::Config;
use crate::session::Session;

pub type Context = (Calculator, Session);

fn render(result: Result<()>, out: Vec<u8>) -> String {
    let mut text = String::from_utf8_lossy(&out).into_owned();
    if let Err(e) = result {
        text.push_str(&format!("Error: {:?}", e));
    }
    text
}

/// Fresh context plus the banner, help block and first prompt.
pub fn start(config: Config) -> (Option<Context>, String) {
    let calculator = match Calculator::new(config) {
        Ok(calculator) => calculator,
        Err(e) => return (None, format!("Error: {}", e)),
    };
    let session = Session::new();
    let mut out = Vec::new();
    let result = if calculator.config().banner {
        calculator.show_intro(&mut out)
    } else {
        Ok(())
    };
    out.extend_from_slice(calculator.prompt(&session).as_bytes());
    (Some((calculator, session)), render(result, out))
}

// Everything printed for `line`, then the next prompt. `exit` drops the context; without one the output is empty.
pub fn feed_line(context: &mut Option<Context>, line: &str) -> String {
    let (calculator, session) = match context.as_mut() {
        Some(context) => context,
        None => return String::new(),
    };
    let mut out = Vec::new();
    match calculator.handle_line(session, line, &mut out) {
        Ok(Flow::Continue) => {
            out.extend_from_slice(calculator.prompt(session).as_bytes());
            render(Ok(()), out)
        }
        Ok(Flow::Exit) => {
            *context = None;
            render(Ok(()), out)
        }
        Err(e) => render(Err(e), out),
    }
}
