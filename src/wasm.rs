// JS binding: the page owns the line editor and pushes one line at a time.
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::embed::{self, Context};

thread_local! {
    static JS_CONTEXT: RefCell<Option<Context>> = RefCell::new(None);
}

/// Starts a fresh session and returns the banner, help block and first prompt.
#[wasm_bindgen]
pub fn init_session() -> String {
    let (context, text) = embed::start(Config::default());
    JS_CONTEXT.with(|ctx| *ctx.borrow_mut() = context);
    text
}

/// Returns everything printed in response to `line`, then the next prompt.
#[wasm_bindgen]
pub fn session_input(line: &str) -> String {
    JS_CONTEXT.with(|ctx| embed::feed_line(&mut ctx.borrow_mut(), line))
}

#[wasm_bindgen]
pub fn deinit_session() {
    JS_CONTEXT.with(|ctx| {
        ctx.borrow_mut().take();
    });
}
