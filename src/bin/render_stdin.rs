//! Simple CLI that reads a JSON markup description from stdin and prints
//! the built element as HTML.
//!
//! Pass `--strict` to reject invalid tag and attribute names.
//! Set `RUST_LOG=debug` to see rendering logs on stderr.

use dom_elements::{render_html, Markup, Options};
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let options = Options {
        strict_names: std::env::args().skip(1).any(|arg| arg == "--strict"),
        ..Options::default()
    };

    let mut json = String::new();
    if io::stdin().read_to_string(&mut json).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    match Markup::from_json(&json).and_then(|markup| render_html(&markup, &options)) {
        Ok(html) => println!("{html}"),
        Err(err) => {
            log::error!("render failed: {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
