//! Monkey lexer CLI

use monkeyc::commands::{print_usage, run};
use monkeyc::config::PROMPT_ENV;

fn main() {
    monkeyc::logging::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_prompt = std::env::var(PROMPT_ENV).ok();

    if let Err(err) = run(&args, env_prompt, &mut std::io::stdout().lock()) {
        eprintln!("error: {err}");
        if err.is_usage() {
            eprintln!();
            // Nothing more to report if stderr is gone.
            let _ = print_usage(&mut std::io::stderr());
        }
        std::process::exit(err.exit_code());
    }
}
