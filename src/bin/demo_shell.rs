//! `demo_shell` — interactive portfolio shell demo
//!
//! A line-oriented REPL over stdin/stdout driving the interpreter with the
//! canned portfolio content. Deferred probes never occur here (the simulated
//! probe always answers synchronously), so every command prints its full
//! output before the next prompt.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin demo_shell
//! cargo run --bin demo_shell -- --script "pwd" "ls" "open about"
//! ```
//!
//! Type `exit` (or send EOF) to quit.

use std::io::{self, BufRead, Write};

use termfolio::{Completion, Interpreter, LogLevel, set_log_callback};

const HELP_TEXT: &str = "demo_shell - interactive portfolio shell demo

USAGE:
    demo_shell [OPTIONS]

OPTIONS:
    -h, --help            Print this help message and exit
    --verbose             Print interpreter debug logs to stderr
    --script <CMD>...     Run the given commands and exit

EXAMPLES:
    demo_shell                          # Interactive REPL
    demo_shell --script \"ls\" \"pwd\"      # Batch mode
";

struct Options {
    verbose: bool,
    script: Vec<String>,
}

fn parse_args() -> Result<Option<Options>, String> {
    let mut options = Options {
        verbose: false,
        script: Vec::new(),
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--verbose" => options.verbose = true,
            "--script" => {
                options.script.extend(args.by_ref());
                if options.script.is_empty() {
                    return Err("--script requires at least one command".to_string());
                }
            }
            other => return Err(format!("unknown option: {other}")),
        }
    }
    Ok(Some(options))
}

fn main() -> io::Result<()> {
    let options = match parse_args() {
        Ok(Some(options)) => options,
        Ok(None) => {
            print!("{HELP_TEXT}");
            return Ok(());
        }
        Err(message) => {
            eprintln!("demo_shell: {message}");
            eprint!("{HELP_TEXT}");
            std::process::exit(2);
        }
    };

    if options.verbose {
        set_log_callback(|level, message| {
            let tag = match level {
                LogLevel::Debug => "DEBUG",
                LogLevel::Info => "INFO",
                LogLevel::Warn => "WARN",
                LogLevel::Error => "ERROR",
            };
            eprintln!("[{tag}] {message}");
        });
    }

    let mut interp = Interpreter::portfolio();
    let mut printed = 0;
    interp.welcome();
    flush_output(&interp, &mut printed, false)?;

    if !options.script.is_empty() {
        for command in &options.script {
            let execution = interp.execute(command);
            flush_output(&interp, &mut printed, true)?;
            if execution.exit_requested {
                break;
            }
        }
        return Ok(());
    }

    let stdin = io::stdin();
    loop {
        print!("{}$ ", interp.session().cwd());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        // A trailing tab completes instead of executing.
        let trimmed_newline = line.strip_suffix('\n').unwrap_or(&line);
        if let Some(partial) = trimmed_newline.strip_suffix('\t') {
            match interp.complete_input(partial) {
                Completion::Single(full) => println!("-> {full}"),
                Completion::Multiple(candidates) => println!("{}", candidates.join("  ")),
                Completion::None => {}
            }
            continue;
        }

        let execution = interp.execute(&line);
        flush_output(&interp, &mut printed, true)?;
        if execution.exit_requested {
            break;
        }
    }
    Ok(())
}

/// Print scrollback lines accumulated since the last flush. `skip_echo`
/// drops the echoed prompt line (the real prompt already showed it).
fn flush_output(
    interp: &Interpreter<termfolio::NullHost>,
    printed: &mut usize,
    skip_echo: bool,
) -> io::Result<()> {
    let lines = interp.session().scrollback().lines();
    // A `clear` command may have shrunk the scrollback under the cursor.
    let mut start = (*printed).min(lines.len());
    if skip_echo && start < lines.len() {
        start += 1;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &lines[start..] {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    *printed = lines.len();
    Ok(())
}
