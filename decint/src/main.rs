use decint::{get_opts, run_decint, DecintResult};
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use termcolor::{BufferedStandardStream, ColorChoice, WriteColor};

fn main_impl() -> io::Result<()> {
    let mut ch_stdout = BufferedStandardStream::stdout(ColorChoice::Auto);
    let mut ch_stderr = BufferedStandardStream::stderr(ColorChoice::Auto);
    let use_color = atty::is(atty::Stream::Stderr) && ch_stderr.supports_color();

    let opts = match get_opts(|app| app.get_matches_safe(), use_color) {
        Ok(opts) => opts,
        Err(err) => err.exit(),
    };
    let DecintResult {
        code,
        stdout,
        stderr,
        page,
    } = run_decint(opts);

    if !stderr.is_empty() {
        writeln!(&mut ch_stderr, "{}", stderr)?;
        ch_stderr.flush()?;
    }
    if !stdout.is_empty() {
        print_stdout(&stdout, &mut ch_stdout, page && atty::is(atty::Stream::Stdout))?;
    }

    std::process::exit(code)
}

/// Writes `stdout`, piping it through `$PAGER` (`less` by default) when `page` is set. Output
/// goes to plain stdout if the pager can't be run.
fn print_stdout(stdout: &str, ch_stdout: &mut BufferedStandardStream, page: bool) -> io::Result<()> {
    if page && pipe_to_pager(stdout).is_ok() {
        return Ok(());
    }
    writeln!(ch_stdout, "{}", stdout)?;
    ch_stdout.flush()
}

fn pipe_to_pager(content: &str) -> io::Result<()> {
    let pager = env::var_os("PAGER").unwrap_or_else(|| OsString::from("less"));
    let mut child = Command::new(pager).stdin(Stdio::piped()).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(content.as_bytes())?;
    }
    child.wait()?;
    Ok(())
}

fn main() {
    env_logger::init();
    let out = std::panic::catch_unwind(main_impl);

    if let Err(..) = out {
        eprint!("\nnote: you found an internal decint error; the arithmetic should never panic!\n");
        eprint!("\nnote: we would appreciate a bug report with the command that triggered it\n");
        std::process::exit(2);
    }
}
