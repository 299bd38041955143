use std::{
    env,
    ffi::OsString,
    io::{self, Write},
    process,
};

use anyhow::Context;
use dictionary::{Dictionary, DictionaryConfig};
use tracing::debug;

mod logging;
mod report;

const PROGRAM_NAME: &str = "define";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let word = match word_from_args(env::args_os()) {
        Ok(word) => word,
        Err(program) => {
            println!("Usage: {program} <word>");
            process::exit(1);
        }
    };

    logging::init_tracing()?;
    let mut stdout = io::stdout().lock();
    define_word(DictionaryConfig::default(), &word, &mut stdout).await
}

/// Returns the single word argument, or the program name to show in the
/// usage line when the argument count is wrong.
fn word_from_args<I>(args: I) -> Result<String, String>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned());
    let program = args.next().unwrap_or_else(|| PROGRAM_NAME.to_owned());
    match (args.next(), args.next()) {
        (Some(word), None) => Ok(word),
        _ => Err(program),
    }
}

/// Looks up `word` and prints the report to `out`. Any response body counts
/// as a completed lookup, only transport and output failures are errors.
async fn define_word<W: Write>(
    config: DictionaryConfig,
    word: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let dict = Dictionary::new(config)?;
    let response = match dict.get_definition(word).await {
        Ok(response) => response,
        Err(error) => {
            debug!(%word, ?error, "lookup failed");
            return Err(error).with_context(|| format!("failed to look up '{word}'"));
        }
    };
    report::print_response(out, response.as_bytes())?;
    Ok(())
}
