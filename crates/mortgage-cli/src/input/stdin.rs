use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read a piped JSON scenario from stdin.
///
/// Returns `Ok(None)` when stdin is an interactive terminal or the pipe is
/// empty, so flag-based invocation keeps working without piped input.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut piped = String::new();
    io::stdin().read_to_string(&mut piped)?;

    let piped = piped.trim();
    if piped.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(piped)?))
}
