//! Parser for the `extra_placeholders` directive block.
//!
//! ```text
//! extra_placeholders {
//!     rand_int 10 20
//!     time_format_custom "%d.%m.%Y %H:%M"
//!     disable_loadavg_placeholders
//! }
//! ```
//!
//! Lines are tokenised with shell quoting rules; lines starting with `#` are
//! comments. The header may stand alone, in which case all defaults apply.

use super::PlaceholderConfig;
use crate::error::{AppError, Result};

pub const DIRECTIVE_NAME: &str = "extra_placeholders";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Header,
    /// Header seen without a block
    Bare,
    Block,
    Closed,
}

/// Parse a directive block into provider options.
///
/// Only syntax is checked here; range validation happens in
/// [`PlaceholderConfig::validate`].
pub fn parse_directive(input: &str) -> Result<PlaceholderConfig> {
    let mut config = PlaceholderConfig::default();
    let mut state = State::Header;
    let mut last_line = 0;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        last_line = line_no;

        let tokens = shlex::split(line)
            .ok_or_else(|| AppError::directive(line_no, "unbalanced quotes"))?;
        let Some((head, args)) = tokens.split_first() else {
            continue;
        };

        match state {
            State::Header => {
                if head != DIRECTIVE_NAME {
                    return Err(AppError::directive(
                        line_no,
                        format!("expected `{}`, found `{}`", DIRECTIVE_NAME, head),
                    ));
                }
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                state = match args.as_slice() {
                    [] => State::Bare,
                    ["{"] => State::Block,
                    ["{", "}"] => State::Closed,
                    _ => {
                        return Err(AppError::directive(
                            line_no,
                            format!("{} takes no arguments", DIRECTIVE_NAME),
                        ))
                    }
                };
            }
            State::Block if head == "}" && args.is_empty() => state = State::Closed,
            State::Block => apply_subdirective(&mut config, line_no, head, args)?,
            State::Bare | State::Closed => {
                return Err(AppError::directive(
                    line_no,
                    format!("unexpected `{}` after {} directive", head, DIRECTIVE_NAME),
                ));
            }
        }
    }

    match state {
        State::Header => Err(AppError::directive(
            1,
            format!("missing {} directive", DIRECTIVE_NAME),
        )),
        State::Block => Err(AppError::directive(last_line, "unterminated block, expected `}`")),
        State::Bare | State::Closed => Ok(config),
    }
}

fn apply_subdirective(
    config: &mut PlaceholderConfig,
    line_no: usize,
    name: &str,
    args: &[String],
) -> Result<()> {
    match name {
        "rand_int" => {
            let [min, max] = args else {
                return Err(AppError::directive(
                    line_no,
                    "rand_int expects exactly two arguments: <min> <max>",
                ));
            };
            let parse = |value: &str| {
                value.parse::<i64>().map_err(|_| {
                    AppError::directive(line_no, format!("rand_int: `{}` is not an integer", value))
                })
            };
            config.rand_int_min = parse(min.as_str())?;
            config.rand_int_max = parse(max.as_str())?;
        }
        "time_format_custom" => {
            let [format] = args else {
                return Err(AppError::directive(
                    line_no,
                    "time_format_custom expects exactly one argument",
                ));
            };
            config.time_format_custom = format.clone();
        }
        "disable_loadavg_placeholders" => {
            if !args.is_empty() {
                return Err(AppError::directive(
                    line_no,
                    "disable_loadavg_placeholders takes no arguments",
                ));
            }
            config.disable_loadavg_placeholders = true;
        }
        other => {
            return Err(AppError::directive(
                line_no,
                format!("unknown subdirective: {}", other),
            ))
        }
    }
    Ok(())
}
