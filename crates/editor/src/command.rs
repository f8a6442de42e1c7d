// Chunk: docs/chunks/command_script - Line-oriented editor commands
//! Editor commands and their text form.
//!
//! Each line of a command script is one command:
//!
//! | Line               | Command                                  |
//! |--------------------|------------------------------------------|
//! | `type <text>`      | insert text (`\n`, `\t`, `\\` escapes)   |
//! | `enter`            | insert a line break                      |
//! | `backspace [n]`    | delete `n` characters (default 1)        |
//! | `left` `right` `up` `down` | move the cursor                  |
//! | `click <x> <y>`    | move the cursor to a pixel position      |
//! | `resize <w> <h>`   | change the window size                   |
//! | `zoom in`, `zoom out` | change the font size                  |
//! | `save`             | write the document                       |
//! | `undo`, `redo`     | history (currently inert)                |
//! | `cursor`           | log the cursor position                  |
//!
//! Blank lines and lines starting with `#` are ignored.

use thiserror::Error;

/// Command parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A single editing command.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Insert text at the cursor
    Type(String),
    /// Delete this many characters before the cursor
    Backspace(usize),
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Move the cursor to the position nearest a pixel
    Click { x: f32, y: f32 },
    /// Change the window size in pixels
    Resize { width: f32, height: f32 },
    ZoomIn,
    ZoomOut,
    Save,
    Undo,
    Redo,
    /// Log the cursor pixel position (debug mode)
    PrintCursor,
}

impl EditorCommand {
    /// Parses one script line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        if word == "type" {
            return Ok(Some(Self::Type(unescape(rest)?)));
        }

        let args: Vec<&str> = rest.split_whitespace().collect();
        let command = match (word, args.as_slice()) {
            ("enter", []) => Self::Type("\n".to_string()),
            ("backspace", []) => Self::Backspace(1),
            ("backspace", [n]) => Self::Backspace(parse_arg(n)?),
            ("left", []) => Self::MoveLeft,
            ("right", []) => Self::MoveRight,
            ("up", []) => Self::MoveUp,
            ("down", []) => Self::MoveDown,
            ("click", [x, y]) => Self::Click {
                x: parse_arg(x)?,
                y: parse_arg(y)?,
            },
            ("resize", [w, h]) => Self::Resize {
                width: parse_arg(w)?,
                height: parse_arg(h)?,
            },
            ("zoom", ["in"]) => Self::ZoomIn,
            ("zoom", ["out"]) => Self::ZoomOut,
            ("save", []) => Self::Save,
            ("undo", []) => Self::Undo,
            ("redo", []) => Self::Redo,
            ("cursor", []) => Self::PrintCursor,
            (
                "enter" | "backspace" | "left" | "right" | "up" | "down" | "click" | "resize"
                | "zoom" | "save" | "undo" | "redo" | "cursor",
                _,
            ) => return Err(CommandError::InvalidArgument(line.trim_end().to_string())),
            _ => return Err(CommandError::UnknownCommand(word.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_arg<T: std::str::FromStr>(arg: &str) -> Result<T, CommandError> {
    arg.parse()
        .map_err(|_| CommandError::InvalidArgument(arg.to_string()))
}

fn unescape(text: &str) -> Result<String, CommandError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                return Err(CommandError::InvalidArgument(format!("\\{other}")));
            }
            None => return Err(CommandError::InvalidArgument("\\".to_string())),
        }
    }
    Ok(out)
}
