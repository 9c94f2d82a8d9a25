//! Legacy terminal key parsing and matching.
//!
//! Only the classic xterm/VT encodings are recognized; the menu never enables the kitty keyboard
//! protocol, so every key arrives as a legacy byte sequence.

const MOD_SHIFT: u8 = 1;
const MOD_ALT: u8 = 2;
const MOD_CTRL: u8 = 4;

const LEGACY_UP: [&str; 2] = ["\x1b[A", "\x1bOA"];
const LEGACY_DOWN: [&str; 2] = ["\x1b[B", "\x1bOB"];
const LEGACY_RIGHT: [&str; 2] = ["\x1b[C", "\x1bOC"];
const LEGACY_LEFT: [&str; 2] = ["\x1b[D", "\x1bOD"];
const LEGACY_HOME: [&str; 4] = ["\x1b[H", "\x1bOH", "\x1b[1~", "\x1b[7~"];
const LEGACY_END: [&str; 4] = ["\x1b[F", "\x1bOF", "\x1b[4~", "\x1b[8~"];
const LEGACY_INSERT: [&str; 1] = ["\x1b[2~"];
const LEGACY_DELETE: [&str; 1] = ["\x1b[3~"];
const LEGACY_PAGE_UP: [&str; 2] = ["\x1b[5~", "\x1b[[5~"];
const LEGACY_PAGE_DOWN: [&str; 2] = ["\x1b[6~", "\x1b[[6~"];

#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedKeyId {
    key: String,
    ctrl: bool,
    shift: bool,
    alt: bool,
}

impl ParsedKeyId {
    fn with_modifier(key: &str, modifier: u8) -> Self {
        Self {
            key: key.to_lowercase(),
            ctrl: modifier & MOD_CTRL != 0,
            shift: modifier & MOD_SHIFT != 0,
            alt: modifier & MOD_ALT != 0,
        }
    }

    fn to_key_id(&self) -> String {
        let mut out = String::new();
        if self.ctrl {
            out.push_str("ctrl+");
        }
        if self.alt {
            out.push_str("alt+");
        }
        if self.shift {
            out.push_str("shift+");
        }
        out.push_str(&self.key);
        out
    }
}

fn parse_key_id(key_id: &str) -> Option<ParsedKeyId> {
    let lowered = key_id.to_lowercase();
    // A bare "+" is a key of its own; "ctrl++" ends in one.
    let (modifiers, key) = match lowered.strip_suffix("++") {
        Some(prefix) => (prefix, "+"),
        None if lowered == "+" => ("", "+"),
        None => match lowered.rsplit_once('+') {
            Some((prefix, key)) => (prefix, key),
            None => ("", lowered.as_str()),
        },
    };
    if key.is_empty() {
        return None;
    }
    let parts: Vec<&str> = modifiers.split('+').collect();
    Some(ParsedKeyId {
        key: normalize_key_name(key).to_string(),
        ctrl: parts.contains(&"ctrl"),
        shift: parts.contains(&"shift"),
        alt: parts.contains(&"alt"),
    })
}

fn normalize_key_name(key: &str) -> &str {
    match key {
        "esc" => "escape",
        "return" => "enter",
        "pgup" => "pageup",
        "pgdown" | "pgdn" => "pagedown",
        other => other,
    }
}

fn legacy_key_name(data: &str) -> Option<&'static str> {
    let tables: [(&[&str], &'static str); 10] = [
        (&LEGACY_UP, "up"),
        (&LEGACY_DOWN, "down"),
        (&LEGACY_RIGHT, "right"),
        (&LEGACY_LEFT, "left"),
        (&LEGACY_HOME, "home"),
        (&LEGACY_END, "end"),
        (&LEGACY_INSERT, "insert"),
        (&LEGACY_DELETE, "delete"),
        (&LEGACY_PAGE_UP, "pageup"),
        (&LEGACY_PAGE_DOWN, "pagedown"),
    ];
    tables
        .iter()
        .find(|(sequences, _)| sequences.contains(&data))
        .map(|(_, name)| *name)
}

/// Decode `ESC [ 1 ; <mod> <final>` and `ESC [ <code> ; <mod> ~` modifier sequences.
fn parse_modified_csi(data: &str) -> Option<ParsedKeyId> {
    let body = data.strip_prefix("\x1b[")?;
    let final_char = body.chars().last()?;
    let params = &body[..body.len() - final_char.len_utf8()];
    let (code, modifier) = params.split_once(';')?;
    let modifier = modifier.parse::<u8>().ok()?.checked_sub(1)?;

    let key = match (code, final_char) {
        ("1", 'A') => "up",
        ("1", 'B') => "down",
        ("1", 'C') => "right",
        ("1", 'D') => "left",
        ("1", 'H') => "home",
        ("1", 'F') => "end",
        ("2", '~') => "insert",
        ("3", '~') => "delete",
        ("5", '~') => "pageup",
        ("6", '~') => "pagedown",
        _ => return None,
    };
    Some(ParsedKeyId::with_modifier(key, modifier))
}

fn parse_key_parts(data: &str) -> Option<ParsedKeyId> {
    match data {
        "\r" | "\n" | "\x1bOM" => return Some(ParsedKeyId::with_modifier("enter", 0)),
        "\x1b\r" => return Some(ParsedKeyId::with_modifier("enter", MOD_ALT)),
        "\t" => return Some(ParsedKeyId::with_modifier("tab", 0)),
        "\x1b[Z" => return Some(ParsedKeyId::with_modifier("tab", MOD_SHIFT)),
        "\x7f" | "\x08" => return Some(ParsedKeyId::with_modifier("backspace", 0)),
        "\x1b\x7f" | "\x1b\x08" => return Some(ParsedKeyId::with_modifier("backspace", MOD_ALT)),
        "\x1b" => return Some(ParsedKeyId::with_modifier("escape", 0)),
        " " => return Some(ParsedKeyId::with_modifier("space", 0)),
        "\x00" => return Some(ParsedKeyId::with_modifier("space", MOD_CTRL)),
        _ => {}
    }

    if let Some(name) = legacy_key_name(data) {
        return Some(ParsedKeyId::with_modifier(name, 0));
    }
    if let Some(parsed) = parse_modified_csi(data) {
        return Some(parsed);
    }

    let mut chars = data.chars();
    let first = chars.next()?;
    let second = chars.next();
    if chars.next().is_some() {
        return None;
    }

    match (first, second) {
        ('\x1b', Some(ch)) if !ch.is_control() => {
            let mut parsed = printable_key(ch);
            parsed.alt = true;
            Some(parsed)
        }
        (ch, None) if (ch as u32) >= 1 && (ch as u32) <= 26 => {
            let letter = char::from(b'a' + (ch as u8) - 1);
            Some(ParsedKeyId::with_modifier(&letter.to_string(), MOD_CTRL))
        }
        (ch, None) if !ch.is_control() => Some(printable_key(ch)),
        _ => None,
    }
}

fn printable_key(ch: char) -> ParsedKeyId {
    if ch.is_ascii_uppercase() {
        ParsedKeyId::with_modifier(&ch.to_ascii_lowercase().to_string(), MOD_SHIFT)
    } else {
        ParsedKeyId::with_modifier(&ch.to_string(), 0)
    }
}

/// Parse a single input sequence into a key id such as `"ctrl+c"`, `"up"` or `"q"`.
pub fn parse_key(data: &str) -> Option<String> {
    parse_key_parts(data).map(|parsed| parsed.to_key_id())
}

/// Whether `data` is the encoding of `key_id` (for example `"alt+d"` or `"pageDown"`).
pub fn matches_key(data: &str, key_id: &str) -> bool {
    match (parse_key_parts(data), parse_key_id(key_id)) {
        (Some(actual), Some(expected)) => actual == expected,
        _ => false,
    }
}

/// Split a raw read from stdin into individual key sequences.
///
/// A single `read(2)` can carry several keys when the user types quickly or the terminal batches
/// output; each escape sequence is kept intact.
pub fn split_key_sequences(input: &str) -> Vec<String> {
    let mut sequences = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch != '\x1b' {
            sequences.push(ch.to_string());
            continue;
        }

        let end = match chars.peek().copied() {
            None => input.len(),
            Some((_, '[')) => {
                chars.next();
                let mut end = input.len();
                // "\x1b[[5~" is the linux console page-up encoding.
                if let Some((_, '[')) = chars.peek().copied() {
                    chars.next();
                }
                for (idx, next) in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&next) {
                        end = idx + next.len_utf8();
                        break;
                    }
                }
                end
            }
            Some((_, 'O')) => {
                chars.next();
                match chars.next() {
                    Some((idx, next)) => idx + next.len_utf8(),
                    None => input.len(),
                }
            }
            Some((_, '\x1b')) => start + 1,
            Some((idx, next)) => {
                chars.next();
                idx + next.len_utf8()
            }
        };
        sequences.push(input[start..end].to_string());
    }

    sequences
}
