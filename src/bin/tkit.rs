//! Typekit shell
//!
//! Interactive classifier/coercion shell and script runner. With a file
//! argument every non-empty line runs as one command; without one it
//! starts a line-edited prompt.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use typekit::numeric::{self, bits};
use typekit::{cast_to, classify, CastOptions, TypeCategory, Value};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        run_file(&args[1]);
    } else {
        run_repl();
    }
}

fn run_file(filename: &str) {
    let source = match std::fs::read_to_string(filename) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {}", filename, e);
            std::process::exit(1);
        }
    };

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        println!("{}", eval_command(line));
    }
}

fn run_repl() {
    println!("Typekit shell");
    println!("Commands: classify, cast, bits, hex, oct, bin, dec. Ctrl+D to exit.\n");

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error initializing editor: {}", e);
            std::process::exit(1);
        }
    };

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                println!("{}", eval_command(line));
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }
}

/// Parse one command-line token into a value
fn parse_literal(token: &str) -> Value {
    match token {
        "undefined" => Value::Undefined,
        "null" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
                Value::str(&token[1..token.len() - 1])
            } else if numeric::is_numeric(&Value::str(token)) {
                Value::Number(numeric::to_float(&Value::str(token)))
            } else {
                Value::str(token)
            }
        }
    }
}

fn eval_command(line: &str) -> String {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("");
    let rest: Vec<&str> = parts.collect();

    match (command, rest.as_slice()) {
        ("classify", [token]) => {
            let value = parse_literal(token);
            format!(
                "{} (numeric: {}, iterable: {})",
                value.category(),
                numeric::is_numeric(&value),
                classify::is_iterable(&value)
            )
        }
        ("cast", [token, target]) => match TypeCategory::from_name(target) {
            Some(category) => {
                let value = parse_literal(token);
                cast_to(&value, category, &CastOptions::default()).to_string()
            }
            None => format!("unknown category: {}", target),
        },
        ("bits", numbers) if !numbers.is_empty() => {
            let parsed: Vec<i128> = numbers
                .iter()
                .map(|t| numeric::to_integer(&parse_literal(t)) as i128)
                .collect();
            let widest = parsed
                .iter()
                .map(|&n| bits::calculate_bits_needed(n, None))
                .max()
                .unwrap_or(1);
            format!(
                "{} bits -> {} aligned -> {}",
                widest,
                bits::align_to_bytes(widest),
                bits::calculate_typed_array_class(&parsed).name()
            )
        }
        ("hex", [token]) => numeric::to_hex(&parse_literal(token)),
        ("oct", [token]) => numeric::to_octal(&parse_literal(token)),
        ("bin", [token]) => numeric::to_binary(&parse_literal(token)),
        ("dec", [token]) => numeric::to_decimal(&parse_literal(token)).to_string(),
        _ => format!("unknown command: {}", line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(parse_literal("null"), Value::Null);
        assert_eq!(parse_literal("42"), Value::Number(42.0));
        assert_eq!(parse_literal("0xff"), Value::Number(255.0));
        assert_eq!(parse_literal("\"0xff\""), Value::str("0xff"));
        assert_eq!(parse_literal("hello"), Value::str("hello"));
    }

    #[test]
    fn test_commands() {
        assert_eq!(eval_command("hex 255"), "0xff");
        assert_eq!(eval_command("dec 0xff"), "255");
        assert_eq!(eval_command("cast 2 string"), "2");
        assert_eq!(eval_command("bits 2 17 127"), "7 bits -> 8 aligned -> Uint8Array");
        assert!(eval_command("nonsense").starts_with("unknown command"));
    }
}
