//! Interactive composing session
//!
//! Reads one command per line and applies it to a single in-memory
//! composer. Nothing is written to disk.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};

use crate::cli::output::write_diagnostics;
use crate::composer::{Button, ButtonKind, Composer, Field};
use crate::config::{Config, Limits, OutputFormat};
use crate::validation::validate_composer;

const HELP: &str = "\
commands:
  header <text>                 set header text (\\n for a line break)
  body <text>                   set body text
  footer <text>                 set footer text
  add header|body               append a new variable
  remove header|body <n>        remove variable {{n}}
  set header|body <n> <value>   bind a value to {{n}}
  button add url <url> <text>   add a URL button
  button add call <phone> <text>
  button add offer <code>
  button remove <n>             remove button n
  button kind <n> <kind>        change button n to url, call or offer
  preview                       render the template
  check                         validate the template
  show                          print the draft as TOML
  example                       load the sample template
  help                          show this help
  quit                          leave the session
";

/// A parsed session command. Indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SetText(Field, String),
    SetFooter(String),
    AddVariable(Field),
    RemoveVariable(Field, usize),
    SetValue(Field, usize, String),
    AddButton(Button),
    RemoveButton(usize),
    ChangeButtonKind(usize, ButtonKind),
    Preview,
    Check,
    Show,
    Example,
    Help,
    Quit,
}

/// Parse one input line; blank lines yield `None`
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = split_word(line);
    let command = match verb.to_ascii_lowercase().as_str() {
        "header" => SessionCommand::SetText(Field::Header, unescape(rest)),
        "body" => SessionCommand::SetText(Field::Body, unescape(rest)),
        "footer" => SessionCommand::SetFooter(unescape(rest)),
        "add" => SessionCommand::AddVariable(parse_field(rest)?),
        "remove" => {
            let (field, rest) = split_word(rest);
            let (number, _) = split_word(rest);
            SessionCommand::RemoveVariable(parse_field(field)?, parse_index(number)?)
        }
        "set" => {
            let (field, rest) = split_word(rest);
            let (number, value) = split_word(rest);
            SessionCommand::SetValue(parse_field(field)?, parse_index(number)?, unescape(value))
        }
        "button" => parse_button_command(rest)?,
        "preview" => SessionCommand::Preview,
        "check" => SessionCommand::Check,
        "show" => SessionCommand::Show,
        "example" => SessionCommand::Example,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => bail!("unknown command '{other}' (try 'help')"),
    };

    Ok(Some(command))
}

fn parse_button_command(input: &str) -> Result<SessionCommand> {
    let (action, rest) = split_word(input);
    match action {
        "add" => {
            let (kind, rest) = split_word(rest);
            let kind: ButtonKind = kind.parse().map_err(|e: String| anyhow!(e))?;
            let button = match kind {
                ButtonKind::Url => {
                    let (url, text) = split_word(rest);
                    Button::url(text, url)
                }
                ButtonKind::Call => {
                    let (phone, text) = split_word(rest);
                    Button::call(text, phone)
                }
                ButtonKind::OfferCode => Button::offer_code(rest),
            };
            Ok(SessionCommand::AddButton(button))
        }
        "remove" => Ok(SessionCommand::RemoveButton(parse_index(rest)?)),
        "kind" => {
            let (number, kind) = split_word(rest);
            let kind: ButtonKind = kind.parse().map_err(|e: String| anyhow!(e))?;
            Ok(SessionCommand::ChangeButtonKind(parse_index(number)?, kind))
        }
        other => bail!("unknown button action '{other}' (expected add, remove or kind)"),
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn parse_field(word: &str) -> Result<Field> {
    word.parse().map_err(|e: String| anyhow!(e))
}

/// Users type 1-based numbers (`{{1}}`, button 1); the composer wants indices
fn parse_index(word: &str) -> Result<usize> {
    let number: usize = word
        .trim()
        .parse()
        .with_context(|| format!("expected a number, got '{word}'"))?;
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow!("numbers start at 1"))
}

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// One composing session
#[derive(Debug)]
pub struct Session {
    composer: Composer,
    limits: Limits,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self::with_composer(
            Composer::new(config.template_type, config.limits.max_buttons),
            config.limits,
        )
    }

    pub fn with_composer(composer: Composer, limits: Limits) -> Self {
        Self { composer, limits }
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Read commands until EOF or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "Type 'help' for commands.")?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("Failed to read session input")?;
            match parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(SessionCommand::Quit)) => break,
                Ok(Some(command)) => match self.apply(command) {
                    Ok(reply) => write!(out, "{reply}")?,
                    Err(e) => writeln!(out, "error: {e:#}")?,
                },
                Err(e) => writeln!(out, "error: {e:#}")?,
            }
            out.flush()?;
        }

        Ok(())
    }

    /// Apply a command and return the text to show
    pub fn apply(&mut self, command: SessionCommand) -> Result<String> {
        let reply = match command {
            SessionCommand::SetText(field, text) => {
                let updated = self.composer.set_text(field, text);
                let mut reply = self.describe(field);
                if updated {
                    reply.push_str("(variables updated)\n");
                }
                reply
            }
            SessionCommand::SetFooter(text) => {
                self.composer.set_footer(text);
                format!("footer: {}\n", self.composer.footer())
            }
            SessionCommand::AddVariable(field) => {
                let number = self.composer.add_variable(field);
                format!("added {{{{{number}}}}}\n{}", self.describe(field))
            }
            SessionCommand::RemoveVariable(field, index) => {
                self.composer.remove_variable(field, index)?;
                self.describe(field)
            }
            SessionCommand::SetValue(field, index, value) => {
                self.composer.set_variable_value(field, index, value)?;
                self.describe(field)
            }
            SessionCommand::AddButton(button) => {
                self.composer.add_button(button)?;
                self.describe_buttons()
            }
            SessionCommand::RemoveButton(index) => {
                self.composer.remove_button(index)?;
                self.describe_buttons()
            }
            SessionCommand::ChangeButtonKind(index, kind) => {
                self.composer.change_button_kind(index, kind)?;
                self.describe_buttons()
            }
            SessionCommand::Preview => self.composer.preview().to_string(),
            SessionCommand::Check => {
                let result = validate_composer(&self.composer, &self.limits);
                let mut buffer = Vec::new();
                write_diagnostics(&mut buffer, &result, OutputFormat::Text)?;
                String::from_utf8(buffer)?
            }
            SessionCommand::Show => toml::to_string(&self.composer.to_draft())?,
            SessionCommand::Example => {
                self.composer.load_example();
                format!("{}{}", self.describe(Field::Header), self.describe(Field::Body))
            }
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => String::new(),
        };

        Ok(reply)
    }

    fn describe(&self, field: Field) -> String {
        let doc = self.composer.document(field);
        let mut text = format!("{field}: {}\n", doc.text);
        for (index, slot) in doc.slots.iter().enumerate() {
            let value = if slot.is_bound() {
                slot.value.as_str()
            } else {
                "(empty)"
            };
            text.push_str(&format!("  {{{{{}}}}} = {value}\n", index + 1));
        }
        text
    }

    fn describe_buttons(&self) -> String {
        let buttons = self.composer.buttons();
        let mut text = format!("buttons ({}/{}):\n", buttons.len(), buttons.max());
        for (index, button) in buttons.as_slice().iter().enumerate() {
            text.push_str(&format!(
                "  {}. {} \"{}\" -> {}\n",
                index + 1,
                button.kind,
                button.text,
                button.label()
            ));
        }
        text
    }
}
