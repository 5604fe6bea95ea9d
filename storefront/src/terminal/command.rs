// storefront/src/terminal/command.rs

use caffe::Tab;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Show(Tab),
  Add(String),
  Increment(String),
  Decrement(String),
  /// Place the order, optionally as someone other than the configured customer.
  Checkout {
    name: Option<String>,
    contact: Option<String>,
  },
  Help,
  Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
  #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
  Unknown(String),

  #[error("'{0}' needs an item id, e.g. '{0} 3'.")]
  MissingId(&'static str),
}

pub const HELP: &str = "\
Commands:
  about              show the café
  menu               show the menu
  reserve            request a table
  cart               show your cart
  add <id>           add a menu item to the cart
  inc <id>           one more of a cart item
  dec <id>           one less of a cart item
  checkout [name] [contact]
                     place the order
  help               show this list
  quit               leave";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
  let mut words = line.split_whitespace();
  let Some(head) = words.next() else {
    return Ok(None);
  };

  let command = match head.to_ascii_lowercase().as_str() {
    "about" => Command::Show(Tab::About),
    "menu" => Command::Show(Tab::Menu),
    "reserve" => Command::Show(Tab::Reserve),
    "cart" => Command::Show(Tab::Cart),
    "add" => Command::Add(required_id(words.next(), "add")?),
    "inc" => Command::Increment(required_id(words.next(), "inc")?),
    "dec" => Command::Decrement(required_id(words.next(), "dec")?),
    "checkout" => {
      let name = words.next().map(str::to_string);
      let rest = words.collect::<Vec<_>>().join(" ");
      Command::Checkout {
        name,
        contact: (!rest.is_empty()).then_some(rest),
      }
    }
    "help" | "?" => Command::Help,
    "quit" | "exit" => Command::Quit,
    other => return Err(CommandError::Unknown(other.to_string())),
  };
  Ok(Some(command))
}

fn required_id(word: Option<&str>, command: &'static str) -> Result<String, CommandError> {
  word.map(str::to_string).ok_or(CommandError::MissingId(command))
}
