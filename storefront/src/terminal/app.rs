// storefront/src/terminal/app.rs

use crate::errors::Result;
use crate::terminal::command::{self, Command, HELP};
use crate::terminal::render;
use caffe::reservation::DEFAULT_PARTY_SIZE;
use caffe::{CafeError, Customer, ReservationRequest, Session, Tab};
use chrono::NaiveDateTime;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{info, instrument, warn};

const PROMPT: &str = "> ";
const BUSY: &str = "An order is being submitted. Please wait.";

/// Read-eval loop over a `Session`: one command per input line, the current
/// view rendered after each one.
pub struct Terminal<R, W> {
  session: Session,
  lines: Lines<R>,
  out: W,
}

impl<R, W> Terminal<R, W>
where
  R: AsyncBufRead + Unpin,
  W: AsyncWrite + Unpin,
{
  pub fn new(session: Session, input: R, out: W) -> Self {
    Self {
      session,
      lines: input.lines(),
      out,
    }
  }

  /// Runs until `quit` or end of input.
  pub async fn run(&mut self) -> Result<()> {
    self.show_view().await?;
    loop {
      self.write(PROMPT).await?;
      let Some(line) = self.lines.next_line().await? else {
        break;
      };
      match command::parse(&line) {
        Ok(None) => {}
        Ok(Some(Command::Quit)) => break,
        Ok(Some(cmd)) => self.dispatch(cmd).await?,
        Err(e) => self.say(&e.to_string()).await?,
      }
    }
    self.say("Goodbye!").await
  }

  pub fn into_output(self) -> W {
    self.out
  }

  async fn dispatch(&mut self, cmd: Command) -> Result<()> {
    match cmd {
      Command::Show(Tab::Reserve) => self.reserve().await,
      Command::Show(tab) => {
        self.session.select_tab(tab);
        self.show_view().await
      }
      Command::Add(id) => match self.session.find_menu_item(&id) {
        Some(item) => {
          let outcome = self.session.add(&item);
          self.after_edit(outcome).await
        }
        None => self.say(&format!("No menu item with id {id}.")).await,
      },
      Command::Increment(id) => match self.session.find_cart_id(&id) {
        Some(cart_id) => {
          let outcome = self.session.increment(&cart_id);
          self.after_edit(outcome).await
        }
        None => self.say(&format!("Item {id} is not in your cart.")).await,
      },
      Command::Decrement(id) => match self.session.find_cart_id(&id) {
        Some(cart_id) => {
          let outcome = self.session.decrement(&cart_id);
          self.after_edit(outcome).await
        }
        None => self.say(&format!("Item {id} is not in your cart.")).await,
      },
      Command::Checkout { name, contact } => self.checkout(name, contact).await,
      Command::Help => self.say(HELP).await,
      Command::Quit => Ok(()),
    }
  }

  async fn after_edit(&mut self, outcome: caffe::CafeResult<()>) -> Result<()> {
    match outcome {
      Ok(()) => self.show_view().await,
      Err(CafeError::Busy) => self.say(BUSY).await,
      Err(e) => Err(e.into()),
    }
  }

  #[instrument(name = "Terminal::checkout", skip_all)]
  async fn checkout(&mut self, name: Option<String>, contact: Option<String>) -> Result<()> {
    let outcome = match name {
      Some(name) => {
        let customer = Customer {
          name,
          contact: contact.unwrap_or_default(),
        };
        self.session.checkout_as(customer).await
      }
      None => self.session.checkout().await,
    };

    match outcome {
      Ok(Some(receipt)) => {
        info!(total = %receipt.total, "Order placed.");
        self.say(&render::order_placed(receipt.total)).await?;
        self.show_view().await
      }
      Ok(None) => self.say(render::EMPTY_CART).await,
      Err(CafeError::Busy) => self.say(BUSY).await,
      Err(e) => {
        warn!(error = %e, "Order failed.");
        self.say(render::ORDER_FAILED).await
      }
    }
  }

  async fn reserve(&mut self) -> Result<()> {
    self.session.select_tab(Tab::Reserve);
    self.show_view().await?;

    let Some(request) = self.read_reservation().await? else {
      self.session.select_tab(Tab::About);
      return self.say("Reservation cancelled.").await;
    };

    match self.session.reserve(request).await {
      Ok(()) => {
        self.say(render::RESERVATION_REQUESTED).await?;
        self.show_view().await
      }
      Err(_) => self.say(render::RESERVATION_FAILED).await,
    }
  }

  /// Prompts for each form field. `None` when input ends mid-form.
  async fn read_reservation(&mut self) -> Result<Option<ReservationRequest>> {
    let mut request = ReservationRequest::default();

    let Some(name) = self.ask("Your name: ").await? else {
      return Ok(None);
    };
    request.name = name;

    let Some(contact) = self.ask("Contact (phone/email): ").await? else {
      return Ok(None);
    };
    request.contact = contact;

    loop {
      let Some(raw) = self.ask(&format!("Party size [{DEFAULT_PARTY_SIZE}]: ")).await? else {
        return Ok(None);
      };
      if raw.is_empty() {
        break;
      }
      match raw.parse::<u32>() {
        Ok(size) => {
          request.party_size = size;
          break;
        }
        Err(_) => self.say("Party size must be a whole number.").await?,
      }
    }

    let Some(when) = self.ask("Date and time (YYYY-MM-DDTHH:MM): ").await? else {
      return Ok(None);
    };
    request = with_datetime(request, when);

    let Some(notes) = self.ask("Notes (optional): ").await? else {
      return Ok(None);
    };
    request.notes = notes;

    Ok(Some(request))
  }

  async fn ask(&mut self, question: &str) -> Result<Option<String>> {
    self.write(question).await?;
    Ok(self.lines.next_line().await?.map(|line| line.trim().to_string()))
  }

  async fn show_view(&mut self) -> Result<()> {
    let view = render::view(&self.session.snapshot());
    self.say(&view).await
  }

  async fn say(&mut self, text: &str) -> Result<()> {
    self.write(text).await?;
    self.write("\n").await
  }

  async fn write(&mut self, text: &str) -> Result<()> {
    self.out.write_all(text.as_bytes()).await?;
    self.out.flush().await?;
    Ok(())
  }
}

/// Normalizes a space-separated date-time to the form layout; anything else
/// is passed through untouched.
fn with_datetime(request: ReservationRequest, raw: String) -> ReservationRequest {
  match NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M") {
    Ok(when) => request.at(when),
    Err(_) => ReservationRequest {
      datetime_iso: raw,
      ..request
    },
  }
}
