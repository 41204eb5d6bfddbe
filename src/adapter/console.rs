// src/adapter/console.rs
// Line-oriented console front end for the journal

use std::io::{BufRead, Write};

use crate::application::dto::parser::{format_currency, format_date, format_time, parse_date};
use crate::application::dto::{OperationField, StrategyField};
use crate::application::service::Journal;
use crate::config::DisplayConfig;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::model::{Asset, Direction, Strategy, TradingOperation};

const HELP: &str = "\
commands:
  use strategies|operations   switch page
  list                        show the filtered records
  search [term]               filter by text, no term clears
  pending on|off              only pending operations
  set <field> [value]         assign a form field, no value clears it
  draft                       show the form
  edit <id>                   load a record into the form
  cancel                      reset the form
  submit                      add or save the form
  delete <id>                 remove a record
  names                       strategy names for tagging operations
  export                      print the filtered records as JSON
  quit";

/// Page the console is currently working on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Strategies,
    Operations,
}

/// Whether the console should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<W: Write> {
    journal: Journal,
    display: DisplayConfig,
    page: Page,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(journal: Journal, display: DisplayConfig, out: W) -> Self {
        Self {
            journal,
            display,
            page: Page::Strategies,
            out,
        }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Read commands until end of input or `quit`.
    ///
    /// Rejected commands are reported on the output and do not stop the loop.
    pub fn run<R: BufRead>(&mut self, input: R) -> AppResult<()> {
        for line in input.lines() {
            let line = line?;
            match self.execute(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => {
                    log::warn!("Command {:?} failed: {}", line.trim(), e);
                    writeln!(self.out, "error: {}", e)?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn execute(&mut self, line: &str) -> AppResult<Flow> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => writeln!(self.out, "{}", HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            "use" => {
                self.page = match rest {
                    "strategies" | "s" => Page::Strategies,
                    "operations" | "o" => Page::Operations,
                    _ => return Err(AppError::Command(format!("Unknown page: {:?}", rest))),
                };
            }
            "list" => self.print_visible()?,
            "search" => {
                match self.page {
                    Page::Strategies => self.journal.strategies.set_search_term(rest),
                    Page::Operations => self.journal.operations.set_search_term(rest),
                }
                self.print_visible()?;
            }
            "pending" => {
                if self.page != Page::Operations {
                    return Err(AppError::Command("pending only applies to operations".to_string()));
                }
                self.journal.operations.set_show_pending_only(parse_switch(rest)?);
                self.print_visible()?;
            }
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                self.set_field(field, value)?;
            }
            "draft" => self.print_draft()?,
            "edit" => {
                match self.page {
                    Page::Strategies => self.journal.strategies.begin_edit(rest)?,
                    Page::Operations => self.journal.operations.begin_edit(rest)?,
                }
                self.print_draft()?;
            }
            "cancel" => match self.page {
                Page::Strategies => self.journal.strategies.cancel(),
                Page::Operations => self.journal.operations.cancel(),
            },
            "submit" => {
                let id = match self.page {
                    Page::Strategies => self.journal.strategies.submit()?,
                    Page::Operations => self.journal.operations.submit()?,
                };
                writeln!(self.out, "saved {}", id)?;
            }
            "delete" => {
                match self.page {
                    Page::Strategies => {
                        self.journal.strategies.delete(rest)?;
                    }
                    Page::Operations => {
                        self.journal.operations.delete(rest)?;
                    }
                }
                writeln!(self.out, "removed {}", rest)?;
            }
            "names" => {
                for name in self.journal.strategy_names() {
                    writeln!(self.out, "{}", name)?;
                }
            }
            "export" => {
                let json = match self.page {
                    Page::Strategies => serde_json::to_string_pretty(&self.journal.strategies.visible())?,
                    Page::Operations => serde_json::to_string_pretty(&self.journal.operations.visible())?,
                };
                writeln!(self.out, "{}", json)?;
            }
            other => return Err(AppError::Command(format!("Unknown command: {} (try help)", other))),
        }

        Ok(Flow::Continue)
    }

    fn set_field(&mut self, field: &str, value: &str) -> AppResult<()> {
        match self.page {
            Page::Strategies => {
                let field = match field {
                    "name" => StrategyField::Name(value.to_string()),
                    "direction" => StrategyField::Direction(optional(value, |v| v.parse::<Direction>().map_err(AppError::Command))?),
                    "description" => StrategyField::Description(value.to_string()),
                    _ => return Err(unknown_field(field)),
                };
                self.journal.strategies.set_field(field);
            }
            Page::Operations => {
                let field = match field {
                    "asset" => OperationField::Asset(optional(value, |v| v.parse::<Asset>().map_err(AppError::Command))?),
                    "date" => OperationField::Date(optional(value, |v| Ok(parse_date(v)?))?),
                    "strategy" => OperationField::Strategy(value.to_string()),
                    "entry" | "entryTime" => OperationField::EntryTime(value.to_string()),
                    "exit" | "exitTime" => OperationField::ExitTime(value.to_string()),
                    "quantity" => OperationField::Quantity(value.to_string()),
                    "result" => OperationField::Result(value.to_string()),
                    "men" => OperationField::Men(value.to_string()),
                    "mep" => OperationField::Mep(value.to_string()),
                    "pending" => OperationField::IsPending(parse_switch(value)?),
                    _ => return Err(unknown_field(field)),
                };
                self.journal.operations.set_field(field);
            }
        }
        Ok(())
    }

    fn print_visible(&mut self) -> AppResult<()> {
        match self.page {
            Page::Strategies => {
                let rows: Vec<String> = self
                    .journal
                    .strategies
                    .visible()
                    .into_iter()
                    .map(strategy_row)
                    .collect();
                writeln!(self.out, "{:<14} {:<32} {:<17} {}", "ID", "NAME", "DIRECTION", "DESCRIPTION")?;
                for row in rows {
                    writeln!(self.out, "{}", row)?;
                }
            }
            Page::Operations => {
                let symbol = self.display.currency_symbol.clone();
                let rows: Vec<String> = self
                    .journal
                    .operations
                    .visible()
                    .into_iter()
                    .map(|op| operation_row(op, &symbol))
                    .collect();
                writeln!(
                    self.out,
                    "{:<14} {:<8} {:<10} {:<20} {:<8} {:<8} {:>8} {:>14} {:>4} {:>4} {}",
                    "ID", "ASSET", "DATE", "STRATEGY", "ENTRY", "EXIT", "QTY", "RESULT", "MEN", "MEP", "PENDING"
                )?;
                for row in rows {
                    writeln!(self.out, "{}", row)?;
                }
                let total = format_currency(self.journal.visible_result(), &symbol);
                writeln!(self.out, "total {}", total)?;
            }
        }
        Ok(())
    }

    fn print_draft(&mut self) -> AppResult<()> {
        match self.page {
            Page::Strategies => {
                let form = self.journal.strategies.form();
                let draft = form.draft();
                writeln!(self.out, "editing: {}", form.editing_id().unwrap_or("-"))?;
                writeln!(self.out, "name: {}", draft.name)?;
                writeln!(
                    self.out,
                    "direction: {}",
                    draft.direction.map(|d| d.as_str()).unwrap_or("-")
                )?;
                writeln!(self.out, "description: {}", draft.description)?;
            }
            Page::Operations => {
                let form = self.journal.operations.form();
                let draft = form.draft();
                writeln!(self.out, "editing: {}", form.editing_id().unwrap_or("-"))?;
                writeln!(self.out, "asset: {}", draft.asset.map(|a| a.as_str()).unwrap_or("-"))?;
                writeln!(self.out, "date: {}", draft.date_label().unwrap_or_else(|| "-".to_string()))?;
                writeln!(self.out, "strategy: {}", draft.strategy)?;
                writeln!(self.out, "entry: {}", draft.entry_time)?;
                writeln!(self.out, "exit: {}", draft.exit_time)?;
                writeln!(self.out, "quantity: {}", draft.quantity)?;
                writeln!(self.out, "result: {}", draft.result)?;
                writeln!(self.out, "men: {}", draft.men)?;
                writeln!(self.out, "mep: {}", draft.mep)?;
                writeln!(self.out, "pending: {}", draft.is_pending)?;
            }
        }
        Ok(())
    }
}

/// Empty or `-` clears an optional field
fn optional<T>(value: &str, parse: impl Fn(&str) -> AppResult<T>) -> AppResult<Option<T>> {
    match value {
        "" | "-" => Ok(None),
        _ => parse(value).map(Some),
    }
}

fn parse_switch(value: &str) -> AppResult<bool> {
    match value {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(AppError::Command(format!("Expected on or off, got {:?}", value))),
    }
}

fn unknown_field(field: &str) -> AppError {
    AppError::Command(format!("Unknown field: {:?}", field))
}

fn strategy_row(strategy: &Strategy) -> String {
    format!(
        "{:<14} {:<32} {:<17} {}",
        strategy.id,
        strategy.name,
        strategy.direction.as_str(),
        strategy.description
    )
}

fn operation_row(op: &TradingOperation, symbol: &str) -> String {
    format!(
        "{:<14} {:<8} {:<10} {:<20} {:<8} {:<8} {:>8} {:>14} {:>4} {:>4} {}",
        op.id,
        op.asset.as_str(),
        format_date(&op.date),
        op.strategy,
        format_time(&op.entry_time),
        format_time(&op.exit_time),
        op.quantity.normalize(),
        format_currency(op.result, symbol),
        op.men,
        op.mep,
        if op.is_pending { "yes" } else { "no" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JournalConfig;
    use crate::domain::repository::RecordRepository;
    use std::io::Cursor;

    fn console() -> Console<Vec<u8>> {
        let journal = Journal::new(&JournalConfig::default()).unwrap();
        Console::new(journal, DisplayConfig::default(), Vec::new())
    }

    fn run(script: &str) -> (Console<Vec<u8>>, String) {
        let mut console = console();
        console.run(Cursor::new(script.to_string())).unwrap();
        let output = String::from_utf8_lossy(&console.out).into_owned();
        (console, output)
    }

    #[test]
    fn test_create_strategy_script() {
        let (console, output) = run(
            "set name Novo\nset direction Tendencia\nset description x\nsubmit\nsearch novo\n",
        );

        let strategies = console.journal().strategies.store();
        assert_eq!(strategies.len(), 4);
        assert_eq!(strategies.list()[0].name, "Novo");
        assert!(output.contains("saved "));
        assert!(output.contains("Novo"));
    }

    #[test]
    fn test_errors_are_reported_and_loop_continues() {
        let (console, output) = run("use operations\nsubmit\nfrobnicate\ndelete 99\ndelete 1\n");

        assert!(output.contains("error: Form error: Missing required field(s): asset, date, strategy"));
        assert!(output.contains("error: Command error: Unknown command: frobnicate"));
        assert!(output.contains("error: Store error: No record with id 99"));
        assert!(output.contains("removed 1"));
        assert_eq!(console.journal().operations.store().len(), 1);
    }

    #[test]
    fn test_pending_listing_shows_totals() {
        let (_, output) = run("use operations\npending on\n");

        assert!(output.contains("R$ -50,00"));
        assert!(output.contains("total R$ -50,00"));
        assert!(!output.contains("R$ 30,00"));
    }

    #[test]
    fn test_add_operation_script() {
        let (console, _) = run(
            "use o\nset asset FUTUROS\nset date 15/01/2024\nset strategy Leilão\nset result 1.250,50\nset pending on\nsubmit\n",
        );

        let first = &console.journal().operations.store().list()[0];
        assert_eq!(first.asset, Asset::Futures);
        assert_eq!(first.result.to_string(), "1250.50");
        assert!(first.is_pending);
    }

    #[test]
    fn test_set_pending_rejects_unknown_switch_values() {
        let mut console = console();
        console.execute("use operations").unwrap();
        console.execute("set pending on").unwrap();

        let err = console.execute("set pending maybe").unwrap_err();

        assert!(matches!(err, AppError::Command(_)));
        assert!(console.journal().operations.form().draft().is_pending);

        console.execute("set pending off").unwrap();
        assert!(!console.journal().operations.form().draft().is_pending);
        assert!(console.execute("pending maybe").is_err());
    }

    #[test]
    fn test_quit_stops_reading() {
        let (console, _) = run("quit\nuse operations\n");
        assert_eq!(console.page(), Page::Strategies);
    }

    #[test]
    fn test_export_prints_json() {
        let (_, output) = run("search neutra\nexport\n");
        assert!(output.contains("\"direction\": \"Neutro\""));
        assert!(output.contains("\"id\": \"3\""));
    }

    #[test]
    fn test_bad_date_is_rejected_before_reaching_the_form() {
        let mut console = console();
        console.execute("use operations").unwrap();
        let err = console.execute("set date 2024-01-15").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(console.journal().operations.form().draft().date.is_none());
    }
}
