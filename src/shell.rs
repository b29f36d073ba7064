//! Menu loop.
//!
//! Reads menu choices line by line, dispatches them to a [`Session`] and hands every
//! result to a [`Presenter`]. The sortedness rule lives here on the user's side: a
//! search on records not sorted by name asks to sort them first, and is cancelled
//! otherwise.

use crate::config::Limits;
use crate::core::SortKey;
use crate::error::{Error, Result};
use crate::intake::{read_line, truncate};
use crate::present::Presenter;
use crate::session::Session;
use std::io::BufRead;
use std::ops::ControlFlow;
use std::str::FromStr;
use tracing::debug;

/// A menu choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Show,
    Sort(SortKey),
    Search,
    ShowFinal,
    Exit,
}

/// Input that is not a menu choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Command::Exit),
            "1" => Ok(Command::Show),
            "2" => Ok(Command::Sort(SortKey::Name)),
            "3" => Ok(Command::Sort(SortKey::Type)),
            "4" => Ok(Command::Sort(SortKey::Priority)),
            "5" => Ok(Command::Search),
            "6" => Ok(Command::ShowFinal),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

const MENU: &str = "\n--- MENU ---
1) Show registered records
2) Sort by name (Bubble Sort)
3) Sort by type (Insertion Sort)
4) Sort by priority (Selection Sort)
5) Search by name (Binary Search) [requires sorting by name]
6) Show final assembly (current list)
0) Exit";

pub struct Shell<R, P> {
    input: R,
    presenter: P,
    session: Session,
    limits: Limits,
}

impl<R: BufRead, P: Presenter> Shell<R, P> {
    /// A shell using the default [`Limits`].
    pub fn new(input: R, presenter: P, session: Session) -> Self {
        Self::with_limits(input, presenter, session, Limits::default())
    }

    /// A shell whose search keys are bounded like the names intake accepted.
    pub fn with_limits(input: R, presenter: P, session: Session, limits: Limits) -> Self {
        Self {
            input,
            presenter,
            session,
            limits,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_parts(self) -> (Session, P) {
        (self.session, self.presenter)
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.presenter.notice(MENU)?;
            self.presenter.prompt("Choose an option: ")?;
            let Some(line) = read_line(&mut self.input)? else {
                break;
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(UnknownCommand(input)) => {
                    debug!(input, "menu.unknown");
                    self.presenter.notice("Invalid option. Try again.")?;
                    continue;
                }
            };

            if self.execute(command)?.is_break() {
                break;
            }
        }
        Ok(())
    }

    /// Executes one command. `Break` means the session is over.
    pub fn execute(&mut self, command: Command) -> Result<ControlFlow<()>> {
        debug!(?command, "menu.execute");
        match command {
            Command::Exit => {
                self.presenter.notice("Exiting.")?;
                return Ok(ControlFlow::Break(()));
            }
            Command::Show => self.presenter.records(self.session.records())?,
            Command::Sort(key) => {
                let report = self.session.sort(key);
                self.presenter.sort_report(&report, self.session.records())?;
            }
            Command::Search => return self.search(),
            Command::ShowFinal => {
                self.presenter.notice("\n=== Final assembly (current list) ===")?;
                self.presenter.records(self.session.records())?;
                self.presenter.notice("Use option 5 to confirm a key record is present.")?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn search(&mut self) -> Result<ControlFlow<()>> {
        if !self.session.is_sorted_by_name() {
            self.presenter.notice("Binary search requires the list to be sorted by NAME.")?;
            self.presenter.prompt("Sort by name now using Bubble Sort? (y/n): ")?;
            let Some(answer) = read_line(&mut self.input)? else {
                return Ok(ControlFlow::Break(()));
            };
            if !confirmed(&answer) {
                self.presenter
                    .notice("Search cancelled. Sort by name before using binary search.")?;
                return Ok(ControlFlow::Continue(()));
            }
            let report = self.session.sort(SortKey::Name);
            self.presenter.notice(&format!("Sort done. {}", report.measurement))?;
        }

        self.presenter.prompt("Enter the NAME to search for: ")?;
        let Some(key) = read_line(&mut self.input)? else {
            return Ok(ControlFlow::Break(()));
        };

        // Stored names were cut to the same bound at intake.
        let key = truncate(key.trim(), self.limits.max_name_len);
        match self.session.search(key) {
            Ok(report) => {
                let record = report.index.and_then(|i| self.session.get(i));
                self.presenter.search_report(&report, record)?;
            }
            Err(Error::EmptyKey) => {
                self.presenter.notice("Empty name. Search cancelled.")?;
            }
            Err(e) => return Err(e),
        }
        Ok(ControlFlow::Continue(()))
    }
}

fn confirmed(answer: &str) -> bool {
    matches!(
        answer.trim_start().chars().next(),
        Some('y' | 'Y' | 's' | 'S')
    )
}
