//! Line-oriented registration session.
//!
//! Reads one command per line and answers on the output stream. Each
//! command completes before the next line is read.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::warn;

use course_model::Course;
use course_registration::{RegistrationError, RegistrationSink, RegistrationState};

const HELP: &str = "\
commands:
  toggle <id>     select or deselect a course
  search [query]  list courses whose code, name or lecturer contains query
  list            list every course
  status          show the credit status
  register        register the selected courses
  draft           save the selection as a draft
  clear           deselect every course
  help            show this help
  quit            leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Toggle(String),
    Search(String),
    List,
    Status,
    Register,
    Draft,
    Clear,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        // Only the separator after the verb is dropped; search queries keep
        // their own spaces.
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        match verb.to_lowercase().as_str() {
            "toggle" | "t" if !rest.trim().is_empty() => {
                Ok(Self::Toggle(rest.trim().to_string()))
            }
            "toggle" | "t" => Err("toggle needs a course id".to_string()),
            "search" | "s" => Ok(Self::Search(rest.to_string())),
            "list" | "ls" => Ok(Self::List),
            "status" => Ok(Self::Status),
            "register" => Ok(Self::Register),
            "draft" => Ok(Self::Draft),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(format!("unknown command: {verb}")),
        }
    }
}

/// Counts reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOutcome {
    pub commands: usize,
    pub registrations: usize,
    pub drafts: usize,
}

pub struct Session<'a, S: RegistrationSink + ?Sized> {
    state: &'a mut RegistrationState,
    sink: &'a mut S,
    outcome: SessionOutcome,
}

impl<'a, S: RegistrationSink + ?Sized> Session<'a, S> {
    pub fn new(state: &'a mut RegistrationState, sink: &'a mut S) -> Self {
        Self {
            state,
            sink,
            outcome: SessionOutcome::default(),
        }
    }

    /// Process `input` until it ends or a `quit` command is read.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        input: R,
        mut output: W,
    ) -> io::Result<SessionOutcome> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<SessionCommand>() {
                Ok(SessionCommand::Quit) => break,
                Ok(command) => {
                    self.outcome.commands += 1;
                    self.execute(&command, &mut output)?;
                }
                Err(message) => writeln!(output, "{message} (try `help`)")?,
            }
        }
        Ok(self.outcome)
    }

    pub fn execute<W: Write>(
        &mut self,
        command: &SessionCommand,
        output: &mut W,
    ) -> io::Result<()> {
        match command {
            SessionCommand::Toggle(id) => {
                if self.state.toggle_selection(id) {
                    let selected = self.state.course(id).is_some_and(|course| course.selected);
                    let verb = if selected { "selected" } else { "deselected" };
                    writeln!(output, "{id} {verb}.")?;
                } else {
                    warn!(course_id = %id, "toggle ignored: unknown course");
                    writeln!(output, "unknown course: {id}")?;
                }
                self.write_status(output)
            }
            SessionCommand::Search(query) => {
                let mut matched = 0usize;
                for course in self.state.search(query) {
                    write_course_line(output, course)?;
                    matched += 1;
                }
                if matched == 0 {
                    writeln!(output, "no courses match {query:?}")?;
                }
                Ok(())
            }
            SessionCommand::List => {
                for course in self.state.courses() {
                    write_course_line(output, course)?;
                }
                Ok(())
            }
            SessionCommand::Status => self.write_status(output),
            SessionCommand::Register => match self.state.register_with(&mut *self.sink) {
                Ok(confirmation) => {
                    self.outcome.registrations += 1;
                    writeln!(output, "{confirmation}")
                }
                Err(RegistrationError::NotEligible { status, .. }) => {
                    warn!(%status, "registration refused");
                    writeln!(output, "cannot register: {status}")
                }
                Err(err) => writeln!(output, "error: {err}"),
            },
            SessionCommand::Draft => match self.state.save_draft_with(&mut *self.sink) {
                Ok(confirmation) => {
                    self.outcome.drafts += 1;
                    writeln!(output, "{confirmation}")
                }
                Err(err) => writeln!(output, "error: {err}"),
            },
            SessionCommand::Clear => {
                self.state.clear_selection();
                writeln!(output, "selection cleared.")?;
                self.write_status(output)
            }
            SessionCommand::Help => writeln!(output, "{HELP}"),
            SessionCommand::Quit => Ok(()),
        }
    }

    fn write_status<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let summary = self.state.summary();
        writeln!(
            output,
            "[{}] {} ({} credits, {} selected)",
            summary.status_severity(),
            summary.status_message(),
            summary.total_credits(),
            summary.selected_count()
        )
    }
}

fn write_course_line<W: Write>(output: &mut W, course: &Course) -> io::Result<()> {
    let mark = if course.selected { "x" } else { " " };
    writeln!(
        output,
        "[{mark}] {:<12} {} ({} cr, {})",
        course.id.as_str(),
        course.name,
        course.credit_hours,
        course.lecturer
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            "toggle BCS3013-01".parse::<SessionCommand>(),
            Ok(SessionCommand::Toggle("BCS3013-01".to_string()))
        );
        assert_eq!(
            "  search Data Mining".parse::<SessionCommand>(),
            Ok(SessionCommand::Search("Data Mining".to_string()))
        );
        assert_eq!(
            "search  Data ".parse::<SessionCommand>(),
            Ok(SessionCommand::Search(" Data ".to_string()))
        );
        assert_eq!(
            "toggle  BCS3013-01 ".parse::<SessionCommand>(),
            Ok(SessionCommand::Toggle("BCS3013-01".to_string()))
        );
        assert_eq!("status  ".parse::<SessionCommand>(), Ok(SessionCommand::Status));
        assert_eq!(
            "search".parse::<SessionCommand>(),
            Ok(SessionCommand::Search(String::new()))
        );
        assert_eq!("QUIT".parse::<SessionCommand>(), Ok(SessionCommand::Quit));
    }

    #[test]
    fn rejects_bad_commands() {
        assert!("toggle".parse::<SessionCommand>().is_err());
        assert_eq!(
            "enrol X".parse::<SessionCommand>(),
            Err("unknown command: enrol".to_string())
        );
    }
}
