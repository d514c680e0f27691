use std::io;

use anyhow::{Context, Result};
use tracing::{info_span, warn};

use course_cli::context::{StateOptions, build_state};
use course_cli::render::{course_table, summary_table};
use course_cli::session::Session;
use course_cli::sink::TracingSink;
use course_registration::{RegistrationError, RegistrationState};

use crate::cli::PlanArgs;

pub fn run_catalog(options: &StateOptions) -> Result<()> {
    let state = build_state(options)?;
    println!("{}", course_table(state.courses()));
    Ok(())
}

pub fn run_search(options: &StateOptions, query: &str) -> Result<()> {
    let state = build_state(options)?;
    let span = info_span!("search", query);
    let _guard = span.enter();
    let matches: Vec<_> = state.search(query).collect();
    if matches.is_empty() {
        println!("No courses match {query:?}.");
    } else {
        println!("{}", course_table(matches));
    }
    Ok(())
}

/// Returns the process exit code.
pub fn run_plan(options: &StateOptions, args: &PlanArgs) -> Result<i32> {
    let mut state = build_state(options)?;
    let span = info_span!("plan", requested = args.select.len());
    let _guard = span.enter();
    for id in &args.select {
        if !state.set_selected(id, true) {
            warn!(course_id = %id, "unknown course ignored");
        }
    }
    print_plan(&state);

    let mut sink = TracingSink;
    if args.register {
        match state.register_with(&mut sink) {
            Ok(confirmation) => println!("{confirmation}"),
            Err(RegistrationError::NotEligible { status, .. }) => {
                eprintln!("error: cannot register: {status}");
                return Ok(1);
            }
            Err(err) => return Err(err).context("register selection"),
        }
    } else if args.draft {
        let confirmation = state
            .save_draft_with(&mut sink)
            .context("save draft")?;
        println!("{confirmation}");
    }
    Ok(0)
}

pub fn run_session(options: &StateOptions) -> Result<()> {
    let mut state = build_state(options)?;
    let mut sink = TracingSink;
    println!("{}", course_table(state.courses()));
    println!("Type `help` for commands, `quit` to leave.");
    let stdin = io::stdin();
    let outcome = Session::new(&mut state, &mut sink)
        .run(stdin.lock(), io::stdout())
        .context("session i/o")?;
    tracing::info!(
        commands = outcome.commands,
        registrations = outcome.registrations,
        drafts = outcome.drafts,
        "session ended"
    );
    print_plan(&state);
    Ok(())
}

fn print_plan(state: &RegistrationState) {
    let selected: Vec<_> = state.selected_courses().collect();
    if selected.is_empty() {
        println!("No courses selected.");
    } else {
        println!("{}", course_table(selected));
    }
    println!("{}", summary_table(state));
}
