//! Non-interactive guided answers

use anyhow::{bail, Context, Result};
use colored::Colorize;
use resource_catalog::{FlowAnswers, FlowOutcome, GuidedFlow, SessionStore};

use crate::cmd::session_store;
use crate::config::Config;

/// Record answers for all three steps, skipping the ones not given.
pub fn run(
    config: &Config,
    role: Option<&str>,
    language: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    let store = session_store(config);
    let answers = record(&store, &config.catalog.session_key, [role, language, category])?;

    println!("{}", "Saved guided answers".green());
    println!("  role:     {}", describe(answers.role.map(|r| r.label())));
    println!(
        "  language: {}",
        describe(answers.language.map(|l| l.choice_label()))
    );
    println!("  category: {}", describe(answers.category()));
    Ok(())
}

/// Drive the guided flow through every step.
pub fn record<S: SessionStore>(
    store: S,
    session_key: &str,
    values: [Option<&str>; 3],
) -> Result<FlowAnswers> {
    let mut flow = GuidedFlow::new(store, session_key);

    for value in values {
        let outcome = match value {
            Some(value) => flow
                .answer(value)
                .with_context(|| format!("Invalid answer for step {}", flow.step().number()))?,
            None => flow.skip()?,
        };
        if let FlowOutcome::Completed(answers) = outcome {
            return Ok(answers);
        }
    }

    bail!("Guided flow did not complete")
}

fn describe(value: Option<&str>) -> &str {
    value.unwrap_or("(any)")
}
