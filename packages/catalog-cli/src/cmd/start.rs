//! Interactive guided flow

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Select};
use resource_catalog::pipeline::category_label;
use resource_catalog::{
    feed_for, BackOutcome, CatalogView, FlowLanguage, FlowOutcome, GuidedFlow, QuizStep,
    ResourceFeed, Role,
};
use tracing::warn;

use crate::cmd::{open_session, session_store};
use crate::config::Config;
use crate::render::print_render;

const SKIP_LABEL: &str = "No preference";
const BACK_LABEL: &str = "← Back";

/// One selectable answer: the value passed to the flow and its label.
#[derive(Clone)]
struct Choice {
    value: Option<String>,
    label: String,
}

enum Pick {
    Answer(String),
    Skip,
    Back,
}

/// Ask the three questions, then show the scoped catalog.
pub async fn run(config: &Config) -> Result<()> {
    let term = Term::stdout();
    let categories = category_choices(config).await;
    let mut flow = GuidedFlow::new(session_store(config), config.catalog.session_key.clone());

    loop {
        let step = flow.step();
        print_progress(step, flow.progress_percent());

        let outcome = match prompt(&term, step, &categories)? {
            Pick::Back => {
                if flow.back() == BackOutcome::AtStart {
                    println!("{}", "Leaving the guided flow".dimmed());
                    return Ok(());
                }
                continue;
            }
            Pick::Skip => flow.skip()?,
            Pick::Answer(value) => flow.answer(&value)?,
        };

        if let FlowOutcome::Completed(_) = outcome {
            break;
        }
    }

    println!("{}", "Answers saved".green().bold());

    let mut session = open_session(config).await?;
    let render = session.select("all");
    print_render(&render, session.view().topic_labels());
    Ok(())
}

fn print_progress(step: QuizStep, percent: f32) {
    let filled = (percent / 10.0).round() as usize;
    println!();
    println!(
        "{} {}{} {:.0}%",
        format!("Step {} of {}", step.number(), QuizStep::TOTAL).bold(),
        "█".repeat(filled).cyan(),
        "░".repeat(10 - filled.min(10)).dimmed(),
        percent
    );
}

fn prompt(term: &Term, step: QuizStep, categories: &[Choice]) -> Result<Pick> {
    let mut choices: Vec<Choice> = match step {
        QuizStep::Role => Role::variants()
            .iter()
            .map(|role| Choice {
                value: Some(role.tag().to_string()),
                label: role.label().to_string(),
            })
            .collect(),
        QuizStep::Language => FlowLanguage::variants()
            .iter()
            .map(|lang| Choice {
                value: Some(lang.tag().to_string()),
                label: lang.choice_label().to_string(),
            })
            .collect(),
        QuizStep::Category => categories.to_vec(),
    };
    choices.push(Choice {
        value: None,
        label: SKIP_LABEL.to_string(),
    });

    let mut labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
    labels.push(BACK_LABEL);

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(step.prompt())
        .items(&labels)
        .default(0)
        .interact_on(term)?;

    Ok(match choices.get(index) {
        Some(Choice {
            value: Some(value), ..
        }) => Pick::Answer(value.clone()),
        Some(_) => Pick::Skip,
        None => Pick::Back,
    })
}

/// Categories offered in step 3, taken from the full catalog.
async fn category_choices(config: &Config) -> Vec<Choice> {
    let resources = match feed_for(&config.feed).load().await {
        Ok(resources) => resources,
        Err(e) => {
            warn!(error = %e, "Could not load categories for the guided flow");
            Vec::new()
        }
    };

    let view = CatalogView::build(&resources, None, &config.catalog);
    view.catalog()
        .iter()
        .filter(|value| !value.is_all())
        .map(|value| Choice {
            value: Some(value.as_str().to_string()),
            label: category_label(value.as_str()),
        })
        .collect()
}
