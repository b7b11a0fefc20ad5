//! Presentation of a catalog [`Render`] as terminal text or a static HTML page.

use anyhow::{Context, Result};
use colored::Colorize;
use handlebars::Handlebars;
use resource_catalog::pipeline::{category_label, NO_RESULTS_HINT, NO_RESULTS_TITLE, VIEW_ALL_LABEL};
use resource_catalog::{NormalizedResource, Render, TopicLabels};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Print the view to stdout.
pub fn print_render(render: &Render, topics: &TopicLabels) {
    println!();
    println!("{}", render.summary.title.bold());
    println!("{}", render.summary.subtitle.dimmed());

    if let Some(filters) = &render.filters {
        println!();
        println!("{}", filters.heading.bright_cyan());
        let buttons: Vec<String> = filters
            .buttons
            .iter()
            .map(|b| {
                if b.active {
                    format!("[{}]", b.label).green().bold().to_string()
                } else {
                    format!(" {} ", b.label)
                }
            })
            .collect();
        println!("  {}", buttons.join(" "));
    }

    println!();
    if render.is_empty() {
        println!("{}", NO_RESULTS_TITLE.yellow().bold());
        println!("{}", NO_RESULTS_HINT);
        println!(
            "{}",
            format!("{}: catalog show --recover", VIEW_ALL_LABEL).dimmed()
        );
        return;
    }

    for resource in &render.resources {
        print_card(resource, topics);
    }
}

fn print_card(resource: &NormalizedResource, topics: &TopicLabels) {
    println!("{}", resource.title.bright_blue().bold());

    let meta: Vec<&str> = [resource.source.as_str(), resource.kind.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !meta.is_empty() {
        println!("  {}", meta.join(" • ").dimmed());
    }
    if !resource.url.is_empty() {
        println!("  {}", resource.url.underline());
    }
    if !resource.description.is_empty() {
        println!("  {}", resource.description);
    }
    for line in category_lines(resource, topics) {
        println!("  {}", line.cyan());
    }
    println!();
}

/// "Category: topic, topic" lines for a card.
fn category_lines(resource: &NormalizedResource, topics: &TopicLabels) -> Vec<String> {
    resource
        .categories
        .iter()
        .map(|category| {
            let labels: Vec<String> = resource
                .topics_in(category)
                .map(|topic| topics.label(topic))
                .collect();
            if labels.is_empty() {
                category_label(category)
            } else {
                format!("{}: {}", category_label(category), labels.join(", "))
            }
        })
        .collect()
}

const PAGE_TEMPLATE: &str = "catalog_page";

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    subtitle: &'a str,
    filters: Option<FiltersContext<'a>>,
    empty: bool,
    no_results_title: &'static str,
    no_results_hint: &'static str,
    view_all_label: &'static str,
    cards: Vec<CardContext<'a>>,
}

#[derive(Serialize)]
struct FiltersContext<'a> {
    heading: &'a str,
    buttons: Vec<ButtonContext<'a>>,
}

#[derive(Serialize)]
struct ButtonContext<'a> {
    value: &'a str,
    label: &'a str,
    active: bool,
}

#[derive(Serialize)]
struct CardContext<'a> {
    title: &'a str,
    url: &'a str,
    source: &'a str,
    kind: &'a str,
    has_meta: bool,
    description: &'a str,
    categories: Vec<String>,
}

impl<'a> CardContext<'a> {
    fn new(resource: &'a NormalizedResource, topics: &TopicLabels) -> Self {
        Self {
            title: &resource.title,
            url: &resource.url,
            source: &resource.source,
            kind: &resource.kind,
            has_meta: !resource.source.is_empty() || !resource.kind.is_empty(),
            description: &resource.description,
            categories: category_lines(resource, topics),
        }
    }
}

/// Static HTML page rendering. Values are escaped by the template engine.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(PAGE_TEMPLATE, include_str!("../templates/catalog.html.hbs"))
            .context("Failed to register the catalog page template")?;
        Ok(Self { handlebars })
    }

    /// Build a standalone HTML page for the view.
    pub fn page_html(&self, render: &Render, topics: &TopicLabels) -> Result<String> {
        let filters = render.filters.as_ref().map(|filters| FiltersContext {
            heading: &filters.heading,
            buttons: filters
                .buttons
                .iter()
                .map(|b| ButtonContext {
                    value: b.value.as_str(),
                    label: &b.label,
                    active: b.active,
                })
                .collect(),
        });

        let context = PageContext {
            title: &render.summary.title,
            subtitle: &render.summary.subtitle,
            filters,
            empty: render.is_empty(),
            no_results_title: NO_RESULTS_TITLE,
            no_results_hint: NO_RESULTS_HINT,
            view_all_label: VIEW_ALL_LABEL,
            cards: render
                .resources
                .iter()
                .map(|resource| CardContext::new(resource, topics))
                .collect(),
        };

        self.handlebars
            .render(PAGE_TEMPLATE, &context)
            .context("Failed to render the catalog page")
    }
}

/// Write the page. A missing output directory skips the write.
///
/// Returns whether the file was written.
pub fn write_html(path: &Path, html: &str) -> Result<bool> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = parent {
        if !dir.is_dir() {
            debug!(path = %path.display(), "Output directory missing, skipping render");
            return Ok(false);
        }
    }

    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = html.len(), "Wrote catalog page");
    Ok(true)
}
