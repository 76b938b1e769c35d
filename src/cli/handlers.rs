// src/cli/handlers.rs
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::cli::args::Commands;
use crate::config::CloudConfig;
use crate::engine::CourseEngine;
use crate::exit::CloudExit;
use crate::graph::Resolved;
use crate::ids;
use crate::layout::LayoutNode;

/// Loads config and dataset into an engine.
///
/// # Errors
/// Returns error if either file exists but cannot be parsed.
pub fn build_engine(data: &Path, config: Option<&Path>) -> Result<CourseEngine> {
    let config = CloudConfig::load(config).context("Failed to load config")?;
    CourseEngine::load(data, config)
        .with_context(|| format!("Failed to load dataset {}", data.display()))
}

/// Runs one command against a built engine.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn dispatch(engine: &CourseEngine, command: &Commands, json: bool) -> Result<CloudExit> {
    match command {
        Commands::Layout { focus } => handle_layout(engine, focus, json),
        Commands::Resolve { id } => handle_resolve(engine, id, json),
        Commands::Suggest { query, max } => {
            let max = max.unwrap_or(engine.config().suggest.max_results);
            handle_suggest(engine, query, max, json)
        }
        Commands::Distances { focus } => handle_distances(engine, focus, json),
        Commands::Members { id } => handle_members(engine, id, json),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Handles the layout command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_layout(engine: &CourseEngine, focus: &str, json: bool) -> Result<CloudExit> {
    let nodes = engine.layout(focus);
    if json {
        print_json(&nodes)?;
    } else {
        print_layout(&nodes);
    }
    // A passthrough focus may still center on a dangling graph id.
    let resolved = engine.resolve(focus).is_course();
    Ok(if resolved { CloudExit::Success } else { CloudExit::Unresolved })
}

fn print_layout(nodes: &[LayoutNode<'_>]) {
    if nodes.is_empty() {
        println!("{}", "(empty layout)".dimmed());
        return;
    }
    let mut ring = None;
    for node in nodes {
        if ring != Some(node.ring) {
            ring = Some(node.ring);
            let label = if node.ring == 0 {
                "focus".to_string()
            } else {
                format!("ring {}", node.ring)
            };
            println!("{}", label.bold());
        }
        let level = node
            .graph_level
            .map_or_else(|| "unreachable".to_string(), |d| format!("{d} hop(s)"));
        println!(
            "  {:<16} ({:>7.1}, {:>7.1})  size {:.2}  sim {:.1}  {}",
            node.id.cyan(),
            node.x,
            node.y,
            node.size,
            node.similarity,
            level.dimmed()
        );
    }
}

/// Handles the resolve command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_resolve(engine: &CourseEngine, id: &str, json: bool) -> Result<CloudExit> {
    let resolved = engine.resolve(id);
    if json {
        print_json(&resolved)?;
    } else {
        match &resolved {
            Resolved::Course(course) => println!("{} {}", "✓".green(), course),
            Resolved::Passthrough(raw) => {
                println!("{} {} (unknown course, passed through)", "?".yellow(), raw);
            }
        }
    }
    Ok(if resolved.is_course() { CloudExit::Success } else { CloudExit::Unresolved })
}

/// Handles the suggest command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_suggest(engine: &CourseEngine, query: &str, max: usize, json: bool) -> Result<CloudExit> {
    let hits = engine.suggest(query, max);
    if json {
        print_json(&hits)?;
    } else {
        for hit in &hits {
            let title = engine
                .lookup(hit)
                .and_then(|r| r.title.as_deref())
                .unwrap_or_default();
            println!("{:<16} {}", hit.cyan(), title.dimmed());
        }
    }
    Ok(if hits.is_empty() { CloudExit::NoMatch } else { CloudExit::Success })
}

/// Handles the distances command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_distances(engine: &CourseEngine, focus: &str, json: bool) -> Result<CloudExit> {
    let map = engine.distances(focus);
    if json {
        print_json(&map)?;
    } else {
        let prefix = engine.catalog().virtual_prefix();
        for (id, hops) in map.sorted() {
            let line = format!("{hops:>3}  {id}");
            if ids::is_virtual(id, prefix) {
                println!("{}", line.dimmed());
            } else {
                println!("{line}");
            }
        }
    }
    Ok(if map.is_empty() { CloudExit::Unresolved } else { CloudExit::Success })
}

/// Handles the members command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_members(engine: &CourseEngine, id: &str, json: bool) -> Result<CloudExit> {
    let members = engine.equivalence_members(id);
    if json {
        print_json(&members)?;
    } else {
        let label = ids::display_label(id, engine.catalog().virtual_prefix());
        println!("{}", label.bold());
        for member in &members {
            println!("  {member}");
        }
    }
    Ok(if members.is_empty() { CloudExit::NoMatch } else { CloudExit::Success })
}
