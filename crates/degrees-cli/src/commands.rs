//! CLI command implementations.

use colored::Colorize;
use degrees_core::read_dataset;
use degrees_graph::{EntityStore, StoreBuilder};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Loads a dataset directory into an entity store.
fn load_store(data: &Path) -> Result<EntityStore> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Loading dataset...");

    let start = Instant::now();
    let dataset = read_dataset(data)?;

    let mut builder = StoreBuilder::new();
    builder.add_dataset(dataset);
    let dangling = builder.dangling_credits();
    let store = builder.build();

    spinner.finish_and_clear();

    println!(
        "{} Loaded {} people, {} works ({} credits) in {}ms",
        "✓".green(),
        store.person_count().to_string().cyan(),
        store.work_count().to_string().cyan(),
        store.membership_count().to_string().cyan(),
        start.elapsed().as_millis()
    );

    if dangling > 0 {
        println!(
            "{} {} credits referenced unknown ids and were skipped",
            "⚠".yellow(),
            dangling
        );
    }

    Ok(store)
}

/// Resolves a display name to a unique person id.
///
/// An ambiguous name lists every candidate and reads the intended id
/// from stdin.
fn resolve_person(store: &EntityStore, name: &str) -> Result<String> {
    let mut matches = store.find_by_name(name);
    matches.sort_by(|a, b| a.id.cmp(&b.id));

    match matches.len() {
        0 => Err(format!("no person named \"{}\"", name).into()),
        1 => Ok(matches[0].id.clone()),
        _ => {
            println!("Which \"{}\"?", name);
            for person in &matches {
                let birth = person
                    .birth
                    .map(|year| year.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                println!(
                    "  {} {} {}",
                    person.id.to_string().cyan(),
                    person.name,
                    format!("(born {})", birth).dimmed()
                );
            }

            print!("Intended person id: ");
            io::stdout().flush()?;
            let mut answer = String::new();
            io::stdin().lock().read_line(&mut answer)?;
            let answer = answer.trim();

            if matches.iter().any(|person| person.id == answer) {
                Ok(answer.to_string())
            } else {
                Err(format!("\"{}\" is not one of the listed ids", answer).into())
            }
        }
    }
}

fn person_name(store: &EntityStore, id: &str) -> String {
    store
        .person(id)
        .map(|person| person.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn work_title(store: &EntityStore, id: &str) -> String {
    store
        .work(id)
        .map(|work| work.title.clone())
        .unwrap_or_else(|| id.to_string())
}

/// Traces the shortest connection between two people.
pub fn trace(source: &str, target: &str, data: &Path, json: bool) -> Result<()> {
    let store = load_store(data)?;

    let source_id = resolve_person(&store, source)?;
    let target_id = resolve_person(&store, target)?;
    debug!("tracing {} -> {}", source_id, target_id);

    let start = Instant::now();
    let path = store.shortest_path(&source_id, &target_id);
    debug!("search finished in {}ms", start.elapsed().as_millis());

    let Some(steps) = path else {
        if json {
            let result = serde_json::json!({
                "connected": false,
                "source": source_id,
                "target": target_id,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("Not connected.");
        }
        return Ok(());
    };

    if json {
        let step_values: Vec<_> = steps
            .iter()
            .map(|step| {
                serde_json::json!({
                    "work": step.work,
                    "title": work_title(&store, &step.work),
                    "person": step.person,
                    "name": person_name(&store, &step.person),
                })
            })
            .collect();

        let result = serde_json::json!({
            "connected": true,
            "source": source_id,
            "target": target_id,
            "degrees": steps.len(),
            "steps": step_values,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} degrees of separation.",
        steps.len().to_string().cyan()
    );

    let mut previous = source_id;
    for (i, step) in steps.iter().enumerate() {
        println!(
            "  {}: {} and {} appeared together in {}",
            i + 1,
            person_name(&store, &previous),
            person_name(&store, &step.person),
            work_title(&store, &step.work).yellow()
        );
        previous = step.person.clone();
    }

    Ok(())
}

/// Lists a person's direct co-participants.
pub fn neighbors(name: &str, data: &Path, limit: usize, json: bool) -> Result<()> {
    let store = load_store(data)?;
    let person_id = resolve_person(&store, name)?;

    // Already ordered (work id, then person id) for deterministic output
    let pairs: Vec<_> = store.neighbors_of(&person_id).into_iter().collect();
    let total = pairs.len();

    if json {
        let entries: Vec<_> = pairs
            .iter()
            .take(limit)
            .map(|(work, person)| {
                serde_json::json!({
                    "work": work,
                    "title": work_title(&store, work),
                    "person": person,
                    "name": person_name(&store, person),
                })
            })
            .collect();

        let result = serde_json::json!({
            "person": person_id,
            "total": total,
            "neighbors": entries,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if pairs.is_empty() {
        println!("No co-credits found for {}", person_name(&store, &person_id));
        return Ok(());
    }

    println!(
        "{} has {} co-credits:\n",
        person_name(&store, &person_id),
        total.to_string().cyan()
    );

    for (work, person) in pairs.iter().take(limit) {
        println!(
            "  {} {}",
            person_name(&store, person).cyan(),
            format!("in {}", work_title(&store, work)).dimmed()
        );
    }
    if total > limit {
        println!("  ... and {} more", total - limit);
    }

    Ok(())
}

/// Shows dataset statistics.
pub fn stats(data: &Path) -> Result<()> {
    let store = load_store(data)?;
    let stats = store.stats();

    println!();
    println!("  People:      {}", stats.people.to_string().cyan());
    println!("  Works:       {}", stats.works.to_string().cyan());
    println!("  Memberships: {}", stats.memberships.to_string().cyan());

    Ok(())
}
