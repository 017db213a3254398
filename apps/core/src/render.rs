//! Plain-text rendering of chat replies for the terminal front end.

use std::fmt::Write;

use crate::brain::Category;
use crate::models::Panel;
use crate::session::{QuickAction, TurnOutcome};

const ABOUT_ME: &str = "\
Hey, I'm Ahib 👋

Ahib Afnan Siam
AI Software Engineer · Bangladesh

AI Software Engineer at PRAN-RFL Group, building natural-language-to-SQL
assistants and schema-aware RAG pipelines over enterprise data. BSc in
Computer Science and Engineering from BRAC University. Top 5 worldwide in
Mission OZ 2022 and winner at Mind Sparks 2023.

Tags: AI, Machine Learning, Full-Stack, Data Analytics, Problem Solver";

/// Renders the reply of a resolved turn.
pub fn outcome(outcome: &TurnOutcome) -> String {
    match outcome {
        TurnOutcome::Panel { panel: p } => panel(p),
        TurnOutcome::PanelUnavailable { category, .. } => format!(
            "The {} panel could not be loaded. Type /retry to reload the portfolio data.",
            category
        ),
        TurnOutcome::Text { text } => text.clone(),
    }
}

pub fn panel(panel: &Panel) -> String {
    let mut out = String::new();
    match panel {
        Panel::AboutMe => out.push_str(ABOUT_ME),
        Panel::Experience { experiences } => {
            heading(&mut out, "Work Experience", "Here's a summary of my professional journey");
            for exp in experiences {
                let _ = writeln!(out, "\n{} · {} ({})", exp.title, exp.company_name, exp.date);
                for point in &exp.points {
                    let _ = writeln!(out, "  - {}", point);
                }
            }
        }
        Panel::Skills { categories } => {
            heading(&mut out, "Technical Skills", "Tools and technologies I work with");
            for category in categories {
                let _ = writeln!(out, "\n{}: {}", category.title, category.skills.join(", "));
            }
        }
        Panel::Projects { description, projects } => {
            heading(&mut out, "Projects", description);
            for project in projects {
                let badge = project.category.as_deref().unwrap_or("Project");
                let _ = writeln!(out, "\n[{}] {}", badge, project.name);
                let _ = writeln!(out, "  {}", project.description);
                let _ = writeln!(out, "  {}", project.link);
            }
        }
        Panel::Contact { channels } => {
            heading(&mut out, "Contact", "Feel free to reach out");
            for channel in channels {
                let _ = writeln!(out, "{}: {}", channel.label, channel.value);
            }
        }
        Panel::Research { works, blogs } => {
            heading(&mut out, "Research Work", "");
            for work in works {
                let _ = writeln!(out, "\n{}\n  {}", work.title, work.description);
            }
            let _ = writeln!(out, "\nBlogs");
            for blog in blogs {
                let _ = writeln!(out, "\n{}\n  {}\n  {}", blog.title, blog.description, blog.link);
            }
        }
    }
    out.trim_end().to_string()
}

/// Numbered list of quick actions, as shown under the input prompt.
pub fn quick_actions(actions: &[QuickAction]) -> String {
    actions
        .iter()
        .enumerate()
        .map(|(i, action)| format!("[{}] {}", i + 1, action.title()))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Label shown while a turn is being resolved.
pub fn thinking(category: Category) -> &'static str {
    if category.is_panel() {
        "…"
    } else {
        "Thinking…"
    }
}

fn heading(out: &mut String, title: &str, subtitle: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    if !subtitle.is_empty() {
        let _ = writeln!(out, "{}", subtitle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactInfo, Project};

    #[test]
    fn test_project_badge_defaults() {
        let text = panel(&Panel::Projects {
            description: "Things I built".into(),
            projects: vec![Project {
                name: "Drishty".into(),
                description: "Face recognition attendance".into(),
                link: "https://example.com/drishty".into(),
                category: None,
                theme: None,
                icon_url: None,
            }],
        });
        assert!(text.starts_with("Projects\n========\nThings I built"));
        assert!(text.contains("[Project] Drishty"));
    }

    #[test]
    fn test_contact_lines() {
        let text = panel(&Panel::Contact {
            channels: vec![ContactInfo {
                kind: "email".into(),
                label: "Email".into(),
                value: "ahib@example.com".into(),
                icon: Some("email".into()),
            }],
        });
        assert!(text.ends_with("Email: ahib@example.com"));
    }

    #[test]
    fn test_quick_action_row() {
        let row = quick_actions(&QuickAction::ALL[..2]);
        assert_eq!(row, "[1] Me  [2] Experience");
    }
}
