//! Terminal Rendering
//!
//! Draws the filtered idea list. Indices shown are positions in the full
//! collection, which is what the mutating commands take.

use idea_planner_lib::Idea;

pub fn render_ideas(ideas: &[(usize, &Idea)]) -> String {
    if ideas.is_empty() {
        return "No ideas found.".to_string();
    }

    let blocks: Vec<String> = ideas.iter().map(|(index, idea)| render_idea(*index, idea)).collect();
    blocks.join("\n\n")
}

fn render_idea(index: usize, idea: &Idea) -> String {
    let mut lines = vec![
        format!("#{} {} [{}]", index, idea.title, idea.display_category()),
        format!("   {}", idea.description),
    ];

    if !idea.tags.is_empty() {
        let tags: Vec<String> = idea.tags.iter().map(|t| format!("#{}", t)).collect();
        lines.push(format!("   tags: {}", tags.join(" ")));
    }

    if idea.scenes.is_empty() {
        lines.push("   scenes: none".to_string());
    } else {
        lines.push(format!("   scenes ({}/{} filmed):", idea.filmed_count(), idea.scenes.len()));
        for (i, scene) in idea.scenes.iter().enumerate() {
            let mark = if scene.filmed { "x" } else { " " };
            lines.push(format!("     {}. [{}] {}", i, mark, scene.label()));
        }
    }

    lines.join("\n")
}

pub fn render_categories(categories: &[&str]) -> String {
    if categories.is_empty() {
        "No categories yet.".to_string()
    } else {
        categories.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idea_planner_lib::Scene;

    #[test]
    fn test_empty_list() {
        assert_eq!(render_ideas(&[]), "No ideas found.");
    }

    #[test]
    fn test_idea_block() {
        let mut idea = Idea::new(
            "Vlog".to_string(),
            "Daily life".to_string(),
            vec!["life".to_string()],
            String::new(),
        );
        idea.scenes.push(Scene::new("Intro shot".to_string(), "Kitchen".to_string()));
        idea.scenes.push(Scene {
            description: "Outro".to_string(),
            location: String::new(),
            filmed: true,
        });

        let out = render_ideas(&[(3, &idea)]);
        let expected = "#3 Vlog [Uncategorized]\n   Daily life\n   tags: #life\n   scenes (1/2 filmed):\n     0. [ ] Intro shot (Kitchen)\n     1. [x] Outro";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_categories() {
        assert_eq!(render_categories(&[]), "No categories yet.");
        assert_eq!(render_categories(&["Vlog", "Tutorial"]), "Vlog\nTutorial");
    }
}
