//! The `wellcheck init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("catalogs")?;

    let assessments = std::path::Path::new("catalogs/assessments.toml");
    if assessments.exists() {
        println!("catalogs/assessments.toml already exists, skipping.");
    } else {
        std::fs::write(assessments, SAMPLE_ASSESSMENTS)?;
        println!("Created catalogs/assessments.toml");
    }

    let quizzes = std::path::Path::new("catalogs/quizzes.toml");
    if quizzes.exists() {
        println!("catalogs/quizzes.toml already exists, skipping.");
    } else {
        std::fs::write(quizzes, SAMPLE_QUIZZES)?;
        println!("Created catalogs/quizzes.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit the catalogs with your own categories and questions");
    println!("  2. Run: wellcheck validate --catalog catalogs");
    println!("  3. Run: wellcheck list --catalog catalogs/assessments.toml");

    Ok(())
}

const SAMPLE_ASSESSMENTS: &str = r#"kind = "assessment"

[[categories]]
id = "safety"
title = "Personal Safety"
description = "How prepared you are for everyday safety situations."
badge = { id = "safetyPrepared", title = "Safety Prepared", description = "Completed the safety readiness check", icon = "shield" }
suggestion = { title = "Advanced Safety Planning Workshop", link = "/resources/safety-planning" }

[[categories.entries]]
id = "readiness"
title = "Safety Readiness Check"
reflective_tip = "Preparedness is a habit, not a one-time setup."

[[categories.entries.bands]]
min = 0
max = 2
level = "High"
description = "Several gaps in your everyday safety habits."
color = "red"
recommendations = ["Save your local helpline number today"]

[[categories.entries.bands]]
min = 3
max = 4
level = "Moderate"
description = "Some good habits, with room for consistency."
color = "amber"

[[categories.entries.bands]]
min = 5
max = 6
level = "Low"
description = "You are well prepared."
color = "green"

[[categories.entries.questions]]
id = "route-sharing"
prompt = "Do you let someone you trust know your route when travelling alone?"
options = [
    { label = "Never", score = 0 },
    { label = "Sometimes", score = 2 },
    { label = "Always", score = 3 },
]

[[categories.entries.questions]]
id = "emergency-contacts"
prompt = "Do you keep emergency contacts easy to reach?"
options = [
    { label = "Never", score = 0 },
    { label = "Sometimes", score = 2 },
    { label = "Always", score = 3 },
]
"#;

const SAMPLE_QUIZZES: &str = r#"kind = "quiz"

[[categories]]
id = "safety"
title = "Safety Knowledge"
description = "Practical safety know-how."
badge = { id = "safetyScholar", title = "Safety Scholar", description = "Completed all safety quizzes", icon = "shield" }
suggestion = { title = "Everyday Safety Basics", link = "/resources/safety-basics" }

[[categories.entries]]
id = "basics"
title = "Safety Basics"
reflective_tip = "Go back over the questions you missed."

[[categories.entries.questions]]
id = "followed"
prompt = "You feel you are being followed on foot. What is the best first move?"
correct_index = 0
options = [
    { label = "Head for the nearest busy, well-lit place" },
    { label = "Speed up and take a shortcut home" },
    { label = "Stop and confront the person" },
]

[[categories.entries.questions]]
id = "helpline-number"
prompt = "Which number reaches the national women's helpline?"
correct_index = 1
options = [
    { label = "100" },
    { label = "1091" },
    { label = "108" },
]
"#;
