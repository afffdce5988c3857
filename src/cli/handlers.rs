// src/cli/handlers.rs
use console::{style, StyledObject};

use crate::analyzer::{self, PasswordAnalysis, Strength};
use crate::cli::commands::GenerateArgs;
use crate::error::Result;
use crate::generators::PasswordGenerator;

const NO_ANALYSIS: &str = "Enter a password to see its strength analysis.";

pub fn handle_analyze(password: &str, json: bool) -> Result<()> {
    if password.is_empty() {
        println!("{}", NO_ANALYSIS);
        return Ok(());
    }

    let analysis = analyzer::analyze(password);
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", render_report(&analysis));
    }
    Ok(())
}

pub fn handle_generate(args: GenerateArgs, default_length: usize, json: bool) -> Result<()> {
    let options = args.into_options(default_length);
    let generated = PasswordGenerator::new().generate_and_analyze(&options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    } else {
        println!("🔑 {}", style(&generated.password).bold());
        println!("{}", render_report(&generated.analysis));
    }
    Ok(())
}

fn paint(strength: Strength, text: String) -> StyledObject<String> {
    let styled = style(text).bold();
    match strength {
        Strength::VeryWeak => styled.red(),
        Strength::Weak => styled.color256(208),
        Strength::Fair => styled.yellow(),
        Strength::Good => styled.blue(),
        Strength::Strong => styled.green(),
        Strength::VeryStrong => styled.cyan(),
    }
}

fn check(ok: bool) -> &'static str {
    if ok { "✅" } else { "❌" }
}

/// Human-readable multi-line report for a terminal.
pub fn render_report(analysis: &PasswordAnalysis) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Strength: {} ({}/{})",
        paint(analysis.strength, analysis.strength.to_string()),
        analysis.score,
        analyzer::MAX_SCORE
    ));
    lines.push(format!("Entropy: {} bits", analysis.entropy));
    lines.push(format!("Time to crack: {}", analysis.time_to_crack));

    let req = &analysis.requirements;
    lines.push("Requirements:".to_string());
    for (ok, label) in [
        (req.length, "At least 8 characters"),
        (req.uppercase, "Uppercase letters"),
        (req.lowercase, "Lowercase letters"),
        (req.numbers, "Numbers"),
        (req.symbols, "Special characters"),
        (req.no_common, "Not a common password"),
        (req.no_personal, "No personal information"),
    ] {
        lines.push(format!("  {} {}", check(ok), label));
    }

    if !analysis.feedback.is_empty() {
        lines.push("Suggestions:".to_string());
        for message in &analysis.feedback {
            lines.push(format!("  • {}", message));
        }
    }

    lines.join("\n")
}
