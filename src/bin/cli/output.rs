//! Display helpers for the namestyle CLI.

use owo_colors::OwoColorize;

use namestyle_rs::NamingStyle;

/// One compliant identifier.
pub fn print_compliant(name: &str) {
    println!("{} {}", "✓".green().bold(), name);
}

/// One violating identifier, with the checker's reasons indented below it.
pub fn print_violation(name: &str, reason: &str) {
    println!("{} {}", "✗".red().bold(), name.bold());
    for line in reason.lines() {
        println!("    {}", line.yellow());
    }
}

/// Closing line for a check run.
pub fn print_check_summary(total: usize, violations: usize, style: &NamingStyle) {
    println!();
    if violations == 0 {
        println!(
            "{}",
            format!("✅ All {total} identifiers comply with {}", rule_label(style))
                .bright_green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ {violations}/{total} identifiers violate {}",
                rule_label(style)
            )
            .red()
            .bold()
        );
    }
}

/// Replacement candidates shown under a violation when `--fix` is set.
pub fn print_fix_hint(candidates: &[String]) {
    println!("    suggested: {}", candidates.join(", ").green());
}

/// One identifier with its proposed replacements.
pub fn print_fixes(name: &str, candidates: &[String]) {
    if candidates.len() == 1 && candidates[0] == name {
        println!("{} {}", name.bold(), "(already compliant)".dimmed());
    } else {
        println!(
            "{} {} {}",
            name.bold(),
            "->".dimmed(),
            candidates.join(", ").green()
        );
    }
}

/// One identifier with its words.
pub fn print_segments(name: &str, words: &[&str]) {
    if words.is_empty() {
        println!("{} {}", name.bold(), "(no words)".dimmed());
    } else {
        println!("{} {} {}", name.bold(), "->".dimmed(), words.join(" "));
    }
}

/// Field-by-field breakdown of a rule.
pub fn describe_rule(style: &NamingStyle) {
    println!(
        "   Name:       {}",
        style.name.as_deref().unwrap_or("(unlabeled)")
    );
    println!("   ID:         {}", style.id);
    println!("   Prefix:     {:?}", style.prefix);
    println!("   Suffix:     {:?}", style.suffix);
    println!("   Separator:  {:?}", style.word_separator);
    println!("   Scheme:     {}", style.capitalization_scheme);
}

fn rule_label(style: &NamingStyle) -> String {
    match &style.name {
        Some(name) => format!("rule '{name}'"),
        None => "the naming rule".to_string(),
    }
}
