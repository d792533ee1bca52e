//! Command execution for the namestyle CLI.

use std::fs;
use std::path::Path;

use anyhow::Context;
use owo_colors::OwoColorize;
use uuid::Uuid;

use namestyle_rs::core::segmenter;
use namestyle_rs::io::serialization::{decode_style, detect_format, encode_style, RuleFormat};
use namestyle_rs::{Capitalization, Compliance, NamingStyle, SegmentMode};

use crate::cli::args::{
    BuildArgs, CheckArgs, FixArgs, InitRuleArgs, InlineRuleArgs, OutputFormat, RuleArgs,
    SegmentArgs, ValidateRuleArgs,
};
use crate::cli::output;

/// Check identifiers against a rule; exits with code 1 when any violate it.
pub fn check_command(args: CheckArgs) -> anyhow::Result<()> {
    let style = resolve_rule(&args.rule)?;

    let mut violations = 0usize;
    let mut records = Vec::with_capacity(args.names.len());
    for name in &args.names {
        let reason = match style.check_name(name) {
            Compliance::Compliant => None,
            Compliance::Violation { reason } => Some(reason),
        };
        if reason.is_some() {
            violations += 1;
        }
        let candidates =
            (args.fix && reason.is_some()).then(|| style.make_compliant(name).into_vec());

        match args.format {
            OutputFormat::Human => {
                match &reason {
                    None => output::print_compliant(name),
                    Some(reason) => output::print_violation(name, reason),
                }
                if let Some(candidates) = &candidates {
                    output::print_fix_hint(candidates);
                }
            }
            OutputFormat::Json => records.push(serde_json::json!({
                "name": name,
                "compliant": reason.is_none(),
                "reason": reason,
                "candidates": candidates,
            })),
        }
    }

    match args.format {
        OutputFormat::Human => output::print_check_summary(args.names.len(), violations, &style),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }

    if violations > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Propose compliant replacements for each identifier.
pub fn fix_command(args: FixArgs) -> anyhow::Result<()> {
    let style = resolve_rule(&args.rule)?;
    for name in &args.names {
        let candidates = style.make_compliant(name);
        output::print_fixes(name, &candidates);
    }
    Ok(())
}

/// Build one identifier from the given words and print it bare, so the
/// output can feed straight into scripts.
pub fn build_command(args: BuildArgs) -> anyhow::Result<()> {
    let style = resolve_rule(&args.rule)?;
    println!("{}", style.create_name(&args.words));
    Ok(())
}

/// Split each identifier into its words.
pub fn segment_command(args: SegmentArgs) -> anyhow::Result<()> {
    let mode = if args.characters {
        SegmentMode::Character
    } else {
        SegmentMode::Word
    };

    for name in &args.names {
        let words: Vec<&str> = segmenter::segment(name, mode)
            .map(|span| span.slice_of(name))
            .collect();
        output::print_segments(name, &words);
    }
    Ok(())
}

/// Print a default naming rule in YAML format.
pub fn print_default_rule() -> anyhow::Result<()> {
    println!("{}", "# Default naming rule".dimmed());
    println!("{}", "# Save this to a file and customize as needed".dimmed());
    println!(
        "{}",
        "# Usage: namestyle check --rule your-rule.yml <names>".dimmed()
    );
    println!();

    let rule = NamingStyle::new(Uuid::new_v4())
        .with_name("New naming rule")
        .with_capitalization(Capitalization::PascalCase);
    print!("{}", encode_style(&rule, RuleFormat::Yaml)?);

    Ok(())
}

/// Initialize a rule file with defaults.
pub fn init_rule(args: InitRuleArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Rule file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    let format = rule_file_format(&args.output).unwrap_or(RuleFormat::Yaml);
    let mut style = inline_style(&args.rule);
    if let Some(name) = args.name {
        style = style.with_name(name);
    }

    let content = encode_style(&style, format)?;
    fs::write(&args.output, content)
        .with_context(|| format!("Failed to write rule file: {}", args.output.display()))?;

    println!(
        "{} {}",
        "✅ Naming rule saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Edit the rule file to match your convention");
    println!(
        "   2. Check identifiers with: {}",
        format!("namestyle check --rule {} <names>", args.output.display()).cyan()
    );

    Ok(())
}

/// Validate a serialized rule file.
pub fn validate_rule(args: ValidateRuleArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating naming rule:".bright_blue().bold(),
        args.rule.display().to_string().cyan()
    );
    println!();

    match load_rule_file(&args.rule) {
        Ok(style) => {
            println!("{}", "✅ Naming rule is valid!".bright_green().bold());
            println!();
            output::describe_rule(&style);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Rule validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check the serialization syntax for the file's format");
            println!("   • Verify the ID field holds a well-formed UUID");
            println!("   • Use one of the five capitalization scheme names");
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'namestyle print-default-rule' to see a valid rule".dimmed()
            );
            Err(anyhow::anyhow!("Rule validation failed: {}", e))
        }
    }
}

/// Load the rule from `--rule FILE` when given, otherwise assemble one from
/// the inline flags under a fresh ID.
fn resolve_rule(args: &RuleArgs) -> anyhow::Result<NamingStyle> {
    match &args.rule {
        Some(path) => load_rule_file(path),
        None => Ok(inline_style(&args.inline)),
    }
}

fn inline_style(args: &InlineRuleArgs) -> NamingStyle {
    NamingStyle::new(Uuid::new_v4())
        .with_prefix(args.prefix.clone())
        .with_suffix(args.suffix.clone())
        .with_word_separator(args.separator.clone())
        .with_capitalization(args.scheme)
}

fn load_rule_file(path: &Path) -> anyhow::Result<NamingStyle> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule file: {}", path.display()))?;
    let format = rule_file_format(path).unwrap_or_else(|| detect_format(&content));
    let style = decode_style(&content, format)
        .with_context(|| format!("Invalid naming rule in {}", path.display()))?;
    Ok(style)
}

fn rule_file_format(path: &Path) -> Option<RuleFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(RuleFormat::from_extension)
}
