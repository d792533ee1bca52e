//! CLI argument structures for the namestyle binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use namestyle_rs::Capitalization;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Naming-convention engine for identifiers
#[derive(Parser)]
#[command(name = "namestyle")]
#[command(version = VERSION)]
#[command(about = "Check, fix, and build identifiers against naming rules")]
#[command(long_about = "
Check identifiers against a declarative naming rule, propose compliant
replacements for the ones that miss it, and build new identifiers from
ordered word lists.

Common Usage:

  # Check names against an inline rule
  namestyle check --prefix m_ --scheme PascalCase m_FooBar fooBar

  # Propose fixes using a rule file
  namestyle fix --rule fields.xml m_badName

  # Build an identifier from words
  namestyle build --separator _ --scheme AllUpper max retry count

  # Split an identifier into its words
  namestyle segment XMLHttpRequest

  # Create a starter rule file
  namestyle init-rule --output fields.yml --prefix m_
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check identifiers against a naming rule
    Check(CheckArgs),

    /// Propose compliant replacements for identifiers
    Fix(FixArgs),

    /// Build an identifier from ordered words
    Build(BuildArgs),

    /// Split identifiers into their words
    Segment(SegmentArgs),

    /// Print a default naming rule in YAML format
    #[command(name = "print-default-rule")]
    PrintDefaultRule,

    /// Initialize a rule file with defaults
    #[command(name = "init-rule")]
    InitRule(InitRuleArgs),

    /// Validate a serialized naming rule file
    #[command(name = "validate-rule")]
    ValidateRule(ValidateRuleArgs),
}

/// Inline rule fields shared by every command that can take one.
#[derive(Args)]
pub struct InlineRuleArgs {
    /// Prefix the rule requires
    #[arg(long, default_value = "", value_name = "PREFIX")]
    pub prefix: String,

    /// Suffix the rule requires
    #[arg(long, default_value = "", value_name = "SUFFIX")]
    pub suffix: String,

    /// Separator the rule places between words
    #[arg(long, default_value = "", value_name = "SEP")]
    pub separator: String,

    /// Capitalization scheme: PascalCase, CamelCase, FirstUpper, AllUpper, or AllLower
    #[arg(long, default_value = "PascalCase", value_name = "SCHEME")]
    pub scheme: Capitalization,
}

/// Rule selection: a serialized rule file, or inline rule flags.
#[derive(Args)]
pub struct RuleArgs {
    /// Rule file (XML, JSON, or YAML); overrides the inline rule flags
    #[arg(long, value_name = "FILE")]
    pub rule: Option<PathBuf>,

    #[command(flatten)]
    pub inline: InlineRuleArgs,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Identifiers to check
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,

    /// Output format for verdicts
    #[arg(short = 'f', long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Also print fix candidates for names that miss the rule
    #[arg(long)]
    pub fix: bool,

    #[command(flatten)]
    pub rule: RuleArgs,
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Per-name verdict lines
    Human,
    /// One JSON record per name
    Json,
}

#[derive(Args)]
pub struct FixArgs {
    /// Identifiers to propose replacements for
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,

    #[command(flatten)]
    pub rule: RuleArgs,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Words to assemble, in order
    #[arg(required = true, value_name = "WORD")]
    pub words: Vec<String>,

    #[command(flatten)]
    pub rule: RuleArgs,
}

#[derive(Args)]
pub struct SegmentArgs {
    /// Identifiers to split into words
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,

    /// Emit single-character uppercase runs instead of grouped acronyms
    #[arg(long)]
    pub characters: bool,
}

#[derive(Args)]
pub struct InitRuleArgs {
    /// Output rule file name (extension selects XML, JSON, or YAML)
    #[arg(short, long, default_value = "namestyle.yml")]
    pub output: PathBuf,

    /// Overwrite an existing rule file
    #[arg(short, long)]
    pub force: bool,

    /// Human-readable label for the rule
    #[arg(long, value_name = "LABEL")]
    pub name: Option<String>,

    #[command(flatten)]
    pub rule: InlineRuleArgs,
}

#[derive(Args)]
pub struct ValidateRuleArgs {
    /// Path to the rule file to validate
    #[arg(short, long, required = true)]
    pub rule: PathBuf,
}
