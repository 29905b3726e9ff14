// SPDX-License-Identifier: MIT
//! Command-line surface. Every command renders to a `String`; `main`
//! prints it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use wb_color::Rgb;
use wb_theme::{
    AnalysisOptions, NamedPalette, PaletteAnalyzer, PaletteTransformer, builtin_names,
    builtin_palette, generate, generate_report, generate_theme_from_formulas,
};
use wb_tokens::{ThemeMode, TokenGroup, TokenInjector, TokenMap, WbConfig};

use crate::error::{CliError, Result};

#[derive(Debug, Parser)]
#[command(
    name = "wb",
    about = "Harmonic color palettes and CSS design tokens for the Website Builder",
    version
)]
pub struct Cli {
    /// TOML config merged over the defaults.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level (overrides WB_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the full design-token set.
    Tokens(TokensArgs),

    /// Print one wave-derived palette as JSON.
    Palette(PaletteArgs),

    /// Analyze a palette's structure around its primary color.
    Analyze(AnalyzeArgs),

    /// Rebuild a palette around a new primary, keeping its relationships.
    Regenerate(RegenerateArgs),

    /// Hue-shift the WordPress preset palette onto a new primary.
    Transform(TransformArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Css,
    Json,
}

#[derive(Debug, Args)]
pub struct TokensArgs {
    /// Primary seed color; defaults to the configured one.
    #[arg(long, value_name = "COLOR")]
    pub primary: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Css)]
    pub format: Format,

    /// Comma-separated token groups (color, text, background, spacing, ...).
    #[arg(long, value_name = "GROUPS", value_parser = parse_groups)]
    pub only: Option<TokenGroup>,

    /// light, dark or auto; defaults to the configured mode.
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<ThemeMode>,
}

#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// `#rrggbb` or `hsl(h, s%, l%)`.
    pub color: String,

    #[arg(long, default_value = "primary")]
    pub role: String,
}

/// A palette from a builtin or from `NAME=HEX` pairs.
#[derive(Debug, Args)]
pub struct PaletteSource {
    #[arg(long, value_name = "NAME", conflicts_with = "colors")]
    pub builtin: Option<String>,

    #[arg(value_name = "NAME=HEX", value_parser = parse_named_color)]
    pub colors: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: PaletteSource,

    /// Markdown report instead of JSON.
    #[arg(long)]
    pub report: bool,

    /// Analyze gray colors as well.
    #[arg(long)]
    pub include_neutrals: bool,
}

#[derive(Debug, Args)]
pub struct RegenerateArgs {
    #[arg(long, value_name = "HEX")]
    pub primary: String,

    #[command(flatten)]
    pub source: PaletteSource,
}

#[derive(Debug, Args)]
pub struct TransformArgs {
    /// New primary, `#rrggbb`.
    pub primary: String,

    /// JSON result instead of CSS.
    #[arg(long)]
    pub json: bool,
}

// ─── Value Parsers ───────────────────────────────────────────────────────────

fn parse_named_color(s: &str) -> std::result::Result<(String, String), String> {
    let (name, hex) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=HEX, got {s:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing color name in {s:?}"));
    }
    Rgb::from_hex(hex.trim()).map_err(|e| e.to_string())?;
    Ok((name.to_owned(), hex.trim().to_owned()))
}

fn parse_groups(s: &str) -> std::result::Result<TokenGroup, String> {
    TokenGroup::parse_list(s).map_err(|bad| format!("unknown token group {bad:?}"))
}

fn parse_mode(s: &str) -> std::result::Result<ThemeMode, String> {
    ThemeMode::from_name(s).ok_or_else(|| format!("unknown mode {s:?} (light, dark, auto)"))
}

// ─── Dispatch ────────────────────────────────────────────────────────────────

/// Load the configuration and run the selected command.
///
/// # Errors
///
/// Any config, color, analysis or encoding failure.
pub fn execute(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => WbConfig::load(path)?,
        None => WbConfig::default(),
    };
    debug!(?config, "effective configuration");
    run(&cli.command, &config)
}

/// Run one command against an already-loaded configuration.
///
/// # Errors
///
/// See [`execute`].
pub fn run(command: &Commands, config: &WbConfig) -> Result<String> {
    match command {
        Commands::Tokens(args) => tokens(args, config),
        Commands::Palette(args) => Ok(serde_json::to_string_pretty(&generate(&args.color, &args.role))?),
        Commands::Analyze(args) => analyze(args, config),
        Commands::Regenerate(args) => regenerate(args, config),
        Commands::Transform(args) => transform(args),
    }
}

fn tokens(args: &TokensArgs, config: &WbConfig) -> Result<String> {
    let mut config = config.clone();
    if let Some(primary) = &args.primary {
        config.tokens.primary_color.clone_from(primary);
    }
    if let Some(mode) = args.mode {
        config.theme.check_mode(mode)?;
        config.theme.default_mode = mode;
    }
    let injector = TokenInjector::from_config(&config);

    Ok(match (args.format, args.only) {
        (Format::Css, None) => injector.to_css_string(),
        (Format::Css, Some(groups)) => injector.to_css_string_filtered(groups),
        (Format::Json, None) => injector.to_json()?,
        (Format::Json, Some(groups)) => {
            let filtered: TokenMap = injector
                .get_tokens()
                .iter()
                .filter(|(name, _)| groups.intersects(name.group()))
                .map(|(name, value)| (name.clone(), value.to_owned()))
                .collect();
            serde_json::to_string_pretty(&filtered)?
        }
    })
}

fn analyze(args: &AnalyzeArgs, config: &WbConfig) -> Result<String> {
    let palette = resolve_palette(&args.source)?;
    let mut options = AnalysisOptions::from(&config.analysis);
    if args.include_neutrals {
        options.exclude_neutrals = false;
    }
    let analysis = PaletteAnalyzer::new(options).analyze_theme(&palette)?;
    if args.report {
        Ok(generate_report(&analysis))
    } else {
        Ok(serde_json::to_string_pretty(&analysis)?)
    }
}

fn regenerate(args: &RegenerateArgs, config: &WbConfig) -> Result<String> {
    validate_hex(&args.primary)?;
    let palette = resolve_palette(&args.source)?;
    let analysis = PaletteAnalyzer::new(AnalysisOptions::from(&config.analysis)).analyze_theme(&palette)?;
    let regenerated = generate_theme_from_formulas(&args.primary, &analysis);
    Ok(serde_json::to_string_pretty(&regenerated)?)
}

fn transform(args: &TransformArgs) -> Result<String> {
    validate_hex(&args.primary)?;
    let transformation = PaletteTransformer::default().transform(&args.primary);
    if args.json {
        Ok(serde_json::to_string_pretty(&transformation)?)
    } else {
        Ok(transformation.to_css())
    }
}

fn validate_hex(input: &str) -> Result<()> {
    Rgb::from_hex(input).map_err(|source| CliError::Color {
        input: input.to_owned(),
        source,
    })?;
    Ok(())
}

fn resolve_palette(source: &PaletteSource) -> Result<NamedPalette> {
    if let Some(name) = &source.builtin {
        return builtin_palette(name).ok_or_else(|| CliError::UnknownPalette {
            name: name.clone(),
            available: builtin_names().join(", "),
        });
    }
    if source.colors.is_empty() {
        return Err(CliError::NoColors);
    }
    Ok(source.colors.iter().cloned().collect())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use wb_tokens::{ConfigError, TokenError};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wb").chain(args.iter().copied())).unwrap()
    }

    fn exec(args: &[&str]) -> Result<String> {
        execute(&parse(args))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    // ── tokens ───────────────────────────────────────────────────────────

    #[test]
    fn tokens_default_css() {
        let css = exec(&["tokens"]).unwrap();
        assert!(css.starts_with(":root {\n  --color-primary: hsl(239, 84%, 67%);"));
        assert!(css.contains("  --color-success: hsl(142, 76%, 36%);"));
    }

    #[test]
    fn tokens_filtered_json() {
        let json = exec(&["tokens", "--primary", "#ff0000", "--format", "json", "--only", "radius"]).unwrap();
        let map: indexmap::IndexMap<String, String> = serde_json::from_str(&json).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["--radius-sm", "--radius-md", "--radius-lg", "--radius-xl", "--radius-full"]
        );
    }

    #[test]
    fn tokens_light_mode() {
        let css = exec(&["tokens", "--mode", "light", "--only", "background"]).unwrap();
        assert!(css.contains("--bg-primary: hsl(0, 0%, 90%);"));
    }

    #[test]
    fn tokens_reject_unknown_group() {
        assert!(Cli::try_parse_from(["wb", "tokens", "--only", "sparkles"]).is_err());
    }

    #[test]
    fn tokens_follow_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tokens]\nprimary_color = \"#0000ff\"\n[theme]\ntransition_duration = \"1s\"").unwrap();
        let path = file.path().to_str().unwrap();
        let css = exec(&["--config", path, "tokens"]).unwrap();
        assert!(css.contains("--color-primary: hsl(240, 100%, 50%);"));
        assert!(css.contains("--transition-normal: all 1s ease;"));
    }

    #[test]
    fn tokens_reject_mode_outside_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[theme]\navailable_modes = [\"dark\"]").unwrap();
        let path = file.path().to_str().unwrap();
        let err = exec(&["--config", path, "tokens", "--mode", "light"]).unwrap_err();
        assert!(
            matches!(err, CliError::Tokens(TokenError::Config(ConfigError::UnavailableMode { .. }))),
            "{err}"
        );
        assert!(exec(&["--config", path, "tokens", "--mode", "dark"]).is_ok());
    }

    #[test]
    fn missing_config_is_an_error() {
        let err = exec(&["tokens", "--config", "/no/such/wb.toml"]).unwrap_err();
        assert!(matches!(err, CliError::Tokens(_)));
    }

    // ── palette ──────────────────────────────────────────────────────────

    #[test]
    fn palette_json() {
        let json = exec(&["palette", "hsl(226,100%,55%)", "--role", "accent"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["octave"], "hsl(226, 100%, 80%)");
        assert_eq!(value["role"], "accent");
    }

    // ── analyze / regenerate ─────────────────────────────────────────────

    #[test]
    fn analyze_pairs() {
        let json = exec(&["analyze", "white=#ffffff", "blue=#0693e3", "orange=#ff6900"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["chromaticColors"], 2);
    }

    #[test]
    fn analyze_builtin_report() {
        let md = exec(&["analyze", "--builtin", "material", "--report"]).unwrap();
        assert!(md.starts_with('#'));
    }

    #[test]
    fn analyze_all_gray_fails() {
        let err = exec(&["analyze", "a=#808080", "b=#ffffff"]).unwrap_err();
        assert!(matches!(err, CliError::Analysis(_)));
    }

    #[test]
    fn analyze_needs_colors() {
        assert!(matches!(exec(&["analyze"]).unwrap_err(), CliError::NoColors));
        assert!(matches!(
            exec(&["analyze", "--builtin", "solarized"]).unwrap_err(),
            CliError::UnknownPalette { .. }
        ));
    }

    #[test]
    fn bad_pair_is_a_usage_error() {
        assert!(Cli::try_parse_from(["wb", "analyze", "blue"]).is_err());
        assert!(Cli::try_parse_from(["wb", "analyze", "blue=#zzzzzz"]).is_err());
        assert!(Cli::try_parse_from(["wb", "analyze", "--builtin", "wp", "x=#000000"]).is_err());
    }

    #[test]
    fn regenerate_keeps_keys() {
        let json = exec(&["regenerate", "--primary", "#c41e3a", "--builtin", "wordpress"]).unwrap();
        let map: indexmap::IndexMap<String, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(map.len(), 12);
        assert_eq!(map["black"], "#000000");
    }

    #[test]
    fn regenerate_validates_primary() {
        let err = exec(&["regenerate", "--primary", "red", "a=#ff0000"]).unwrap_err();
        assert!(matches!(err, CliError::Color { .. }));
    }

    // ── transform ────────────────────────────────────────────────────────

    #[test]
    fn transform_css() {
        let css = exec(&["transform", "#ff0000"]).unwrap();
        assert!(css.starts_with("/* WordPress Color Scheme - Transformed Values */"));
        assert!(css.contains("--wp--preset--color--vivid-cyan-blue: #e50606;"));
    }

    #[test]
    fn transform_json() {
        let json = exec(&["transform", "#00ffff", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["hueShift"], -22.0);
    }

    #[test]
    fn global_flags_parse_anywhere() {
        let cli = parse(&["transform", "#000000", "--verbose"]);
        assert!(cli.verbose);
    }
}
