use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use scn_diff::{
    compare_scenes_with, detail_for, ChangeKind, ComparisonFilter, ComparisonStats, LineDiff,
    SceneComparison, SceneDetail, WordKind,
};
use scn_parse::parse_scenes;
use scn_types::Scene;
use serde_json::json;
use tracing::{debug, info};

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    if !config.display.color {
        colored::control::set_override(false);
    }

    let output = match cli.command {
        Command::Scenes(args) => cmd_scenes(args, &cli.format)?,
        Command::Compare(args) => cmd_compare(args, &cli.format, &config)?,
        Command::Show(args) => cmd_show(args, &cli.format, &config)?,
    };
    print!("{output}");
    Ok(())
}

fn read_revision(path: &Path) -> anyhow::Result<Vec<Scene>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let scenes = parse_scenes(&text);
    debug!(path = %path.display(), scenes = scenes.len(), "loaded revision");
    Ok(scenes)
}

fn compare_files(old: &Path, new: &Path, config: &CliConfig) -> anyhow::Result<Vec<SceneComparison>> {
    let comparisons = compare_scenes_with(&read_revision(old)?, &read_revision(new)?, &config.compare)
        .with_context(|| format!("comparing {} with {}", old.display(), new.display()))?;
    Ok(comparisons)
}

fn cmd_scenes(args: ScenesArgs, format: &OutputFormat) -> anyhow::Result<String> {
    let scenes = read_revision(&args.file)?;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&scenes)? + "\n"),
        OutputFormat::Text => Ok(render_scene_list(&scenes)),
    }
}

fn cmd_compare(args: CompareArgs, format: &OutputFormat, config: &CliConfig) -> anyhow::Result<String> {
    let comparisons = compare_files(&args.old, &args.new, config)?;
    let stats = ComparisonStats::from_comparisons(&comparisons);

    let mut filter = ComparisonFilter {
        kind: args.kind,
        hide_unchanged: args.hide_unchanged || config.display.hide_unchanged,
        query: args.search,
        search_headers: !args.no_header_search,
        search_content: !args.no_content_search,
        scene_numbers: None,
    };
    // An explicit --type unchanged wins over a config-level hide.
    if args.kind == Some(ChangeKind::Unchanged) && !args.hide_unchanged {
        filter.hide_unchanged = false;
    }
    if !args.scenes.is_empty() {
        filter = filter.restricted_to(args.scenes);
    }
    let shown = filter.apply(&comparisons);
    info!(shown = shown.len(), total = stats.total, "comparison complete");

    match format {
        OutputFormat::Json => {
            let body = json!({ "stats": stats, "comparisons": shown });
            Ok(serde_json::to_string_pretty(&body)? + "\n")
        }
        OutputFormat::Text => Ok(render_comparisons(&shown, &stats)),
    }
}

fn cmd_show(args: ShowArgs, format: &OutputFormat, config: &CliConfig) -> anyhow::Result<String> {
    let comparisons = compare_files(&args.old, &args.new, config)?;
    let Some(detail) = detail_for(&comparisons, &args.scene) else {
        bail!("scene #{} not found in either revision", args.scene);
    };

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&detail)? + "\n"),
        OutputFormat::Text => Ok(render_detail(&detail)),
    }
}

pub fn render_scene_list(scenes: &[Scene]) -> String {
    if scenes.is_empty() {
        return "No scenes.\n".to_string();
    }
    let mut out = String::new();
    for scene in scenes {
        out.push_str(&format!(
            "{:>5}  {}  {}  {}\n",
            format!("#{}", scene.scene_num).yellow().bold(),
            scene.location,
            format!(
                "lines {}-{} ({} body)",
                scene.start_line,
                scene.end_line(),
                scene.line_count()
            )
            .dimmed(),
            scene.hash.short_hex().dimmed(),
        ));
    }
    out.push_str(&format!("\n{} scenes\n", scenes.len()));
    out
}

fn kind_label(kind: ChangeKind) -> colored::ColoredString {
    paint(kind, format!("{:<9}", kind.as_str()))
}

fn paint(kind: ChangeKind, label: String) -> colored::ColoredString {
    match kind {
        ChangeKind::Unchanged => label.dimmed(),
        ChangeKind::Added => label.green(),
        ChangeKind::Removed => label.red(),
        ChangeKind::Modified => label.yellow(),
        ChangeKind::Moved => label.cyan(),
    }
}

pub fn render_comparisons(shown: &[&SceneComparison], stats: &ComparisonStats) -> String {
    let mut out = String::new();
    for comparison in shown {
        let number = match comparison.new_scene_num() {
            Some(to) if comparison.kind() == ChangeKind::Moved => {
                format!("#{} -> #{}", comparison.scene_num(), to)
            }
            _ => format!("#{}", comparison.scene_num()),
        };
        let location = comparison
            .new_scene()
            .or(comparison.old_scene())
            .map(|scene| scene.location.as_str())
            .unwrap_or_default();
        out.push_str(&format!("  {}  {}  {}\n", kind_label(comparison.kind()), number.bold(), location));
    }
    if shown.is_empty() {
        out.push_str("No matching scenes.\n");
    }

    out.push_str(&format!(
        "\n{} modified, {} moved, {} added, {} removed, {} unchanged ({} scenes)\n",
        stats.modified, stats.moved, stats.added, stats.removed, stats.unchanged, stats.total,
    ));
    if stats.is_clean() {
        out.push_str(&format!("{} Revisions match.\n", "✓".green().bold()));
    }
    out
}

fn line_number(n: Option<usize>) -> String {
    n.map_or_else(|| "    ".to_string(), |n| format!("{n:>4}"))
}

pub fn render_detail(detail: &SceneDetail) -> String {
    let mut out = String::new();
    let old = detail.old_scene_num.as_ref().map(|n| format!("#{n}"));
    let new = detail.new_scene_num.as_ref().map(|n| format!("#{n}"));
    let title = match (old, new) {
        (Some(old), Some(new)) if old != new => format!("{old} -> {new}"),
        (Some(num), _) | (None, Some(num)) => num,
        (None, None) => String::new(),
    };
    out.push_str(&format!("{} {}\n", title.bold(), paint(detail.kind, detail.kind.to_string())));

    if detail.kind == ChangeKind::Moved {
        out.push_str("  Content unchanged; scene renumbered.\n");
        return out;
    }

    for line in &detail.lines {
        let old_num = line_number(line.old_line());
        let new_num = line_number(line.new_line());
        let rendered = match line {
            LineDiff::Unchanged { content, .. } => format!("  {content}").dimmed().to_string(),
            LineDiff::Added { content, .. } => format!("+ {content}").green().to_string(),
            LineDiff::Removed { content, .. } => format!("- {content}").red().to_string(),
            LineDiff::Modified { word_diff, .. } => {
                let words: String = word_diff
                    .iter()
                    .map(|w| match w.kind {
                        WordKind::Unchanged => w.word.normal().to_string(),
                        WordKind::Added => w.word.green().underline().to_string(),
                        WordKind::Removed => w.word.red().strikethrough().to_string(),
                    })
                    .collect();
                format!("{} {words}", "~".yellow())
            }
        };
        out.push_str(&format!("{} {} {rendered}\n", old_num.dimmed(), new_num.dimmed()));
    }

    let stats = detail.stats();
    out.push_str(&format!(
        "\n{} modified, {} added, {} removed, {} unchanged\n",
        stats.modified, stats.added, stats.removed, stats.unchanged,
    ));
    out
}
