//! Parchment CLI
//!
//! A headless inspector for the layout pipeline: dumps tokens, the element
//! tree, paragraphs, the box tree and the display list of a markup document,
//! and hit-tests a point.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use owo_colors::OwoColorize;
use parchment_dom::NodeId;
use parchment_layout::{
    ApproximateTextMeasurer, BlockBox, ColorValue, DisplayList, LayoutConfig, LineBox, Paragraph,
    Point, RootBox, Size, find_box,
};
use parchment_markup::write_tree;
use parchment_view::{LoadedDocument, RichTextView, load_document, parse_markup_string};
use serde_json::{Value, json};

/// Parchment: inspect how markup is parsed, laid out and painted
#[derive(Parser, Debug)]
#[command(name = "parchment")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Everything, at the default 400x300 view
    parchment ./doc.pm

    # Only the box tree of inline markup, wrapped at 120 units
    parchment --markup '<doc><h1>Hi</h1><p>Some text</p></doc>' --dump boxes --width 120

    # Which box is under a point?
    parchment ./doc.pm --dump boxes --point 20,15

    # Gray margins around the blocks
    parchment ./doc.pm --dump paint --background '#ccc'

    # Machine-readable output
    parchment ./doc.pm --dump paint --json
"#)]
struct Cli {
    /// Path to a markup file
    #[arg(value_name = "FILE", conflicts_with = "markup")]
    path: Option<PathBuf>,

    /// Parse a markup string directly instead of a file
    #[arg(long, value_name = "TEXT")]
    markup: Option<String>,

    /// Pipeline stage to print
    #[arg(short, long, value_enum, default_value_t = Dump::All)]
    dump: Dump,

    /// View width
    #[arg(long, default_value = "400")]
    width: f32,

    /// View height
    #[arg(long, default_value = "300")]
    height: f32,

    /// Font size of the approximate text measurer
    #[arg(long, default_value = "16")]
    font_size: f32,

    /// Root background color: `#rgb`, `#rrggbb`, `#rrggbbaa` or a color name
    #[arg(long, value_name = "COLOR", value_parser = parse_color)]
    background: Option<ColorValue>,

    /// Hit-test this point and highlight the box under it
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    point: Option<Point>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// More logging: -v for debug, -vv for trace
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// A pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Dump {
    /// Markup tokens
    Tokens,
    /// Element tree
    Tree,
    /// Projected paragraphs
    Paragraphs,
    /// Laid-out box tree
    Boxes,
    /// Display list
    Paint,
    /// Every stage
    All,
}

impl Dump {
    fn includes(self, stage: Self) -> bool {
        self == Self::All || self == stage
    }
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let coordinate = |s: &str| {
        s.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid coordinate '{s}': {e}"))
    };
    Ok(Point::new(coordinate(x)?, coordinate(y)?))
}

fn parse_color(value: &str) -> Result<ColorValue, String> {
    ColorValue::parse(value).ok_or_else(|| format!("unknown color '{value}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let doc = load_doc(&cli)?;
    let mut config = LayoutConfig::default();
    if let Some(background) = cli.background {
        config.root_style.background_color = background;
    }
    let mut view = RichTextView::with_config(doc.paragraphs.clone(), config);
    let measurer = ApproximateTextMeasurer::new(cli.font_size);
    let _ = view.layout(Size::new(cli.width, cli.height), &measurer);
    if let Some(point) = cli.point {
        let _ = view.pointer_move(point);
    }
    let mut display_list = DisplayList::new();
    view.draw(&mut display_list);
    let root = view
        .box_tree()
        .context("view produced no box tree after layout")?;

    if cli.json {
        print_json(&cli, &doc, root, &display_list)?;
    } else {
        print_text(&cli, &doc, root, &display_list)?;
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load document from CLI arguments
fn load_doc(cli: &Cli) -> Result<LoadedDocument> {
    if let Some(markup) = &cli.markup {
        parse_markup_string(markup).context("failed to parse --markup")
    } else if let Some(path) = &cli.path {
        load_document(path).with_context(|| format!("failed to load {}", path.display()))
    } else {
        bail!("expected a markup FILE or --markup")
    }
}

fn heading(title: &str) {
    println!("{}", format!("=== {title} ===").bold().cyan());
}

fn print_text(cli: &Cli, doc: &LoadedDocument, root: &RootBox, list: &DisplayList) -> Result<()> {
    if cli.dump.includes(Dump::Tokens) {
        heading("Tokens");
        for token in &doc.tokens {
            println!("{token}");
        }
        println!();
    }

    if cli.dump.includes(Dump::Tree) {
        heading("Element Tree");
        let mut out = String::new();
        write_tree(&doc.dom, NodeId::ROOT, 0, &mut out)?;
        print!("{out}");
        if !doc.parse_issues.is_empty() {
            println!("{}", "parse issues:".yellow());
            for issue in &doc.parse_issues {
                let kind = if issue.is_error { "error" } else { "warning" };
                println!("  - {kind} at token {}: {}", issue.token_index, issue.message);
            }
        }
        println!();
    }

    if cli.dump.includes(Dump::Paragraphs) {
        heading("Paragraphs");
        for (index, paragraph) in doc.paragraphs.iter().enumerate() {
            print_paragraph(index, paragraph);
        }
        println!();
    }

    if cli.dump.includes(Dump::Boxes) {
        heading(&format!("Box Tree (view: {}x{})", cli.width, cli.height));
        print_boxes(root);
        println!();
    }

    if cli.dump.includes(Dump::Paint) {
        heading(&format!("Display List ({} commands)", list.len()));
        print!("{list}");
        println!();
    }

    if let Some(point) = cli.point {
        heading("Hit Test");
        match find_box(root, point) {
            Some(hit) => {
                let rect = root.absolute_rect(hit.id()).unwrap_or_default();
                println!(
                    "({}, {}) -> {} at ({}, {}) {}x{}",
                    point.x,
                    point.y,
                    format!("{:?}", hit.id()).green(),
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height
                );
            }
            None => println!("({}, {}) -> {}", point.x, point.y, "outside the view".red()),
        }
    }
    Ok(())
}

fn print_paragraph(index: usize, paragraph: &Paragraph) {
    let style = &paragraph.style;
    println!(
        "[{index}] bg {} border {} {} padding {}",
        style.background_color, style.border_width, style.border_color, style.padding_width
    );
    for run in &paragraph.runs {
        let underline = if run.style.underline { " underline" } else { "" };
        println!(
            "    {} {} {}{underline} {:?}",
            run.style.font_key(),
            run.style.weight,
            run.style.color,
            run.text
        );
    }
}

fn print_boxes(root: &RootBox) {
    println!(
        "root ({}, {}) {}x{}",
        root.position.x, root.position.y, root.size.width, root.size.height
    );
    for (index, block) in root.blocks.iter().enumerate() {
        print_block(index, block);
    }
}

fn print_block(index: usize, block: &BlockBox) {
    println!(
        "  block[{index}] ({}, {}) {}x{} bg {}",
        block.position.x,
        block.position.y,
        block.size.width,
        block.size.height,
        block.style.background_color
    );
    for (line_index, line) in block.lines.iter().enumerate() {
        print_line(line_index, line);
    }
}

fn print_line(index: usize, line: &LineBox) {
    println!(
        "    line[{index}] ({}, {}) {}x{}",
        line.position.x, line.position.y, line.size.width, line.size.height
    );
    for span in &line.spans {
        println!(
            "      span ({}, {}) w={} {} {:?}",
            span.position.x,
            span.position.y,
            span.width,
            span.style.font_key(),
            span.text
        );
    }
}

fn print_json(cli: &Cli, doc: &LoadedDocument, root: &RootBox, list: &DisplayList) -> Result<()> {
    let mut out = serde_json::Map::new();
    if cli.dump.includes(Dump::Tokens) {
        let tokens: Vec<String> = doc.tokens.iter().map(ToString::to_string).collect();
        let _ = out.insert("tokens".to_string(), json!(tokens));
    }
    if cli.dump.includes(Dump::Tree) {
        let mut tree = String::new();
        write_tree(&doc.dom, NodeId::ROOT, 0, &mut tree)?;
        let _ = out.insert("tree".to_string(), Value::String(tree));
    }
    if cli.dump.includes(Dump::Paragraphs) {
        let _ = out.insert("paragraphs".to_string(), serde_json::to_value(&doc.paragraphs)?);
    }
    if cli.dump.includes(Dump::Boxes) {
        let _ = out.insert("boxes".to_string(), serde_json::to_value(root)?);
    }
    if cli.dump.includes(Dump::Paint) {
        let _ = out.insert("paint".to_string(), serde_json::to_value(list)?);
    }
    if let Some(point) = cli.point {
        let hit = find_box(root, point).map(|hit| hit.id());
        let _ = out.insert("hit".to_string(), serde_json::to_value(hit)?);
    }
    println!("{}", serde_json::to_string_pretty(&Value::Object(out))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("20, 15.5"), Ok(Point::new(20.0, 15.5)));
        assert!(parse_point("20").is_err());
        assert!(parse_point("x,1").is_err());
    }

    #[test]
    fn test_parse_color_accepts_hex_and_names() {
        assert_eq!(parse_color("#ccc"), Ok(ColorValue::rgb(0xcc, 0xcc, 0xcc)));
        assert_eq!(parse_color("Blue"), Ok(ColorValue::rgb(0, 0, 255)));
        assert!(parse_color("chartreuse").is_err());
    }

    #[test]
    fn test_background_flag_reaches_root_style() {
        let cli = Cli::try_parse_from([
            "parchment",
            "--markup",
            "<d><p>x</p></d>",
            "--background",
            "gray",
        ])
        .unwrap();
        assert_eq!(cli.background, Some(ColorValue::rgb(128, 128, 128)));

        let cli = Cli::try_parse_from(["parchment", "doc.pm", "--background", "nope"]);
        assert!(cli.is_err());
    }
}
