//! Command-line interface for the `slide-grid` tool
//!
//! [`Args`] is parsed with [`clap`]; [`run`] executes one subcommand and
//! writes its result to the given writer. Slides are read from a JSON file,
//! or from stdin when the path is omitted or `-`.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::json;

use crate::commands::{CollisionPolicy, EditCommand};
use crate::config::EngineConfig;
use crate::element::{IdGenerator, SequentialIds, UuidIds};
use crate::error::Error;
use crate::grid::{
    check_collision, find_free_position, lint, place_in_slot, slot_rect, GridRect, GridSize, Slot,
};
use crate::preview;
use crate::slide::SlideLayout;
use crate::template::{apply_template, ApplyOptions, TemplateCategory};

/// Command-line arguments for the slide grid engine
#[derive(Parser, Debug)]
#[command(name = "slide-grid", author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Extra template library (TOML), loaded after the configured ones
    #[arg(short, long, global = true)]
    pub templates: Vec<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lint a slide; exits with status 1 when problems are found
    Check {
        /// Slide JSON (stdin when omitted)
        slide: Option<PathBuf>,
    },

    /// Check a rectangle against a slide's elements
    Collide {
        slide: Option<PathBuf>,
        #[arg(long)]
        x: u32,
        #[arg(long)]
        y: u32,
        #[arg(long)]
        w: u32,
        #[arg(long)]
        h: u32,
        /// Element id to leave out of the comparison
        #[arg(long)]
        exclude: Option<String>,
    },

    /// Find the first free position for a size
    Free {
        slide: Option<PathBuf>,
        #[arg(long)]
        w: u32,
        #[arg(long)]
        h: u32,
        #[arg(long)]
        exclude: Option<String>,
    },

    /// Print a slot's rectangle, settled against a slide when one is given
    Slot {
        name: Slot,
        slide: Option<PathBuf>,
    },

    /// Replace a slide's elements with a template
    Apply {
        template: String,
        slide: Option<PathBuf>,
        /// Carry existing content into the new layout
        #[arg(long)]
        preserve: bool,
        /// Number ids (`text-1`, `text-2`, ...) instead of random suffixes
        #[arg(long)]
        sequential_ids: bool,
    },

    /// List available templates
    Templates {
        #[arg(long, value_parser = parse_category)]
        category: Option<TemplateCategory>,
        #[arg(long)]
        search: Option<String>,
    },

    /// Apply an edit command (JSON) to a slide
    Edit {
        /// Slide JSON, `-` for stdin
        slide: PathBuf,
        /// Command, e.g. '{"command":"move","id":"a","x":0,"y":6}'
        command: String,
        /// Collision policy, overriding the configuration
        #[arg(long, value_parser = parse_policy)]
        policy: Option<CollisionPolicy>,
        #[arg(long)]
        sequential_ids: bool,
    },

    /// Draw the slide's occupancy map
    Preview {
        slide: Option<PathBuf>,
        /// Append one legend line per element
        #[arg(long)]
        legend: bool,
    },
}

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// The command ran but found problems (lint warnings)
    Findings,
}

fn parse_category(s: &str) -> Result<TemplateCategory, String> {
    TemplateCategory::parse(s).ok_or_else(|| {
        let known: Vec<&str> = TemplateCategory::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category '{s}', expected one of: {}", known.join(", "))
    })
}

fn parse_policy(s: &str) -> Result<CollisionPolicy, String> {
    match s {
        "reject" => Ok(CollisionPolicy::Reject),
        "relocate" => Ok(CollisionPolicy::Relocate),
        "allow" => Ok(CollisionPolicy::Allow),
        _ => Err(format!(
            "unknown policy '{s}', expected one of: reject, relocate, allow"
        )),
    }
}

/// Load the configuration named by the arguments
pub fn load_config(args: &Args) -> Result<EngineConfig, Error> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    for library in &args.templates {
        config = config.with_library(library.clone());
    }
    Ok(config)
}

/// Execute the parsed command, writing its result to `out`
pub fn run(args: &Args, out: &mut dyn Write) -> Result<Status, Error> {
    let config = load_config(args)?;
    let grid = config.grid;
    debug!(command:? = args.command; "Running command");

    match &args.command {
        Command::Check { slide } => {
            let slide = read_slide(slide.as_deref())?;
            let warnings = lint::check(&grid, &slide.elements);
            for warning in &warnings {
                warn!("{warning}");
                writeln!(out, "{warning}")?;
            }
            info!(warnings = warnings.len(); "Checked slide");
            if warnings.is_empty() {
                Ok(Status::Success)
            } else {
                Ok(Status::Findings)
            }
        }
        Command::Collide {
            slide,
            x,
            y,
            w,
            h,
            exclude,
        } => {
            let slide = read_slide(slide.as_deref())?;
            let candidate = GridRect::new(*x, *y, *w, *h);
            let result = check_collision(&grid, &candidate, &slide.elements, exclude.as_deref());
            print_json(out, &result)?;
            Ok(Status::Success)
        }
        Command::Free {
            slide,
            w,
            h,
            exclude,
        } => {
            let slide = read_slide(slide.as_deref())?;
            let position = find_free_position(
                &grid,
                GridSize::new(*w, *h),
                &slide.elements,
                exclude.as_deref(),
            );
            print_json(out, &position)?;
            Ok(Status::Success)
        }
        Command::Slot { name, slide } => {
            let rect = match slide {
                Some(path) => {
                    let slide = read_slide(Some(path.as_path()))?;
                    place_in_slot(&grid, &config.slots, *name, &slide.elements)
                }
                None => Some(slot_rect(&grid, &config.slots, *name)),
            };
            print_json(out, &rect)?;
            Ok(Status::Success)
        }
        Command::Apply {
            template,
            slide,
            preserve,
            sequential_ids,
        } => {
            let registry = config.registry()?;
            let template = registry.require(template)?;
            let slide = match slide {
                Some(path) => read_slide(Some(path.as_path()))?,
                None => SlideLayout::new(),
            };
            let options = ApplyOptions::new().with_preserve_content(*preserve);
            let mut ids = id_generator(*sequential_ids);
            let elements =
                apply_template(&grid, template, &slide.elements, &options, ids.as_mut())?;
            writeln!(out, "{}", slide.with_elements(elements).to_json()?)?;
            Ok(Status::Success)
        }
        Command::Templates { category, search } => {
            let registry = config.registry()?;
            let found = registry.search(search.as_deref().unwrap_or(""));
            for template in found
                .into_iter()
                .filter(|t| category.map_or(true, |c| t.category == c))
            {
                writeln!(
                    out,
                    "{:<20} {:<12} {}",
                    template.id,
                    template.category.as_str(),
                    template.name
                )?;
            }
            Ok(Status::Success)
        }
        Command::Edit {
            slide,
            command,
            policy,
            sequential_ids,
        } => {
            let slide = read_slide(Some(slide.as_path()))?;
            let command: EditCommand = serde_json::from_str(command)?;
            let mut editor = config.editor();
            if let Some(policy) = policy {
                editor = editor.with_policy(*policy);
            }
            let mut ids = id_generator(*sequential_ids);
            let outcome = editor.apply(&slide.elements, &command, ids.as_mut())?;
            info!(placement:? = outcome.placement; "Edited slide");
            print_json(
                out,
                &json!({
                    "placement": outcome.placement,
                    "slide": slide.with_elements(outcome.elements),
                }),
            )?;
            Ok(Status::Success)
        }
        Command::Preview { slide, legend } => {
            let slide = read_slide(slide.as_deref())?;
            write!(out, "{}", preview::render(&grid, &slide.elements))?;
            if *legend {
                write!(out, "{}", preview::legend(&slide.elements))?;
            }
            Ok(Status::Success)
        }
    }
}

fn id_generator(sequential: bool) -> Box<dyn IdGenerator> {
    if sequential {
        Box::new(SequentialIds::new())
    } else {
        Box::new(UuidIds)
    }
}

/// Read a slide from a file, or from stdin for `None` and `-`
fn read_slide(path: Option<&Path>) -> Result<SlideLayout, Error> {
    match path {
        Some(path) if path != Path::new("-") => SlideLayout::from_file(path),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            SlideLayout::from_json(&buffer)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<(), Error> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collide() {
        let args = Args::try_parse_from([
            "slide-grid", "collide", "slide.json", "--x", "3", "--y", "3", "--w", "6", "--h", "6",
        ])
        .unwrap();
        match args.command {
            Command::Collide { x, w, exclude, .. } => {
                assert_eq!((x, w), (3, 6));
                assert_eq!(exclude, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_parse_slot_name() {
        let args = Args::try_parse_from(["slide-grid", "slot", "Left"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Slot {
                name: Slot::Left,
                slide: None
            }
        ));
        assert!(Args::try_parse_from(["slide-grid", "slot", "middle"]).is_err());
    }

    #[test]
    fn test_parse_policy_and_category() {
        let args = Args::try_parse_from([
            "slide-grid", "edit", "s.json", "{}", "--policy", "allow",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Command::Edit {
                policy: Some(CollisionPolicy::Allow),
                ..
            }
        ));
        assert!(Args::try_parse_from(["slide-grid", "templates", "--category", "poetry"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "slide-grid", "templates", "--log-level", "debug", "--templates", "extra.toml",
        ])
        .unwrap();
        assert_eq!(args.log_level, "debug");
        assert_eq!(args.templates, vec![PathBuf::from("extra.toml")]);
    }

    #[test]
    fn test_slot_without_slide() {
        let args = Args::try_parse_from(["slide-grid", "slot", "top"]).unwrap();
        let mut out = Vec::new();
        assert_eq!(run(&args, &mut out).unwrap(), Status::Success);
        let rect: GridRect = serde_json::from_slice(&out).unwrap();
        assert_eq!(rect, GridRect::new(0, 0, 12, 3));
    }

    #[test]
    fn test_templates_listing() {
        let args =
            Args::try_parse_from(["slide-grid", "templates", "--category", "assessment"]).unwrap();
        let mut out = Vec::new();
        run(&args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("quiz"));
    }
}
