// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Organigrama CLI entrypoint.
//!
//! Loads a position or person document from disk, rebuilds the hierarchy, applies unit filters
//! and viewer restrictions, and prints the visible nodes as JSON or as an outline.

use std::error::Error;
use std::path::PathBuf;

use organigrama::access::{AccessPolicy, Viewer};
use organigrama::build::Hierarchy;
use organigrama::config::OrgChartConfig;
use organigrama::model::ChartNode;
use organigrama::render::{render_json, render_outline, OutlineOptions};
use organigrama::source::{load_view, CachedSource, FileSource, LoadedView, RecordSource};
use organigrama::store::DocumentCache;
use organigrama::view::{ViewController, ViewMode};
use serde::Serialize;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <input.json> [--view position|person] [--config <file>]\n      [--business-unit <name>] [--cost-center <name>] [--department <name>]\n      [--viewer <login>] [--format json|outline] [--cache-dir <dir>]\n\nThe input may be a bare record list, a {{\"Cargo\"|\"Persona\": [...]}} object, or an\n{{\"Organigrama\": {{...}}}} export. Defaults: --view person, --format outline.\nSet RUST_LOG=debug to see how records were repaired."
    );
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum OutputFormat {
    Json,
    #[default]
    Outline,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<PathBuf>,
    view: Option<ViewMode>,
    config: Option<PathBuf>,
    business_unit: Option<String>,
    cost_center: Option<String>,
    department: Option<String>,
    viewer: Option<String>,
    format: Option<OutputFormat>,
    cache_dir: Option<PathBuf>,
}

fn set_once<T>(slot: &mut Option<T>, value: T) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--view" => {
                let view: ViewMode = args.next().ok_or(())?.parse().map_err(|_| ())?;
                set_once(&mut options.view, view)?;
            }
            "--format" => {
                let format = match args.next().ok_or(())?.as_str() {
                    "json" => OutputFormat::Json,
                    "outline" => OutputFormat::Outline,
                    _ => return Err(()),
                };
                set_once(&mut options.format, format)?;
            }
            "--config" => set_once(&mut options.config, PathBuf::from(args.next().ok_or(())?))?,
            "--cache-dir" => {
                set_once(&mut options.cache_dir, PathBuf::from(args.next().ok_or(())?))?
            }
            "--business-unit" => set_once(&mut options.business_unit, args.next().ok_or(())?)?,
            "--cost-center" => set_once(&mut options.cost_center, args.next().ok_or(())?)?,
            "--department" => set_once(&mut options.department, args.next().ok_or(())?)?,
            "--viewer" => set_once(&mut options.viewer, args.next().ok_or(())?)?,
            _ if arg.starts_with('-') => return Err(()),
            _ => set_once(&mut options.input, PathBuf::from(arg))?,
        }
    }

    if options.input.is_none() {
        return Err(());
    }
    if options.cost_center.is_some() && options.business_unit.is_none() {
        return Err(());
    }

    Ok(options)
}

/// Runs one hierarchy through the view controller and renders what it shows.
fn present<T>(
    hierarchy: &Hierarchy<T>,
    viewer: Option<Viewer>,
    options: &CliOptions,
) -> Result<String, Box<dyn Error>>
where
    T: ChartNode + Clone + Serialize,
{
    let mut controller = ViewController::new();
    controller.begin_refresh();
    controller.load(hierarchy);
    if let Some(viewer) = viewer {
        controller.apply_viewer(viewer);
    }

    let wants_filter = options.business_unit.is_some()
        || options.cost_center.is_some()
        || options.department.is_some();
    if controller.is_locked() {
        if wants_filter {
            log::warn!("filters are locked to the viewer's own units; ignoring filter flags");
        }
    } else {
        if options.business_unit.is_some() {
            controller.select_business_unit(options.business_unit.as_deref())?;
        }
        if options.cost_center.is_some() {
            controller.select_cost_center(options.cost_center.as_deref())?;
        }
        if options.department.is_some() {
            controller.select_department(options.department.as_deref())?;
        }
    }

    let visible = controller.visible_nodes();
    match options.format.unwrap_or_default() {
        OutputFormat::Json => Ok(render_json(&visible)?),
        OutputFormat::Outline => Ok(render_outline(&visible, &OutlineOptions::default())),
    }
}

fn run(options: &CliOptions) -> Result<String, Box<dyn Error>> {
    let mut config = match options.config.as_ref() {
        Some(path) => OrgChartConfig::from_path(path)?,
        None => OrgChartConfig::default(),
    };
    if let Some(dir) = options.cache_dir.as_ref() {
        config.cache.dir = Some(dir.clone());
    }
    let policy = AccessPolicy::from_config(&config)?;

    let Some(input) = options.input.as_ref() else {
        return Err("missing input document".into());
    };
    let files = FileSource::shared(input);
    let source: Box<dyn RecordSource> = match DocumentCache::from_config(&config.cache) {
        Some(cache) => Box::new(CachedSource::new(files, cache)),
        None => Box::new(files),
    };

    let view = options.view.unwrap_or_default();
    let loaded = load_view(source.as_ref(), view, &config.hierarchy);
    log::debug!("{view} view: {} node(s)", loaded.len());

    let login = options.viewer.as_deref();
    match &loaded {
        LoadedView::Positions(hierarchy) => {
            let viewer =
                login.map(|login| policy.resolve_viewer_from_positions(login, hierarchy.nodes()));
            present(hierarchy, viewer, options)
        }
        LoadedView::People(hierarchy) => {
            let viewer =
                login.map(|login| policy.resolve_viewer_from_people(login, hierarchy.nodes()));
            present(hierarchy, viewer, options)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "organigrama".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    match run(&options) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(err) => {
            eprintln!("organigrama: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use organigrama::view::ViewMode;

    use super::{parse_options, CliOptions, OutputFormat};

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter().map(|arg| (*arg).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_input_only() {
        let options = parse_options(args(&["org.json"])).expect("parse options");
        assert_eq!(
            options,
            CliOptions {
                input: Some(PathBuf::from("org.json")),
                ..CliOptions::default()
            }
        );
    }

    #[test]
    fn parses_all_flags() {
        let options = parse_options(args(&[
            "--view",
            "cargo",
            "org.json",
            "--business-unit",
            "Retail",
            "--cost-center",
            "Tiendas",
            "--department",
            "Ventas",
            "--viewer",
            "CORP\\jdoe",
            "--format",
            "json",
            "--config",
            "org.config.json",
            "--cache-dir",
            "/tmp/org-cache",
        ]))
        .expect("parse options");
        assert_eq!(options.view, Some(ViewMode::Position));
        assert_eq!(options.business_unit.as_deref(), Some("Retail"));
        assert_eq!(options.cost_center.as_deref(), Some("Tiendas"));
        assert_eq!(options.department.as_deref(), Some("Ventas"));
        assert_eq!(options.viewer.as_deref(), Some("CORP\\jdoe"));
        assert_eq!(options.format, Some(OutputFormat::Json));
        assert_eq!(options.config, Some(PathBuf::from("org.config.json")));
        assert_eq!(options.cache_dir, Some(PathBuf::from("/tmp/org-cache")));
    }

    #[test]
    fn requires_an_input() {
        parse_options(args(&[])).unwrap_err();
        parse_options(args(&["--view", "person"])).unwrap_err();
    }

    #[test]
    fn rejects_bad_values_and_unknown_flags() {
        parse_options(args(&["org.json", "--view", "chart"])).unwrap_err();
        parse_options(args(&["org.json", "--format", "svg"])).unwrap_err();
        parse_options(args(&["org.json", "--nope"])).unwrap_err();
        parse_options(args(&["org.json", "--viewer"])).unwrap_err();
    }

    #[test]
    fn rejects_duplicates() {
        parse_options(args(&["a.json", "b.json"])).unwrap_err();
        parse_options(args(&["a.json", "--view", "person", "--view", "cargo"])).unwrap_err();
    }

    #[test]
    fn cost_center_needs_business_unit() {
        parse_options(args(&["org.json", "--cost-center", "Tiendas"])).unwrap_err();
    }
}
