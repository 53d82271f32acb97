//! Exports a small two-color pattern pack to `pattern_pack.pdf`.
//!
//! Run with: cargo run --example pattern_pack

use std::fs::File;
use yarnpress::{
    Branding, ExportJob, ExportOptions, Grid, LayoutConfig, Palette, PatternPackOptions,
    PipelineError, ProjectSettings, StitchSet, export_to_writer,
};

const PROJECT_JSON: &str = r##"{
    "grid": {
        "width": 10,
        "height": 8,
        "cells": [
            {"color":"mc"},{"color":"mc"},{"color":"mc"},{"color":"cc"},{"color":"cc"},
            {"color":"cc"},{"color":"cc"},{"color":"mc"},{"color":"mc"},{"color":"mc"},
            {"color":"mc"},{"color":"mc"},{"color":"cc"},{"color":"cc"},{"color":"cc"},
            {"color":"cc"},{"color":"cc"},{"color":"cc"},{"color":"mc"},{"color":"mc"},
            {"color":"mc"},{"color":"cc"},{"color":"cc"},{"color":"mc"},{"color":"mc"},
            {"color":"mc"},{"color":"mc"},{"color":"cc"},{"color":"cc"},{"color":"mc"},
            {"color":"mc"},{"color":"cc"},{"color":"cc"},{"color":"mc"},{"color":"mc"},
            {"color":"mc"},{"color":"mc"},{"color":"cc"},{"color":"cc"},{"color":"mc"},
            {"color":"mc"},{"color":"mc"},{"color":"cc"},{"color":"cc"},{"color":"cc"},
            {"color":"cc"},{"color":"cc"},{"color":"cc"},{"color":"mc"},{"color":"mc"},
            {"color":"mc"},{"color":"mc"},{"color":"mc"},{"color":"cc"},{"color":"cc"},
            {"color":"cc"},{"color":"cc"},{"color":"mc"},{"color":"mc"},{"color":"mc"},
            {},{},{"color":"mc"},{"color":"mc"},{"color":"mc"},
            {"color":"mc"},{"color":"mc"},{"color":"mc"},{},{},
            {},{},{},{"color":"mc"},{"color":"mc"},
            {"color":"mc"},{"color":"mc"},{},{},{}
        ]
    },
    "palette": [
        {"id":"mc","name":"Deep Teal","color":"#1d6f6f","brand":"Scheepjes","skein_length":312.0},
        {"id":"cc","name":"Oat","color":"#e8ddc8"}
    ]
}"##;

#[derive(serde::Deserialize)]
struct Project {
    grid: Grid,
    palette: Palette,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let project: Project = serde_json::from_str(PROJECT_JSON)?;
    let stitches = StitchSet::with_defaults();
    let settings = ProjectSettings::default();

    let options = ExportOptions::PatternPack(PatternPackOptions {
        title: "Teal Waves Square".to_string(),
        include_written_instructions: true,
        branding: Branding {
            designer: Some("J. Halvorsen".to_string()),
            website: Some("example.com/patterns".to_string()),
            copyright: Some("(c) 2025 J. Halvorsen. For personal use only.".to_string()),
        },
        ..PatternPackOptions::default()
    });

    let job = ExportJob {
        grid: &project.grid,
        palette: &project.palette,
        stitches: &stitches,
        settings: &settings,
        options: options.resolve(),
    };

    let mut file = File::create("pattern_pack.pdf")?;
    export_to_writer(&job, &LayoutConfig::default(), &mut file)?;
    println!("wrote pattern_pack.pdf");
    Ok(())
}
