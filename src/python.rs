//! Python bindings over the load pipeline.
//!
//! ```python
//! import mtg_oracle_loader as loader
//!
//! counts = loader.run_pipeline("oracle_loader.toml")
//! outcomes = loader.migrate("previous/cards", "dumps")
//! ```

use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::card;
use crate::colour;
use crate::config::LoaderConfig;
use crate::output_generator::OutputGenerator;
use crate::pipeline::PipelineContext;
use crate::remap::{migrate_directory, HistoricalCards};

fn load_config(config_path: Option<PathBuf>) -> PyResult<LoaderConfig> {
    let config = match config_path {
        Some(path) => LoaderConfig::from_file(path)?,
        None => LoaderConfig::load()?,
    };
    Ok(config)
}

/// Run the whole pipeline and return rows written per load file
#[pyfunction]
#[pyo3(signature = (config_path=None))]
fn run_pipeline(config_path: Option<PathBuf>) -> PyResult<HashMap<String, usize>> {
    let config = load_config(config_path)?;
    let generator = OutputGenerator::new(config.output_dir.clone());
    let ctx = PipelineContext::prepare(config)?;
    let summary = generator.write_all(&ctx)?;
    Ok(summary
        .rows
        .into_iter()
        .map(|(table, rows)| (table.to_string(), rows))
        .collect())
}

/// Remap card ids in every dependent table dump under `dump_dir`.
///
/// Returns `(rewritten, unmapped, null)` counts per table.
#[pyfunction]
#[pyo3(signature = (historical_path, dump_dir, config_path=None))]
fn migrate(
    historical_path: PathBuf,
    dump_dir: PathBuf,
    config_path: Option<PathBuf>,
) -> PyResult<HashMap<String, (usize, usize, usize)>> {
    let config = load_config(config_path)?;
    let historical = HistoricalCards::from_path(historical_path)?;
    let ctx = PipelineContext::prepare(config)?;
    let remap = ctx.remap_table(&historical)?;
    let outcomes = migrate_directory(dump_dir, &remap)?;
    Ok(outcomes
        .into_iter()
        .map(|(table, o)| (table.to_string(), (o.rewritten, o.unmapped, o.null_ids)))
        .collect())
}

#[pyfunction]
fn colour_flags(colours: Vec<String>) -> PyResult<u32> {
    Ok(colour::colour_flags(Some(colours.as_slice()))?)
}

#[pyfunction]
#[pyo3(signature = (raw=None))]
fn numeric_value(raw: Option<&str>) -> i32 {
    card::numeric_value(raw)
}

/// mtg_oracle_loader: relational load files with stable oracle card ids
#[pymodule]
fn mtg_oracle_loader(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(run_pipeline, m)?)?;
    m.add_function(wrap_pyfunction!(migrate, m)?)?;
    m.add_function(wrap_pyfunction!(colour_flags, m)?)?;
    m.add_function(wrap_pyfunction!(numeric_value, m)?)?;
    Ok(())
}
