//! HTML to Go conversion command.

use std::collections::HashMap;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use plainkit_convert::{ConversionConfig, Converter};
use rayon::prelude::*;
use serde::Deserialize;
use walkdir::WalkDir;

/// Configuration file structure (plainkit.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub convert: ConversionConfig,
}

/// Arguments of the convert command.
#[derive(Debug, Default)]
pub struct ConvertArgs {
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub htmx: bool,
    pub alpine: bool,
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the convert command.
pub fn run(config_path: &Path, args: ConvertArgs) -> Result<()> {
    let file_config = load_config(config_path)?;

    let config = ConversionConfig {
        htmx: args.htmx || file_config.convert.htmx,
        alpine: args.alpine || file_config.convert.alpine,
    };
    let converter = Converter::new(config);

    if args.inputs.is_empty() {
        return convert_stdin(&converter, args.output.as_deref());
    }

    let inputs = collect_inputs(&args.inputs);
    match (inputs.as_slice(), args.out_dir.as_deref()) {
        ([], _) => bail!("No HTML files found in the given inputs"),
        (_, Some(dir)) => convert_batch(&converter, &inputs, dir),
        ([input], None) => convert_file(&converter, &input.path, args.output.as_deref()),
        (_, None) => bail!("--out-dir is required when converting more than one file"),
    }
}

/// An HTML file to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Input {
    /// Where the file is read from
    path: PathBuf,
    /// Location under the output directory, relative to the walked root
    relative: PathBuf,
}

/// Expand directories into the `.html` and `.htm` files beneath them.
fn collect_inputs(paths: &[PathBuf]) -> Vec<Input> {
    let mut inputs = Vec::new();

    for path in paths {
        if !path.is_dir() {
            let relative = path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("output"));
            inputs.push(Input {
                path: path.clone(),
                relative,
            });
            continue;
        }

        let mut found: Vec<Input> = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_html(e.path()))
            .filter_map(|e| {
                let relative = e.path().strip_prefix(path).ok()?.to_path_buf();
                Some(Input {
                    path: e.into_path(),
                    relative,
                })
            })
            .collect();
        found.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::debug!("Found {} HTML files in {}", found.len(), path.display());
        inputs.extend(found);
    }

    inputs
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

fn convert_stdin(converter: &Converter, output: Option<&Path>) -> Result<()> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("No input provided. Pass an HTML file or pipe HTML to stdin");
    }

    let mut bytes = Vec::new();
    stdin
        .read_to_end(&mut bytes)
        .context("Failed to read from stdin")?;

    let result = converter
        .convert(&String::from_utf8_lossy(&bytes))
        .context("Failed to convert stdin")?;

    write_output(&result.source, output, "stdin")
}

fn convert_file(converter: &Converter, input: &Path, output: Option<&Path>) -> Result<()> {
    let source = convert_path(converter, input)?;
    write_output(&source, output, &input.display().to_string())
}

/// Convert one file. Invalid UTF-8 is replaced rather than rejected.
fn convert_path(converter: &Converter, input: &Path) -> Result<String> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;

    let result = converter
        .convert(&String::from_utf8_lossy(&bytes))
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    Ok(result.source)
}

fn write_output(source: &str, output: Option<&Path>, label: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, source)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Converted {} → {}", label, path.display());
        }
        None => print!("{source}"),
    }
    Ok(())
}

/// Convert every input into `<out_dir>/<relative>.go` in parallel.
///
/// Fails before writing anything if two inputs map to the same output file.
fn convert_batch(converter: &Converter, inputs: &[Input], out_dir: &Path) -> Result<()> {
    let start = Instant::now();

    let jobs: Vec<(&Input, PathBuf)> = inputs
        .iter()
        .map(|input| (input, out_dir.join(&input.relative).with_extension("go")))
        .collect();

    let mut targets: HashMap<&Path, &Path> = HashMap::new();
    for (input, target) in &jobs {
        if let Some(previous) = targets.insert(target, &input.path) {
            bail!(
                "{} and {} would both be written to {}",
                previous.display(),
                input.path.display(),
                target.display()
            );
        }
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let results: Vec<(&Input, Result<&PathBuf>)> = jobs
        .par_iter()
        .map(|(input, target)| {
            let result = convert_path(converter, &input.path).and_then(|source| {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
                fs::write(target, source)
                    .with_context(|| format!("Failed to write {}", target.display()))?;
                Ok(target)
            });
            (*input, result)
        })
        .collect();

    let mut failed = 0;
    for (input, result) in &results {
        match result {
            Ok(target) => {
                tracing::info!("Converted {} → {}", input.path.display(), target.display())
            }
            Err(e) => {
                failed += 1;
                tracing::error!("{:#}", e);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed to convert", failed, results.len());
    }

    tracing::info!(
        "Converted {} files in {}ms",
        results.len(),
        start.elapsed().as_millis()
    );

    Ok(())
}
