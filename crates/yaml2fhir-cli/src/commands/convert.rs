//! Convert command: YAML files in, FHIR JSON out

use crate::output::{self, ConvertSummary};
use rayon::prelude::*;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use yaml2fhir_core::{
    ConfigLoader, ConvertError, Converter, FhirVersion, Result, ResultExt, Yaml2FhirConfig,
};

/// Options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub paths: Vec<PathBuf>,
    pub id: Option<String>,
    pub fhir_version: Option<String>,
    pub output: Option<PathBuf>,
    pub bundle: bool,
    pub compact: bool,
    pub keep_going: bool,
}

/// Where a batch of YAML documents comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Label used in messages and as the output file name
    fn name(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "output".to_string()),
        }
    }

    fn path(&self) -> &Path {
        match self {
            InputSource::Stdin => Path::new("<stdin>"),
            InputSource::File(path) => path,
        }
    }
}

/// Resources converted from one input
#[derive(Debug)]
pub struct ConvertedInput {
    pub source: InputSource,
    pub resources: Vec<JsonValue>,
    pub skipped: usize,
}

/// Convert command implementation
pub fn convert_command(options: ConvertOptions, config_path: Option<PathBuf>) -> Result<()> {
    let config = ConfigLoader::load(config_path.as_deref(), None)?;
    let tag = options
        .fhir_version
        .as_deref()
        .unwrap_or_else(|| config.fhir_version());
    let version: FhirVersion = tag.parse()?;
    let converter = Converter::from_config(&config);

    let sources = input_sources(&options.paths);
    debug!("Converting {} input(s) for FHIR {}", sources.len(), version);

    let directory = options
        .output
        .clone()
        .or_else(|| config.output_config().directory);
    if let Some(directory) = &directory {
        check_output_targets(&sources, directory)?;
    }

    let mut documents = Vec::with_capacity(sources.len());
    for source in sources {
        let text = read_source(&source)?;
        documents.push((source, text));
    }

    let converted = documents
        .into_par_iter()
        .map(|(source, text)| {
            convert_input(
                &converter,
                source,
                &text,
                options.id.as_deref(),
                version,
                options.keep_going,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    write_results(&converter, &config, &options, directory, converted)
}

/// Map command-line paths to input sources; no paths or `-` means stdin
///
/// Stdin can only be read once, so a repeated `-` is dropped.
pub fn input_sources(paths: &[PathBuf]) -> Vec<InputSource> {
    if paths.is_empty() {
        return vec![InputSource::Stdin];
    }
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        if path.as_os_str() != "-" {
            sources.push(InputSource::File(path.clone()));
        } else if sources.contains(&InputSource::Stdin) {
            warn!("Ignoring repeated '-': stdin is read only once");
        } else {
            sources.push(InputSource::Stdin);
        }
    }
    sources
}

/// Output file for an input written into a directory
fn output_target(directory: &Path, source: &InputSource) -> PathBuf {
    directory.join(format!("{}.json", source.name()))
}

/// Fail before anything is written when two inputs share an output file
pub fn check_output_targets(sources: &[InputSource], directory: &Path) -> Result<()> {
    let mut claimed: HashMap<PathBuf, &InputSource> = HashMap::with_capacity(sources.len());
    for source in sources {
        let target = output_target(directory, source);
        if let Some(first) = claimed.get(&target) {
            return Err(ConvertError::output_conflict(
                target,
                first.path(),
                source.path(),
            ));
        }
        claimed.insert(target, source);
    }
    Ok(())
}

fn read_source(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| ConvertError::io_error(source.path(), e))?;
            Ok(text)
        }
        InputSource::File(path) => {
            std::fs::read_to_string(path).map_err(|e| ConvertError::io_error(path, e))
        }
    }
}

/// Parse every YAML document in a text, skipping empty ones
pub fn parse_documents(text: &str, path: &Path) -> Result<Vec<JsonValue>> {
    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_str(text) {
        let value = JsonValue::deserialize(document)
            .map_err(|e| ConvertError::yaml_error(path, e.to_string()))?;
        if !value.is_null() {
            documents.push(value);
        }
    }
    Ok(documents)
}

fn convert_input(
    converter: &Converter,
    source: InputSource,
    text: &str,
    id: Option<&str>,
    version: FhirVersion,
    keep_going: bool,
) -> Result<ConvertedInput> {
    let documents = parse_documents(text, source.path())?;
    info!(
        "{}: {} data object(s)",
        source.path().display(),
        documents.len()
    );

    let mut resources = Vec::with_capacity(documents.len());
    let mut skipped = 0;
    for document in &documents {
        let result = converter.convert_for_version(document, id, version);
        if keep_going {
            match result.log_and_continue() {
                Some(resource) => resources.push(resource),
                None => skipped += 1,
            }
        } else {
            resources.push(result?);
        }
    }

    Ok(ConvertedInput {
        source,
        resources,
        skipped,
    })
}

fn write_results(
    converter: &Converter,
    config: &Yaml2FhirConfig,
    options: &ConvertOptions,
    directory: Option<PathBuf>,
    converted: Vec<ConvertedInput>,
) -> Result<()> {
    let output_config = config.output_config();
    let pretty = !options.compact && config.pretty();
    let bundle = options.bundle || output_config.bundle.unwrap_or(false);
    let mut summary = ConvertSummary::default();

    match directory {
        Some(directory) => {
            std::fs::create_dir_all(&directory)
                .map_err(|e| ConvertError::io_error(&directory, e))?;
            for input in converted {
                summary.record(&input);
                let document = assemble(converter, input.resources, bundle)?;
                let target = output_target(&directory, &input.source);
                output::write_json_file(&target, &document, pretty)?;
                summary.files_written += 1;
            }
            output::print_summary(&summary, &directory);
        }
        None => {
            let mut resources = Vec::new();
            for input in converted {
                summary.record(&input);
                resources.extend(input.resources);
            }
            let document = assemble(converter, resources, bundle)?;
            println!("{}", output::render_json(&document, pretty)?);
        }
    }

    if summary.skipped > 0 {
        tracing::warn!("Skipped {} data object(s)", summary.skipped);
    }
    Ok(())
}

/// One resource stays an object, several become an array, or a Bundle on request
fn assemble(converter: &Converter, mut resources: Vec<JsonValue>, bundle: bool) -> Result<JsonValue> {
    if bundle {
        return converter.bundle(resources);
    }
    if resources.len() == 1 {
        return Ok(resources.remove(0));
    }
    Ok(JsonValue::Array(resources))
}
