use crate::error::Error;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use std::path::PathBuf;

/// I/O Docs Generator - Generate Mashery I/O Docs from annotated Rust API handlers
#[derive(Parser, Debug)]
#[command(name = "iodocs-from-source")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the Rust project directory
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: PathBuf,

    /// Internal API name (not shown to the public)
    #[arg(long = "name", default_value = "api")]
    pub name: String,

    /// API title
    #[arg(long = "title", default_value = "API")]
    pub title: String,

    /// Longer API description
    #[arg(long = "description", default_value = "")]
    pub description: String,

    /// Current API version
    #[arg(long = "api-version", default_value = "1.0")]
    pub api_version: String,

    /// Base path all method paths are relative to
    #[arg(short = 'b', long = "base-path")]
    pub base_path: String,

    /// YAML or JSON file of extension parameters
    #[arg(short = 'e', long = "extensions", value_name = "FILE")]
    pub extensions: Option<PathBuf>,

    /// Output format (json or yaml)
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON, as read by the I/O Docs portal
    Json,
    /// YAML
    Yaml,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.project_path.is_dir() {
        return Err(Error::InvalidArgument(format!(
            "Project path is not a directory: {}",
            args.project_path.display()
        ))
        .into());
    }
    if let Some(extensions) = &args.extensions {
        if !extensions.is_file() {
            return Err(Error::InvalidArgument(format!(
                "Extension parameter file does not exist: {}",
                extensions.display()
            ))
            .into());
        }
    }

    info!("Project path: {}", args.project_path.display());
    info!("Output format: {:?}", args.output_format);
    match &args.output_path {
        Some(output) => info!("Output file: {}", output.display()),
        None => info!("Output: stdout"),
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::config::{load_extension_parameters, ApiInfo};
    use crate::extractor::{attributes::AttributeExtractor, EndpointSource};
    use crate::parser::AstParser;
    use crate::scanner::FileScanner;
    use crate::serializer::{serialize_json, serialize_yaml, write_to_file};
    use crate::synthesizer::synthesize;

    info!("Starting I/O Docs generation...");

    // Step 1: Scan directory for Rust files
    let scan_result = FileScanner::new(args.project_path.clone()).scan()?;
    info!("Found {} Rust files", scan_result.rust_files.len());
    if scan_result.rust_files.is_empty() {
        anyhow::bail!("No Rust files found in the project directory");
    }

    // Step 2: Parse files into AST
    let parsed_files = AstParser::parse_files(&scan_result.rust_files);
    let parsed_count = parsed_files.len();
    info!("Successfully parsed {} files", parsed_count);
    if parsed_files.is_empty() {
        anyhow::bail!("No files could be parsed successfully");
    }

    // Step 3: Extract endpoint classes from attributes
    let classes = AttributeExtractor::new(parsed_files).endpoint_classes();
    info!("Found {} endpoint classes", classes.len());

    // Step 4: Load extension parameters
    let extensions = match &args.extensions {
        Some(path) => load_extension_parameters(path)?,
        None => Vec::new(),
    };

    // Step 5: Synthesize the document
    let info = ApiInfo::new(
        args.name.as_str(),
        args.title.as_str(),
        args.description.as_str(),
        args.api_version.as_str(),
        args.base_path.as_str(),
    );
    let document = synthesize(&info, &classes, &extensions);
    let method_count = document.methods().map(|m| m.len()).unwrap_or(0);
    if method_count == 0 {
        warn!("No documented methods found in the project");
    }

    // Step 6: Serialize and output
    let content = match args.output_format {
        OutputFormat::Json => serialize_json(&document)?,
        OutputFormat::Yaml => serialize_yaml(&document)?,
    };
    match &args.output_path {
        Some(output_path) => {
            write_to_file(&content, output_path)?;
            info!("Wrote I/O Docs to {}", output_path.display());
        }
        None => println!("{}", content),
    }

    info!("Summary:");
    info!("  - Files scanned: {}", scan_result.rust_files.len());
    info!("  - Files parsed: {}", parsed_count);
    info!("  - Endpoint classes: {}", classes.len());
    info!("  - Extension parameters: {}", extensions.len());
    info!("  - Methods documented: {}", method_count);

    Ok(())
}
