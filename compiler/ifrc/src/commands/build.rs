//! Build command: map classes from a catalog and query the result.

use std::io::Write;
use std::sync::Arc;

use ifr_core::{ClassAnalysis, ClassCatalog};
use ifr_repository::{LocalAdapter, Repository, RepositoryBuilder, RepositoryConfig};

use super::read_file;
use crate::render::{render_description, render_tree};
use crate::CliError;

/// Build options parsed from command-line arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Classes to map, in `Class.getName()` form
    pub classes: Vec<String>,
    /// Print the definition tree (--tree)
    pub tree: bool,
    /// Repository IDs to resolve (--lookup=<id>)
    pub lookups: Vec<String>,
    /// Scoped names to describe (--describe=<name>)
    pub describes: Vec<String>,
    /// ORB name (--orb-name=<name>)
    pub orb_name: Option<String>,
    /// Host in rendered references (--host=<host>)
    pub host: Option<String>,
    /// Port in rendered references (--port=<port>)
    pub port: Option<u16>,
    /// Object adapter name (--poa=<name>)
    pub poa_name: Option<String>,
    /// Object key prefix (--prefix=<prefix>)
    pub prefix: Option<String>,
}

impl BuildOptions {
    /// Merge options from another `BuildOptions`.
    ///
    /// Lists are appended, flags are or-ed, and set values in `other`
    /// override those in `self`.
    pub fn merge(&mut self, other: &Self) {
        self.classes.extend(other.classes.iter().cloned());
        self.lookups.extend(other.lookups.iter().cloned());
        self.describes.extend(other.describes.iter().cloned());
        self.tree |= other.tree;

        if other.orb_name.is_some() {
            self.orb_name.clone_from(&other.orb_name);
        }
        if other.host.is_some() {
            self.host.clone_from(&other.host);
        }
        if other.port.is_some() {
            self.port = other.port;
        }
        if other.poa_name.is_some() {
            self.poa_name.clone_from(&other.poa_name);
        }
        if other.prefix.is_some() {
            self.prefix.clone_from(&other.prefix);
        }
    }

    /// The repository configuration these options describe.
    pub fn config(&self) -> RepositoryConfig {
        let mut config = RepositoryConfig::default();
        if let Some(orb_name) = &self.orb_name {
            config = config.with_orb_name(orb_name.clone());
        }
        if self.host.is_some() || self.port.is_some() {
            let host = self.host.clone().unwrap_or_else(|| config.host.clone());
            let port = self.port.unwrap_or(config.port);
            config = config.with_endpoint(host, port);
        }
        if let Some(poa_name) = &self.poa_name {
            config = config.with_poa_name(poa_name.clone());
        }
        if let Some(prefix) = &self.prefix {
            config = config.with_prefix(prefix.clone());
        }
        config
    }
}

/// Parse build options from command-line arguments.
///
/// Arguments not starting with `-` are class names. Unknown options and
/// malformed values are rejected.
pub fn parse_build_options(args: &[String]) -> Result<BuildOptions, CliError> {
    let mut options = BuildOptions::default();

    for arg in args {
        if arg == "--tree" {
            options.tree = true;
        } else if let Some(id) = arg.strip_prefix("--lookup=") {
            options.lookups.push(non_empty("--lookup", id)?);
        } else if let Some(name) = arg.strip_prefix("--describe=") {
            options.describes.push(non_empty("--describe", name)?);
        } else if let Some(name) = arg.strip_prefix("--orb-name=") {
            options.orb_name = Some(non_empty("--orb-name", name)?);
        } else if let Some(host) = arg.strip_prefix("--host=") {
            options.host = Some(non_empty("--host", host)?);
        } else if let Some(port) = arg.strip_prefix("--port=") {
            let port = port
                .parse::<u16>()
                .map_err(|_| CliError::BadArgument(format!("invalid port '{port}'")))?;
            options.port = Some(port);
        } else if let Some(name) = arg.strip_prefix("--poa=") {
            options.poa_name = Some(non_empty("--poa", name)?);
        } else if let Some(prefix) = arg.strip_prefix("--prefix=") {
            options.prefix = Some(prefix.to_owned());
        } else if arg.starts_with('-') {
            return Err(CliError::BadArgument(format!("unknown option '{arg}'")));
        } else {
            options.classes.push(arg.clone());
        }
    }

    Ok(options)
}

fn non_empty(option: &str, value: &str) -> Result<String, CliError> {
    if value.is_empty() {
        Err(CliError::BadArgument(format!("{option} needs a value")))
    } else {
        Ok(value.to_owned())
    }
}

/// Load a JSON array of class analyses on top of the JDK classes.
pub fn load_catalog(path: &str) -> Result<ClassCatalog, CliError> {
    let text = read_file(path)?;
    let classes: Vec<ClassAnalysis> =
        serde_json::from_str(&text).map_err(|source| CliError::Json {
            path: path.to_owned(),
            source,
        })?;
    let mut catalog = ClassCatalog::with_jdk_classes();
    tracing::debug!(path, classes = classes.len(), "catalog loaded");
    catalog.extend(classes);
    Ok(catalog)
}

/// Map `options.classes` from `catalog` and finish the build.
pub fn build_repository(
    catalog: &ClassCatalog,
    options: &BuildOptions,
) -> Result<Repository, CliError> {
    if options.classes.is_empty() {
        return Err(CliError::BadArgument("no classes to map".to_owned()));
    }

    let config = options.config();
    let adapter = Arc::new(LocalAdapter::new(&config));
    let mut builder = RepositoryBuilder::new(config, catalog, adapter);
    for class in &options.classes {
        builder.map_class(class)?;
    }
    Ok(builder.finish_build()?)
}

/// Write the views `options` asks for.
pub fn print_views(
    repository: &Repository,
    options: &BuildOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let io = |source| CliError::Io {
        path: "<stdout>".to_owned(),
        source,
    };

    if let Some(reference) = repository.reference() {
        writeln!(out, "repository: {reference}").map_err(io)?;
    }
    if options.tree {
        write!(out, "{}", render_tree(repository)).map_err(io)?;
    }
    for id in &options.lookups {
        let found = repository
            .lookup_id(id)
            .and_then(|node| repository.node(node))
            .and_then(|node| node.as_contained())
            .map(|contained| contained.absolute_name().to_string());
        match found {
            Some(name) => writeln!(out, "{id} -> {name}").map_err(io)?,
            None => writeln!(out, "{id} -> (not found)").map_err(io)?,
        }
    }
    for name in &options.describes {
        let description = repository
            .lookup(name)
            .and_then(|node| repository.describe(node))
            .ok_or_else(|| CliError::NotFound(name.clone()))?;
        writeln!(out, "{}", render_description(&description)).map_err(io)?;
    }
    Ok(())
}

/// The `build` command: load, map, finish, print, shut down.
#[tracing::instrument(level = "debug", skip_all, fields(catalog = %catalog_path))]
pub fn run_build(
    catalog_path: &str,
    options: &BuildOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let catalog = load_catalog(catalog_path)?;
    let mut repository = build_repository(&catalog, options)?;
    let printed = print_views(&repository, options, out);
    repository.shutdown();
    printed
}
