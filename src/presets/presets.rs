use std::borrow::Cow;

use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::fs::{DirTree, FsError};

/// Catalog of starting layouts, embedded so preset trees are identical on
/// every machine. A mapping value is a directory, anything else is a file.
const PRESET_CATALOG: &str = include_str!("presets.yaml");

/// Builds the named preset by replaying `mkdir`/`cd`/`touch` through the
/// tree's own primitives, leaving the cursor on root.
pub fn build_preset(name: &str) -> Result<DirTree, PresetError> {
    build_from_catalog(PRESET_CATALOG, name)
}

fn build_from_catalog(contents: &str, name: &str) -> Result<DirTree, PresetError> {
    let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
    let document = documents.first().ok_or(PresetError::MalformedCatalog)?;

    let top_level = document
        .as_mapping()
        .ok_or(PresetError::TopLevelNotMap)?;
    let presets = top_level
        .get(&Yaml::Value(Scalar::String(Cow::Borrowed("presets"))))
        .and_then(|v| v.as_mapping())
        .ok_or(PresetError::PresetsNotMap)?;

    let layout = presets
        .get(&Yaml::Value(Scalar::String(name.into())))
        .ok_or_else(|| PresetError::UnknownPreset {
            name: name.to_string(),
        })?
        .as_mapping()
        .ok_or_else(|| PresetError::LayoutNotMap {
            name: name.to_string(),
        })?;

    debug!("Building preset '{}'", name);
    let mut tree = DirTree::new();
    populate(&mut tree, layout)?;
    Ok(tree)
}

fn populate(
    tree: &mut DirTree,
    layout: &LinkedHashMap<Yaml, Yaml>,
) -> Result<(), PresetError> {
    for (key, value) in layout {
        let Yaml::Value(Scalar::String(name)) = key else {
            debug!("Skipping non-string preset entry: {:?}", key);
            continue;
        };
        match value {
            Yaml::Mapping(children) => {
                tree.mkdir(name).context(BuildSnafu { entry: name.as_ref() })?;
                tree.cd(name).context(BuildSnafu { entry: name.as_ref() })?;
                populate(tree, children)?;
                tree.cd("..").context(BuildSnafu { entry: name.as_ref() })?;
            }
            _ => {
                tree.touch(name).context(BuildSnafu { entry: name.as_ref() })?;
            }
        }
    }
    Ok(())
}

#[derive(Debug, Snafu)]
pub enum PresetError {
    #[snafu(display("Failed to parse the preset catalog"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted preset catalog"))]
    MalformedCatalog,
    #[snafu(display("Top level of the preset catalog should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Presets section should be a map"))]
    PresetsNotMap,
    #[snafu(display("Unknown preset '{name}'"))]
    UnknownPreset { name: String },
    #[snafu(display("Preset '{name}' should be a map"))]
    LayoutNotMap { name: String },
    #[snafu(display("Failed to create preset entry '{entry}'"))]
    BuildError { entry: String, source: FsError },
}
