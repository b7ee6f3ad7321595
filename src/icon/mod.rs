use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, OnceLock};

use rust_embed::RustEmbed;

use crate::error::{Error, Result};

pub const DEFAULT_PACK: &str = "calm";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconName {
    value: String,
}

impl IconName {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[derive(Clone, Debug, Default)]
struct PackIndex {
    names: BTreeMap<String, PathBuf>,
}

impl PackIndex {
    fn set_name_path(mut self, name: String, path: PathBuf) -> Self {
        self.names.entry(name).or_insert(path);
        self
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.names.get(name).cloned()
    }

    fn len(&self) -> usize {
        self.names.len()
    }
}

#[derive(Clone, Debug)]
struct RegistryInner {
    default_pack: String,
    packs: BTreeMap<String, PackIndex>,
}

/// Maps icon names (optionally `pack:name`) to SVG files on disk.
#[derive(Clone, Debug)]
pub struct IconRegistry {
    inner: Arc<RegistryInner>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        static DEFAULT_REGISTRY: OnceLock<IconRegistry> = OnceLock::new();
        DEFAULT_REGISTRY.get_or_init(Self::build_default).clone()
    }
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_default() -> Self {
        let mut packs = BTreeMap::new();
        let loaded = extract_embedded_pack::<EmbeddedCalmPack>(DEFAULT_PACK)
            .and_then(|root| load_pack_from_root(&root));
        match loaded {
            Ok(pack) => {
                log::debug!("loaded {} icons into pack `{DEFAULT_PACK}`", pack.len());
                packs.insert(DEFAULT_PACK.to_string(), pack);
            }
            Err(error) => log::warn!("default icon pack unavailable: {error}"),
        }

        Self {
            inner: Arc::new(RegistryInner {
                default_pack: DEFAULT_PACK.to_string(),
                packs,
            }),
        }
    }

    pub fn with_default_pack(mut self, pack: impl Into<String>) -> Self {
        let mut next = (*self.inner).clone();
        next.default_pack = pack.into();
        self.inner = Arc::new(next);
        self
    }

    pub fn register_embedded_pack<T: RustEmbed>(
        mut self,
        name: impl Into<String>,
    ) -> Result<Self> {
        let mut next = (*self.inner).clone();
        let pack_name = name.into();
        let root = extract_embedded_pack::<T>(&format!("custom-{pack_name}"))?;
        next.packs.insert(pack_name, load_pack_from_root(&root)?);
        self.inner = Arc::new(next);
        Ok(self)
    }

    pub fn resolve(&self, name: &IconName) -> Option<PathBuf> {
        let (pack_name, icon_name) = split_namespace(name.as_str(), &self.inner.default_pack);
        self.inner.packs.get(pack_name)?.resolve(icon_name)
    }

    pub fn count(&self, pack: &str) -> usize {
        self.inner
            .packs
            .get(pack)
            .map(PackIndex::len)
            .unwrap_or_default()
    }

    pub fn packs(&self) -> Vec<String> {
        self.inner.packs.keys().cloned().collect()
    }
}

fn split_namespace<'a>(value: &'a str, default_pack: &'a str) -> (&'a str, &'a str) {
    if let Some((pack, icon)) = value.split_once(':')
        && !pack.is_empty()
        && !icon.is_empty()
    {
        return (pack, icon);
    }
    (default_pack, value)
}

fn load_pack_from_root(root: &Path) -> Result<PackIndex> {
    let io_error = |source| Error::IconPack {
        pack: root.display().to_string(),
        source,
    };
    let mut pack = PackIndex::default();
    for entry in fs::read_dir(root).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let is_svg = path
            .extension()
            .and_then(|value| value.to_str())
            .is_some_and(|value| value.eq_ignore_ascii_case("svg"));
        if !path.is_file() || !is_svg {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|value| value.to_str()) {
            pack = pack.set_name_path(stem.to_string(), path.clone());
        }
    }
    Ok(pack)
}

fn extract_embedded_pack<T: RustEmbed>(folder_name: &str) -> Result<PathBuf> {
    let root = std::env::temp_dir()
        .join("calmui-field-icons")
        .join(env!("CARGO_PKG_VERSION"))
        .join(folder_name);
    let marker = root.join(".extract-ready");

    if marker.exists() && embedded_pack_is_complete::<T>(&root) {
        return Ok(root);
    }

    let io_error = |source| Error::IconPack {
        pack: folder_name.to_string(),
        source,
    };
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).map_err(io_error)?;

    for relative in T::iter() {
        let relative = relative.as_ref();
        let Some(safe_relative) = sanitize_relative_path(relative) else {
            log::debug!("skipping embedded icon with unsafe path `{relative}`");
            continue;
        };
        let Some(content) = T::get(relative) else {
            continue;
        };

        let destination = root.join(safe_relative);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(destination, content.data.as_ref()).map_err(io_error)?;
    }

    fs::write(marker, b"ok").map_err(io_error)?;
    Ok(root)
}

fn embedded_pack_is_complete<T: RustEmbed>(root: &Path) -> bool {
    T::iter().all(|relative| {
        sanitize_relative_path(relative.as_ref())
            .is_some_and(|safe_relative| root.join(safe_relative).is_file())
    })
}

fn sanitize_relative_path(input: &str) -> Option<PathBuf> {
    let mut output = PathBuf::new();
    for component in Path::new(input).components() {
        match component {
            Component::Normal(value) => output.push(value),
            _ => return None,
        }
    }
    Some(output)
}

#[derive(RustEmbed)]
#[folder = "assets/icons/calm"]
struct EmbeddedCalmPack;
