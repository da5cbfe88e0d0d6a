//! Immutable lookup of show properties by display
//!
//! Built once by an explicit initialisation step and then passed to whatever
//! needs it, typically the placement handler of a host.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::io::configuration::SHOW_INDEX_FILENAME;
use crate::io::error::{CinetileError, Result, file_system, invalid_field};
use crate::show::display::DisplayId;
use crate::show::properties::ShowProperties;

/// Show properties keyed by the display each show is assigned to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowRegistry {
    shows: BTreeMap<DisplayId, ShowProperties>,
}

impl ShowRegistry {
    /// Build a registry from already validated shows
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidation` if two shows are assigned to the same display.
    pub fn from_shows(shows: impl IntoIterator<Item = ShowProperties>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for show in shows {
            let display = show.display();
            if map.insert(display, show).is_some() {
                return Err(invalid_field(
                    "assignToBlock",
                    &display,
                    &"assigned to more than one show",
                ));
            }
        }
        Ok(Self { shows: map })
    }

    /// Load every show listed in the assets root's show index
    ///
    /// Reads `shows.json` (a JSON list of display names) and then
    /// `<display>.json` for each entry.
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if a file cannot be read, `ConfigParse` if the
    /// index is malformed, and any error of [`ShowProperties::load`].
    pub fn load(assets_dir: &Path) -> Result<Self> {
        let index_path = assets_dir.join(SHOW_INDEX_FILENAME);
        let index =
            fs::read_to_string(&index_path).map_err(file_system(&index_path, "read show index"))?;
        let displays: Vec<DisplayId> =
            serde_json::from_str(&index).map_err(|source| CinetileError::ConfigParse {
                path: index_path.clone(),
                source,
            })?;

        let shows = displays
            .iter()
            .map(|display| ShowProperties::load(&assets_dir.join(format!("{display}.json"))))
            .collect::<Result<Vec<_>>>()?;

        let registry = Self::from_shows(shows)?;
        info!("Loaded {} shows from {}", registry.len(), index_path.display());
        Ok(registry)
    }

    /// Properties of the show assigned to `display`
    pub fn get(&self, display: DisplayId) -> Option<&ShowProperties> {
        self.shows.get(&display)
    }

    /// Displays with an assigned show, in identifier order
    pub fn displays(&self) -> impl Iterator<Item = DisplayId> + '_ {
        self.shows.keys().copied()
    }

    /// Number of registered shows
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Whether no show is registered
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}
