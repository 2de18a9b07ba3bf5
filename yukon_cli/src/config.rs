use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use yukon::{GameConfig, Lookup, TableauRule};

/// Reads a [`GameConfig`] from a JSON file. Missing keys take their default.
///
/// ```json
/// { "tableau_rule": "different-suit", "lookup": "strict", "face_down_deal": true }
/// ```
pub fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    if !path.is_file() {
        anyhow::bail!("Config file '{}' does not exist", path.display());
    }
    let reader = BufReader::new(File::open(path)?);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Settings from the command line, which take precedence over the config file.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConfigOverrides {
    pub tableau_rule: Option<TableauRule>,
    pub lookup: Option<Lookup>,
    pub face_down_deal: Option<bool>,
}

impl ConfigOverrides {
    pub fn apply(self, config: GameConfig) -> GameConfig {
        GameConfig {
            tableau_rule: self.tableau_rule.unwrap_or(config.tableau_rule),
            lookup: self.lookup.unwrap_or(config.lookup),
            face_down_deal: self.face_down_deal.unwrap_or(config.face_down_deal),
        }
    }
}
