use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use yukon::{GameConfig, IllegalMove, MoveOutcome};

/// Collects the commands of one game and writes them to a JSON file.
pub struct Recorder {
    directory: PathBuf,
    recording: GameRecording,
}

impl Recorder {
    pub fn new(directory: PathBuf, seed: u64, config: GameConfig) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            directory,
            recording: GameRecording {
                seed,
                config,
                commands: Vec::new(),
                won: false,
            },
        })
    }

    pub fn store_command(&mut self, command: &str, result: &Result<MoveOutcome, IllegalMove>) {
        self.recording.commands.push(RecordedCommand {
            command: String::from(command),
            accepted: result.is_ok(),
            error: result.as_ref().err().map(|err| err.to_string()),
        });
    }

    pub fn recording(&self) -> &GameRecording {
        &self.recording
    }

    /// Writes `game_<seed>.json`, with the seed zero-padded to 20 digits, and returns its path.
    pub fn write_game_recording(&mut self, won: bool) -> anyhow::Result<PathBuf> {
        self.recording.won = won;
        let filepath = self
            .directory
            .join(format!("game_{:0>20}.json", self.recording.seed));
        let writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(writer, &self.recording)?;
        Ok(filepath)
    }
}

/// Enough to replay a game: the seed and config reproduce the deal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRecording {
    pub seed: u64,
    pub config: GameConfig,
    pub commands: Vec<RecordedCommand>,
    pub won: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordedCommand {
    pub command: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub error: Option<String>,
}
