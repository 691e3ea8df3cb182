use std::path::PathBuf;

use clap::Parser;

use crate::settings::PrepSettings;

#[derive(Parser, Debug)]
#[command(name = "segprep")]
#[command(about = "Merge overlapping sub-utterances of a data directory into utt2spk and segments")]
pub struct Args {
    /// Data directory holding the `text` transcript
    pub data_dir: PathBuf,

    /// JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Group and sort the transcript before merging
    #[arg(long)]
    pub sort: bool,

    /// Zero-pad width of the times in segment ids
    #[arg(long)]
    pub id_digits: Option<usize>,

    /// Write a JSON summary of the merge to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Command-line flags win over the settings file.
    pub fn apply_overrides(&self, settings: &mut PrepSettings) {
        if self.sort {
            settings.merge.sort_input = true;
        }
        if let Some(digits) = self.id_digits {
            settings.merge.id_digits = digits;
        }
    }
}
