use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use swagen_core::{directories, remove_tree};
use swagen_manifest::ConfigFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CleanCommand {
    /// Path to the generator config (defaults to ./swagen.config.json)
    #[arg(short, long, default_value = "swagen.config.json")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        let target = self.output.join(&config.options().model_folder);

        if !target.exists() {
            println!("Nothing to clean: {}", target.display());
            return Ok(());
        }

        if self.dry_run {
            println!("Would delete: {}", target.display());
            for dir in directories(&target)? {
                println!("  - {dir}/");
            }
            return Ok(());
        }

        remove_tree(&target)?;
        println!("Deleted: {}", target.display());
        Ok(())
    }
}
