use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use swagen_codegen::{GenerationPass, HelperSet, SchemaModel};
use swagen_manifest::ConfigFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the generator config (defaults to ./swagen.config.json)
    #[arg(short, long, default_value = "swagen.config.json")]
    pub config: PathBuf,

    /// Path to the pre-parsed schema model JSON
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        let model = self.load_schema()?;
        let pass = GenerationPass::new(config.options(), HelperSet::new())?;

        if self.dry_run {
            let registry = pass.plan(&model)?;
            println!("Would generate {} file(s):", registry.len());
            for artifact in registry.iter() {
                println!("  {}", artifact.path().display());
            }
            return Ok(());
        }

        let stats = pass.run(&model, &self.output)?;

        println!(
            "Generated: {}",
            self.output.join(&config.options().model_folder).display()
        );
        println!(
            "  {} artifact(s): {} written, {} unchanged",
            stats.total(),
            stats.written,
            stats.skipped
        );
        for path in &stats.written_paths {
            println!("  + {}", path.display());
        }
        Ok(())
    }

    fn load_schema(&self) -> Result<SchemaModel> {
        let content = std::fs::read_to_string(&self.schema)
            .wrap_err_with(|| format!("failed to read schema model {}", self.schema.display()))?;
        serde_json::from_str(&content)
            .wrap_err_with(|| format!("failed to parse schema model {}", self.schema.display()))
    }
}
