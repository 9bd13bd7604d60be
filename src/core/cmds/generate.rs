use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::LanguageEngine;
use crate::LanguageRegistry;
use crate::core::engine::operators::{OperatorTable, Sentinels};
use crate::core::engine::orchestrator::MutantGenerator;
use crate::types::config::config;
use crate::types::{AppError, AppResult};

/// Pick the engine for `source`, falling back to the default engine
fn select_engine<'r>(
    registry: &'r LanguageRegistry,
    source: &Path,
) -> AppResult<&'r dyn LanguageEngine> {
    if let Some(engine) = registry.language_from_path(source) {
        return Ok(engine);
    }
    let engine = registry
        .default_engine()
        .ok_or_else(|| AppError::Custom("no language engines registered".to_string()))?;
    warn!(
        "Unrecognized file extension for {}; treating it as {}",
        source.display(),
        engine.name()
    );
    Ok(engine)
}

pub fn execute_generate(source: PathBuf, count: u64, registry: &LanguageRegistry) -> AppResult<()> {
    let engine = select_engine(registry, &source)?;
    let table = OperatorTable::from_config(config())?;
    let sentinels = Sentinels::from_config(config())?;
    for (category, p) in table.entries() {
        debug!("{category} p={p}: {}", category.description());
    }

    let text = fs::read_to_string(&source)?;
    let out_dir = PathBuf::from(config().out_dir());
    let extension = engine.output_extension();
    let generator = MutantGenerator::new(engine, &table, &sentinels);

    let mut out_dir_ready = false;
    generator.generate(&text, count, |mutant| {
        if !out_dir_ready {
            fs::create_dir_all(&out_dir)?;
            out_dir_ready = true;
        }
        let path = out_dir.join(mutant.file_name(extension));
        fs::write(&path, &mutant.text)?;
        debug!("Wrote {} ({})", path.display(), mutant.stats);
        info!("Mutant {} created.", mutant.index);
        Ok(())
    })
}
