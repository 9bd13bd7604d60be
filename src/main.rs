use std::sync::Arc;

use pymutant::LanguageRegistry;
use pymutant::run_main;

fn main() {
    // Create language registry; the first engine is the fallback for unknown extensions
    let mut registry = LanguageRegistry::new();
    registry.register(pymutant::languages::python::engine::PythonLanguageEngine::new());

    if let Err(e) = run_main(Arc::new(registry)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
