use rollwright::config::AppConfig;
use rollwright::core::generator::{
    CharacterGenerator, GenerationRequest, GeneratorOptions,
};
use rollwright::core::tables::DataTables;

/// Generate one character and print it as JSON.
///
/// Usage: rollwright [method] [name]
/// where method is one of 4d6 (default), standard, pointbuy.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _log_guard = rollwright::core::logging::init();
    log::info!("Rollwright v{} starting", rollwright::VERSION);

    let config = AppConfig::load();
    let tables = match &config.data.tables_file {
        Some(path) => DataTables::load(path)?,
        None => DataTables::builtin(),
    };

    let generator = CharacterGenerator::with_options(
        tables,
        GeneratorOptions {
            min_equipment: config.generation.min_equipment,
            max_equipment: config.generation.max_equipment,
            default_pronouns: config.generation.default_pronouns.clone(),
        },
    );

    let mut args = std::env::args().skip(1);
    let request = GenerationRequest {
        method: args.next().unwrap_or_else(|| "4d6".to_string()),
        name: args.next(),
        ..Default::default()
    };

    let mut rng = rand::thread_rng();
    let record = generator.generate(&mut rng, &request)?;
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
