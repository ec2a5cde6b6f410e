pub mod encoding;
pub mod importer;

pub use importer::ScenarioImporter;
