// Adapters layer: loading store contents from external sources.

pub mod csv_import;
