pub mod file_exporter;
