pub mod coordinate_mapping;
