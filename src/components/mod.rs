pub mod data_map;
