pub mod dataset_api;
