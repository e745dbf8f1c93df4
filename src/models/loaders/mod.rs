pub mod toml_loader;
