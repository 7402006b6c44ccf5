use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUT_DIR: &str = "assets/dist";

fn main() {
    // One line per stylesheet so editing a component partial re-bundles
    println!("cargo:rerun-if-changed={CSS_DIR}");
    for entry in fs::read_dir(CSS_DIR).expect("Failed to read assets/css").flatten() {
        println!("cargo:rerun-if-changed={}", entry.path().display());
    }

    fs::create_dir_all(CSS_OUT_DIR).expect("Failed to create assets/dist directory");

    // main.css pulls in the component partials through @import
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .expect("Failed to bundle CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write(Path::new(CSS_OUT_DIR).join("bundle.css"), css.code)
        .expect("Failed to write bundle.css");
}
