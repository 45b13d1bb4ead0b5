//! Entry point for the WASM application

pub fn main() {
    file_uploader::run()
}
