//! Entry point for the WASM application

pub fn main() {
    papervault_frontend::boot();
}
