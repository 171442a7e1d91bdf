//! Mini-Cloze CLI (for testing purposes only)
//! The main interface is through WASM bindings.

fn main() {
    println!("Mini-Cloze Quiz Engine Core");
    println!("===========================");
    println!();
    println!("This is a library crate. To use it:");
    println!();
    println!("  1. Build WASM: wasm-pack build --target web");
    println!("  2. Wire the exported WasmSession into your page");
    println!();
    println!("For testing the core library:");
    println!("  cargo test");
}
