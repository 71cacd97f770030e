pub fn handle() {
    println!("unimac {}", env!("CARGO_PKG_VERSION"));
}
