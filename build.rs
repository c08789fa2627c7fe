fn prelude() {
    println!("cargo:rustc-check-cfg=cfg(nightly)");
}

// Allocator forwarding for aliases depends on `allocator_api`, which is only available on nightly
// toolchains.
#[rustversion::not(nightly)]
fn main() {
    self::prelude();
}

#[rustversion::nightly]
fn main() {
    self::prelude();
    println!("cargo:rustc-cfg=nightly");
}
