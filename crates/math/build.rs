/// Constant-time arithmetic relies on the target's integer multiplier being
/// data-oblivious. That holds for every 64-bit target we support; targets
/// with early-exit multipliers (Cortex-M0/M3 class, RV32 without M) must not
/// silently compile secret-handling code.
fn main() {
    let target = std::env::var("TARGET").unwrap_or_default();
    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    let variable_time_mul = matches!(arch.as_str(), "arm" | "riscv32")
        || target.starts_with("thumbv6m")
        || target.starts_with("thumbv8m.base");

    if variable_time_mul {
        panic!(
            "target `{target}` has (or may have) a data-dependent multiplier; \
             constant-time field arithmetic cannot be guaranteed on it"
        );
    }

    println!("cargo:rerun-if-changed=build.rs");
}
