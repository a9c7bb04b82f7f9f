//! Build script for sigsafe-core
//!
//! Checks system requirements before compilation:
//! - Minimum Rust version (C string literals need 1.77)
//! - Linux kernel support for `process_vm_readv(2)` (3.2+)

fn main()
{
    if let Ok(rustc_version) = rustc_version::version() {
        let min_rust_version = rustc_version::Version::new(1, 77, 0);

        if rustc_version < min_rust_version {
            panic!(
                "sigsafe-core requires Rust {} or newer, found {}",
                min_rust_version, rustc_version
            );
        }
    } else {
        // If we can't get version (e.g., in some build environments), just warn
        println!("cargo:warning=could not verify Rust version");
    }

    #[cfg(target_os = "linux")]
    check_linux_requirements();
}

#[cfg(target_os = "linux")]
fn check_linux_requirements()
{
    // process_vm_readv() arrived in Linux 3.2. This is a host check, so only
    // warn: cross-compiles and containers may report a different kernel.
    let min_kernel = (3, 2);

    if let Some(version) = get_kernel_version() {
        if version < min_kernel {
            println!(
                "cargo:warning=process_vm_readv requires Linux {}.{}+, host kernel is {}.{}",
                min_kernel.0, min_kernel.1, version.0, version.1
            );
        }
    }
}

#[cfg(target_os = "linux")]
fn get_kernel_version() -> Option<(u32, u32)>
{
    let release = std::fs::read_to_string("/proc/sys/kernel/osrelease").ok()?;
    let mut parts = release.trim().split(['.', '-']);
    let major = parts.next()?.parse::<u32>().ok()?;
    let minor = parts.next()?.parse::<u32>().ok()?;
    Some((major, minor))
}
