use std::env;
use std::process::Command;

const STRATEGIES: [&str; 5] = [
	"memset_s",
	"secure_zero_memory",
	"explicit_bzero",
	"explicit_memset",
	"volatile",
];

/// Checks whether the host glibc is recent enough for `explicit_bzero` (2.25)
///
/// Only meaningful for native builds. Anything that cannot be parsed is taken
/// to be a modern glibc.
fn glibc_has_explicit_bzero() -> bool {
	let output = match Command::new("getconf").arg("GNU_LIBC_VERSION").output() {
		Ok(output) if output.status.success() => output,
		_ => return true,
	};

	// Output looks like `glibc 2.36`
	let text = String::from_utf8_lossy(&output.stdout);
	let version = match text.split_whitespace().nth(1) {
		Some(version) => version,
		None => return true,
	};

	let mut parts = version.split('.').map(|s| s.parse::<u32>());
	match (parts.next(), parts.next()) {
		(Some(Ok(major)), Some(Ok(minor))) => (major, minor) >= (2, 25),
		_ => true,
	}
}

fn platform_strategy(os: &str, target_env: &str, native: bool) -> Option<&'static str> {
	match os {
		"macos" | "ios" => Some("memset_s"),
		"windows" => Some("secure_zero_memory"),
		"freebsd" | "openbsd" | "dragonfly" => Some("explicit_bzero"),
		"netbsd" => Some("explicit_memset"),
		"linux" => match target_env {
			"musl" => Some("explicit_bzero"),
			"gnu" if !native || glibc_has_explicit_bzero() => Some("explicit_bzero"),
			_ => None,
		},
		_ => None,
	}
}

fn main() {
	println!("cargo:rerun-if-changed=build.rs");
	println!(
		"cargo:rustc-check-cfg=cfg(memerase, values(\"{}\"))",
		STRATEGIES.join("\", \"")
	);

	let os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
	let target_env = env::var("CARGO_CFG_TARGET_ENV").unwrap_or_default();
	let native = env::var("HOST").ok() == env::var("TARGET").ok();
	let fallback = env::var_os("CARGO_FEATURE_VOLATILE_FALLBACK").is_some();

	let strategy = match platform_strategy(&os, &target_env, native) {
		Some(strategy) => strategy,
		None if fallback => {
			println!(
				"cargo:warning=No secure memset known for `{}`; using volatile pointer writes",
				os
			);
			"volatile"
		}
		None => panic!(
			"No secure memset implementation known for target `{}` \
			(enable the `volatile-fallback` feature to accept volatile pointer writes)",
			os
		),
	};

	println!("cargo:rustc-cfg=memerase=\"{}\"", strategy);
}
