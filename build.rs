#[path = "src/surface.rs"]
#[allow(dead_code)]
mod surface;

use std::env;
use std::error::Error;
use std::path::PathBuf;

const DEFAULT_HEADER_DIR: &str = "/usr/local/include/pmacct";
const DEFAULT_LINK_SEARCH_DIR: &str = "/usr/local/lib";

/// Where the pmacct headers and library are, read from the environment.
#[derive(Debug)]
#[cfg_attr(not(feature = "verify-layout"), allow(dead_code))]
struct BuildConfig {
    /// pmacct source root, holding `src/*.h`.
    header_dir: PathBuf,
    /// Directory `<pmacct/src/...>` includes resolve against.
    include_dir: PathBuf,
    link_search_dir: PathBuf,
    link_lib: Option<String>,
}

fn env_var(name: &str) -> Option<String> {
    println!("cargo:rerun-if-env-changed={}", name);
    env::var(name).ok().filter(|value| !value.is_empty())
}

impl BuildConfig {
    fn from_env() -> BuildConfig {
        let header_dir = PathBuf::from(
            env_var("PMACCT_HEADER_DIR").unwrap_or_else(|| DEFAULT_HEADER_DIR.to_string()),
        );
        let include_dir = match env_var("PMACCT_INCLUDE_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => header_dir
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| header_dir.clone()),
        };
        let link_search_dir = PathBuf::from(
            env_var("LINK_SEARCH_DIR").unwrap_or_else(|| DEFAULT_LINK_SEARCH_DIR.to_string()),
        );

        BuildConfig {
            header_dir,
            include_dir,
            link_search_dir,
            link_lib: env_var("PMACCT_LINK_LIB"),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/surface.rs");

    let config = BuildConfig::from_env();

    if cfg!(feature = "link") {
        println!(
            "cargo:rustc-link-search=native={}",
            config.link_search_dir.display()
        );
        if let Some(lib) = &config.link_lib {
            println!("cargo:rustc-link-lib={}", lib);
        }
    }

    #[cfg(feature = "verify-layout")]
    generate::run(&config)?;

    Ok(())
}

#[cfg(feature = "verify-layout")]
mod generate {
    use super::surface::{self, HeaderSet};
    use super::BuildConfig;
    use bindgen::callbacks::{MacroParsingBehavior, ParseCallbacks};
    use std::collections::HashSet;
    use std::env;
    use std::error::Error;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Debug)]
    struct IgnoreMacros(HashSet<&'static str>);

    impl ParseCallbacks for IgnoreMacros {
        fn will_parse_macro(&self, name: &str) -> MacroParsingBehavior {
            if self.0.contains(name) {
                MacroParsingBehavior::Ignore
            } else {
                MacroParsingBehavior::Default
            }
        }
    }

    fn builder(config: &BuildConfig, wrapper: &Path, pmacct_src: &Path) -> bindgen::Builder {
        let mut builder = bindgen::Builder::default()
            .header(wrapper.to_string_lossy())
            .clang_arg(format!("-I{}", config.include_dir.display()))
            .clang_arg(format!("-I{}", pmacct_src.display()))
            .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
            .parse_callbacks(Box::new(IgnoreMacros(
                surface::IGNORED_MACROS.iter().copied().collect(),
            )))
            .layout_tests(false);

        for ty in surface::TYPES {
            builder = builder.allowlist_type(ty);
        }
        for ty in surface::OPAQUE_TYPES {
            builder = builder.allowlist_type(ty).opaque_type(ty);
        }
        for function in surface::FUNCTIONS {
            builder = builder.allowlist_function(function);
        }
        for constant in surface::CONSTANTS {
            builder = builder.allowlist_var(constant);
        }
        builder
    }

    /// Renders the wrapper header and runs bindgen on it, restricted to the surface.
    pub fn run(config: &BuildConfig) -> Result<(), Box<dyn Error>> {
        let pmacct_src = config.header_dir.join("src");
        if !pmacct_src.is_dir() {
            return Err(format!(
                "pmacct headers not found in {}, set PMACCT_HEADER_DIR",
                pmacct_src.display()
            )
            .into());
        }

        let out_dir = PathBuf::from(env::var("OUT_DIR")?);
        let wrapper = out_dir.join("imported.h");
        fs::write(&wrapper, surface::render_wrapper(HeaderSet::from_features()))?;

        let bindings = builder(config, &wrapper, &pmacct_src).generate()?;
        bindings.write_to_file(out_dir.join("pmacct_generated.rs"))?;

        // a second run, kept so tests can check generation is reproducible
        let rerun = builder(config, &wrapper, &pmacct_src).generate()?;
        rerun.write_to_file(out_dir.join("pmacct_generated.rerun.rs"))?;

        Ok(())
    }
}
