//! CLI Argument Parsing
//!
//! Flags left unset fall back to the usual locations under the Android build
//! environment (`ANDROID_BUILD_TOP`, `TARGET_PRODUCT`, `ANDROID_PRODUCT_OUT`).
//! A default that cannot be resolved is a usage error.

use std::path::PathBuf;

use clap::Parser;

use crate::application::SplitOptions;
use crate::error::{SplitError, SplitResult};

pub const ENV_BUILD_TOP: &str = "ANDROID_BUILD_TOP";
pub const ENV_TARGET_PRODUCT: &str = "TARGET_PRODUCT";
pub const ENV_PRODUCT_OUT: &str = "ANDROID_PRODUCT_OUT";

/// Split a repo manifest down to the projects needed to build some targets
#[derive(Parser, Debug, Clone)]
#[command(name = "manifest-split")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Targets that must remain buildable
    #[arg(required = true, num_args = 1..)]
    pub targets: Vec<String>,

    /// Manifest to split
    #[arg(long, value_name = "FILE", required = true)]
    pub manifest: PathBuf,

    /// Where to write the split manifest
    #[arg(long, value_name = "FILE", required = true)]
    pub split_manifest: PathBuf,

    /// Override file with add_project / remove_project entries (repeatable)
    #[arg(long = "config", value_name = "FILE")]
    pub configs: Vec<PathBuf>,

    /// File holding `path : name` lines (default: run `repo list`)
    #[arg(long, value_name = "FILE")]
    pub repo_list: Option<PathBuf>,

    /// Combined ninja file
    /// [default: $ANDROID_BUILD_TOP/out/combined-$TARGET_PRODUCT.ninja]
    #[arg(long, value_name = "FILE")]
    pub ninja_build: Option<PathBuf>,

    /// Ninja binary
    #[arg(long, value_name = "FILE")]
    pub ninja_binary: Option<PathBuf>,

    /// module-info.json [default: $ANDROID_PRODUCT_OUT/module-info.json]
    #[arg(long, value_name = "FILE")]
    pub module_info: Option<PathBuf>,

    /// Kati stamp file [default: $ANDROID_BUILD_TOP/out/.kati_stamp-$TARGET_PRODUCT]
    #[arg(long, value_name = "FILE")]
    pub kati_stamp: Option<PathBuf>,

    /// Overlay root searched for product makefiles (repeatable)
    #[arg(long = "overlay", value_name = "DIR")]
    pub overlays: Vec<PathBuf>,

    /// Write per-project provenance as JSON
    #[arg(long, value_name = "FILE")]
    pub debug_file: Option<PathBuf>,

    /// TOML settings file
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Everything a run needs once defaults are filled in.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub options: SplitOptions,
    pub repo_list: Option<PathBuf>,
    pub ninja_build: PathBuf,
    pub ninja_binary: Option<PathBuf>,
    pub kati_stamp: PathBuf,
}

impl Cli {
    /// Resolve defaults from the process environment.
    pub fn resolve(&self) -> SplitResult<Invocation> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolve defaults using `lookup` for environment variables.
    pub fn resolve_with<F>(&self, lookup: F) -> SplitResult<Invocation>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ninja_build = match &self.ninja_build {
            Some(path) => path.clone(),
            None => {
                let (top, product) = build_env(&lookup, "--ninja-build")?;
                PathBuf::from(top)
                    .join("out")
                    .join(format!("combined-{product}.ninja"))
            }
        };

        let kati_stamp = match &self.kati_stamp {
            Some(path) => path.clone(),
            None => {
                let (top, product) = build_env(&lookup, "--kati-stamp")?;
                PathBuf::from(top)
                    .join("out")
                    .join(format!(".kati_stamp-{product}"))
            }
        };

        let module_info = match &self.module_info {
            Some(path) => path.clone(),
            None => PathBuf::from(require(&lookup, ENV_PRODUCT_OUT, "--module-info")?)
                .join("module-info.json"),
        };

        let mut options = SplitOptions::new(
            self.targets.clone(),
            &self.manifest,
            &self.split_manifest,
            module_info,
        )
        .with_config_files(self.configs.clone())
        .with_overlays(self.overlays.clone());
        if let Some(debug_file) = &self.debug_file {
            options = options.with_debug_file(debug_file);
        }

        Ok(Invocation {
            options,
            repo_list: self.repo_list.clone(),
            ninja_build,
            ninja_binary: self.ninja_binary.clone(),
            kati_stamp,
        })
    }
}

fn require<F>(lookup: &F, var: &str, flag: &str) -> SplitResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| SplitError::MissingInput {
            flag: flag.to_string(),
            hint: format!("{var} is not set"),
        })
}

fn build_env<F>(lookup: &F, flag: &str) -> SplitResult<(String, String)>
where
    F: Fn(&str) -> Option<String>,
{
    Ok((
        require(lookup, ENV_BUILD_TOP, flag)?,
        require(lookup, ENV_TARGET_PRODUCT, flag)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("manifest-split").chain(args.iter().copied())).unwrap()
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: [&str; 4] = ["--manifest", "default.xml", "--split-manifest", "split.xml"];

    #[test]
    fn parses_repeatable_flags() {
        let cli = parse(&[
            "droid",
            "dist",
            "--manifest",
            "default.xml",
            "--split-manifest",
            "split.xml",
            "--config",
            "a.xml",
            "--config",
            "b.xml",
            "--overlay",
            "overlays/one",
            "-vv",
        ]);

        assert_eq!(cli.targets, vec!["droid", "dist"]);
        assert_eq!(cli.configs, vec![PathBuf::from("a.xml"), PathBuf::from("b.xml")]);
        assert_eq!(cli.overlays, vec![PathBuf::from("overlays/one")]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn targets_are_required() {
        let err = Cli::try_parse_from(
            ["manifest-split"].into_iter().chain(REQUIRED.iter().copied()),
        )
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn split_manifest_is_required() {
        let err = Cli::try_parse_from(["manifest-split", "droid", "--manifest", "default.xml"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn defaults_come_from_build_environment() {
        let mut args = vec!["droid"];
        args.extend(REQUIRED);
        let invocation = parse(&args)
            .resolve_with(env(&[
                (ENV_BUILD_TOP, "/src/aosp"),
                (ENV_TARGET_PRODUCT, "acme_phone"),
                (ENV_PRODUCT_OUT, "/src/aosp/out/target/product/phone"),
            ]))
            .unwrap();

        assert_eq!(
            invocation.ninja_build,
            PathBuf::from("/src/aosp/out/combined-acme_phone.ninja")
        );
        assert_eq!(
            invocation.kati_stamp,
            PathBuf::from("/src/aosp/out/.kati_stamp-acme_phone")
        );
        assert_eq!(
            invocation.options.module_info,
            PathBuf::from("/src/aosp/out/target/product/phone/module-info.json")
        );
        assert!(invocation.repo_list.is_none());
        assert!(invocation.options.debug_file.is_none());
    }

    #[test]
    fn explicit_flags_need_no_environment() {
        let mut args = vec!["droid"];
        args.extend(REQUIRED);
        args.extend([
            "--ninja-build",
            "combined.ninja",
            "--kati-stamp",
            "stamp",
            "--module-info",
            "module-info.json",
            "--debug-file",
            "debug.json",
        ]);

        let invocation = parse(&args).resolve_with(env(&[])).unwrap();

        assert_eq!(invocation.ninja_build, PathBuf::from("combined.ninja"));
        assert_eq!(invocation.options.debug_file, Some(PathBuf::from("debug.json")));
    }

    #[test]
    fn unresolvable_default_is_usage_error() {
        let mut args = vec!["droid"];
        args.extend(REQUIRED);
        args.extend(["--kati-stamp", "stamp", "--module-info", "module-info.json"]);

        let err = parse(&args)
            .resolve_with(env(&[(ENV_TARGET_PRODUCT, "acme_phone")]))
            .unwrap_err();

        assert!(err.is_usage());
        assert!(err.to_string().contains("--ninja-build"));
        assert!(err.to_string().contains(ENV_BUILD_TOP));
    }
}
