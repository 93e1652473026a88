//! Load `.icon-builder.toml` from the scripts directory (CLI only). Lib callers build [`Opts`] themselves.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Opts, ReleaseInfo};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BuilderToml {
    #[serde(default)]
    settings: SettingsSection,
    #[serde(default)]
    release: ReleaseSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    threads: Option<usize>,
    verbose: Option<bool>,
    progress: Option<bool>,
    strict: Option<bool>,
    java: Option<String>,
    plantuml_jar: Option<String>,
    max_target_size: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct ReleaseSection {
    version: Option<String>,
    date: Option<String>,
}

/// Load the settings file. `Ok(None)` if missing or unreadable; `Err` if malformed (caller warns once logging is up).
pub(crate) fn load_builder_toml(path: &Path) -> Result<Option<BuilderToml>, toml::de::Error> {
    match std::fs::read_to_string(path) {
        Ok(s) => parse_builder_toml(&s).map(Some),
        Err(_) => Ok(None),
    }
}

pub(crate) fn parse_builder_toml(s: &str) -> Result<BuilderToml, toml::de::Error> {
    toml::from_str(s)
}

/// Defaults with `.icon-builder.toml` at `path` applied. A malformed file (bad TOML, wrong types,
/// invalid release date) leaves the defaults untouched and comes back as a warning to log once
/// logging is up.
pub(crate) fn opts_from_file(path: &Path) -> (Opts, Option<String>) {
    let defaults = Opts::default();
    let file = match load_builder_toml(path) {
        Ok(Some(file)) => file,
        Ok(None) => return (defaults, None),
        Err(e) => return (defaults, Some(e.to_string())),
    };
    let mut opts = defaults.clone();
    match apply_file_to_opts(&file, &mut opts) {
        Ok(()) => (opts, None),
        Err(e) => (defaults, Some(format!("{e:#}"))),
    }
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field.clone() {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI. check_env is never in the file.
pub(crate) fn apply_file_to_opts(file: &BuilderToml, opts: &mut Opts) -> Result<()> {
    let s = &file.settings;
    if let Some(n) = s.threads {
        opts.num_threads = Some(n);
    }
    apply_file_opt!(s, opts, verbose => verbose);
    apply_file_opt!(s, opts, progress => progress);
    apply_file_opt!(s, opts, strict => strict);
    apply_file_opt!(s, opts, java => java);
    if let Some(ref jar) = s.plantuml_jar {
        opts.plantuml_jar = PathBuf::from(jar);
    }
    apply_file_opt!(s, opts, max_target_size => max_target_size);

    let r = &file.release;
    if r.version.is_some() || r.date.is_some() {
        let version = r
            .version
            .clone()
            .unwrap_or_else(|| opts.release.version.clone());
        opts.release = match r.date.as_deref() {
            Some(date) => ReleaseInfo::from_date(&version, date)?,
            None => ReleaseInfo {
                version,
                last_modified: opts.release.last_modified,
            },
        };
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::ReleaseDefaults;

    #[test]
    fn test_empty_file_keeps_defaults() {
        let file = parse_builder_toml("").unwrap();
        let mut opts = Opts::default();
        apply_file_to_opts(&file, &mut opts).unwrap();
        assert_eq!(opts.num_threads, None);
        assert_eq!(opts.release, ReleaseInfo::default());
    }

    #[test]
    fn test_settings_override_defaults() {
        let file = parse_builder_toml(
            "[settings]\nthreads = 3\nstrict = true\njava = \"/opt/java/bin/java\"\nmax_target_size = 64\n",
        )
        .unwrap();
        let mut opts = Opts::default();
        apply_file_to_opts(&file, &mut opts).unwrap();
        assert_eq!(opts.num_threads, Some(3));
        assert!(opts.strict);
        assert!(!opts.progress);
        assert_eq!(opts.java, "/opt/java/bin/java");
        assert_eq!(opts.max_target_size, 64);
    }

    #[test]
    fn test_release_section() {
        let file = parse_builder_toml("[release]\nversion = \"21.0\"\ndate = \"2025-02-08\"\n").unwrap();
        let mut opts = Opts::default();
        apply_file_to_opts(&file, &mut opts).unwrap();
        assert_eq!(opts.release.version, "21.0");
        assert_eq!(opts.release.last_modified, 1_738_886_400 + 86_400);
    }

    #[test]
    fn test_release_version_only_keeps_default_date() {
        let file = parse_builder_toml("[release]\nversion = \"21.0\"\n").unwrap();
        let mut opts = Opts::default();
        apply_file_to_opts(&file, &mut opts).unwrap();
        assert_eq!(opts.release.version, "21.0");
        assert_eq!(
            opts.release.last_modified,
            ReleaseInfo::from_date(ReleaseDefaults::VERSION, ReleaseDefaults::DATE)
                .unwrap()
                .last_modified
        );
    }

    #[test]
    fn test_bad_release_date_is_an_error() {
        let file = parse_builder_toml("[release]\ndate = \"07/02/2025\"\n").unwrap();
        let mut opts = Opts::default();
        assert!(apply_file_to_opts(&file, &mut opts).is_err());
    }

    fn write_settings(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(".icon-builder.toml");
        std::fs::write(&path, contents).unwrap();
        (tmp, path)
    }

    #[test]
    fn test_opts_from_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let (opts, warning) = opts_from_file(&tmp.path().join(".icon-builder.toml"));
        assert!(warning.is_none());
        assert_eq!(opts.num_threads, None);
    }

    #[test]
    fn test_opts_from_valid_file() {
        let (_tmp, path) = write_settings("[settings]\nthreads = 2\n[release]\nversion = \"21.0\"\n");
        let (opts, warning) = opts_from_file(&path);
        assert!(warning.is_none());
        assert_eq!(opts.num_threads, Some(2));
        assert_eq!(opts.release.version, "21.0");
    }

    #[test]
    fn test_opts_from_file_bad_date_warns_and_keeps_defaults() {
        let (_tmp, path) =
            write_settings("[settings]\nthreads = 2\n[release]\ndate = \"07/02/2025\"\n");
        let (opts, warning) = opts_from_file(&path);
        assert!(warning.unwrap().contains("07/02/2025"));
        assert_eq!(opts.num_threads, None);
        assert_eq!(opts.release, ReleaseInfo::default());
    }

    #[test]
    fn test_opts_from_malformed_toml_warns() {
        let (_tmp, path) = write_settings("[settings\nthreads = 2\n");
        let (opts, warning) = opts_from_file(&path);
        assert!(warning.is_some());
        assert_eq!(opts.num_threads, None);
    }

    #[test]
    fn test_unknown_types_rejected() {
        assert!(parse_builder_toml("[settings]\nthreads = \"many\"\n").is_err());
    }
}
