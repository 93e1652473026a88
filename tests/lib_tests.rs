use icon_builder::ReleaseInfo;
use icon_builder::engine::{has_extension, is_os_hidden_file, path_relative_to};
use icon_builder::icon::{Icon, IconConfig, make_name, trim_suffix};
use icon_builder::pipeline::{
    distinct_categories, is_source_image, markdown_header, markdown_row, parse_px, png_data_uri,
};
use icon_builder::utils::config::{ProjectPaths, WorkerThreadLimits};
use std::path::{Path, PathBuf};

// --- path_relative_to ---

#[test]
fn test_path_relative_under_base() {
    let base = PathBuf::from("/foo/bar");
    let path = PathBuf::from("/foo/bar/baz/qux.png");
    assert_eq!(
        path_relative_to(&path, &base),
        Some(PathBuf::from("baz/qux.png"))
    );
}

#[test]
fn test_path_relative_not_under_base() {
    let base = PathBuf::from("/foo/bar");
    let path = PathBuf::from("/other/qux.png");
    assert_eq!(path_relative_to(&path, &base), None);
}

// --- has_extension / is_source_image ---

#[test]
fn test_has_extension_case_sensitive() {
    assert!(has_extension(Path::new("a/b.png"), "png"));
    assert!(!has_extension(Path::new("a/b.PNG"), "png"));
    assert!(!has_extension(Path::new("a/b.svg"), "png"));
    assert!(!has_extension(Path::new("a/png"), "png"));
}

#[test]
fn test_is_source_image() {
    assert!(is_source_image(Path::new("official/compute/gke.png"), true));
    assert!(!is_source_image(Path::new("official/compute/gke.png"), false));
    assert!(!is_source_image(Path::new("official/compute/gke.svg"), true));
    assert!(!is_source_image(Path::new("official/compute/GKE.PNG"), true));
    assert!(!is_source_image(Path::new("official/compute/._gke.png"), true));
}

// --- is_os_hidden_file ---

#[test]
fn test_os_hidden_files() {
    assert!(is_os_hidden_file(Path::new("x/.DS_Store")));
    assert!(is_os_hidden_file(Path::new("x/Thumbs.db")));
    assert!(is_os_hidden_file(Path::new("x/._resource.png")));
    assert!(!is_os_hidden_file(Path::new("x/bigquery.png")));
}

// --- naming ---

#[test]
fn test_make_name() {
    assert_eq!(make_name("cloud_run"), "CloudRun");
    assert_eq!(make_name("Cloud-SQL"), "CloudSQL");
    assert_eq!(make_name("2fa"), "_2fa");
}

#[test]
fn test_trim_suffix_then_make_name() {
    let suffixes = vec!["-512-color".to_string()];
    assert_eq!(make_name(trim_suffix("Pub-Sub-512-color", &suffixes)), "PubSub");
}

#[test]
fn test_icon_without_config_rules() {
    let official = Path::new("/p/source/official");
    let icon = Icon::new(
        &official.join("networking/cloud_load_balancing.png"),
        official,
        &IconConfig::default(),
    );
    assert_eq!(icon.category, "Networking");
    assert_eq!(icon.target, "CloudLoadBalancing");
    assert_eq!(icon.source_name, "cloud_load_balancing");
}

#[test]
fn test_distinct_categories_sorted() {
    let official = Path::new("/p/source/official");
    let cfg = IconConfig::default();
    let icons: Vec<Icon> = ["storage/a.png", "compute/b.png", "storage/c.png"]
        .iter()
        .map(|p| Icon::new(&official.join(p), official, &cfg))
        .collect();
    assert_eq!(distinct_categories(&icons), vec!["Compute", "Storage"]);
}

// --- embed helpers ---

#[test]
fn test_parse_px() {
    assert_eq!(parse_px("32px").unwrap(), 32);
    assert_eq!(parse_px("64").unwrap(), 64);
    assert!(parse_px("auto").is_err());
}

#[test]
fn test_png_data_uri() {
    assert_eq!(
        png_data_uri(&[0x89, b'P', b'N', b'G']),
        "data:image/png;base64,iVBORw=="
    );
}

// --- markdown ---

#[test]
fn test_markdown_header_and_row() {
    assert_eq!(markdown_header(), "# GCP Symbols\n\n");

    let official = Path::new("/p/source/official");
    let icon = Icon::new(
        &official.join("compute/gke.png"),
        official,
        &IconConfig::default(),
    );
    assert_eq!(
        markdown_row(&icon),
        "Compute | Gke | ![Gke](dist/Compute/Gke.png?raw=true) | Compute/Gke.puml\n"
    );
}

// --- release info ---

#[test]
fn test_release_default_matches_release_date() {
    let parsed = ReleaseInfo::from_date("20.0", "2025-02-07").unwrap();
    assert_eq!(parsed, ReleaseInfo::default());
    assert_eq!(parsed.last_modified, 1_738_886_400);
}

#[test]
fn test_release_bad_date() {
    assert!(ReleaseInfo::from_date("20.0", "2025-13-01").is_err());
    assert!(ReleaseInfo::from_date("20.0", "yesterday").is_err());
}

// --- layout / tuning ---

#[test]
fn test_project_paths_layout() {
    let paths = ProjectPaths::new(Path::new("/repo/scripts"));
    assert_eq!(paths.config_file, Path::new("/repo/scripts/config.yml"));
    assert_eq!(
        paths.common_puml,
        Path::new("/repo/scripts/../source/GCPCommon.puml")
    );
    assert_eq!(
        paths.official_dir,
        Path::new("/repo/scripts/../source/official")
    );
    assert_eq!(
        paths.mermaid_file,
        Path::new("/repo/scripts/../dist/gcp-icons-mermaid.json")
    );
    assert_eq!(
        paths.theme_file,
        Path::new("/repo/scripts/../dist/gcp-icons-structurizr-theme.json")
    );
    assert_eq!(
        paths.markdown_file,
        Path::new("/repo/scripts/../GCPSymbols.md")
    );
}

#[test]
fn test_pool_size() {
    let limits = WorkerThreadLimits {
        all_threads: 8,
        ..WorkerThreadLimits::default()
    };
    assert_eq!(limits.pool_size(None), 8);
    assert_eq!(limits.pool_size(Some(3)), 3);
    assert_eq!(limits.pool_size(Some(0)), WorkerThreadLimits::FLOOR_THREADS);
}
