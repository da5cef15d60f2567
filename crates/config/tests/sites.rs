use std::fs;
use std::path::Path;

use lunisolar_config::{ConfigError, find_site, load_sites};

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write fixture");
}

#[test]
fn directory_catalog_is_sorted_and_skips_other_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        &dir.path().join("b_oslo.toml"),
        "name = \"Oslo\"\nlatitude_deg = 59.91\nlongitude_deg = 10.75\nutc_offset_hours = 2.0\n",
    );
    write(
        &dir.path().join("a_quito.toml"),
        "name = \"Quito\"\nlatitude_deg = -0.18\nlongitude_deg = -78.47\n",
    );
    write(&dir.path().join("README.md"), "not a site");

    let sites = load_sites(dir.path()).expect("directory catalog");
    let names: Vec<_> = sites.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Quito", "Oslo"]);
    assert_eq!(sites[0].utc_offset_hours, 0.0);
    assert_eq!(sites[1].utc_offset_hours, 2.0);
}

#[test]
fn single_toml_and_yaml_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let toml_path = dir.path().join("site.toml");
    write(
        &toml_path,
        "name = \"Lima\"\nlatitude_deg = -12.05\nlongitude_deg = -77.04\nutc_offset_hours = -5.0\n",
    );
    let sites = load_sites(&toml_path).expect("single toml");
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].name, "Lima");

    let yaml_path = dir.path().join("sites.yaml");
    write(
        &yaml_path,
        "- name: Cairo\n  latitude_deg: 30.04\n  longitude_deg: 31.24\n  utc_offset_hours: 2.0\n\
         - name: Perth\n  latitude_deg: -31.95\n  longitude_deg: 115.86\n",
    );
    let sites = load_sites(&yaml_path).expect("yaml list");
    assert_eq!(sites.len(), 2);
    let perth = find_site(&sites, "PERTH").expect("perth");
    assert_eq!(perth.utc_offset_hours, 0.0);
}

#[test]
fn out_of_range_site_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    write(&path, "name = \"Nowhere\"\nlatitude_deg = 95.0\nlongitude_deg = 0.0\n");
    match load_sites(&path) {
        Err(ConfigError::InvalidSite { name, reason }) => {
            assert_eq!(name, "Nowhere");
            assert!(reason.contains("latitude"));
        }
        other => panic!("expected InvalidSite, got {other:?}"),
    }
}

#[test]
fn malformed_files_surface_parse_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let toml_path = dir.path().join("broken.toml");
    write(&toml_path, "name = \"Broken\"\nlatitude_deg = \"north\"\n");
    assert!(matches!(load_sites(&toml_path), Err(ConfigError::Toml(_))));

    let yaml_path = dir.path().join("broken.yaml");
    write(&yaml_path, "name: [unterminated\n");
    assert!(matches!(load_sites(&yaml_path), Err(ConfigError::Parse(_))));

    let missing = dir.path().join("missing.yaml");
    assert!(matches!(load_sites(&missing), Err(ConfigError::Io(_))));
}

#[test]
fn shipped_catalog_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configs/sites");
    let sites = load_sites(&path).expect("shipped sites");
    assert!(sites.len() >= 4);
    let seattle = find_site(&sites, "seattle").expect("seattle");
    assert_eq!(seattle.latitude_deg, 47.6062);
    assert_eq!(seattle.utc_offset_hours, -7.0);
    assert!(find_site(&sites, "McMurdo").is_ok());
}
