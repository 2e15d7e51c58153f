use std::io::Write;
use std::path::PathBuf;

use fdi_explorer::data::loader::{load_csv_reader, load_file, load_json_str};
use fdi_explorer::{AreaKind, DatasetType, YearRange};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn years() -> YearRange {
    YearRange::new(2019, 2021)
}

#[test]
fn json_fixture_builds_both_corpora() {
    let ds = load_file(&fixture("fdi_small.json"), years()).unwrap();

    assert_eq!(ds.areas(DatasetType::Inflows).len(), 9);
    assert_eq!(ds.areas(DatasetType::Outflows).len(), 7);

    let ghana = ds.find(DatasetType::Inflows, "Ghana").unwrap();
    assert_eq!(ghana.kind, AreaKind::Country);
    assert_eq!(
        ghana.ancestors,
        ["World", "Developing economies", "Africa"]
    );
    assert_eq!(ghana.series[0], 3879.8);
    assert!(ghana.series[2].is_nan());

    let lux = ds.find(DatasetType::Inflows, "Luxembourg").unwrap();
    assert_eq!(lux.ancestors, ["World", "Developed economies", "Europe"]);
    assert_eq!(lux.series[0], -2474.0);
}

#[test]
fn corpora_get_independent_ancestor_stacks() {
    let ds = load_file(&fixture("fdi_small.json"), years()).unwrap();

    // Inflows end three levels deep; outflows must still start at the root.
    let world = ds.find(DatasetType::Outflows, "World").unwrap();
    assert!(world.ancestors.is_empty());
    let nigeria = ds.find(DatasetType::Outflows, "Nigeria").unwrap();
    assert_eq!(
        nigeria.ancestors,
        ["World", "Developing economies", "Africa"]
    );
    assert!(nigeria.series[2].is_nan());
}

#[test]
fn invalid_level_is_reported_with_context() {
    let doc = r#"{
        "fdi_inflows": [
            { "Region/economy": "World", "level": "0", "type": "region" },
            { "Region/economy": "Africa", "level": "one", "type": "region" }
        ]
    }"#;
    let err = load_json_str(doc, years()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("validating 'fdi_inflows'"), "{msg}");
    assert!(msg.contains("row 1 (Africa)"), "{msg}");
}

#[test]
fn unknown_keys_are_ignored_but_empty_documents_fail() {
    let doc = r#"{
        "fdi_inflows": [ { "Region/economy": "World", "level": 0, "type": "region", "2020": 1.5 } ],
        "population": []
    }"#;
    let ds = load_json_str(doc, years()).unwrap();
    assert_eq!(ds.areas(DatasetType::Inflows).len(), 1);
    assert!(ds.areas(DatasetType::Outflows).is_empty());

    assert!(load_json_str(r#"{ "population": [] }"#, years()).is_err());
    assert!(load_json_str("[]", years()).is_err());
}

#[test]
fn csv_table_matches_json_shape() {
    let csv = "\
dataset,Region/economy,level,type,2019,2020,2021
fdi_inflows,World,0,region,1480625.1,963139.2,1582310.2
fdi_inflows,Africa,1,region,47035.9,39220.5,82908.9
fdi_inflows,Nigeria,2,country,2305.1,,3312.9
fdi_inflows,Asia,1,region,473823.6,535325.7,619281.4
fdi_outflows,World,0,region,1116766.6,739871.9,1707593.0
";
    let ds = load_csv_reader(csv.as_bytes(), years()).unwrap();

    let nigeria = ds.find(DatasetType::Inflows, "Nigeria").unwrap();
    assert_eq!(nigeria.ancestors, ["World", "Africa"]);
    assert!(nigeria.series[1].is_nan());
    assert_eq!(
        ds.find(DatasetType::Inflows, "Asia").unwrap().ancestors,
        ["World"]
    );
    assert_eq!(ds.areas(DatasetType::Outflows).len(), 1);
}

#[test]
fn csv_file_on_disk() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "dataset,Region/economy,level,type,2020").unwrap();
    writeln!(file, "fdi_outflows,World,0,region,-12.5").unwrap();

    let ds = load_file(file.path(), years()).unwrap();
    let world = ds.find(DatasetType::Outflows, "World").unwrap();
    assert_eq!(world.series[1], -12.5);
    assert!(world.series[0].is_nan());
}

#[test]
fn unsupported_extension() {
    let err = load_file(&PathBuf::from("data.xlsx"), years()).unwrap_err();
    assert!(format!("{err:#}").contains("Unsupported file extension"));
}
