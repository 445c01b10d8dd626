use std::fs;
use std::io::Cursor;

use ptrie_dict::config::{Config, Stage};
use ptrie_dict::error::DictError;

const HEADER: &str = "PFI,EZI_ADD,SRC_VERIF,PROPSTATUS,GCODEFEAT,LOC_DESC,BLGUNTTYP,HSAUNITID,BUNIT_PRE1,BUNIT_ID1,BUNIT_SUF1,BUNIT_PRE2,BUNIT_ID2,BUNIT_SUF2,FLOOR_TYPE,FLOOR_NO_1,FLOOR_NO_2,BUILDING,COMPLEX,HSE_PREF1,HSE_NUM1,HSE_SUF1,HSE_PREF2,HSE_NUM2,HSE_SUF2,DISP_NUM1,ROAD_NAME,ROAD_TYPE,RD_SUF,LOCALITY,STATE,POSTCODE,ACCESSTYPE,x,y";

fn row(pfi: &str, key: &str, x: &str, y: &str) -> String {
    let mut fields = vec![String::new(); 35];
    fields[0] = pfi.to_string();
    fields[1] = format!("\"{key}\"");
    fields[30] = "VIC".to_string();
    fields[33] = x.to_string();
    fields[34] = y.to_string();
    fields.join(",")
}

fn write_input(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("addresses.csv");
    let rows = [
        HEADER.to_string(),
        row("100", "1 FLINDERS STREET MELBOURNE 3000", "144.9712", "-37.8183"),
        row("200", "2 COLLINS STREET MELBOURNE 3000", "144.9730", "-37.8141"),
        row("300", "1 FLINDERS STREET MELBOURNE 3000", "144.9712", "-37.8183"),
        row("400", "", "0", "0"),
    ];
    fs::write(&path, rows.join("\n") + "\n").unwrap();
    path
}

fn config(dir: &tempfile::TempDir, stage: Stage) -> Config {
    Config {
        stage,
        input: write_input(dir),
        output: dir.path().join("out.txt"),
        key_field: 1,
    }
}

#[test]
fn scan_stage_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir, Stage::Scan);
    let mut summary = Vec::new();

    let totals = ptrie_dict::run(
        &config,
        Cursor::new("1 FLINDERS STREET MELBOURNE 3000\n1 FLINDERS ST\n"),
        &mut summary,
    )
    .unwrap();
    assert_eq!(totals.queries, 2);
    assert_eq!(totals.records, 2);

    let output = fs::read_to_string(&config.output).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "1 FLINDERS STREET MELBOURNE 3000");
    assert!(lines[1].starts_with("--> PFI: 100 || EZI_ADD: 1 FLINDERS STREET MELBOURNE 3000 || "));
    assert!(lines[1].ends_with("x: 144.97120 || y: -37.81830 || "));
    assert!(lines[2].starts_with("--> PFI: 300 || "));
    assert_eq!(lines[3], "1 FLINDERS ST");

    let summary = String::from_utf8(summary).unwrap();
    let summary: Vec<&str> = summary.lines().collect();
    assert!(summary[0].starts_with("1 FLINDERS STREET MELBOURNE 3000 --> 2 records found"));
    assert!(summary[0].ends_with("n4 s4"));
    assert!(summary[1].starts_with("1 FLINDERS ST --> 0 records found"));
}

#[test]
fn trie_stage_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir, Stage::Trie);
    let mut summary = Vec::new();

    let totals = ptrie_dict::run(
        &config,
        Cursor::new("2 COLINS STREET MELBOURNE 3000\n"),
        &mut summary,
    )
    .unwrap();
    assert_eq!(totals.records, 1);

    let output = fs::read_to_string(&config.output).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "2 COLINS STREET MELBOURNE 3000");
    assert!(lines[1].starts_with("--> PFI: 200 || EZI_ADD: 2 COLLINS STREET MELBOURNE 3000 || "));

    let summary = String::from_utf8(summary).unwrap();
    assert!(summary.starts_with("2 COLINS STREET MELBOURNE 3000 --> 1 records found - comparisons: b"));
}

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        stage: Stage::Trie,
        input: dir.path().join("nope.csv"),
        output: dir.path().join("out.txt"),
        key_field: 1,
    };
    let err = ptrie_dict::run(&config, Cursor::new(""), &mut Vec::new()).unwrap_err();
    match &err {
        DictError::Open { path, .. } => assert_eq!(path, &config.input),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().starts_with("cannot open "));
}
