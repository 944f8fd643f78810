use std::fs;

use fieldmap_ingest::load_field_table;
use fieldmap_model::{Candidate, FieldTable};
use fieldmap_report::{write_candidates, write_candidates_to, write_field_table};

fn candidate(source: &str, target: &str, suffix_len: usize, score: i32) -> Candidate {
    Candidate {
        source_path: source.to_string(),
        source_type: "Max35Text".to_string(),
        target_path: target.to_string(),
        target_type: "Max35Text".to_string(),
        suffix_len,
        score,
        confidence: (score.max(0) as u32 * 4).min(100),
        mapped_already: false,
    }
}

#[test]
fn candidate_table_layout() {
    let candidates = vec![
        candidate("msgA.dbtr.id", "msgB.dbtr.id", 2, 36),
        candidate("msgA.dbtr.id", "msgB.cdtr.id", 1, 23),
    ];
    let mut buf = Vec::new();
    write_candidates_to(&mut buf, &candidates).unwrap();
    let output = String::from_utf8(buf).unwrap();
    insta::assert_snapshot!(output.trim_end(), @r"
    sourcePath,sourceType,targetPath,targetType,suffixLen,score,confidence,mappedAlready
    msgA.dbtr.id,Max35Text,msgB.dbtr.id,Max35Text,2,36,100,false
    msgA.dbtr.id,Max35Text,msgB.cdtr.id,Max35Text,1,23,92,false
    ");
}

#[test]
fn empty_candidate_table_still_has_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/candidates.csv");
    write_candidates(&path, &[]).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "sourcePath,sourceType,targetPath,targetType,suffixLen,score,confidence,mappedAlready\n"
    );
}

#[test]
fn field_table_round_trip_preserves_every_column() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("matrix.csv");
    let content = "sourcePath,sourceType,targetPath,targetType,mappingStrategy,status,testCaseId,notes\n\
                   a.b,B,c.b,B,manual,done,TC-1,\"checked, twice\"\n\
                   d.e,,,,,not-started,TC-2,\n";
    fs::write(&input, content).unwrap();

    let table = load_field_table(&input).unwrap();
    let output = dir.path().join("out.csv");
    write_field_table(&output, &table).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), content);
    let reloaded = load_field_table(&output).unwrap();
    assert_eq!(reloaded, table);
}

#[test]
fn missing_core_columns_are_appended() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("matrix.csv");
    fs::write(&input, "sourcePath,targetPath\na.b,\n").unwrap();

    let mut table: FieldTable = load_field_table(&input).unwrap();
    table.rows[0].status = "done".to_string();
    let output = dir.path().join("out.csv");
    write_field_table(&output, &table).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("sourcePath,targetPath,sourceType,targetType,mappingStrategy,status,notes")
    );
    assert_eq!(lines.next(), Some("a.b,,,,,done,"));
}
