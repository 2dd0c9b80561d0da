//! Writing the three run outputs.

use std::{
  fs::File,
  io::{BufWriter, Write},
  path::{Path, PathBuf},
};

use roster_core::RunReport;

use crate::{Error, Result, ndjson::write_ndjson};

/// Where the run outputs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
  pub directives:       PathBuf,
  pub acknowledgements: PathBuf,
  pub log:              PathBuf,
}

/// Write directives, acknowledgements and the run log, in that order.
///
/// Each file is truncated and rewritten even when there is nothing to put in
/// it. The three writes are independent; a failure part-way leaves earlier
/// files already replaced.
pub fn emit(report: &RunReport, paths: &OutputPaths) -> Result<()> {
  write_file(&paths.directives, |w| {
    write_ndjson(w, &report.directives).map_err(std::io::Error::from)
  })?;
  write_file(&paths.acknowledgements, |w| {
    write_ndjson(w, &report.acknowledgements).map_err(std::io::Error::from)
  })?;
  write_file(&paths.log, |w| {
    write!(w, "{}", report.log)?;
    w.flush()
  })?;
  Ok(())
}

fn write_file<F>(path: &Path, body: F) -> Result<()>
where
  F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
  tracing::info!("writing {}", path.display());
  let io_err = |source: std::io::Error| Error::Io { path: path.to_path_buf(), source };

  let file = File::create(path).map_err(io_err)?;
  let mut writer = BufWriter::new(file);
  body(&mut writer).map_err(io_err)
}

#[cfg(test)]
mod tests {
  use std::fs;

  use chrono::NaiveDate;
  use roster_core::{ProcessOptions, process_batch};
  use serde_json::{Value, json};

  use super::*;

  fn paths(dir: &Path) -> OutputPaths {
    OutputPaths {
      directives:       dir.join("directives.jsonl"),
      acknowledgements: dir.join("acks.jsonl"),
      log:              dir.join("run.log"),
    }
  }

  fn report(input: Value) -> RunReport {
    let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
      .unwrap()
      .and_hms_opt(8, 0, 0)
      .unwrap();
    let Value::Array(records) = input else { panic!("array") };
    process_batch(&records, &ProcessOptions::at(ts))
  }

  fn lines(path: &Path) -> Vec<Value> {
    fs::read_to_string(path)
      .unwrap()
      .lines()
      .map(|l| serde_json::from_str(l).unwrap())
      .collect()
  }

  #[test]
  fn writes_all_three_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(dir.path());
    let report = report(json!([
      { "name": "Anna Öberg", "nationalId": "1", "jobTitle": "Nurse", "area": "Hisingen" },
      { "name": "Bo Svensson", "nationalId": "2", "jobTitle": "Receptionist" },
    ]));

    emit(&report, &paths).unwrap();

    let directives = lines(&paths.directives);
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0]["username"], "anna.oberg@goteborg.se");
    assert!(fs::read_to_string(&paths.directives).unwrap().contains("Öberg"));

    let acks = lines(&paths.acknowledgements);
    assert_eq!(acks.len(), 2);
    assert_eq!(acks[0]["status"], "OK");
    assert_eq!(acks[1]["status"], "FAIL");
    assert_eq!(acks[1]["reason"], "no roles matched the rules");

    let log = fs::read_to_string(&paths.log).unwrap();
    assert!(log.ends_with("Done: wrote 1 directives, 2 acknowledgements\n"));
  }

  #[test]
  fn fail_lines_echo_the_input_record_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(dir.path());
    let records = crate::parse_records(
      r#"[{"nationalId":"3","zeta":1,"alpha":"Å"}]"#,
      Path::new("in.json"),
    )
    .unwrap();
    let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
      .unwrap()
      .and_hms_opt(8, 0, 0)
      .unwrap();

    emit(&process_batch(&records, &ProcessOptions::at(ts)), &paths).unwrap();

    assert_eq!(
      fs::read_to_string(&paths.acknowledgements).unwrap(),
      "{\"correlationId\":\"corr-001\",\"status\":\"FAIL\",\"reason\":\"missing 'name'\",\
       \"person\":{\"nationalId\":\"3\",\"zeta\":1,\"alpha\":\"Å\"}}\n"
    );
  }

  #[test]
  fn empty_report_still_creates_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(dir.path());
    emit(&report(json!([])), &paths).unwrap();

    assert_eq!(fs::read_to_string(&paths.directives).unwrap(), "");
    assert_eq!(fs::read_to_string(&paths.acknowledgements).unwrap(), "");
    assert_eq!(
      fs::read_to_string(&paths.log).unwrap(),
      "[2024-05-01T08:00:00] Start connector run\n\
       Done: wrote 0 directives, 0 acknowledgements\n"
    );
  }

  #[test]
  fn previous_contents_are_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths(dir.path());
    for path in [&paths.directives, &paths.acknowledgements, &paths.log] {
      fs::write(path, "stale line\nstale line\nstale line\n").unwrap();
    }

    emit(&report(json!([{ "nationalId": "3" }])), &paths).unwrap();

    assert_eq!(fs::read_to_string(&paths.directives).unwrap(), "");
    assert_eq!(lines(&paths.acknowledgements).len(), 1);
    assert!(!fs::read_to_string(&paths.log).unwrap().contains("stale"));
  }

  #[test]
  fn unwritable_destination_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = paths(dir.path());
    paths.directives = dir.path().join("missing-dir").join("directives.jsonl");

    let err = emit(&report(json!([])), &paths).unwrap_err();
    assert!(matches!(err, Error::Io { ref path, .. } if path == &paths.directives));
  }
}
