//! CLI smoke tests over documents whose fields only exercise offline
//! validators.

use assert_cmd::Command;
use assert_fs::{fixture::FileWriteStr, NamedTempFile};
use predicates::prelude::*;

const CERIF_DOC: &str = r#"<?xml version="1.0"?>
<CERIF xmlns="urn:xmlns:org:eurocris:cerif-1.6-2">
  <cfResPubl>
    <cfTitle cfLangCode="en">The Ising model on a dynamically triangulated disk</cfTitle>
    <cfFedId>
      <cfFedId>1234-5679</cfFedId>
      <cfFedId_Class>
        <cfClassId>issn-uuid</cfClassId>
        <cfClassSchemeId>ukriss:identifier-types-scheme-uuid</cfClassSchemeId>
      </cfFedId_Class>
    </cfFedId>
  </cfResPubl>
</CERIF>"#;

#[test]
fn validates_a_cerif_document() {
    let file = NamedTempFile::new("outputs.xml").unwrap();
    file.write_str(CERIF_DOC).unwrap();

    Command::cargo_bin("metacheck")
        .unwrap()
        .arg(file.path())
        .args(["--model-type", "ukriss_outputs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cfFedId/issn"))
        .stdout(predicate::str::contains("issn.Issn"));
}

#[test]
fn rejects_an_unknown_model_type() {
    let file = NamedTempFile::new("outputs.xml").unwrap();
    file.write_str(CERIF_DOC).unwrap();

    Command::cargo_bin("metacheck")
        .unwrap()
        .arg(file.path())
        .args(["--model-type", "marc21"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("marc21"));
}
