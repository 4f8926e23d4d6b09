//! CSL JSON documents (the `csl_json` model type): one field set per
//! citation item.

use serde_json::Value;

use crate::{
    error::GenerateError,
    fieldset::FieldSet,
    options::Options,
    plugin::Generator,
};

use super::crossref::CslRecord;

pub struct CslJson;

impl Generator for CslJson {
    fn supports(&self, modeltype: &str, _options: &Options) -> bool {
        modeltype == "csl_json"
    }

    fn generate(
        &self,
        _modeltype: &str,
        input: &[u8],
        _options: &Options,
    ) -> Result<Vec<FieldSet>, GenerateError> {
        let document: Value = serde_json::from_slice(input)?;

        let items: Vec<Value> = match document {
            Value::Array(items) => items,
            item @ Value::Object(_) => vec![item],
            _ => return Err(GenerateError::MissingElement("citation item")),
        };

        let mut fieldsets = Vec::new();
        for item in items {
            let record: CslRecord = serde_json::from_value(item)?;
            fieldsets.push(fieldset_from(record));
        }
        Ok(fieldsets)
    }
}

fn fieldset_from(record: CslRecord) -> FieldSet {
    let mut fs = FieldSet::new();

    if let Some(doi) = &record.doi {
        fs.field("DOI", "doi", [doi.as_str()], Some("publication_identifier"));
    }
    if let Some(url) = &record.url {
        fs.field("URL", "uri", [url.as_str()], Some("publication_identifier"));
    }
    if let Some(title) = &record.title {
        fs.field("title", "title", [title.as_str()], Some("title"));
    }
    if let Some(container) = &record.container_title {
        fs.field(
            "container-title",
            "journal_title",
            [container.as_str()],
            Some("journal_title"),
        );
    }
    for name in record.author_names() {
        fs.field("author", "author", [name], Some("author"));
    }
    if let Some(volume) = &record.volume {
        fs.field("volume", "integer", [volume.as_str()], Some("volume"));
    }
    if let Some(issue) = &record.issue {
        fs.field("issue", "number", [issue.as_str()], Some("issue"));
    }
    if let Some(page) = &record.page {
        fs.field("page", "pages", [page.as_str()], Some("page_range"));
    }
    for issued in record.issued_dates() {
        fs.field("issued", "date", [issued], Some("published_date"));
    }
    if let Some(language) = &record.language {
        fs.field("language", "language", [language.as_str()], Some("language"));
    }

    fs
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"[{
        "DOI": "10.1016/S0550-3213(01)00405-9",
        "title": "The Ising model on a dynamically triangulated disk",
        "container-title": "Nuclear Physics B",
        "volume": "614",
        "issued": {"date-parts": [[2001, 11]]},
        "language": "en",
        "author": [{"given": "Scott", "family": "McGuire"}]
    }]"#;

    #[test]
    fn one_fieldset_per_item() {
        let fieldsets = CslJson
            .generate("csl_json", DOC.as_bytes(), &Options::default())
            .unwrap();
        assert_eq!(fieldsets.len(), 1);

        let fs = &fieldsets[0];
        assert_eq!(fs.values("DOI"), ["10.1016/S0550-3213(01)00405-9"]);
        assert_eq!(fs.crossref("DOI"), Some("publication_identifier"));
        assert_eq!(fs.values("issued"), ["2001-11"]);
        assert_eq!(fs.values("author"), ["Scott McGuire"]);
        assert_eq!(fs.values("language"), ["en"]);
    }

    #[test]
    fn bare_object_is_accepted() {
        let fieldsets = CslJson
            .generate("csl_json", br#"{"title": "A title"}"#, &Options::default())
            .unwrap();
        assert_eq!(fieldsets.len(), 1);
        assert_eq!(fieldsets[0].values("title"), ["A title"]);
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert!(CslJson
            .generate("csl_json", b"42", &Options::default())
            .is_err());
    }
}
