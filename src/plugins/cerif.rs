//! CERIF 1.6-2 research output documents (the `ukriss_outputs` model
//! type): extraction of a publication's fields into field sets.

use roxmltree::{Document, Node};

use crate::{
    error::GenerateError,
    fieldset::FieldSet,
    options::Options,
    plugin::Generator,
};

const CERIF_NS: &str = "urn:xmlns:org:eurocris:cerif-1.6-2";

const IDENTIFIER_SCHEME: &str = "ukriss:identifier-types-scheme-uuid";
const GRANT_SCHEME: &str = "ukriss:grant-reference-scheme-uuid";
const EMBARGO_SCHEME: &str = "rcuk:oa-policy-embargo-periods-scheme-uuid";

pub struct CerifOutputs;

impl Generator for CerifOutputs {
    fn supports(&self, modeltype: &str, _options: &Options) -> bool {
        modeltype == "ukriss_outputs"
    }

    fn generate(
        &self,
        _modeltype: &str,
        input: &[u8],
        _options: &Options,
    ) -> Result<Vec<FieldSet>, GenerateError> {
        let text = std::str::from_utf8(input)?;
        let doc = Document::parse(text)?;

        let publication = child(doc.root_element(), "cfResPubl")
            .ok_or(GenerateError::MissingElement("cfResPubl"))?;

        let mut fieldsets = Vec::new();
        let mut fs = FieldSet::new();

        if let Some(date) = child_text(publication, "cfResPublDate") {
            fs.field("cfResPublDate", "date", [date], Some("published_date"));
        }
        if let Some(volume) = child_text(publication, "cfVol") {
            fs.field("cfVol", "integer", [volume], Some("volume"));
        }
        if let Some(edition) = child_text(publication, "cfEdition") {
            fs.field("cfEdition", "edition", [edition], Some("edition"));
        }
        if let Some(issue) = child_text(publication, "cfIssue") {
            fs.field("cfIssue", "number", [issue], Some("issue"));
        }
        if let Some(start) = child_text(publication, "cfStartPage") {
            fs.field("cfStartPage", "integer", [start], Some("start_page"));
        }
        if let Some(end) = child_text(publication, "cfEndPage") {
            fs.field("cfEndPage", "integer", [end], Some("end_page"));
        }
        if let Some(total) = child_text(publication, "cfTotalPages") {
            fs.field("cfTotalPages", "integer", [total], Some("page_count"));
        }
        if let Some(uri) = child_text(publication, "cfURI") {
            fs.field("cfURI", "uri", [uri], Some("uri"));
        }

        if let Some(title) = child(publication, "cfTitle") {
            if let Some(text) = element_text(title) {
                fs.field("cfTitle", "title", [text], Some("title"));
            }
            // the title's language is judged as its own single-field set
            if let Some(lang) = title.attribute("cfLangCode") {
                let mut title_lang = FieldSet::new();
                title_lang.field("cfTitle/cfLangCode", "iso-639-1", [lang], Some("language"));
                fieldsets.push(title_lang);
            }
        }

        if let Some(abstract_) = child(publication, "cfAbstr") {
            if let Some(text) = element_text(abstract_) {
                fs.field("cfAbstr", "abstract", [text], Some("abstract"));
            }
            if let Some(lang) = abstract_.attribute("cfLangCode") {
                let mut abstract_lang = FieldSet::new();
                abstract_lang.field(
                    "cfAbstract/cfLangCode",
                    "iso-639-1",
                    [lang],
                    Some("language"),
                );
                fieldsets.push(abstract_lang);
            }
        }

        for class in children(publication, "cfResPubl_Class") {
            let scheme = child_text(class, "cfClassSchemeId");
            let class_id = child_text(class, "cfClassId");
            let (Some(scheme), Some(class_id)) = (scheme, class_id) else {
                continue;
            };
            if scheme == "iso:639-1" {
                fs.field(
                    "cfResPubl_Class/cfClassSchemeId/iso:639-1",
                    "iso-639-1",
                    [class_id],
                    Some("language"),
                );
            } else if scheme == EMBARGO_SCHEME {
                fs.field(
                    &format!("cfResPubl_Class/{EMBARGO_SCHEME}"),
                    "embargo",
                    [class_id],
                    Some("embargo"),
                );
            }
        }

        for project in children(publication, "cfProj_ResPubl") {
            let scheme = child_text(project, "cfClassSchemeId");
            let class_id = child_text(project, "cfClassId");
            let project_id = child_text(project, "cfProjId");
            if scheme.as_deref() == Some(GRANT_SCHEME)
                && class_id.as_deref() == Some("grant-uuid")
            {
                if let Some(project_id) = project_id {
                    fs.field(
                        "cfProj_ResPubl/cfClassSchemeId/grant",
                        "grant_number",
                        [project_id],
                        Some("grant_number"),
                    );
                }
            }
        }

        for federated in children(publication, "cfFedId") {
            let Some(id) = child_text(federated, "cfFedId") else {
                continue;
            };
            let Some(class) = child(federated, "cfFedId_Class") else {
                continue;
            };
            if child_text(class, "cfClassSchemeId").as_deref() != Some(IDENTIFIER_SCHEME) {
                continue;
            }
            match child_text(class, "cfClassId").as_deref() {
                Some("handle-uuid") => {
                    fs.field(
                        "cfFedId/handle",
                        "handle",
                        [id],
                        Some("publication_identifier"),
                    );
                }
                Some("isbn-uuid") => {
                    fs.field("cfFedId/isbn", "isbn", [id], Some("isbn"));
                }
                Some("issn-uuid") => {
                    fs.field("cfFedId/issn", "issn", [id], Some("issn"));
                }
                Some("pubmed-uuid") => {
                    fs.field(
                        "cfFedId/pubmed",
                        "pmid",
                        [id],
                        Some("publication_identifier"),
                    );
                }
                Some("doi-uuid") => {
                    fs.field(
                        "cfFedId/doi",
                        "doi",
                        [id],
                        Some("publication_identifier"),
                    );
                }
                _ => {}
            }
        }

        fieldsets.push(fs);
        Ok(fieldsets)
    }
}

fn is_cerif(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(CERIF_NS)
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| is_cerif(*c, name))
}

fn children<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |c| is_cerif(*c, name))
}

fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    child(node, name).and_then(element_text)
}

fn element_text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0"?>
<CERIF xmlns="urn:xmlns:org:eurocris:cerif-1.6-2">
  <cfResPubl>
    <cfResPublDate>2001-11-21</cfResPublDate>
    <cfVol>614</cfVol>
    <cfIssue>3</cfIssue>
    <cfStartPage>467</cfStartPage>
    <cfEndPage>493</cfEndPage>
    <cfTotalPages>26</cfTotalPages>
    <cfURI>https://example.org/paper</cfURI>
    <cfTitle cfLangCode="en">The Ising model on a dynamically triangulated disk</cfTitle>
    <cfResPubl_Class>
      <cfClassId>en</cfClassId>
      <cfClassSchemeId>iso:639-1</cfClassSchemeId>
    </cfResPubl_Class>
    <cfProj_ResPubl>
      <cfProjId>EP/X012345/1</cfProjId>
      <cfClassId>grant-uuid</cfClassId>
      <cfClassSchemeId>ukriss:grant-reference-scheme-uuid</cfClassSchemeId>
    </cfProj_ResPubl>
    <cfFedId>
      <cfFedId>10.1016/S0550-3213(01)00405-9</cfFedId>
      <cfFedId_Class>
        <cfClassId>doi-uuid</cfClassId>
        <cfClassSchemeId>ukriss:identifier-types-scheme-uuid</cfClassSchemeId>
      </cfFedId_Class>
    </cfFedId>
    <cfFedId>
      <cfFedId>0550-3213</cfFedId>
      <cfFedId_Class>
        <cfClassId>issn-uuid</cfClassId>
        <cfClassSchemeId>ukriss:identifier-types-scheme-uuid</cfClassSchemeId>
      </cfFedId_Class>
    </cfFedId>
  </cfResPubl>
</CERIF>"#;

    fn generate() -> Vec<FieldSet> {
        CerifOutputs
            .generate("ukriss_outputs", DOC.as_bytes(), &Options::default())
            .unwrap()
    }

    #[test]
    fn title_language_becomes_its_own_fieldset() {
        let fieldsets = generate();
        assert_eq!(fieldsets.len(), 2);
        assert_eq!(fieldsets[0].values("cfTitle/cfLangCode"), ["en"]);
        assert_eq!(fieldsets[0].datatype("cfTitle/cfLangCode"), Some("iso-639-1"));
        assert_eq!(fieldsets[0].crossref("cfTitle/cfLangCode"), Some("language"));
    }

    #[test]
    fn extracts_publication_fields() {
        let fieldsets = generate();
        let fs = &fieldsets[1];
        assert_eq!(fs.values("cfResPublDate"), ["2001-11-21"]);
        assert_eq!(fs.values("cfVol"), ["614"]);
        assert_eq!(fs.crossref("cfVol"), Some("volume"));
        assert_eq!(
            fs.values("cfTitle"),
            ["The Ising model on a dynamically triangulated disk"]
        );
    }

    #[test]
    fn extracts_federated_identifiers() {
        let fieldsets = generate();
        let fs = &fieldsets[1];
        assert_eq!(fs.values("cfFedId/doi"), ["10.1016/S0550-3213(01)00405-9"]);
        assert_eq!(fs.crossref("cfFedId/doi"), Some("publication_identifier"));
        assert_eq!(fs.values("cfFedId/issn"), ["0550-3213"]);
        assert_eq!(fs.crossref("cfFedId/issn"), Some("issn"));
        assert_eq!(fs.values("cfProj_ResPubl/cfClassSchemeId/grant"), ["EP/X012345/1"]);
    }

    #[test]
    fn missing_publication_element_is_an_error() {
        let result = CerifOutputs.generate(
            "ukriss_outputs",
            br#"<CERIF xmlns="urn:xmlns:org:eurocris:cerif-1.6-2"/>"#,
            &Options::default(),
        );
        assert!(matches!(
            result,
            Err(GenerateError::MissingElement("cfResPubl"))
        ));
    }
}
