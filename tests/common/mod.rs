//! Test utilities shared by the storypaste integration tests

use kuchiki::NodeRef;
use storypaste::paste_parse::dom;
use storypaste::utils::{is_allowed_attribute, is_allowed_tag};

/// Parse an output fragment back into a body element
#[allow(dead_code)]
pub fn reparse(html: &str) -> NodeRef {
    dom::body(&dom::parse_document(html)).expect("reparsed fragment has a body")
}

/// Every element and attribute in `html` that the host would strip
#[allow(dead_code)]
pub fn allowlist_violations(html: &str) -> Vec<String> {
    let body = reparse(html);
    let mut violations = Vec::new();

    for node in body.descendants() {
        if node.as_comment().is_some() {
            violations.push("comment".to_string());
            continue;
        }
        let Some(element) = node.as_element() else {
            continue;
        };
        let tag = &*element.name.local;
        if !is_allowed_tag(tag) {
            violations.push(format!("<{tag}>"));
        }
        for name in element.attributes.borrow().map.keys() {
            if !is_allowed_attribute(tag, &name.local) {
                violations.push(format!("<{tag} {}>", &*name.local));
            }
        }
    }
    violations
}

/// A collaborative-editor clipboard payload wrapping `paragraphs`
#[allow(dead_code)]
pub fn collab_editor_payload(paragraphs: &str) -> String {
    format!(
        r#"<meta charset="utf-8"><b style="font-weight:normal;" id="docs-internal-guid-3c1f7a2e-7fff-4b1e-9a61-0d2f3b9c8e11">{paragraphs}</b>"#
    )
}

/// An online office editor paragraph wrapper holding `runs`
#[allow(dead_code)]
pub fn office_web_paragraph(paragraph_style: &str, runs: &str) -> String {
    format!(
        r#"<div class="OutlineElement Ltr SCXW201 BCX0"><p class="Paragraph SCXW201 BCX0" paraid="1" paraeid="{{a1}}" style="{paragraph_style}">{runs}<span class="EOP SCXW201 BCX0">&nbsp;</span></p></div>"#
    )
}

/// One online office editor text run
#[allow(dead_code)]
pub fn office_web_run(run_style: &str, text: &str) -> String {
    format!(
        r#"<span class="TextRun SCXW201 BCX0" lang="EN-US" style="{run_style}"><span class="NormalTextRun SCXW201 BCX0">{text}</span></span>"#
    )
}

/// A desktop word processor HTML export with `paragraphs` as the body
#[allow(dead_code)]
pub fn office_desktop_payload(paragraphs: &str) -> String {
    format!(
        "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" xmlns:w=\"urn:schemas-microsoft-com:office:word\">\
         <head><meta charset=\"utf-8\"><!--[if gte mso 9]><xml><w:WordDocument><w:View>Normal</w:View></w:WordDocument></xml><![endif]-->\
         <style>p.MsoNormal {{margin:0in;}}</style></head>\
         <body lang=EN-US style='tab-interval:.5in'><!--StartFragment-->{paragraphs}<!--EndFragment--></body></html>"
    )
}
