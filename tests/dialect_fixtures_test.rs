//! Clipboard payloads shaped like each supported editor's output

use storypaste::{Dialect, classify, parse};

mod common;

use common::{collab_editor_payload, office_desktop_payload, office_web_paragraph, office_web_run};

#[test]
fn test_collab_editor_document() {
    let html = collab_editor_payload(concat!(
        r#"<p dir="ltr" style="line-height:1.38;margin-top:0pt;margin-bottom:0pt;text-align:center;">"#,
        r#"<span style="font-size:14pt;font-family:Arial,sans-serif;color:#000000;background-color:transparent;font-weight:700;font-style:normal;font-variant:normal;text-decoration:none;vertical-align:baseline;white-space:pre-wrap;">Chapter One</span></p>"#,
        r#"<br>"#,
        r#"<p dir="ltr" style="line-height:1.38;margin-top:0pt;margin-bottom:0pt;">"#,
        r#"<span style="font-weight:400;font-style:normal;text-decoration:none;vertical-align:baseline;">It was a </span>"#,
        r#"<span style="font-weight:400;font-style:italic;text-decoration:none;vertical-align:baseline;">dark</span>"#,
        r#"<span style="font-weight:400;font-style:normal;text-decoration:underline;vertical-align:baseline;"> and stormy</span>"#,
        r#"<span style="font-weight:400;font-style:normal;text-decoration:none;vertical-align:baseline;"> night.</span></p>"#,
    ));
    assert_eq!(classify(&html), Dialect::CollabEditor);
    assert_eq!(
        parse(&html, "text/html", "", None).unwrap(),
        "<p class=\"align-center\"><b>Chapter One</b></p>\n<br>\n<p>It was a <i>dark</i><u> and stormy</u> night.</p>\n"
    );
}

#[test]
fn test_collab_editor_partial_paragraph() {
    let html = collab_editor_payload(
        r#"<span style="font-weight:700;">half a </span><span style="font-weight:400;">sentence</span>"#,
    );
    assert_eq!(
        parse(&html, "text/html", "Earlier text ", None).unwrap(),
        "<b>half a </b>sentence"
    );
}

fn office_web_list_item(kind: &str, level: u8, text: &str) -> String {
    format!(
        r#"<div class="ListContainerWrapper SCXW201 BCX0"><{kind} class="BulletListStyle1 SCXW201 BCX0" role="list"><li data-leveltext="" data-aria-level="{level}" role="listitem" class="OutlineElement Ltr SCXW201 BCX0"><p class="Paragraph SCXW201 BCX0" paraid="2" paraeid="{{b2}}">{}</p></li></{kind}></div>"#,
        office_web_run("", text)
    )
}

#[test]
fn test_office_web_document() {
    let html = [
        office_web_paragraph(
            "text-align:center",
            r#"<span class="TextRun SCXW201 BCX0" style="font-weight:bold"><span class="NormalTextRun SCXW201 BCX0" data-ccp-parastyle="Title">My Story</span></span>"#,
        ),
        office_web_paragraph(
            "",
            &[
                office_web_run("", "Plain "),
                office_web_run("font-style:italic", "slanted"),
                office_web_run("font-style:italic;text-decoration:underline", " words"),
            ]
            .concat(),
        ),
        office_web_list_item("ul", 1, "one"),
        office_web_list_item("ul", 2, "nested"),
        office_web_list_item("ul", 1, "two"),
    ]
    .concat();

    assert_eq!(classify(&html), Dialect::OfficeWeb);
    assert_eq!(
        parse(&html, "text/html", "", None).unwrap(),
        concat!(
            "<h4 class=\"align-center\"><b>My Story</b></h4>\n",
            "<p>Plain <i>slanted<u> words</u></i></p>\n",
            "<ul><li>one</li>\n<ul><li>nested</li>\n</ul>\n<li>two</li>\n</ul>\n",
        )
    );
}

#[test]
fn test_office_web_headings_shift_with_title() {
    let heading = |style: &str, text: &str| {
        office_web_paragraph(
            "",
            &format!(
                r#"<span class="TextRun"><span class="NormalTextRun" data-ccp-parastyle="{style}">{text}</span></span>"#
            ),
        )
    };
    let html = [heading("heading 1", "Part"), heading("heading 2", "Scene")].concat();
    assert_eq!(
        parse(&html, "text/html", "", None).unwrap(),
        "<h4>Part</h4>\n<h5>Scene</h5>\n"
    );
}

#[test]
fn test_office_desktop_document() {
    let html = office_desktop_payload(concat!(
        "<p class=MsoTitle style='text-align:center'>The Tale</p>",
        "<p class=MsoNormal>First line with <b>bold</b>.</p>",
        "<p class=MsoListParagraphCxSpFirst style='text-indent:-.25in;mso-list:l0 level1 lfo1'>",
        "<!--[if !supportLists]--><span style='mso-list:Ignore'>1.<span style='font:7.0pt \"Times New Roman\"'>&nbsp;&nbsp; </span></span><!--[endif]-->Alpha</p>",
        "<p class=MsoListParagraphCxSpMiddle style='margin-left:1.0in;text-indent:-.25in;mso-list:l0 level2 lfo1'>",
        "<!--[if !supportLists]--><span style='mso-list:Ignore'>a.<span>&nbsp;&nbsp; </span></span><!--[endif]-->Beta</p>",
        "<p class=MsoListParagraphCxSpLast style='text-indent:-.25in;mso-list:l0 level1 lfo1'>",
        "<!--[if !supportLists]--><span style='mso-list:Ignore'>2.<span>&nbsp;&nbsp; </span></span><!--[endif]-->Gamma</p>",
        "<p class=MsoNormal>The end.</p>",
    ));

    assert_eq!(classify(&html), Dialect::OfficeDesktop);
    assert_eq!(
        parse(&html, "text/html", "", None).unwrap(),
        concat!(
            "<h4 class=\"align-center\">The Tale</h4>\n",
            "<p>First line with <b>bold</b>.</p>\n",
            "<ol><li>Alpha</li>\n<ol><li>Beta</li>\n</ol>\n<li>Gamma</li>\n</ol>\n",
            "<p>The end.</p>\n",
        )
    );
}

#[test]
fn test_office_desktop_bullets_at_end_of_selection() {
    let html = office_desktop_payload(concat!(
        "<p class=MsoListParagraphCxSpFirst style='text-indent:-.25in;mso-list:l1 level1 lfo2'>",
        "<!--[if !supportLists]--><span style='font-family:Symbol'>·<span>&nbsp;</span></span><!--[endif]-->Milk</p>",
        "<p class=MsoListParagraphCxSpLast style='text-indent:-.25in;mso-list:l1 level1 lfo2'>",
        "<!--[if !supportLists]--><span style='font-family:Symbol'>·<span>&nbsp;</span></span><!--[endif]-->Eggs</p>",
    ));
    assert_eq!(
        parse(&html, "text/html", "", None).unwrap(),
        "<ul><li>Milk</li>\n<li>Eggs</li>\n</ul>\n"
    );
}

#[test]
fn test_generic_web_page_selection() {
    let html = concat!(
        "<html><body><!--StartFragment-->",
        r#"<h2 style="font-size:2em" id="intro">Heading</h2>"#,
        r#"<p>Some <strong>strong</strong> and <em>emphasis</em> with <span style="color:red">color</span>.</p>"#,
        "<table><tbody><tr><td>a</td><td>b</td></tr></tbody></table>",
        "<!--EndFragment--></body></html>",
    );
    assert_eq!(classify(html), Dialect::Generic);
    assert_eq!(
        parse(html, "text/html", "", None).unwrap(),
        concat!(
            "<h4>Heading</h4>\n",
            "<p>Some <strong>strong</strong> and <em>emphasis</em> with <span>color</span>.</p>\n",
            "<table><tbody><tr><td>a</td><td>b</td></tr>\n</tbody></table>\n",
        )
    );
}

#[test]
fn test_office_desktop_list_before_quote_and_title() {
    let html = office_desktop_payload(concat!(
        "<p class=MsoListParagraphCxSpFirst style='text-indent:-.25in;mso-list:l1 level1 lfo2'>",
        "<!--[if !supportLists]--><span style='font-family:Symbol'>·<span>&nbsp;</span></span><!--[endif]-->Milk</p>",
        "<p class=MsoListParagraphCxSpLast style='text-indent:-.25in;mso-list:l1 level1 lfo2'>",
        "<!--[if !supportLists]--><span style='font-family:Symbol'>·<span>&nbsp;</span></span><!--[endif]-->Eggs</p>",
        "<p class=MsoQuote>quote</p>",
        "<p class=MsoListParagraph style='text-indent:-.25in;mso-list:l1 level1 lfo2'>",
        "<!--[if !supportLists]--><span style='font-family:Symbol'>·<span>&nbsp;</span></span><!--[endif]-->Bread</p>",
        "<p class=MsoTitle>Next</p>",
    ));
    assert_eq!(
        parse(&html, "text/html", "", None).unwrap(),
        concat!(
            "<ul><li>Milk</li>\n<li>Eggs</li>\n</ul>\n",
            "<p class=\"MsoQuote\">quote</p>\n",
            "<ul><li>Bread</li>\n</ul>\n",
            "<h4>Next</h4>\n",
        )
    );
}
