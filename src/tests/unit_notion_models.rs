use crate::domain::block::MediaSource;
use crate::domain::{Block, BlockKind, Page};
use serde_json::json;

// the page title lives in whichever property has type "title"
#[test]
fn test_page_title_from_title_property() {
    let page: Page = serde_json::from_value(json!({
        "object": "page",
        "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
        "created_time": "2024-09-01T08:00:00.000Z",
        "last_edited_time": "2024-10-05T10:30:00.000Z",
        "archived": false,
        "properties": {
            "Tags": { "id": "abc", "type": "multi_select", "multi_select": [] },
            "Název": {
                "id": "title",
                "type": "title",
                "title": [
                    { "type": "text", "text": { "content": "Můj ", "link": null }, "plain_text": "Můj " },
                    { "type": "text", "text": { "content": "Článek", "link": null }, "plain_text": "Článek",
                      "annotations": { "bold": true } }
                ]
            }
        }
    }))
    .expect("Should parse page");

    assert_eq!(page.id, "59833787-2cf9-4fdf-8782-e53db20768a5");
    assert_eq!(page.plain_title(), "Můj Článek");
    assert_eq!(page.slug(), "muj-clanek");
    assert!(page.title[1].annotations.bold);
    assert_eq!(page.to_string(), "59833787-2cf9-4fdf-8782-e53db20768a5");
}

// pages without a title property still parse, just with an empty title
#[test]
fn test_page_without_title() {
    let page: Page = serde_json::from_value(json!({
        "id": "p1",
        "last_edited_time": "2024-10-05T10:30:00.000Z",
        "properties": {}
    }))
    .expect("Should parse page");

    assert!(page.title.is_empty());
    assert_eq!(page.slug(), "");
}

// mentions have no "text" object; content and link come from plain_text/href
#[test]
fn test_rich_text_mention_fallback() {
    let block: Block = serde_json::from_value(json!({
        "id": "p1",
        "type": "paragraph",
        "paragraph": {
            "rich_text": [{
                "type": "mention",
                "mention": { "type": "page", "page": { "id": "p2" } },
                "plain_text": "Other page",
                "href": "https://www.notion.so/p2"
            }]
        }
    }))
    .unwrap();

    let BlockKind::Paragraph(paragraph) = &block.kind else {
        panic!("expected a paragraph, got {:?}", block.kind);
    };
    assert_eq!(paragraph.rich_text[0].content, "Other page");
    assert_eq!(
        paragraph.rich_text[0].link.as_deref(),
        Some("https://www.notion.so/p2")
    );
    assert_eq!(paragraph.rich_text[0].annotations.color, "default");
}

// an unknown type is kept as Unsupported with its tag, never a parse error
#[test]
fn test_unknown_block_type() {
    let block: Block = serde_json::from_value(json!({
        "id": "s1",
        "type": "synced_block",
        "has_children": true,
        "synced_block": { "synced_from": null }
    }))
    .expect("Unknown block types must still parse");

    assert_eq!(block.kind, BlockKind::Unsupported("synced_block".to_string()));
    assert!(block.has_children);
    assert_eq!(block.kind.tag(), "synced_block");
}

// a known type whose payload is absent or malformed becomes Missing
#[test]
fn test_missing_and_malformed_payload() {
    let absent: Block =
        serde_json::from_value(json!({ "id": "a", "type": "heading_2" })).unwrap();
    let malformed: Block = serde_json::from_value(json!({
        "id": "b",
        "type": "bookmark",
        "bookmark": { "caption": [] }
    }))
    .unwrap();

    assert_eq!(absent.kind, BlockKind::Missing("heading_2".to_string()));
    assert_eq!(malformed.kind, BlockKind::Missing("bookmark".to_string()));
}

#[test]
fn test_media_source_kinds() {
    let external: Block = serde_json::from_value(json!({
        "id": "i1",
        "type": "image",
        "image": { "type": "external", "external": { "url": "https://a/x.png" }, "caption": [] }
    }))
    .unwrap();
    let hosted: Block = serde_json::from_value(json!({
        "id": "i2",
        "type": "image",
        "image": { "type": "file", "file": { "url": "https://b/y.png" } }
    }))
    .unwrap();

    let BlockKind::Image(external) = external.kind else {
        panic!("expected image");
    };
    let BlockKind::Image(hosted) = hosted.kind else {
        panic!("expected image");
    };
    assert!(matches!(external.source, MediaSource::External { .. }));
    assert_eq!(external.url(), "https://a/x.png");
    assert!(matches!(hosted.source, MediaSource::File { .. }));
    assert_eq!(hosted.url(), "https://b/y.png");
    assert_eq!(hosted.caption_text(), "");
}

// fetched children on the block win over children nested in the payload
#[test]
fn test_block_children_sources() {
    let block: Block = serde_json::from_value(json!({
        "id": "li",
        "type": "bulleted_list_item",
        "has_children": true,
        "bulleted_list_item": {
            "rich_text": [],
            "children": [{ "id": "payload-child", "type": "divider", "divider": {} }]
        },
        "children": [{ "id": "fetched-child", "type": "divider", "divider": {} }]
    }))
    .unwrap();

    assert_eq!(block.children().len(), 1);
    assert_eq!(block.children()[0].id, "fetched-child");
}
