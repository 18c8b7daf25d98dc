use crate::domain::{Block, Page};
use crate::render::block::render_blocks;
use crate::render::markup::{Element, Node};
use crate::render::rich_text::format_rich_text;
use chrono::{DateTime, Datelike, Utc};

pub const NOT_FOUND_MESSAGE: &str = "Článek nenalezen. Byl buď přejmenován neb odstraněn.";
const BACK_LINK_LABEL: &str = "← Zpět na seznam";

const CZECH_MONTHS: [&str; 12] = [
    "leden", "únor", "březen", "duben", "květen", "červen", "červenec", "srpen", "září", "říjen",
    "listopad", "prosinec",
];

/// Renders a page title and its block tree as an `<article>`.
pub fn render(page: &Page, blocks: &[Block]) -> Node {
    Element::new("article")
        .attr("class", "article")
        .child(
            Element::new("h1")
                .attr("class", "article-title")
                .children(format_rich_text(&page.title)),
        )
        .child(Element::new("section").children(render_blocks(blocks)))
        .into()
}

pub fn article_document(site_title: &str, page: &Page, blocks: &[Block]) -> String {
    let title = format!("{}: {}", site_title, page.plain_title());
    document(
        &title,
        vec![back_link(site_title), render(page, blocks), footer()],
    )
}

pub fn not_found_document(site_title: &str) -> String {
    document(
        site_title,
        vec![
            back_link(site_title),
            Element::new("div")
                .attr("class", "not-found")
                .child(NOT_FOUND_MESSAGE)
                .into(),
            footer(),
        ],
    )
}

pub fn index_document(site_title: &str, pages: &[Page]) -> String {
    let header = Element::new("header")
        .attr("class", "site-header")
        .child(Element::new("h1").child(site_title));

    let posts = Element::new("div")
        .attr("class", "posts")
        .children(pages.iter().map(post_link));

    document(site_title, vec![header.into(), posts.into(), footer()])
}

fn post_link(page: &Page) -> Node {
    Element::new("a")
        .attr("href", format!("/{}", page.id))
        .attr("class", "post-link")
        .child(Element::new("h3").children(format_rich_text(&page.title)))
        .child(
            Element::new("p")
                .attr("class", "post-date")
                .child(format_month_year(&page.last_edited_time)),
        )
        .into()
}

/// "říjen 2024" style month and year.
pub fn format_month_year(datetime: &DateTime<Utc>) -> String {
    let month = CZECH_MONTHS[datetime.month0() as usize];
    format!("{} {}", month, datetime.year())
}

fn back_link(site_title: &str) -> Node {
    Element::new("a")
        .attr("href", "/")
        .attr("class", "back-link")
        .child(Element::new("div").child(BACK_LINK_LABEL))
        .child(Element::new("h1").child(site_title))
        .into()
}

fn footer() -> Node {
    Element::new("footer")
        .attr("class", "footer")
        .child(format!("© {}", Utc::now().year()))
        .into()
}

fn document(title: &str, body: Vec<Node>) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").child(title))
        .child(
            Element::new("link")
                .attr("rel", "icon")
                .attr("href", "/assets/favicon.ico"),
        )
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", "/assets/style.css"),
        );

    let html = Element::new("html")
        .attr("lang", "cs")
        .child(head)
        .child(
            Element::new("body")
                .child(Element::new("main").attr("class", "container").children(body)),
        );

    format!("<!DOCTYPE html>\n{}", Node::from(html))
}
