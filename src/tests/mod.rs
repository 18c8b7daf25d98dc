mod unit_notion_models;
mod unit_rich_text_formatter;
