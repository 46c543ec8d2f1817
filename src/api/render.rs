//! HTML rendering for the demo pages.
//!
//! Plain string assembly, no template engine. The data and the
//! pending-before-done order are what matter here; the markup is glue.

use crate::models::TodoItem;

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }\
form.add { display: flex; gap: 0.5rem; margin-bottom: 1rem; }\
form.add input[type=text] { flex: 1; }\
ul.items { list-style: none; padding: 0; }\
li.item { display: flex; align-items: center; gap: 0.5rem; padding: 0.25rem 0; }\
li.item .text { flex: 1; }\
li.done .text { text-decoration: line-through; color: #888; }";

/// Render the full board page.
///
/// `items` is expected in display order (pending before done); the page
/// renders them as given.
pub fn board_page(items: &[TodoItem]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Pipeline To-Do Board</h1>\n");
    body.push_str(
        "<form method=\"post\" action=\"/\" class=\"add\">\n\
         <input type=\"hidden\" name=\"action\" value=\"add\">\n\
         <input type=\"text\" name=\"text\" maxlength=\"100\" placeholder=\"What needs doing?\" autofocus>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n",
    );

    body.push_str("<ul class=\"items\">\n");
    for item in items {
        render_item(&mut body, item);
    }
    body.push_str("</ul>\n");

    page("Pipeline To-Do Board", &body)
}

/// Render one list entry with its toggle and delete forms.
fn render_item(out: &mut String, item: &TodoItem) {
    let class = if item.done { "item done" } else { "item" };
    let toggle_label = if item.done { "Reopen" } else { "Done" };

    out.push_str(&format!("<li class=\"{}\">\n", class));
    out.push_str(&format!(
        "<span class=\"text\">{}</span>\n",
        escape(&item.text)
    ));
    out.push_str(&format!(
        "<form method=\"post\" action=\"/\">\n\
         <input type=\"hidden\" name=\"action\" value=\"toggle\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{}\">\n\
         <button type=\"submit\">{}</button>\n\
         </form>\n",
        item.id, toggle_label,
    ));
    out.push_str(&format!(
        "<form method=\"post\" action=\"/\">\n\
         <input type=\"hidden\" name=\"action\" value=\"delete\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{}\">\n\
         <button type=\"submit\">Delete</button>\n\
         </form>\n",
        item.id,
    ));
    out.push_str("</li>\n");
}

/// Render the standalone greeting page shown by the first two pipeline
/// iterations.
pub fn hello_page(version: &str) -> String {
    page(
        "Automated DevOps Pipeline",
        &format!(
            "<h1>Hello from the Automated DevOps Pipeline!</h1>\n\
             <p>Application Version: {}</p>\n",
            escape(version)
        ),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n"
    )
}

/// Minimal HTML escaping for user-entered text.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, text: &str, done: bool) -> TodoItem {
        TodoItem {
            id,
            text: text.to_string(),
            done,
        }
    }

    #[test]
    fn escapes_markup_in_item_text() {
        let html = board_page(&[item(1, "<script>alert(1)</script>", false)]);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn renders_items_in_the_order_given() {
        let html = board_page(&[item(2, "first entry", false), item(1, "second entry", true)]);
        let first = html.find("first entry").expect("first entry rendered");
        let second = html.find("second entry").expect("second entry rendered");
        assert!(first < second);
    }

    #[test]
    fn toggle_and_delete_forms_carry_the_item_id() {
        let html = board_page(&[item(7, "ship it", false)]);
        assert_eq!(html.matches("name=\"id\" value=\"7\"").count(), 2);
    }

    #[test]
    fn done_items_are_marked_and_offer_reopen() {
        let html = board_page(&[item(1, "landed", true)]);
        assert!(html.contains("item done"));
        assert!(html.contains(">Reopen</button>"));
    }

    #[test]
    fn add_form_bounds_text_to_100_chars() {
        let html = board_page(&[]);
        assert!(html.contains("maxlength=\"100\""));
    }

    #[test]
    fn hello_page_shows_the_version() {
        let html = hello_page("2.4");
        assert!(html.contains("Hello from the Automated DevOps Pipeline!"));
        assert!(html.contains("Application Version: 2.4"));
    }
}
