//! HTML serialization.

use super::element::Element;

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: [&str; 4] = ["br", "hr", "img", "input"];

/// Escape text content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Serialize `element` and its subtree.
pub(crate) fn render(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

fn write_element(out: &mut String, element: &Element) {
    let tag = element.tag();
    out.push('<');
    out.push_str(&tag);

    let class_name = element.class_name();
    if !class_name.is_empty() {
        push_attr(out, "class", &class_name);
    }
    for (name, value) in element.attributes() {
        push_attr(out, &name, &value);
    }

    let value = element.value();
    if !value.is_empty() && matches!(tag.as_str(), "input" | "button" | "option") {
        push_attr(out, "value", &value);
    }
    if element.is_disabled() {
        out.push_str(" disabled");
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&tag.as_str()) {
        return;
    }

    out.push_str(&escape_text(&element.text()));
    for child in element.children() {
        write_element(out, &child);
    }
    out.push_str("</");
    out.push_str(&tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let card = Element::new("button")
            .with_class("gallery__item card")
            .with_child(
                Element::new("span")
                    .with_class("card__title")
                    .with_text("<Фреймворк & куки>"),
            )
            .with_child(
                Element::new("img")
                    .with_class("card__image")
                    .with_attr("alt", "\"quoted\""),
            );

        assert_eq!(
            card.to_html(),
            "<button class=\"gallery__item card\">\
             <span class=\"card__title\">&lt;Фреймворк &amp; куки&gt;</span>\
             <img class=\"card__image\" alt=\"&quot;quoted&quot;\">\
             </button>"
        );
    }

    #[test]
    fn test_render_input_state() {
        let input = Element::new("input").with_attr("name", "email");
        input.set_value("a@b.c");
        input.set_disabled(true);
        assert_eq!(
            input.to_html(),
            "<input name=\"email\" value=\"a@b.c\" disabled>"
        );
    }
}
