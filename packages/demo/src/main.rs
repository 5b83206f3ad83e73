use std::cell::RefCell;

use futures_signals::signal::Mutable;
use gloo_console::log;
use inclusive_menu_button::{
    Checkable, Event, EventKind, Handler, CHECKABLE_ATTRIBUTE, MENU_ATTRIBUTE,
};
use inclusive_menu_button_web::{bind_all, Binding, WebElement};
use silkenweb::{
    elements::html::{button, div, h2, p, Button, Div},
    mount,
    prelude::{Element, HtmlElement, ParentElement},
    value::Sig,
};

thread_local! {
    static BINDINGS: RefCell<Vec<Binding>> = const { RefCell::new(Vec::new()) };
}

fn item(text: &str) -> Button {
    button().r#type("button").text(text)
}

fn menu_button(label: &str, id: &str, checkable: Checkable, items: Vec<Button>) -> Div {
    div()
        .child(
            button()
                .r#type("button")
                .attribute(MENU_ATTRIBUTE, id)
                .attribute(CHECKABLE_ATTRIBUTE, checkable.as_ref())
                .text(label),
        )
        .child(div().id(id).children(items))
}

fn item_text(item: &WebElement) -> String {
    item.dom_element().text_content().unwrap_or_default()
}

fn main() {
    let chosen = Mutable::new("Nothing chosen yet".to_string());

    let app = div()
        .child(h2().text("Menu buttons"))
        .child(menu_button(
            "Actions",
            "actions-menu",
            Checkable::None,
            vec![item("Copy"), item("Cut"), item("Paste").disabled(true)],
        ))
        .child(menu_button(
            "Align",
            "align-menu",
            Checkable::Single,
            vec![item("Left"), item("Center"), item("Right")],
        ))
        .child(menu_button(
            "Format",
            "format-menu",
            Checkable::Multiple,
            vec![item("Bold"), item("Italic"), item("Underline")],
        ))
        .child(p().text(Sig(chosen.signal_cloned())));

    mount("app", app);

    let bindings = bind_all();
    let on_choose = Handler::new(move |event: &Event<WebElement>| {
        if let Event::Choose(item) = event {
            let text = item_text(item);
            log!(format!("Chose {text}"));
            chosen.set(format!("Chose {text}"));
        }
    });

    for binding in &bindings {
        binding.menu_button().on(EventKind::Choose, &on_choose);
    }

    BINDINGS.with(|existing| existing.borrow_mut().extend(bindings));
}
