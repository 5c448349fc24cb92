mod support;

use mdfootnote::{Compiler, Construct, Event, NormalizedLabel, Options};
use support::{blocks, definition, para, render};

#[test]
fn first_definition_wins() {
    let html = render(blocks(vec![
        para(Event::call("dup").to_vec()),
        definition("dup", para(vec![Event::text("one")])),
        definition("DUP", para(vec![Event::text("two")])),
    ]));

    assert!(html.contains("<p>one "));
    assert!(!html.contains("two"));
}

#[test]
fn definitions_are_removed_from_the_flow() {
    let html = render(blocks(vec![
        para(vec![Event::text("before")]),
        definition("n", para(vec![Event::text("note")])),
        para(vec![Event::text("after")]),
        para(Event::call("n").to_vec()),
    ]));

    let section = html.find("<section").unwrap();
    assert!(html[..section].starts_with("<p>before</p>\n<p>after</p>\n<p><sup>"));
    assert!(html[section..].contains("<p>note "));
}

#[test]
fn nested_definitions_are_captured_separately() {
    let mut outer = definition("outer", Vec::new());
    // Splice the inner definition and a paragraph before the outer exit.
    let exit = outer.pop().unwrap();
    outer.extend(para(vec![Event::text("outer text")]));
    outer.extend(definition("inner", para(vec![Event::text("inner text")])));
    outer.push(exit);

    let mut calls = Event::call("outer").to_vec();
    calls.extend(Event::call("inner"));

    let mut compiler = Compiler::new(Options::default());
    compiler
        .push_events(blocks(vec![para(calls), outer]))
        .unwrap();

    let defs = compiler.footnotes().unwrap().definitions();
    assert_eq!(defs.len(), 2);
    assert_eq!(
        defs.get(&NormalizedLabel::new("outer")).unwrap().body,
        "<p>outer text</p>"
    );
    assert_eq!(
        defs.get(&NormalizedLabel::new("inner")).unwrap().body,
        "<p>inner text</p>"
    );

    let html = compiler.finish().unwrap();
    let outer_li = html.find("<li id=\"user-content-fn-outer\">").unwrap();
    let inner_li = html.find("<li id=\"user-content-fn-inner\">").unwrap();
    assert!(outer_li < inner_li);
    assert!(!html[outer_li..inner_li].contains("inner text"));
}

#[test]
fn definition_paragraphs_are_wrapped_inside_tight_lists() {
    let mut events = vec![
        Event::Enter(Construct::List {
            ordered: false,
            tight: true,
        }),
        Event::Enter(Construct::ListItem),
        Event::Enter(Construct::Paragraph),
        Event::text("item"),
        Event::Exit(Construct::Paragraph),
        Event::LineEnding,
        Event::Exit(Construct::ListItem),
        Event::Enter(Construct::ListItem),
    ];
    events.extend(definition("t", para(vec![Event::text("note")])));
    events.extend([
        Event::LineEnding,
        Event::Exit(Construct::ListItem),
        Event::Exit(Construct::List {
            ordered: false,
            tight: true,
        }),
        Event::LineEnding,
    ]);
    events.extend(para(Event::call("t").to_vec()));

    let html = render(events);

    // The definition leaves an empty item behind, without a blank line inside it.
    assert!(
        html.starts_with("<ul>\n<li>item</li>\n<li></li>\n</ul>\n<p><sup>"),
        "{html}"
    );
    assert!(html.contains("<li id=\"user-content-fn-t\">\n<p>note "));
}

#[test]
fn loose_lists_wrap_paragraphs() {
    let html = render(vec![
        Event::Enter(Construct::List {
            ordered: true,
            tight: false,
        }),
        Event::Enter(Construct::ListItem),
        Event::Enter(Construct::Paragraph),
        Event::text("a"),
        Event::Exit(Construct::Paragraph),
        Event::Exit(Construct::ListItem),
        Event::Exit(Construct::List {
            ordered: true,
            tight: false,
        }),
    ]);

    assert_eq!(html, "<ol>\n<li>\n<p>a</p>\n</li>\n</ol>");
}

#[test]
fn state_is_created_lazily() {
    let mut compiler = Compiler::new(Options::default());
    compiler
        .push_events(para(vec![Event::text("plain")]))
        .unwrap();
    assert!(compiler.footnotes().is_none());

    compiler
        .push_events(definition("x", Vec::new()))
        .unwrap();
    assert!(compiler.footnotes().is_some());
    assert_eq!(compiler.finish().unwrap(), "<p>plain</p>");
}
