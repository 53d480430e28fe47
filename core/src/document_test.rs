//! Tests for document framing around rendered clips.

use indoc::indoc;
use pretty_assertions::assert_eq;

use crate::clip::Clip;
use crate::document::{Direction, Document, LineMode, write_clips, write_document};
use crate::layers::Layers;

fn widget_clip() -> Clip {
    let mut clip = Clip::new("Widget", "app.Widget", "app", "app.dll");
    clip.push(Layers::TYPE, "class \"Widget\" as app.Widget {");
    clip.push(Layers::PUBLIC, "\t+Count : int");
    clip.push(Layers::TYPE_END, "}");
    clip
}

#[test]
fn clips_are_framed_by_start_and_end_markers() {
    let mut out = Vec::new();
    write_clips(&mut out, &[(widget_clip(), Layers::TYPE_END)]).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        "@startuml\nclass \"Widget\" as app.Widget {\n\t+Count : int\n}\n\n@enduml"
    );
}

#[test]
fn each_clip_renders_at_its_paired_layer() {
    let mut out = Vec::new();
    write_clips(
        &mut out,
        &[
            (widget_clip(), Layers::TYPE_END),
            (widget_clip(), Layers::PUBLIC),
        ],
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("class \"Widget\"").count(), 1);
    assert_eq!(text.matches("\t+Count : int").count(), 2);
}

#[test]
fn document_directives_frame_the_clips() {
    let document = Document::new(vec![(widget_clip(), Layers::TYPE_END)])
        .with_name("widgets")
        .with_title("Widget overview")
        .with_direction(Direction::LeftToRight)
        .with_line_mode(LineMode::Orthogonal)
        .with_header_comment("generated\ndo not edit")
        .with_footer_note("internal only");

    let mut out = Vec::new();
    write_document(&mut out, &document).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        indoc! {"
            ' generated
            ' do not edit
            @startuml widgets
            title Widget overview
            left to right direction
            skinparam linetype ortho
            class \"Widget\" as app.Widget {
            \t+Count : int
            }

            note as footer
            \tinternal only
            end note
            @enduml"}
    );
}

#[test]
fn default_document_emits_no_directives() {
    let document = Document::new(vec![(widget_clip(), Layers::TYPE_END)]);

    let mut out = Vec::new();
    write_document(&mut out, &document).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("@startuml\n"));
    assert!(!text.contains("title"));
    assert!(!text.contains("direction"));
    assert!(!text.contains("skinparam"));
    assert!(text.ends_with("\n@enduml"));
}

#[test]
fn polyline_mode_emits_its_directive() {
    let document =
        Document::new(Vec::new()).with_line_mode(LineMode::Polyline);

    let mut out = Vec::new();
    write_document(&mut out, &document).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("skinparam linetype polyline\n"));
}
