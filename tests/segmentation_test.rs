use rs_boilerpipe::parse_document;

#[test]
fn simple_document_yields_title_and_one_block() {
    let html = r"<html><head><title>Hi</title></head><body><p>Hello world this is a test</p></body></html>";

    let doc = parse_document(html);

    assert_eq!(doc.title.as_deref(), Some("Hi"));
    assert_eq!(doc.text_blocks.len(), 1);

    let block = &doc.text_blocks[0];
    assert_eq!(block.text, "Hello world this is a test");
    assert_eq!(block.num_words, 6);
    assert_eq!(block.num_linked_words, 0);
    assert_eq!(block.num_wrapped_lines, 1);
    assert_eq!(block.link_density(), 0.0);
}

#[test]
fn anchor_words_count_toward_link_density() {
    let doc = parse_document(r#"<p>Click <a href="x">here</a> now</p>"#);

    assert_eq!(doc.text_blocks.len(), 1);
    let block = &doc.text_blocks[0];
    assert_eq!(block.text, "Click here now");
    assert_eq!(block.num_words, 3);
    assert_eq!(block.num_linked_words, 1);
    assert!((block.link_density() - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn unrecognized_tag_between_text_runs_forces_two_blocks() {
    let doc = parse_document("<body><p>first run of text<custom-widget></custom-widget>second run of text</p></body>");

    assert_eq!(doc.text_blocks.len(), 2);
    assert_eq!(doc.text_blocks[0].text, "first run of text");
    assert_eq!(doc.text_blocks[1].text, "second run of text");
    assert_eq!(doc.text_blocks[0].offset_blocks_start, 0);
    assert_eq!(doc.text_blocks[1].offset_blocks_start, 1);
}

#[test]
fn whitespace_only_runs_never_produce_blocks() {
    let doc = parse_document("<body><div>   </div>\n\t<div></div></body>");
    assert!(doc.text_blocks.is_empty());
}

#[test]
fn script_and_style_content_reaches_neither_blocks_nor_title() {
    let html = r#"<html><head>
        <script>var x = "<b>not content</b>";</script>
        <style>p { color: red; }</style>
        <title>Real Title</title>
    </head><body><p>visible words only</p></body></html>"#;

    let doc = parse_document(html);

    assert_eq!(doc.title.as_deref(), Some("Real Title"));
    assert_eq!(doc.text_blocks.len(), 1);
    assert_eq!(doc.text_blocks[0].text, "visible words only");
    let all_text = doc.text(true, true);
    assert!(!all_text.contains("not content"));
    assert!(!all_text.contains("color"));
}

#[test]
fn ignorable_form_controls_are_dropped_inside_body() {
    let doc = parse_document(
        "<body><p>before the menu</p><select><option>Pick one</option></select><p>after the menu</p></body>",
    );

    let texts: Vec<&str> = doc.text_blocks.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(texts, ["before the menu", "after the menu"]);
}

#[test]
fn title_is_not_overwritten_after_body_content_started() {
    let html = r"<html><head><title>Original</title></head>
        <body><p>body text here</p><title>Impostor</title></body></html>";

    let doc = parse_document(html);
    assert_eq!(doc.title.as_deref(), Some("Original"));
}

#[test]
fn pre_body_content_is_never_a_block() {
    let doc = parse_document("<html><head><title>Only a title</title></head><body></body></html>");
    assert_eq!(doc.title.as_deref(), Some("Only a title"));
    assert!(doc.text_blocks.is_empty());
}

#[test]
fn inline_markup_keeps_a_single_block_and_depth_is_stamped_at_origin() {
    let doc = parse_document(
        "<body><div><p>some <b>bold</b> and <em>emphatic</em> words</p></div></body>",
    );

    assert_eq!(doc.text_blocks.len(), 1);
    let block = &doc.text_blocks[0];
    assert_eq!(block.text, "some bold and emphatic words");
    assert_eq!(block.num_words, 5);
    // body(1) -> div(2) -> p(3); inline tags do not move the level.
    assert_eq!(block.tag_level, 3);
}

#[test]
fn block_invariants_hold_for_every_emitted_block() {
    let html = r#"<body>
        <h1>A headline of words</h1>
        <p>The first paragraph contains a reasonable amount of text and
        <a href="/ref">a linked phrase inside it</a> for density.</p>
        <ul><li>item one</li><li>item two</li></ul>
    </body>"#;

    let doc = parse_document(html);
    assert!(doc.text_blocks.len() >= 3);

    for block in &doc.text_blocks {
        assert!(block.num_wrapped_lines >= 1);
        assert!(block.num_words_in_wrapped_lines <= block.num_words);
        let expected_density =
            block.num_words_in_wrapped_lines as f64 / block.num_wrapped_lines as f64;
        assert_eq!(block.text_density(), expected_density);
        if block.num_words == 0 {
            assert_eq!(block.link_density(), 0.0);
        } else {
            let expected = block.num_linked_words as f64 / block.num_words as f64;
            assert_eq!(block.link_density(), expected);
        }
        assert_eq!(block.offset_blocks_start, block.offset_blocks_end);
        assert!(!block.is_content);
        assert!(block.labels.is_empty());
    }
}

#[test]
fn blocks_are_emitted_in_document_order_with_sequential_offsets() {
    let doc = parse_document(
        "<body><p>alpha text</p><p>beta text</p><p>gamma text</p></body>",
    );

    assert_eq!(doc.text_blocks.len(), 3);
    for (index, block) in doc.text_blocks.iter().enumerate() {
        assert_eq!(block.offset_blocks_start, index as i32);
    }
}

#[test]
fn clean_parse_reports_no_aggregate_error() {
    let doc = parse_document("<body><p>nothing wrong here</p></body>");
    assert!(doc.error().is_none());
    assert!(doc.warnings.is_empty());
}

#[test]
fn entities_are_decoded_before_counting() {
    let doc = parse_document("<body><p>fish &amp; chips</p></body>");
    assert_eq!(doc.text_blocks.len(), 1);
    assert_eq!(doc.text_blocks[0].text, "fish & chips");
    // "&" splits as its own token but contains no word character.
    assert_eq!(doc.text_blocks[0].num_words, 2);
}
