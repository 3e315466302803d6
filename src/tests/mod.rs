#[cfg(test)]
mod formatting_tests {
    use crate::renderer::node::{Layout, NodeKind, RenderNode};
    use crate::{
        convert, convert_str, BuildOptions, ConvertOptions, DocumentBuilder, EventSink,
        MarkupEvent, Render, RenderOptions, WikiRenderer,
    };

    fn wiki(xml: &str) -> String {
        convert_str(xml).expect("conversion failed")
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(wiki(""), "\n");
        assert_eq!(wiki("<texinfo></texinfo>"), "\n");
        assert_eq!(wiki("<?xml version=\"1.0\"?>\n<texinfo>\n</texinfo>\n"), "\n");
    }

    #[test]
    fn test_sibling_blocks_coalesce_blank_lines() {
        let output = wiki("<texinfo><para>One</para><para>Two</para></texinfo>");
        assert_eq!(output, "\n\nOne\n\nTwo\n");
        assert!(!output.contains("One\n\n\n"));
    }

    #[test]
    fn test_quotation_indents_continuation_lines() {
        let output = wiki(
            "<texinfo><para>Intro</para>\
             <quotation><para>first\nsecond\n\nthird</para></quotation></texinfo>",
        );
        assert_eq!(output, "\n\nIntro\n\n    first\n    second\n\n    third\n");

        // Blank lines inside the indented region carry no trailing spaces
        assert!(output.lines().all(|line| line.trim_end() == line));
    }

    #[test]
    fn test_crlf_input_matches_lf_input() {
        let crlf = wiki("<texinfo><para>a\r\nb</para><para>c</para></texinfo>");
        assert_eq!(crlf, "\n\na\nb\n\nc\n");

        let quoted = wiki("<texinfo><quotation><para>a\r\nb</para></quotation></texinfo>");
        assert_eq!(quoted, "\n\n    a\n    b\n");
        assert!(!quoted.contains('\r'));
    }

    #[test]
    fn test_heading_depth_and_divider() {
        let output = wiki(
            "<texinfo>\
             <chapter><title>One</title>\
             <section><title>Deep</title></section></chapter>\
             <chapter><title>Two</title></chapter>\
             </texinfo>",
        );
        assert_eq!(
            output,
            "\n\n== One ==\n\n=== Deep ===\n\n----\n== Two ==\n"
        );
        assert_eq!(output.matches("----").count(), 1);
    }

    #[test]
    fn test_title_outside_chapter() {
        let output = wiki("<texinfo><top><title>Manual</title></top></texinfo>");
        assert_eq!(output, "\n\n= Manual =\n");
    }

    #[test]
    fn test_cross_reference() {
        let output = wiki(
            "<texinfo><para>See <xref><xrefnodename>Foo Bar</xrefnodename></xref>.</para></texinfo>",
        );
        assert_eq!(output, "\n\nSee [#Foo_Bar Foo Bar].\n");
    }

    #[test]
    fn test_unknown_tag_is_transparent() {
        let wrapped = wiki("<texinfo><para><mystery>raw <b>x</b> tail</mystery></para></texinfo>");
        let plain = wiki("<texinfo><para><b>x</b></para></texinfo>");
        assert_eq!(wrapped, plain);
        assert_eq!(wrapped, "\n\n__*x*\n");
    }

    #[test]
    fn test_item_in_table_row() {
        let output = wiki(
            "<texinfo><table><tableitem>\
             <tableterm>Key</tableterm>\
             <item><para>Value</para></item>\
             </tableitem></table></texinfo>",
        );
        assert_eq!(output, "\n||Key||Value||\n");
    }

    #[test]
    fn test_item_in_itemize() {
        let output = wiki(
            "<texinfo><para>Items:</para><itemize>\
             <item><para>One</para></item>\
             <item><para>Two</para></item>\
             </itemize></texinfo>",
        );
        assert_eq!(output, "\n\nItems:\n\n    * One\n    * Two\n");
    }

    #[test]
    fn test_nested_itemize() {
        let output = wiki(
            "<texinfo><itemize><item><para>Outer</para>\
             <itemize><item><para>Inner</para></item></itemize>\
             </item></itemize></texinfo>",
        );
        assert_eq!(output, "\n\n    * Outer\n\n        * Inner\n");
    }

    #[test]
    fn test_bold_at_start_of_bullet() {
        let output = wiki(
            "<texinfo><itemize><item><para><b>Note</b> text</para></item></itemize></texinfo>",
        );
        assert_eq!(output, "\n\n    * __*Note* text\n");
    }

    #[test]
    fn test_inline_markup() {
        let output = wiki(
            "<texinfo><para>Use <code>ls</code>, <file>a.txt</file>, <samp>y</samp>, \
             <i>very</i> and <b>bold</b>.</para></texinfo>",
        );
        assert_eq!(output, "\n\nUse `ls`, `a.txt`, `y`, _very_ and __*bold*.\n");
    }

    #[test]
    fn test_example_block() {
        let output = wiki("<texinfo><para>Run:</para><example>make all</example></texinfo>");
        assert_eq!(output, "\n\nRun:\n\n{{{\nmake all\n}}}\n");
    }

    #[test]
    fn test_summary_pragma_comes_first() {
        let output = wiki(
            "<texinfo><chapter><title>Intro</title></chapter>\
             <majorheading>Wiki export tool</majorheading></texinfo>",
        );
        assert_eq!(output, "#summary Wiki export tool\n\n== Intro ==\n");
    }

    #[test]
    fn test_source_whitespace_between_elements_is_dropped() {
        let output = wiki(
            "<texinfo>\n<chapter>\n<title>Intro</title>\n\
             <para>Line one\nline two.</para>\n</chapter>\n</texinfo>\n",
        );
        assert_eq!(output, "\n\n== Intro ==\n\nLine one\nline two.\n");
    }

    #[test]
    fn test_entities_in_text() {
        let output = wiki("<texinfo><para>a &lt; b &amp;&amp; c&enddots;</para></texinfo>");
        assert_eq!(output, "\n\na < b && c...\n");
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(convert_str("<texinfo><para></texinfo>").is_err());
    }

    #[test]
    fn test_custom_indent_width() {
        let options = ConvertOptions {
            render: RenderOptions::new().with_indent_width(2),
            ..ConvertOptions::default()
        };
        let xml = "<texinfo><quotation><para>a\nb</para></quotation></texinfo>";
        let output = convert(xml.as_bytes(), Vec::new(), &options).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "\n\n  a\n  b\n");
    }

    #[test]
    fn test_tracing_options_do_not_change_output() {
        let xml = "<texinfo><chapter><title>T</title><para>x</para></chapter></texinfo>";
        let traced = ConvertOptions {
            build: BuildOptions {
                trace_elements: true,
                trace_text: true,
            },
            ..ConvertOptions::default()
        };
        let output = convert(xml.as_bytes(), Vec::new(), &traced).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), wiki(xml));
    }

    #[test]
    fn test_builder_from_event_list() {
        let events = vec![
            MarkupEvent::begin("chapter"),
            MarkupEvent::begin("title"),
            MarkupEvent::text("Events"),
            MarkupEvent::end("title"),
            MarkupEvent::end("chapter"),
        ];
        let document = DocumentBuilder::build(&events, BuildOptions::default());
        let output = WikiRenderer::default().render_to_string(&document).unwrap();
        assert_eq!(output, "\n\n== Events ==\n");
    }

    #[test]
    fn test_builder_driven_directly() {
        let mut builder = DocumentBuilder::default();
        builder.begin("para", &[]);
        builder.text("direct");
        builder.end("para");

        let document = builder.finish();
        let rendered = document.render_to_string(&RenderOptions::default()).unwrap();
        assert_eq!(rendered, "\n\ndirect\n");
    }

    #[test]
    fn test_anchor_render_to_string() {
        let mut node = RenderNode::new(NodeKind::CrossReference).with_layout(Layout::Anchor);
        node.push_text("A B");
        assert_eq!(node.render_to_string(&RenderOptions::default()).unwrap(), "[#A_B A B]");
    }
}
