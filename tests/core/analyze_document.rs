//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use webfreq::core::{analyze_document, Document, Notice};
    use webfreq::frequency::FrequencyView;
    use webfreq::presentation::{chart_series, to_pairs, ChartKind};
    use webfreq::text::{JiebaSegmenter, UnicodeWordSegmenter};

    fn document(raw_text: &str) -> Document {
        Document {
            url: "https://example.com/".to_string(),
            title: "Example".to_string(),
            raw_text: raw_text.to_string(),
        }
    }

    #[test]
    fn cat_dog_scenario() {
        let analysis = analyze_document(document("<p>猫,猫,狗.</p>"), &UnicodeWordSegmenter);

        assert_eq!(
            to_pairs(&analysis.table.top_n(20)),
            vec![("猫".to_string(), 2), ("狗".to_string(), 1)]
        );
        assert_eq!(
            to_pairs(&analysis.table.filter_by_min_count(2).unwrap()),
            vec![("猫".to_string(), 2)]
        );
    }

    #[test]
    fn counts_add_up_to_token_total() {
        let analysis = analyze_document(
            document("我们中出了一个叛徒，我们一个都不能少。"),
            &JiebaSegmenter::new(),
        );

        let sum: u64 = analysis.table.iter().map(|(_, count)| count).sum();
        assert_eq!(sum, analysis.table.total());
        assert_eq!(analysis.table.get("我们"), Some(2));
        assert!(analysis.notices.is_empty());
    }

    #[test]
    fn every_chart_kind_from_one_table() {
        let analysis = analyze_document(
            document("rust go rust zig rust go c"),
            &UnicodeWordSegmenter,
        );

        for kind in ChartKind::ALL {
            let series = chart_series(kind, &analysis.table, 3, 1).unwrap();
            assert_eq!(series.kind, kind);
            assert!(!series.pairs.is_empty());
        }

        let bar = chart_series(ChartKind::Bar, &analysis.table, 3, 1).unwrap();
        assert_eq!(
            bar.pairs,
            vec![
                ("rust".to_string(), 3),
                ("go".to_string(), 2),
                ("zig".to_string(), 1)
            ]
        );
        assert_eq!(analysis.table.top_n(3).max_count(), Some(3));
    }

    #[test]
    fn empty_text_yields_notice() {
        let analysis = analyze_document(document("，。！"), &UnicodeWordSegmenter);

        assert!(analysis.table.is_empty());
        assert!(analysis.notices.is_empty());

        let analysis = analyze_document(document(""), &UnicodeWordSegmenter);
        assert_eq!(analysis.notices, vec![Notice::EmptyContent]);
    }
}
