//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use webfreq::core::{AnalysisOptions, SegmenterKind};
    use webfreq::frequency::FrequencyView;
    use webfreq::presentation::ChartKind;
    use webfreq::session::AnalysisSession;

    fn options() -> AnalysisOptions {
        AnalysisOptions {
            segmenter: SegmenterKind::Unicode,
            min_frequency: 2,
            ..Default::default()
        }
    }

    #[test]
    fn views_follow_active_document() {
        let mut session = AnalysisSession::new(options()).unwrap();

        session.analyze_html(
            "https://baike.example/item/猫",
            include_bytes!("../_data_/lemma_summary.html"),
            None,
        );
        assert_eq!(session.filtered().unwrap().len(), 1);

        session.analyze_html(
            "https://blog.example/rust",
            include_bytes!("../_data_/article.html"),
            None,
        );
        let filtered = session.filtered().unwrap();
        assert_eq!(
            filtered.entries(),
            &[("rust".to_string(), 2), ("猫".to_string(), 2)]
        );
        assert_eq!(session.active().unwrap().document.title, "Rust 与 rust");

        let radar = session.chart(ChartKind::Radar).unwrap();
        assert_eq!(radar.axis_max, Some(2));
        assert_eq!(radar.pairs.len(), 5);
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use webfreq::core::{AnalysisOptions, SegmenterKind};
    use webfreq::error::{ErrorCategory, WebfreqError};
    use webfreq::network::Fetcher;
    use webfreq::session::AnalysisSession;

    #[test]
    fn unreachable_url_keeps_previous_table() {
        let options = AnalysisOptions {
            segmenter: SegmenterKind::Unicode,
            timeout: 5,
            ..Default::default()
        };
        let fetcher = Fetcher::new(&options).unwrap();
        let mut session = AnalysisSession::new(options).unwrap();

        session.analyze_html(
            "https://baike.example/item/猫",
            include_bytes!("../_data_/lemma_summary.html"),
            None,
        );

        let error = session
            .analyze_url(&fetcher, "http://127.0.0.1:1/")
            .unwrap_err();
        assert_eq!(error.category(), ErrorCategory::Network);
        assert!(error.is_recoverable());

        let active = session.active().unwrap();
        assert_eq!(active.document.title, "猫 - 百科");
        assert_eq!(active.table.get("猫"), Some(2));
    }

    #[test]
    fn views_before_any_analysis() {
        let session = AnalysisSession::new(AnalysisOptions::default()).unwrap();
        assert!(matches!(
            session.ranked(),
            Err(WebfreqError::InsufficientData(_))
        ));
        assert!(matches!(
            session.filtered_cloud(),
            Err(WebfreqError::InsufficientData(_))
        ));
    }
}
