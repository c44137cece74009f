//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use assert_cmd::prelude::*;
    use serde_json::{json, Value};
    use std::process::{Command, Output};

    const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/_data_/");

    fn webfreq() -> Command {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
        cmd.env("NO_COLOR", "1")
            .env("RUST_LOG", "off")
            .env_remove("WEBFREQ_TOP_N")
            .env_remove("WEBFREQ_MIN_FREQUENCY")
            .env_remove("WEBFREQ_SEGMENTER")
            .env_remove("WEBFREQ_HMM")
            .env_remove("WEBFREQ_TIMEOUT")
            .env_remove("WEBFREQ_USER_AGENT")
            .env_remove("WEBFREQ_LOG_LEVEL");
        cmd
    }

    fn json_report(out: &Output) -> Value {
        serde_json::from_slice(&out.stdout).unwrap()
    }

    #[test]
    fn lemma_summary_json_report() {
        let out = webfreq()
            .arg("--input-file")
            .arg(format!("{DATA_DIR}lemma_summary.html"))
            .args(["--segmenter", "unicode", "--min-frequency", "2", "--json"])
            .output()
            .unwrap();

        assert_eq!(String::from_utf8_lossy(&out.stderr), "");
        assert_eq!(out.status.code(), Some(0));

        let report = json_report(&out);
        assert_eq!(report["title"], "猫 - 百科");
        assert_eq!(report["preview"], "猫,猫,狗.");
        assert_eq!(report["total_words"], 3);
        assert_eq!(report["distinct_words"], 2);
        assert_eq!(report["top_words"], json!([["猫", 2], ["狗", 1]]));
        assert_eq!(report["filtered_words"], json!([["猫", 2]]));
        assert_eq!(report["notices"], json!([]));
        assert_eq!(report["options"]["segmenter"], "unicode");
        assert!(report["url"].as_str().unwrap().starts_with("file://"));
        assert!(report["generated_at"].is_string());
        assert!(report.get("chart").is_none());
    }

    #[test]
    fn lemma_summary_text_report() {
        let out = webfreq()
            .arg("-i")
            .arg(format!("{DATA_DIR}lemma_summary.html"))
            .args(["-s", "unicode", "-m", "2"])
            .output()
            .unwrap();

        assert_eq!(String::from_utf8_lossy(&out.stderr), "");
        assert_eq!(out.status.code(), Some(0));

        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("Title: 猫 - 百科"));
        assert!(stdout.contains("Content preview:\n猫,猫,狗.\n"));
        assert!(stdout.contains("   1. 猫\t2\n"));
        assert!(stdout.contains("   2. 狗\t1\n"));
        assert!(stdout.contains("Words appearing at least 2 times:\n  猫\t2\n"));
        assert!(!stdout.contains("鸟"));
    }

    #[test]
    fn radar_chart_exposes_axis_max() {
        let out = webfreq()
            .arg("-i")
            .arg(format!("{DATA_DIR}article.html"))
            .args(["-s", "unicode", "--chart", "radar", "--json"])
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(0));

        let report = json_report(&out);
        assert_eq!(report["title"], "Rust 与 rust");
        assert_eq!(report["chart"]["kind"], "radar");
        assert_eq!(report["chart"]["title"], "雷达图");
        assert_eq!(report["chart"]["axis_max"], 2);
        assert_eq!(
            report["chart"]["pairs"],
            json!([["rust", 2], ["猫", 2], ["Rust", 1], ["and", 1], ["狗", 1]])
        );
    }

    #[test]
    fn word_cloud_covers_every_word() {
        let out = webfreq()
            .arg("-i")
            .arg(format!("{DATA_DIR}article.html"))
            .args(["-s", "unicode", "-c", "词云", "-n", "1", "-j"])
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(0));

        let report = json_report(&out);
        assert_eq!(report["top_words"], json!([["rust", 2]]));
        assert_eq!(report["chart"]["kind"], "word_cloud");
        assert_eq!(report["chart"]["pairs"].as_array().unwrap().len(), 5);
        assert!(report["chart"].get("axis_max").is_none());
    }

    #[test]
    fn gbk_document_is_decoded() {
        let out = webfreq()
            .arg("-i")
            .arg(format!("{DATA_DIR}gbk.html"))
            .args(["-s", "unicode", "-j"])
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(0));

        let report = json_report(&out);
        assert_eq!(report["title"], "中文");
        assert_eq!(
            report["top_words"],
            json!([["你", 2], ["好", 2], ["世", 1], ["界", 1]])
        );
    }

    #[test]
    fn empty_document_is_a_notice() {
        let out = webfreq()
            .arg("-i")
            .arg(format!("{DATA_DIR}empty.html"))
            .args(["-s", "unicode", "-j"])
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(0));
        assert!(String::from_utf8_lossy(&out.stderr).contains("no readable text"));

        let report = json_report(&out);
        assert_eq!(report["title"], "No title found");
        assert_eq!(report["top_words"], json!([]));
        assert_eq!(report["notices"], json!(["empty_content"]));
    }

    #[test]
    fn env_top_n_is_overridden_by_flag() {
        let out = webfreq()
            .env("WEBFREQ_TOP_N", "1")
            .arg("-i")
            .arg(format!("{DATA_DIR}article.html"))
            .args(["-s", "unicode", "-j"])
            .output()
            .unwrap();
        assert_eq!(json_report(&out)["top_words"], json!([["rust", 2]]));

        let out = webfreq()
            .env("WEBFREQ_TOP_N", "1")
            .arg("-i")
            .arg(format!("{DATA_DIR}article.html"))
            .args(["-s", "unicode", "-j", "--top-n", "2"])
            .output()
            .unwrap();
        assert_eq!(json_report(&out)["top_words"], json!([["rust", 2], ["猫", 2]]));
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
    use assert_cmd::prelude::*;
    use std::process::Command;

    const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/_data_/");

    #[test]
    fn ranked_chart_of_empty_document() {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
        let out = cmd
            .env("NO_COLOR", "1")
            .env("RUST_LOG", "off")
            .arg("-i")
            .arg(format!("{DATA_DIR}empty.html"))
            .args(["-s", "unicode", "--chart", "bar"])
            .output()
            .unwrap();

        assert!(String::from_utf8_lossy(&out.stderr).contains("Error: not enough data"));
        assert_eq!(out.status.code(), Some(1));
    }

    #[test]
    fn missing_input_file() {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
        let out = cmd
            .env("NO_COLOR", "1")
            .arg("-i")
            .arg(format!("{DATA_DIR}does_not_exist.html"))
            .output()
            .unwrap();

        assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error: I/O error"));
        assert_eq!(String::from_utf8_lossy(&out.stdout), "");
        assert_eq!(out.status.code(), Some(1));
    }
}
