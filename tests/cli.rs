mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use predicates::prelude::*;
    use predicates::str::{contains, starts_with};

    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "benchreport";

    /// Two loggers, two thread counts, one message count, two trials each
    const REPORT: &str = "\
gflogger x x x 1 x 1000 messages
count: 1000 time: 0.5 s
0.001
gflogger x x x 1 x 1000 messages
count: 1000 time: 0.5 s
0.003
gflogger x x x 4 x 1000 messages
count: 1000 time: 0.25 s
0.002
log4j x x x 1 x 1000 messages
count: 1000 time: 1.0 s
0.010
log4j x x x 4 x 1000 messages
count: 1000 time: 2.0 s
0.020
";

    fn write_report(dir: &Path, name: &str, content: &str) -> std::io::Result<std::path::PathBuf> {
        let path = dir.join(name);
        let mut file = fs::File::create(&path)?;
        file.write_all(content.as_bytes())?;
        Ok(path)
    }

    fn command() -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--no-config").env("NO_COLOR", "1");
        Ok(cmd)
    }

    #[test]
    fn test_output__when_no_subcommand() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.assert().failure().code(2);
        Ok(())
    }

    #[test]
    fn test_output__when_no_reports_provided() -> TestResult {
        let mut cmd = command()?;
        cmd.arg("table");

        cmd.assert().failure().code(2).stderr(contains(
            "error: the following required arguments were not provided:",
        ));
        Ok(())
    }

    #[test]
    fn test_table__writes_all_formats_next_to_report() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "run.txt", REPORT)?;
        let mut cmd = command()?;
        cmd.arg("table").arg(&report);

        cmd.assert().success().stdout(contains("run.txt.csv"));

        let csv = fs::read_to_string(dir.path().join("run.txt.csv"))?;
        assert_eq!(
            csv,
            "threads,messages,gflogger throughput,gflogger gc,log4j throughput,log4j gc\n\
             1,1000,2000.00,2.00,1000.00,10.00\n\
             4,1000,4000.00,2.00,500.00,20.00\n"
        );

        let json = fs::read_to_string(dir.path().join("run.txt.json"))?;
        let bundle: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(bundle["charts"][0]["throughput"]["id"], "throughput_1_chart");
        assert_eq!(bundle["charts"][1]["pause"]["title"], "Total stop the world, 4 threads");

        let html = fs::read_to_string(dir.path().join("run.txt.html"))?;
        assert!(html.contains("google.visualization.LineChart"));
        Ok(())
    }

    #[test]
    fn test_table__stdout_single_format() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "run.txt", REPORT)?;
        let mut cmd = command()?;
        cmd.args(["table", "--format", "csv", "--stdout"]).arg(&report);

        cmd.assert()
            .success()
            .stdout(starts_with("threads,messages,gflogger throughput"));
        assert!(!dir.path().join("run.txt.csv").exists());
        Ok(())
    }

    #[test]
    fn test_table__stdout_rejects_several_formats() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "run.txt", REPORT)?;
        let mut cmd = command()?;
        cmd.args(["table", "--stdout"]).arg(&report);

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("Error: Invalid argument: --stdout needs exactly one --format"));
        Ok(())
    }

    #[test]
    fn test_table__output_dir_and_format_filter() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "run.txt", REPORT)?;
        let out = dir.path().join("out");
        let mut cmd = command()?;
        cmd.args(["table", "--format", "json", "-o"])
            .arg(&out)
            .arg(&report);

        cmd.assert().success();
        assert!(out.join("run.txt.json").exists());
        assert!(!out.join("run.txt.csv").exists());
        assert!(!out.join("run.txt.html").exists());
        Ok(())
    }

    #[test]
    fn test_table__incomplete_grid_fails() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(
            dir.path(),
            "run.txt",
            "a x x x 1 x 10\nx x x 1.0\n0\nb x x x 2 x 10\nx x x 1.0\n0\n",
        )?;
        let mut cmd = command()?;
        cmd.arg("table").arg(&report);

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("Missing key: no samples for logger=b threads=1 messages=10"));
        assert!(!dir.path().join("run.txt.csv").exists());
        assert!(!dir.path().join("run.txt.json").exists());
        assert!(!dir.path().join("run.txt.html").exists());
        Ok(())
    }

    #[test]
    fn test_table__malformed_record_names_line() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "bad.txt", "a x x x four x 10\nx x x 1.0\n0\n")?;
        let mut cmd = command()?;
        cmd.arg("table").arg(&report);

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("Malformed record at"))
            .stderr(contains("bad.txt:1"));
        Ok(())
    }

    #[test]
    fn test_table__subnormal_elapsed_time_is_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "tiny.txt", "a x x x 1 x 10\nt t t 1e-320\n0\n")?;
        let mut cmd = command()?;
        cmd.args(["table", "--format", "csv", "--stdout"]).arg(&report);

        cmd.assert()
            .failure()
            .code(1)
            .stdout(contains("inf").not())
            .stderr(contains("tiny.txt:2"));
        Ok(())
    }

    #[test]
    fn test_table__trailing_blank_line_is_named() -> TestResult {
        let dir = tempfile::tempdir()?;
        let content = format!("{REPORT}\n");
        let report = write_report(dir.path(), "run.txt", &content)?;
        let mut cmd = command()?;
        cmd.args(["summary", "--json"]).arg(&report);

        cmd.assert()
            .failure()
            .stderr(contains("run.txt:16: blank line after the last complete record"));
        Ok(())
    }

    #[test]
    fn test_table__missing_report_file() -> TestResult {
        let mut cmd = command()?;
        cmd.args(["table", "/nonexistent/run.txt"]);

        cmd.assert()
            .failure()
            .stderr(contains("File not found: /nonexistent/run.txt"));
        Ok(())
    }

    #[test]
    fn test_table__trailing_header_policy() -> TestResult {
        let dir = tempfile::tempdir()?;
        let content = format!("{REPORT}dangling x x x 1 x 1000\n");
        let report = write_report(dir.path(), "run.txt", &content)?;

        let mut strict = command()?;
        strict.args(["summary", "--json"]).arg(&report);
        strict
            .assert()
            .failure()
            .stderr(contains("trailing record has only a header line"));

        let mut lenient = command()?;
        lenient
            .args(["summary", "--json", "--ignore-trailing"])
            .arg(&report);
        lenient.assert().success().stdout(contains("\"gflogger\""));
        Ok(())
    }

    #[test]
    fn test_table__several_reports_are_merged() -> TestResult {
        let dir = tempfile::tempdir()?;
        let first = write_report(
            dir.path(),
            "a.txt",
            "x x x x 1 x 100\nx x x 1.0\n0.001\n",
        )?;
        let second = write_report(
            dir.path(),
            "b.txt",
            "x x x x 1 x 100\nx x x 3.0\n0.003\n",
        )?;
        let mut cmd = command()?;
        cmd.args(["summary", "--json"]).arg(&first).arg(&second);

        let output = cmd.output()?;
        assert!(output.status.success());
        let entries: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(entries[0]["trials"], 2);
        assert_eq!(entries[0]["elapsed_ms"]["mean"], 2000.0);
        Ok(())
    }

    #[test]
    fn test_cut__writes_bundle_and_page() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "run.txt", REPORT)?;
        let mut cmd = command()?;
        cmd.args(["cut", "--threads", "1", "--messages", "1000"])
            .arg(&report);

        cmd.assert().success();

        let json = fs::read_to_string(dir.path().join("run.txt_1_1000.json"))?;
        let bundle: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(bundle["trials"], 2);
        assert_eq!(bundle["throughput"]["id"], "throughput_1_1000");
        assert_eq!(
            bundle["pause"]["title"],
            "Total stop the world: 1 threads / 1000 msgs / 2 series"
        );
        assert_eq!(bundle["pause"]["rows"][0][0], "gflogger");
        assert_eq!(bundle["pause"]["rows"][0][1], 1.0);
        assert_eq!(bundle["pause"]["rows"][0][4], 3.0);

        let html = fs::read_to_string(dir.path().join("run.txt_1_1000.html"))?;
        assert!(html.contains("CandlestickChart"));
        Ok(())
    }

    #[test]
    fn test_cut__unknown_selection() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "run.txt", REPORT)?;
        let mut cmd = command()?;
        cmd.args(["cut", "--threads", "8", "--messages", "1000", "--stdout"])
            .arg(&report);

        cmd.assert()
            .failure()
            .stderr(contains("Missing key: no samples for logger=gflogger threads=8"));
        Ok(())
    }

    #[test]
    fn test_summary__text_table() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "run.txt", REPORT)?;
        let mut cmd = command()?;
        cmd.arg("summary").arg(&report);

        cmd.assert()
            .success()
            .stdout(starts_with("logger"))
            .stdout(contains("4 key(s), times in ms"));
        Ok(())
    }

    #[test]
    fn test_config_file__formats() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "run.txt", REPORT)?;
        let config = write_report(dir.path(), "bench.toml", "formats = [\"csv\"]\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--config").arg(&config).arg("table").arg(&report);

        cmd.assert().success();
        assert!(dir.path().join("run.txt.csv").exists());
        assert!(!dir.path().join("run.txt.json").exists());
        Ok(())
    }

    #[test]
    fn test_config_file__invalid_value() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "run.txt", REPORT)?;
        let config = write_report(dir.path(), "bench.toml", "trailing_group = \"skip\"\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--config").arg(&config).arg("table").arg(&report);

        cmd.assert()
            .failure()
            .stderr(contains("Invalid trailing group policy 'skip'"));
        Ok(())
    }

    #[test]
    fn test_logging__rust_log_enables_info() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "run.txt", REPORT)?;
        let mut cmd = command()?;
        cmd.env("RUST_LOG", "info").arg("summary").arg(&report);

        cmd.assert()
            .success()
            .stderr(contains("Aggregated 5 sample(s) into 4 key(s)"));
        Ok(())
    }

    #[test]
    fn test_logging__quiet_overrides_rust_log() -> TestResult {
        let dir = tempfile::tempdir()?;
        let report = write_report(dir.path(), "run.txt", REPORT)?;
        let mut cmd = command()?;
        cmd.env("RUST_LOG", "debug")
            .args(["--quiet", "summary", "--json"])
            .arg(&report);

        cmd.assert()
            .success()
            .stderr(contains("Aggregated").not());
        Ok(())
    }

    #[test]
    fn test_completion_generate() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.args(["completion-generate", "bash"]);

        cmd.assert().success().stdout(contains("benchreport"));
        Ok(())
    }
}
