use ftpsweep_core::scanner::perform_scan;

use crate::support::{Transcript, Workspace, closed_port, ftp_server, geo_server, service};

const CHILE: &str = r#"{"status":"success","isp":"ACME Telecom","country":"Chile"}"#;

/*************************************************************
                  End to end over loopback
**************************************************************/

#[tokio::test]
async fn anonymous_server_is_reported_and_appended() {
    let ws = Workspace::new();
    let port = ftp_server("230 anonymous access granted\r\n").await;
    let geo = geo_server(CHILE).await;
    ws.hosts("127.0.0.1\n");
    std::fs::write(ws.output(), "10.9.9.9, ISP: Old, Country: Nowhere\n").unwrap();

    let cfg = ws.config(port, &geo);
    let mut transcript = Transcript::default();
    let summary = perform_scan(&service(&cfg), &cfg, &mut transcript)
        .await
        .unwrap();

    assert_eq!(summary.probed, 1);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.located, 1);
    assert_eq!(summary.persisted, 1);
    assert_eq!(
        transcript.lines,
        vec![
            "[+] 127.0.0.1 FTP Anonymous Login Succeeded.",
            "[@] 127.0.0.1 ISP: ACME Telecom Country: Chile",
        ]
    );
    assert_eq!(
        ws.read_output(),
        "10.9.9.9, ISP: Old, Country: Nowhere\n\
         127.0.0.1, ISP: ACME Telecom, Country: Chile\n"
    );
}

#[tokio::test]
async fn refused_connection_leaves_findings_untouched() {
    let ws = Workspace::new();
    let port = closed_port().await;
    let geo = geo_server(CHILE).await;
    ws.hosts("127.0.0.1\n");
    std::fs::write(ws.output(), "kept\n").unwrap();

    let cfg = ws.config(port, &geo);
    let mut transcript = Transcript::default();
    let summary = perform_scan(&service(&cfg), &cfg, &mut transcript)
        .await
        .unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(transcript.lines.len(), 1);
    let line = &transcript.lines[0];
    assert!(
        line.starts_with("[-] 127.0.0.1 FTP Anonymous Login Failed: FTP connection error"),
        "unexpected line: {line}"
    );
    assert_eq!(ws.read_output(), "kept\n");
}

#[tokio::test]
async fn rejected_login_is_a_failure() {
    let ws = Workspace::new();
    let port = ftp_server("530 anonymous logins are disabled\r\n").await;
    let geo = geo_server(CHILE).await;
    ws.hosts("127.0.0.1\n");

    let cfg = ws.config(port, &geo);
    let mut transcript = Transcript::default();
    let summary = perform_scan(&service(&cfg), &cfg, &mut transcript)
        .await
        .unwrap();

    assert_eq!(summary.failed, 1);
    assert!(transcript.lines[0].contains("530"));
    assert_eq!(ws.read_output(), "");
}

#[tokio::test]
async fn failed_geolocation_keeps_the_verdict() {
    let ws = Workspace::new();
    let port = ftp_server("230 ok\r\n").await;
    let geo = geo_server(r#"{"status":"fail","message":"reserved range"}"#).await;
    ws.hosts("127.0.0.1\n");

    let cfg = ws.config(port, &geo);
    let mut transcript = Transcript::default();
    let summary = perform_scan(&service(&cfg), &cfg, &mut transcript)
        .await
        .unwrap();

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.located, 0);
    assert_eq!(
        transcript.lines,
        vec!["[+] 127.0.0.1 FTP Anonymous Login Succeeded."]
    );
    assert_eq!(ws.read_output(), "");
}

#[tokio::test]
async fn rerun_appends_again() {
    let ws = Workspace::new();
    let port = ftp_server("230 ok\r\n").await;
    let geo = geo_server(CHILE).await;
    ws.hosts("127.0.0.1\n\n127.0.0.1\n");

    let cfg = ws.config(port, &geo);
    for _ in 0..2 {
        let mut transcript = Transcript::default();
        perform_scan(&service(&cfg), &cfg, &mut transcript)
            .await
            .unwrap();
    }

    let output = ws.read_output();
    assert_eq!(output.lines().count(), 4);
    assert!(
        output
            .lines()
            .all(|l| l == "127.0.0.1, ISP: ACME Telecom, Country: Chile")
    );
}

/*************************************************************
                     Fatal input errors
**************************************************************/

#[tokio::test]
async fn missing_host_list_is_fatal() {
    let ws = Workspace::new();
    let cfg = ws.config(21, "http://127.0.0.1:9/json");

    let mut transcript = Transcript::default();
    let err = perform_scan(&service(&cfg), &cfg, &mut transcript)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Error opening"), "{err:#}");
    assert!(transcript.lines.is_empty());
    assert!(!ws.output().exists());
}
