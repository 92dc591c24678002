//! Provider tests with HTTP mocking.

mod noip_tests {
    use crate::error::DdnsError;
    use crate::providers::{DdnsProvider, NoIpProvider, DEFAULT_MACHINE};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn netrc(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn provider(server: &MockServer, netrc_path: PathBuf) -> NoIpProvider {
        NoIpProvider::with_update_url(
            format!("{}/nic/update", server.uri()),
            DEFAULT_MACHINE.to_string(),
            netrc_path,
        )
    }

    #[tokio::test]
    async fn test_noip_update_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/nic/update"))
            .and(query_param("hostname", "example.ddns.net"))
            .and(query_param("myip", "203.0.113.5"))
            .and(header("Authorization", "Basic YWxpY2U6czNjcmV0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("good 203.0.113.5\n"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let file = netrc("machine dynupdate.no-ip.com login alice password s3cret\n");
        let provider = provider(&mock_server, file.path().to_path_buf());

        let text = provider
            .update_ip("example.ddns.net", "203.0.113.5")
            .await
            .unwrap();

        assert_eq!(text, "good 203.0.113.5");
    }

    #[tokio::test]
    async fn test_noip_default_entry_used_for_auth() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/nic/update"))
            .and(header("Authorization", "Basic ZGZsdDpwdw=="))
            .respond_with(ResponseTemplate::new(200).set_body_string("nochg 203.0.113.5"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let file = netrc(
            "machine dynupdate.no-ip.com login alice password s3cret\n\
             default login dflt password pw\n",
        );
        let provider = provider(&mock_server, file.path().to_path_buf());

        let text = provider
            .update_ip("example.ddns.net", "203.0.113.5")
            .await
            .unwrap();

        assert_eq!(text, "nochg 203.0.113.5");
    }

    #[tokio::test]
    async fn test_noip_rejection_body_returned_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/nic/update"))
            .respond_with(ResponseTemplate::new(401).set_body_string("badauth\r\n"))
            .mount(&mock_server)
            .await;

        let file = netrc("machine other.example.com login bob password nope\n");
        let provider = provider(&mock_server, file.path().to_path_buf());

        let text = provider
            .update_ip("example.ddns.net", "203.0.113.5")
            .await
            .unwrap();

        assert_eq!(text, "badauth");
    }

    #[tokio::test]
    async fn test_noip_empty_credentials_still_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/nic/update"))
            .and(header("Authorization", "Basic Og=="))
            .respond_with(ResponseTemplate::new(200).set_body_string("badauth"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let file = netrc("");
        let provider = provider(&mock_server, file.path().to_path_buf());

        let text = provider
            .update_ip("example.ddns.net", "203.0.113.5")
            .await
            .unwrap();

        assert_eq!(text, "badauth");
    }

    #[tokio::test]
    async fn test_noip_missing_netrc_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("good 203.0.113.5"))
            .expect(0)
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let provider = provider(&mock_server, dir.path().join(".netrc"));

        let result = provider.update_ip("example.ddns.net", "203.0.113.5").await;

        assert!(matches!(result, Err(DdnsError::FileAccess { .. })));
    }

    #[tokio::test]
    async fn test_noip_unreachable_endpoint() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let file = netrc("default login dflt password pw\n");
        let provider = NoIpProvider::with_update_url(
            format!("http://127.0.0.1:{}/nic/update", port),
            DEFAULT_MACHINE.to_string(),
            file.path().to_path_buf(),
        );

        let result = provider.update_ip("example.ddns.net", "203.0.113.5").await;

        assert!(matches!(result, Err(DdnsError::Network(_))));
    }

    #[test]
    fn test_noip_name() {
        let provider = NoIpProvider::new(PathBuf::from("/nonexistent/.netrc"));
        assert_eq!(provider.name(), "noip");
    }
}

mod response_tests {
    use crate::providers::ProviderResponse;

    #[test]
    fn test_good_and_nochg_are_success() {
        assert!(ProviderResponse::new("good 203.0.113.5").is_success());
        assert!(ProviderResponse::new("nochg 203.0.113.5").is_success());
    }

    #[test]
    fn test_error_codes_are_failure() {
        for code in ["badauth", "nohost", "badagent", "!donator", "abuse", "911", ""] {
            assert!(!ProviderResponse::new(code).is_success(), "{code}");
        }
    }

    #[test]
    fn test_trailing_newline_ignored() {
        let with_newline = ProviderResponse::new("good 1.2.3.4\n");
        let without = ProviderResponse::new("good 1.2.3.4");

        assert_eq!(with_newline, without);
        assert!(with_newline.is_success());
    }

    #[test]
    fn test_code_and_description() {
        let response = ProviderResponse::new("badauth");
        assert_eq!(response.code(), "badauth");
        assert_eq!(
            response.description(),
            Some("Invalid username password combination")
        );

        let response = ProviderResponse::new("something else");
        assert_eq!(response.code(), "something");
        assert_eq!(response.description(), None);
    }
}
