//! Unit tests for the HTTP transport

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

async fn transport_for(server: &MockServer) -> Transport {
    Transport::new(&ApiConfig::default().with_host(server.uri())).unwrap()
}

#[cfg(test)]
mod transport_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_success() {
        let mock_server = MockServer::start().await;
        let divisions = json!({"divisions": [{"id": 200, "name": "American League West"}]});

        Mock::given(method("GET"))
            .and(path("/api/v1/divisions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&divisions))
            .mount(&mock_server)
            .await;

        let transport = transport_for(&mock_server).await;
        let result = transport.get("divisions", &[]).await.unwrap();

        assert_eq!(result.status_code, 200);
        assert_eq!(result.message, "OK");
        assert_eq!(result.data, divisions);
        assert!(!result.is_empty());
    }

    #[tokio::test]
    async fn test_query_parameters_are_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/teams/133/stats"))
            .and(query_param("stats", "vsPlayer"))
            .and(query_param("group", "catching"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stats": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = transport_for(&mock_server).await;
        let query = [("stats", "vsPlayer".to_string()), ("group", "catching".to_string())];
        let result = transport.get("/teams/133/stats", &query).await.unwrap();

        assert_eq!(result.data, json!({"stats": []}));
    }

    #[tokio::test]
    async fn test_not_found_is_empty_result() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/teams/19990"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"messageNumber": 10, "message": "Object not found"})),
            )
            .mount(&mock_server)
            .await;

        let transport = transport_for(&mock_server).await;
        let result = transport.get("teams/19990", &[]).await.unwrap();

        assert_eq!(result.status_code, 404);
        assert_eq!(result.message, "Not Found");
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/sports"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let transport = transport_for(&mock_server).await;
        let err = transport.get("sports", &[]).await.unwrap_err();

        match err {
            MlbError::Status { status, ref url, .. } => {
                assert_eq!(status, 500);
                assert!(url.ends_with("/api/v1/sports"));
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_json_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/people/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let transport = transport_for(&mock_server).await;
        let err = transport.get("people/1", &[]).await.unwrap_err();

        assert!(matches!(err, MlbError::Json(_)));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_empty_body_is_null() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/people/2"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let transport = transport_for(&mock_server).await;
        let result = transport.get("people/2", &[]).await.unwrap();

        assert_eq!(result.data, Value::Null);
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_connection_failure_is_http_error() {
        let config = ApiConfig::default().with_host("http://127.0.0.1:9");
        let transport = Transport::new(&config).unwrap();

        let err = transport.get("sports", &[]).await.unwrap_err();
        assert!(matches!(err, MlbError::Http(_)));
    }
}
