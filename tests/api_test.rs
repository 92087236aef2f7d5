//! Integration tests for the facade against a mock Stats API

use mlb_stats::{core::ApiConfig, Mlb, MlbError, StatGroup, StatsQuery};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> Mlb {
    Mlb::new(ApiConfig::default().with_host(server.uri())).unwrap()
}

#[tokio::test]
async fn test_not_found_person_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/0"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "messageNumber": 10,
            "message": "Object not found",
            "timestamp": "2022-10-01T00:00:00Z",
            "traceId": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client_for(&server).get_person(0).await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_people_list_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"people": []})))
        .mount(&server)
        .await;

    assert!(client_for(&server).get_person(5).await.unwrap().is_none());
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/sports"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).get_sports().await.unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, MlbError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_vs_player_team_stats() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/133/stats"))
        .and(query_param("stats", "vsPlayer"))
        .and(query_param("group", "hitting"))
        .and(query_param("opposingPlayerId", "605400"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stats": [{
            "type": {"displayName": "vsPlayer"},
            "group": {"displayName": "hitting"},
            "splits": [{
                "stat": {"atBats": 12, "hits": 4},
                "team": {"id": 133, "name": "Oakland Athletics"},
                "opponent": {"id": 143, "name": "Philadelphia Phillies"},
                "pitcher": {"id": 605400, "fullName": "Aaron Nola"}
            }]
        }]})))
        .mount(&server)
        .await;

    let query =
        StatsQuery::new(["vsPlayer"], [StatGroup::Hitting]).param("opposingPlayerId", 605400);
    let stats = client_for(&server).get_team_stats(133, &query).await.unwrap();

    let split = &stats.get(StatGroup::Hitting, "vsplayer").unwrap()[0];
    assert_eq!(split.shape_name(), "VsOpponentSplit");
    assert_eq!(split.base().team.as_ref().unwrap().id, 133);
    assert_eq!(split.stat_line().unwrap().hitting().unwrap().at_bats, Some(12));
}
