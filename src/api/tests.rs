//! Unit tests for the Stats API facade

use super::*;
use crate::error::MlbError;
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> Mlb {
    Mlb::new(ApiConfig::default().with_host(server.uri())).unwrap()
}

async fn mount_json(server: &MockServer, at: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[cfg(test)]
mod stats_query_tests {
    use super::*;

    #[test]
    fn test_query_joins_types_and_groups() {
        let query = StatsQuery::new(["season", "career"], [StatGroup::Hitting, StatGroup::Pitching])
            .season(2022);

        assert_eq!(
            query.to_query(),
            vec![
                ("stats", "season,career".to_string()),
                ("group", "hitting,pitching".to_string()),
                ("season", "2022".to_string()),
            ]
        );
        assert_eq!(query.policy, DecodePolicy::Strict);
    }

    #[test]
    fn test_empty_query_has_no_parameters() {
        assert!(StatsQuery::default().to_query().is_empty());
    }
}

#[cfg(test)]
mod lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_person() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/v1/people/660271",
            json!({"people": [{
                "id": 660271,
                "fullName": "Shohei Ohtani",
                "primaryPosition": {"code": "Y", "name": "Two-Way Player"},
                "batSide": {"code": "L", "description": "Left"}
            }]}),
        )
        .await;

        let person = client_for(&server).get_person(660271).await.unwrap().unwrap();
        assert_eq!(person.id, 660271);
        assert_eq!(person.full_name, "Shohei Ohtani");
        assert_eq!(person.primary_position.unwrap().code, "Y");
        assert_eq!(person.bat_side.unwrap().code, "L");
    }

    #[tokio::test]
    async fn test_unknown_team_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/teams/19990"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "nope"})))
            .mount(&server)
            .await;

        let team = client_for(&server).get_team(19990).await.unwrap();
        assert!(team.is_none());
    }

    #[tokio::test]
    async fn test_get_teams_sends_sport_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/teams"))
            .and(query_param("sportId", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"teams": [
                {"id": 133, "name": "Oakland Athletics", "league": {"id": 103}},
                {"id": 134, "name": "Pittsburgh Pirates", "league": {"id": 104}}
            ]})))
            .mount(&server)
            .await;

        let mlb = client_for(&server);
        let teams = mlb.get_teams(MLB_SPORT_ID).await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].league.as_ref().unwrap().id, 103);

        assert_eq!(mlb.get_team_id("oakland athletics").await.unwrap(), [133]);
        assert!(mlb.get_team_id("Montreal Expos").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_people_id_matches_full_name() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/v1/sports/1/players",
            json!({"people": [
                {"id": 664034, "fullName": "Ty France"},
                {"id": 608369, "fullName": "Corey Seager"},
                {"id": 999999, "fullName": "Ty France"}
            ]}),
        )
        .await;

        let ids = client_for(&server)
            .get_people_id("Ty France", MLB_SPORT_ID)
            .await
            .unwrap();
        assert_eq!(ids, [664034, 999999]);
    }

    #[tokio::test]
    async fn test_name_lookup_folds_accented_letters() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/v1/sports/1/players",
            json!({"people": [{"id": 608070, "fullName": "José Ramírez"}]}),
        )
        .await;
        mount_json(
            &server,
            "/api/v1/sports",
            json!({"sports": [{"id": 31, "name": "Liga Mexicana de Béisbol"}]}),
        )
        .await;

        let mlb = client_for(&server);
        let ids = mlb.get_people_id(" JOSÉ RAMÍREZ ", MLB_SPORT_ID).await.unwrap();
        assert_eq!(ids, [608070]);
        assert_eq!(mlb.get_sport_id("LIGA MEXICANA DE BÉISBOL").await.unwrap(), [31]);
    }

    #[tokio::test]
    async fn test_sports_and_leagues() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/v1/sports",
            json!({"sports": [{"id": 1, "code": "mlb", "name": "Major League Baseball"}]}),
        )
        .await;
        mount_json(
            &server,
            "/api/v1/leagues/103",
            json!({"leagues": [{"id": 103, "name": "American League", "abbreviation": "AL"}]}),
        )
        .await;

        let mlb = client_for(&server);
        assert_eq!(mlb.get_sport_id("major league baseball").await.unwrap(), [1]);

        let league = mlb.get_league(103).await.unwrap().unwrap();
        assert_eq!(league.abbreviation.as_deref(), Some("AL"));
        assert!(mlb.get_leagues().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_shape_error_surfaces() {
        let server = MockServer::start().await;
        mount_json(&server, "/api/v1/people/1", json!({"people": [{"id": 1}]})).await;

        let err = client_for(&server).get_person(1).await.unwrap_err();
        match err {
            MlbError::Shape(shape) => {
                assert_eq!(shape.type_name, "Person");
                assert_eq!(shape.field, "people[0].fullname");
                assert!(shape.is_missing());
            }
            other => panic!("Expected Shape error, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_player_stats() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/people/664034/stats"))
            .and(query_param("stats", "season,career"))
            .and(query_param("group", "hitting"))
            .and(query_param("season", "2022"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stats": [
                {
                    "type": {"displayName": "season"},
                    "group": {"displayName": "hitting"},
                    "splits": [{
                        "season": "2022",
                        "stat": {"gamesPlayed": 140, "homeRuns": 20},
                        "team": {"id": 136, "name": "Seattle Mariners"},
                        "player": {"id": 664034, "fullName": "Ty France"}
                    }]
                },
                {
                    "type": {"displayName": "career"},
                    "group": {"displayName": "hitting"},
                    "splits": [{"stat": {"homeRuns": 59}}]
                }
            ]})))
            .mount(&server)
            .await;

        let query = StatsQuery::new(["season", "career"], [StatGroup::Hitting]).season(2022);
        let stats = client_for(&server)
            .get_player_stats(664034, &query)
            .await
            .unwrap();

        let season = &stats.get(StatGroup::Hitting, "season").unwrap()[0];
        assert_eq!(season.shape_name(), "SeasonSplit");
        assert_eq!(season.season(), Some("2022"));
        assert_eq!(season.base().team.as_ref().unwrap().id, 136);
        assert_eq!(season.stat_line().unwrap().hitting().unwrap().games_played, Some(140));

        let career = &stats.get(StatGroup::Hitting, "career").unwrap()[0];
        assert_eq!(career.shape_name(), "CareerSplit");
    }

    #[tokio::test]
    async fn test_team_stats_lenient_policy() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/v1/teams/133/stats",
            json!({"stats": [{
                "type": {"displayName": "byMonth"},
                "group": {"displayName": "pitching"},
                "splits": [{"month": 4, "stat": {"wins": 9}}, {"stat": {"wins": 3}}]
            }]}),
        )
        .await;

        let mlb = client_for(&server);
        let strict = StatsQuery::new(["byMonth"], [StatGroup::Pitching]);
        assert!(matches!(
            mlb.get_team_stats(133, &strict).await.unwrap_err(),
            MlbError::Shape(_)
        ));

        let lenient = strict.policy(DecodePolicy::Lenient);
        let stats = mlb.get_team_stats(133, &lenient).await.unwrap();
        let splits = stats.get(StatGroup::Pitching, "bymonth").unwrap();
        assert_eq!(splits.len(), 2);
        assert!(!splits[0].is_opaque());
        assert!(splits[1].is_opaque());
    }

    #[tokio::test]
    async fn test_missing_player_stats_are_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/people/1/stats/game/715757"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let stats = client_for(&server)
            .get_players_stats_for_game(1, 715757)
            .await
            .unwrap();
        assert!(stats.is_empty());
    }

    #[tokio::test]
    async fn test_game_play_by_play() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/v1/game/715757/playByPlay",
            json!({
                "allPlays": [{
                    "result": {"type": "atBat", "event": "Home Run", "rbi": 1},
                    "about": {"atBatIndex": 0, "halfInning": "top", "inning": 1},
                    "matchup": {
                        "batter": {"id": 664034, "fullName": "Ty France"},
                        "pitcher": {"id": 605400, "fullName": "Aaron Nola"}
                    },
                    "playEvents": [{
                        "details": {"description": "In play, run(s)"},
                        "index": 0,
                        "isPitch": true,
                        "type": "pitch"
                    }]
                }],
                "scoringPlays": [0]
            }),
        )
        .await;

        let plays = client_for(&server)
            .get_game_play_by_play(715757)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(plays.all_plays.len(), 1);
        assert_eq!(plays.scoring().count(), 1);
        assert!(plays.all_plays[0].play_events[0].is_pitch);
    }
}
