//! Integration tests for stats split dispatch

use mlb_stats::{
    stats::{decode_group, registry, select_variant, DecodePolicy, Split, StatGroup, StatLine},
    GroupedStats,
};
use serde_json::{json, Value};

fn by_type(pairs: Value) -> serde_json::Map<String, Value> {
    match pairs {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[test]
fn test_season_and_game_log_from_one_response() {
    let response = json!({"stats": [
        {
            "type": {"displayName": "season"},
            "group": {"displayName": "hitting"},
            "splits": [{"season": "2022", "stat": {"homeRuns": 34}}]
        },
        {
            "type": {"displayName": "gameLog"},
            "group": {"displayName": "hitting"},
            "splits": [{
                "isHome": true,
                "isWin": false,
                "date": "2022-06-01",
                "game": {},
                "stat": {"hits": 2}
            }]
        }
    ]});
    let stats = GroupedStats::from_response(&response, DecodePolicy::Strict).unwrap();

    let season = &stats.get(StatGroup::Hitting, "season").unwrap()[0];
    let Split::Season(season) = season else {
        panic!("Expected a season split, got {}", season.shape_name());
    };
    assert_eq!(season.season, "2022");
    assert!(season.base.is_empty());
    match &season.stat {
        StatLine::Hitting(hitting) => assert_eq!(hitting.home_runs, Some(34)),
        other => panic!("Expected hitting stats, got {other:?}"),
    }

    let log = &stats.get(StatGroup::Hitting, "gamelog").unwrap()[0];
    let Split::GameLog(log) = log else {
        panic!("Expected a game log split, got {}", log.shape_name());
    };
    assert!(log.is_home);
    assert!(!log.is_win);
    assert!(log.game.is_none());
    assert_eq!(log.stat.hitting().unwrap().hits, Some(2));
}

#[test]
fn test_same_tag_differs_by_group() {
    let payload = json!({"season": "2022", "stat": {"era": "3.10", "strikeOuts": 201}});

    let pitching = select_variant(StatGroup::Pitching, "season", &payload).unwrap();
    let era = pitching.stat_line().unwrap().pitching().unwrap().era.clone();
    assert_eq!(era.as_deref(), Some("3.10"));

    let fielding = select_variant(StatGroup::Fielding, "season", &payload).unwrap();
    assert!(fielding.stat_line().unwrap().fielding().is_some());
}

#[test]
fn test_unregistered_pair_is_opaque() {
    let payload = json!({"stat": {"leftField": "30.1"}, "batter": {"id": 1, "fullName": "A B"}});

    assert!(registry::lookup(StatGroup::Pitching, "sprayChart").is_none());
    let split = select_variant(StatGroup::Pitching, "sprayChart", &payload).unwrap();

    let Split::Opaque(opaque) = &split else {
        panic!("Expected an opaque split, got {}", split.shape_name());
    };
    assert_eq!(opaque.stat_type, "spraychart");
    assert!(opaque.get("batter").is_some());
}

#[test]
fn test_spray_chart_needs_every_zone() {
    let payload = json!({"stat": {
        "leftField": 30.1, "leftCenterField": 20.0, "centerField": 15.5, "rightCenterField": 14.4
    }});

    let err = select_variant(StatGroup::Hitting, "sprayChart", &payload).unwrap_err();
    assert_eq!(err.leaf_field(), "rightfield");
    assert_eq!(err.stat_type.as_deref(), Some("spraychart"));
}

#[test]
fn test_decode_group_keeps_order_and_isolates_failures() {
    let splits = by_type(json!({
        "yearByYear": [
            {"season": "2020", "stat": {"hits": 30}},
            {"stat": {"hits": 99}},
            {"season": "2021", "stat": {"hits": 140}}
        ]
    }));

    assert!(decode_group(StatGroup::Hitting, &splits, DecodePolicy::Strict).is_err());

    let decoded = decode_group(StatGroup::Hitting, &splits, DecodePolicy::Lenient).unwrap();
    let year_by_year = &decoded["yearbyyear"];
    assert_eq!(year_by_year.len(), 3);
    assert_eq!(year_by_year[0].season(), Some("2020"));
    assert!(year_by_year[1].is_opaque());
    assert_eq!(year_by_year[2].season(), Some("2021"));
}

#[test]
fn test_full_response() {
    let response = json!({"stats": [
        {
            "type": {"displayName": "sabermetrics"},
            "group": {"displayName": "pitching"},
            "splits": [{"season": "2022", "stat": {"war": 5.9, "fip": 2.79}}]
        },
        {
            "type": {"displayName": "expectedStatistics"},
            "group": {"displayName": "hitting"},
            "splits": [{"stat": {"avg": ".290", "slg": ".550", "woba": ".390", "wobaCon": ".450"}}]
        }
    ]});

    let grouped = GroupedStats::from_response(&response, DecodePolicy::Strict).unwrap();

    let saber = &grouped.get(StatGroup::Pitching, "sabermetrics").unwrap()[0];
    assert_eq!(saber.shape_name(), "SabermetricsSplit");

    let expected = &grouped.get(StatGroup::Hitting, "expectedStatistics").unwrap()[0];
    let Split::ExpectedStatistics(expected) = expected else {
        panic!("Expected expected statistics");
    };
    assert_eq!(expected.stat.woba, ".390");
}
