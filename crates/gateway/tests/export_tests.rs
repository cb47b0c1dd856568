mod common;

use common::{gateway_over, recent_games, FakeStore};
use gateway::export::{records_to_csv, to_csv};
use infra::models::{GameRow, StandingRow};
use serde_json::json;
use tokio_test::assert_ok;

#[tokio::test]
async fn test_recent_games_csv_round_trip() {
    let (gateway, _) = gateway_over(FakeStore::new().with_rows("recent_games", recent_games()));
    let games = assert_ok!(gateway.get_recent_games("SHL", "2024/2025", 10).await);

    let csv_text = assert_ok!(to_csv(&games));

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = assert_ok!(reader.headers()).clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["date", "homeTeam", "awayTeam", "score", "spectators"]
    );

    let parsed: Vec<GameRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("exported rows parse back");
    assert_eq!(parsed.len(), games.len());
    assert_eq!(parsed, games);
}

#[test]
fn test_csv_has_no_trailing_summary() {
    let games = vec![GameRow {
        date: Some("2024-12-10".into()),
        home_team: Some("Frölunda HC".into()),
        away_team: Some("Linköping HC".into()),
        score: Some("4-2".into()),
        spectators: None,
    }];

    let csv_text = assert_ok!(to_csv(&games));

    assert_eq!(
        csv_text,
        "date,homeTeam,awayTeam,score,spectators\n2024-12-10,Frölunda HC,Linköping HC,4-2,\n"
    );
}

#[test]
fn test_empty_result_still_has_header() {
    let games: Vec<GameRow> = Vec::new();
    let csv_text = assert_ok!(to_csv(&games));
    assert_eq!(csv_text, "date,homeTeam,awayTeam,score,spectators\n");

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    assert_eq!(assert_ok!(reader.headers()).len(), 5);
    assert_eq!(reader.records().count(), 0);

    let standings: Vec<StandingRow> = Vec::new();
    assert_eq!(
        assert_ok!(to_csv(&standings)),
        "team,games,wins,losses,goalsFor,goalsAgainst,points\n"
    );
}

#[test]
fn test_unknown_game_fields_export_as_empty_cells() {
    let games = vec![GameRow {
        date: None,
        home_team: None,
        away_team: Some("Rögle BK".into()),
        score: Some("2-1".into()),
        spectators: Some(5100),
    }];

    assert_eq!(
        assert_ok!(to_csv(&games)),
        "date,homeTeam,awayTeam,score,spectators\n,,Rögle BK,2-1,5100\n"
    );
}

#[test]
fn test_ad_hoc_records_union_headers() {
    let records = vec![
        json!({"team": "HV 71", "points": 33}),
        json!({"team": "Brynäs IF, Gävle", "points": null, "coach": {"name": "T. Nilsson"}}),
    ]
    .into_iter()
    .map(|v| match v {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    })
    .collect::<Vec<_>>();

    let csv_text = assert_ok!(records_to_csv(&records));

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    assert_eq!(
        assert_ok!(reader.headers()).iter().collect::<Vec<_>>(),
        vec!["team", "points", "coach"]
    );
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("records parse back");
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][2], "");
    assert_eq!(&rows[1][0], "Brynäs IF, Gävle");
    assert_eq!(&rows[1][1], "");
    assert_eq!(&rows[1][2], r#"{"name":"T. Nilsson"}"#);
}
