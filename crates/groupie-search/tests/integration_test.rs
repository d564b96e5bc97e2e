//! Integration tests for catalog loading → search.
//!
//! The catalog below uses the same JSON shape the Groupie Tracker API
//! serves, so these tests exercise the loader and the engine together.

use groupie_core::catalog;
use groupie_core::Artist;
use groupie_search::{search, Match, SearchEngine, SearchField, SearchOptions};

const CATALOG: &str = r#"[
    {
        "id": 1,
        "name": "Queen",
        "members": ["Freddie Mercury", "Brian May", "Roger Taylor", "John Deacon"],
        "creationDate": 1970,
        "firstAlbum": "1973"
    },
    {
        "id": 2,
        "name": "The Beatles",
        "members": ["John Lennon", "Paul McCartney", "George Harrison", "Ringo Starr"],
        "creationDate": 1960,
        "firstAlbum": "1963"
    },
    {
        "id": 3,
        "name": "Pink Floyd",
        "members": ["Roger Waters", "David Gilmour", "Nick Mason", "Richard Wright"],
        "creationDate": 1965,
        "firstAlbum": "1967"
    }
]"#;

const QUERIES: &[&str] = &[
    "", "a", "o", "e", "john", "roger", "19", "196", "197", "queen", "the", " ", "R",
];

fn load() -> Vec<Artist> {
    catalog::from_json(CATALOG).expect("catalog should parse")
}

#[test]
fn test_scenario_queries() {
    let artists = load();

    assert_eq!(
        search(&artists, "queen"),
        vec![Match::Artist {
            artist: "Queen".to_string(),
            score: 1000
        }]
    );

    assert_eq!(
        search(&artists, "freddie"),
        vec![Match::Member {
            artist: "Queen".to_string(),
            member: "Freddie Mercury".to_string(),
            score: 900
        }]
    );

    assert_eq!(
        search(&artists, "1970"),
        vec![Match::CreationDate {
            artist: "Queen".to_string(),
            year: 1970,
            score: 700
        }]
    );

    assert_eq!(
        search(&artists, "roger"),
        vec![
            Match::Member {
                artist: "Queen".to_string(),
                member: "Roger Taylor".to_string(),
                score: 900
            },
            Match::Member {
                artist: "Pink Floyd".to_string(),
                member: "Roger Waters".to_string(),
                score: 900
            },
        ]
    );
}

#[test]
fn test_scores_never_increase() {
    let artists = load();
    for query in QUERIES {
        let matches = search(&artists, query);
        assert!(
            matches.windows(2).all(|w| w[0].score() >= w[1].score()),
            "unsorted results for {query:?}"
        );
    }
}

#[test]
fn test_ties_follow_production_order() {
    let artists = load();

    for query in QUERIES {
        let matches = search(&artists, query);

        // Rebuild production order by hand and keep only equal-score runs.
        let mut produced = Vec::new();
        for artist in &artists {
            let folded = query.to_lowercase();
            if !query.is_empty() && artist.name.to_lowercase().contains(&folded) {
                produced.push((1000, artist.name.clone(), String::new()));
            }
            for member in &artist.members {
                if !query.is_empty() && member.to_lowercase().contains(&folded) {
                    produced.push((900, artist.name.clone(), member.clone()));
                }
            }
            if !query.is_empty() && artist.creation_date.to_string().contains(query) {
                produced.push((700, artist.name.clone(), String::new()));
            }
        }

        for score in [1000, 900, 700] {
            let expected: Vec<(String, String)> = produced
                .iter()
                .filter(|(s, _, _)| *s == score)
                .map(|(_, a, m)| (a.clone(), m.clone()))
                .collect();
            let actual: Vec<(String, String)> = matches
                .iter()
                .filter(|m| m.score() == score)
                .map(|m| match m {
                    Match::Member { artist, member, .. } => (artist.clone(), member.clone()),
                    other => (other.artist().to_string(), String::new()),
                })
                .collect();
            assert_eq!(actual, expected, "tier {score} for {query:?}");
        }
    }
}

#[test]
fn test_one_name_match_per_matching_artist() {
    let artists = load();
    for query in QUERIES {
        let matches = search(&artists, query);
        for artist in &artists {
            let expected = usize::from(
                !query.is_empty() && artist.name.to_lowercase().contains(&query.to_lowercase()),
            );
            let found = matches
                .iter()
                .filter(|m| matches!(m, Match::Artist { artist: a, .. } if *a == artist.name))
                .count();
            assert_eq!(found, expected, "{} for {query:?}", artist.name);
        }
    }
}

#[test]
fn test_member_match_per_matching_member() {
    let artists = load();
    // "a" occurs in every Pink Floyd member's name
    let matches = search(&artists, "a");
    let floyd_members = matches
        .iter()
        .filter(|m| matches!(m, Match::Member { artist, .. } if artist == "Pink Floyd"))
        .count();
    assert_eq!(floyd_members, 4);
}

#[test]
fn test_empty_query_returns_nothing() {
    assert!(search(&load(), "").is_empty());
}

#[test]
fn test_repeated_searches_are_identical() {
    let artists = load();
    let engine = SearchEngine::new(SearchOptions::default().with_field(SearchField::FirstAlbum));
    for query in QUERIES {
        assert_eq!(engine.search(&artists, query), engine.search(&artists, query));
    }
}

#[test]
fn test_concurrent_searches_share_one_engine() {
    let artists = load();
    let engine = SearchEngine::default();
    let expected = engine.search(&artists, "roger");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.search(&artists, "roger")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_json_output_shape() {
    let matches = search(&load(), "1965");
    let json = serde_json::to_value(&matches).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"type": "creation_date", "artist": "Pink Floyd", "year": 1965, "score": 700}
        ])
    );
}
