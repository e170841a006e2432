use cardkit_engine::{table_record, BuilderConfig, CardBuilder};
use cardkit_types::{Card, DisplayBlock, Fact};
use indexmap::IndexMap;

struct User {
    name: String,
    age: u32,
}

table_record!(User { name, age });

fn test_builder() -> CardBuilder {
    CardBuilder::new(&BuilderConfig {
        environment: Some("Production".to_string()),
        project_name: Some("billing-api".to_string()),
    })
}

fn rows(card: &Card) -> Vec<(&[String], bool)> {
    card.blocks()
        .iter()
        .filter_map(|block| match block {
            DisplayBlock::Row { cells, header } => Some((cells.as_slice(), *header)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_deploy_failed_scenario() {
    let builder = test_builder();
    let mut facts = IndexMap::new();
    facts.insert("Service".to_string(), Some("billing".to_string()));
    facts.insert("Region".to_string(), Some(String::new()));

    let card = builder.build("Deploy Failed", None, Some(&facts), None, None);

    assert!(matches!(
        card.blocks().first(),
        Some(DisplayBlock::Header { text }) if text == "Deploy Failed"
    ));

    let fact_sets: Vec<_> = card
        .blocks()
        .iter()
        .filter_map(|block| match block {
            DisplayBlock::FactSet { facts } => Some(facts),
            _ => None,
        })
        .collect();
    assert_eq!(fact_sets.len(), 1, "expected exactly one fact set");
    assert_eq!(fact_sets[0], &vec![Fact::new("Service", "billing")]);

    assert!(
        !card
            .blocks()
            .iter()
            .any(|b| matches!(b, DisplayBlock::TextBlock { .. })),
        "no text blocks were requested"
    );
    assert!(matches!(
        card.blocks().last(),
        Some(DisplayBlock::Footer { .. })
    ));
}

#[test]
fn test_users_table_scenario() {
    let builder = test_builder();
    let users = vec![
        User {
            name: "Ann".to_string(),
            age: 30,
        },
        User {
            name: "Bo".to_string(),
            age: 41,
        },
    ];

    let card = builder.build_table("Users", &users, None);

    let rows = rows(&card);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], (["name".to_string(), "age".to_string()].as_slice(), true));
    assert_eq!(rows[1], (["Ann".to_string(), "30".to_string()].as_slice(), false));
    assert_eq!(rows[2], (["Bo".to_string(), "41".to_string()].as_slice(), false));

    assert!(matches!(
        card.blocks().first(),
        Some(DisplayBlock::Header { text }) if text == "Users"
    ));
    assert!(matches!(
        card.blocks().last(),
        Some(DisplayBlock::Footer { .. })
    ));
}

#[test]
fn test_empty_table_skips_rows_but_keeps_header_and_footer() {
    let builder = test_builder();
    let users: Vec<User> = Vec::new();

    let card = builder.build_table("Users", &users, Some("No rows today"));

    assert!(rows(&card).is_empty(), "empty list must not emit a header row");
    assert!(matches!(
        card.blocks().first(),
        Some(DisplayBlock::Header { text }) if text == "Users"
    ));
    assert!(matches!(
        &card.blocks()[1],
        DisplayBlock::TextBlock { text } if text == "No rows today"
    ));
    assert!(matches!(
        card.blocks().last(),
        Some(DisplayBlock::Footer { .. })
    ));
}

#[test]
fn test_repeated_table_builds_reuse_one_schema() {
    let builder = test_builder();
    let users = vec![User {
        name: "Ann".to_string(),
        age: 30,
    }];

    // Alignment between header and data cells must hold on every build, not
    // just the one that populated the cache.
    for _ in 0..3 {
        let card = builder.build_table("Users", &users, None);
        let rows = rows(&card);
        assert_eq!(rows[0].0, ["name".to_string(), "age".to_string()]);
        assert_eq!(rows[1].0, ["Ann".to_string(), "30".to_string()]);
    }
}

#[test]
fn test_built_card_round_trips_through_json() {
    let builder = test_builder();
    let users = vec![User {
        name: "Ann".to_string(),
        age: 30,
    }];

    let card = builder.build_table("Users", &users, Some("Nightly sync"));

    let json = serde_json::to_string(&card).expect("card should serialize");
    let parsed: Card = serde_json::from_str(&json).expect("card should deserialize");
    assert_eq!(parsed, card);
}
